//! Todo List Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;
use todo_client::config::{ApiConfig, DEFAULT_BASE_URL};

/// API settings baked in at build time (`TODO_API_BASE_URL`, `TODO_TENANT_ID`)
fn api_config() -> ApiConfig {
    ApiConfig::new(
        option_env!("TODO_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL),
        option_env!("TODO_TENANT_ID").map(str::to_string),
    )
}

fn main() {
    console_error_panic_hook::set_once();
    logger::init(option_env!("TODO_LOG_LEVEL").unwrap_or("info"));

    let config = api_config();
    if let Err(e) = config.tenant_id() {
        log::error!("[APP] {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
