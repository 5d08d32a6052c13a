//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::fmt::Display;

use leptos::prelude::*;
use todo_client::{ApiClient, ApiConfig, Route};

use crate::browser;

/// A user-visible message; `id` tells repeated messages apart
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ApiConfig>,
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    /// Message shown in the notice bar - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Message shown in the notice bar - write
    set_notice: WriteSignal<Option<Notice>>,
    next_notice_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        let (route, set_route) = signal(browser::current_route());
        let (notice, set_notice) = signal(None);
        Self {
            config: StoredValue::new(config),
            route,
            set_route,
            notice,
            set_notice,
            next_notice_id: StoredValue::new(0),
        }
    }

    /// API client for the configured tenant
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.get_value())
    }

    /// Go to `route` through the location hash
    pub fn navigate(&self, route: Route) {
        browser::set_hash(&route.href());
        self.sync_route();
    }

    /// Pick up the route from the current location hash
    pub fn sync_route(&self) {
        let route = browser::current_route();
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    /// Show an error to the user
    pub fn notify(&self, message: impl Display) {
        let text = message.to_string();
        log::error!("[UI] {}", text);
        let id = self.next_notice_id.get_value();
        self.next_notice_id.set_value(id.wrapping_add(1));
        self.set_notice.set(Some(Notice { id, text }));
    }

    pub fn dismiss(&self, id: u32) {
        if self.notice.get_untracked().is_some_and(|n| n.id == id) {
            self.set_notice.set(None);
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
