//! Todo List Frontend App
//!
//! App shell: header, notice bar and the page for the current hash route.

use leptos::prelude::*;
use todo_client::{ApiConfig, Route};

use crate::components::{DetailPage, Header, ListPage, NoticeBar, NotFound};
use crate::context::AppContext;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Back/forward and typed URLs
    let _ = window_event_listener(leptos::ev::hashchange, move |_| ctx.sync_route());

    view! {
        <Header />
        <NoticeBar />
        <main class="container">
            {move || match ctx.route.get() {
                Route::List => view! { <ListPage /> }.into_any(),
                Route::Detail(id) => view! { <DetailPage id=id /> }.into_any(),
                Route::NotFound => view! { <NotFound /> }.into_any(),
            }}
        </main>
    }
}
