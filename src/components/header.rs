//! Header Component
//!
//! Top bar with the app title linking back to the list.

use leptos::prelude::*;
use todo_client::Route;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <a class="app-title" href=Route::List.href()>"do it;"</a>
        </header>
    }
}

/// Shown for hash routes that match no page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <p>"This page does not exist."</p>
            <a href=Route::List.href()>"Back to the list"</a>
        </section>
    }
}
