//! New Item Form Component
//!
//! Input for the draft name; Enter or the add button creates the item.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{list, ListState};

use crate::context::use_app_context;
use crate::store::SignalState;

#[component]
pub fn NewItemForm(state: SignalState<ListState>) -> impl IntoView {
    let ctx = use_app_context();
    let signal = state.signal();

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            match list::create(&ctx.api(), &state).await {
                Ok(Some(item)) => log::debug!("[LIST] added #{} {}", item.id, item.name),
                Ok(None) => {}
                Err(e) => ctx.notify(e),
            }
        });
    };

    // Highlight the add button while the list is loaded and empty
    let button_class = move || {
        if signal.with(ListState::is_empty) {
            "add-btn highlight"
        } else {
            "add-btn"
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                placeholder="Add a new todo"
                prop:value=move || signal.with(|s| s.draft().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    signal.update(|s| s.set_draft(value));
                }
            />
            <button
                type="submit"
                class=button_class
                disabled=move || signal.with(ListState::is_creating)
            >
                "+ Add"
            </button>
        </form>
    }
}
