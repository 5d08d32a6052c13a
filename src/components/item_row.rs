//! Item Row Component
//!
//! One item in a list section: completion checkbox and a link to its page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{list, Item, ListState, Route};

use crate::context::use_app_context;
use crate::store::SignalState;

#[component]
pub fn ItemRow(item: Item, state: SignalState<ListState>) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let completed = item.is_completed;
    let href = Route::Detail(id).href();

    // The checkbox only changes once the server has answered
    let on_toggle = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        spawn_local(async move {
            if let Err(e) = list::toggle(&ctx.api(), &state, id).await {
                ctx.notify(e);
            }
        });
    };

    view! {
        <div class=if completed { "item-row completed" } else { "item-row" }>
            <input type="checkbox" prop:checked=completed on:click=on_toggle />
            <a class="item-name" href=href>{item.name}</a>
        </div>
    }
}
