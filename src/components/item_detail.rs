//! Item Detail Page
//!
//! Loads one item and lets the user edit its name, memo, completion and
//! image, or delete it. Both actions return to the list when they succeed.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{detail, DeleteOutcome, DetailState, Item, ItemId, Route, SaveOutcome};

use crate::browser::ObjectUrl;
use crate::components::{DeleteConfirmButton, ImagePicker};
use crate::context::use_app_context;
use crate::store::SignalState;

#[derive(Clone, Debug, PartialEq)]
enum Loading {
    Pending,
    Ready(Item),
    Failed,
}

#[component]
pub fn DetailPage(id: ItemId) -> impl IntoView {
    let ctx = use_app_context();
    let (loading, set_loading) = signal(Loading::Pending);

    spawn_local(async move {
        match detail::fetch_item(&ctx.api(), id).await {
            Ok(Some(item)) => set_loading.set(Loading::Ready(item)),
            Ok(None) => {
                ctx.notify(format!("Todo #{} was not found.", id));
                // The user may already be somewhere else
                if ctx.route.get_untracked().shows_item(id) {
                    ctx.navigate(Route::List);
                }
            }
            Err(e) => {
                set_loading.set(Loading::Failed);
                ctx.notify(e);
            }
        }
    });

    view! {
        <div class="detail-page">
            {move || match loading.get() {
                Loading::Pending => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Loading::Ready(item) => view! { <DetailForm item=item /> }.into_any(),
                Loading::Failed => view! {
                    <p class="load-failed">
                        "Could not load this todo. "
                        <a href=Route::List.href()>"Back to the list"</a>
                    </p>
                }
                    .into_any(),
            }}
        </div>
    }
}

/// Edit form; its state (and any preview) is dropped when it unmounts
#[component]
fn DetailForm(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let state = SignalState::new(DetailState::<ObjectUrl>::new(&item));
    let signal = state.signal();

    let busy = Signal::derive(move || signal.with(DetailState::is_busy));
    let active = move || signal.with(DetailState::is_active);

    let on_save = move |_| {
        spawn_local(async move {
            match detail::save(&ctx.api(), &state).await {
                Ok(SaveOutcome::Saved(_)) => ctx.navigate(Route::List),
                Ok(SaveOutcome::Skipped) => {}
                Err(e) => ctx.notify(e),
            }
        });
    };

    // DeleteConfirmButton only calls back after the user confirmed
    let on_delete = move |_: ()| {
        spawn_local(async move {
            match detail::delete(&ctx.api(), &state, true).await {
                Ok(DeleteOutcome::Deleted(_)) => ctx.navigate(Route::List),
                Ok(DeleteOutcome::Skipped) => {}
                Err(e) => ctx.notify(e),
            }
        });
    };

    view! {
        <div class="detail-form">
            <div class=move || if active() { "name-bar active" } else { "name-bar" }>
                <input
                    type="checkbox"
                    aria-label="completed"
                    prop:checked=move || signal.with(DetailState::is_completed)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        signal.update(|s| s.set_completed(checked));
                    }
                />
                <input
                    type="text"
                    class="name-input"
                    aria-label="todo name"
                    prop:value=move || signal.with(|s| s.name().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        signal.update(|s| s.set_name(value));
                    }
                />
            </div>

            <div class="detail-body">
                <ImagePicker state=state />
                <div class="memo-box">
                    <div class="memo-title">"Memo"</div>
                    <textarea
                        class="memo-textarea"
                        aria-label="memo"
                        prop:value=move || signal.with(|s| s.memo().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            signal.update(|s| s.set_memo(value));
                        }
                    ></textarea>
                </div>
            </div>

            <div class="detail-actions">
                <button
                    type="button"
                    class=move || if active() { "save-btn active" } else { "save-btn" }
                    disabled=move || busy.get()
                    on:click=on_save
                >
                    "Save"
                </button>
                <DeleteConfirmButton disabled=busy on_confirm=on_delete />
            </div>
        </div>
    }
}
