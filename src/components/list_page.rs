//! List Page
//!
//! Loads the tenant's items once and shows them in TO DO / DONE sections.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{list, Item, ListState};

use crate::components::{EmptyState, ItemRow, NewItemForm, Section};
use crate::context::use_app_context;
use crate::store::SignalState;

#[component]
pub fn ListPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = SignalState::new(ListState::new());

    spawn_local(async move {
        if let Err(e) = list::load(&ctx.api(), &state).await {
            ctx.notify(e);
        }
    });

    view! {
        <div class="list-page">
            <NewItemForm state=state />
            <div class="sections">
                <ItemSection state=state section=Section::Todo />
                <ItemSection state=state section=Section::Done />
            </div>
        </div>
    }
}

/// One bucket of the partitioned list
#[component]
fn ItemSection(state: SignalState<ListState>, section: Section) -> impl IntoView {
    let signal = state.signal();
    let bucket = move || {
        signal.with(|s| {
            let buckets = s.buckets();
            let items = match section {
                Section::Todo => buckets.incomplete,
                Section::Done => buckets.complete,
            };
            items.into_iter().cloned().collect::<Vec<Item>>()
        })
    };
    let loaded = move || signal.with(ListState::is_loaded);
    let failed = move || signal.with(ListState::is_load_failed);

    view! {
        <section class=match section {
            Section::Todo => "item-section todo",
            Section::Done => "item-section done",
        }>
            <h2 class="section-title">{section.title()}</h2>
            {move || {
                if !loaded() && failed() {
                    view! { <p class="load-failed">"Could not load todos."</p> }.into_any()
                } else if !loaded() {
                    view! { <p class="loading">"Loading..."</p> }.into_any()
                } else if bucket().is_empty() {
                    view! { <EmptyState section=section /> }.into_any()
                } else {
                    view! {
                        <div class="item-list">
                            <For
                                each=bucket
                                key=|item| (item.id, item.is_completed, item.name.clone())
                                children=move |item| view! { <ItemRow item=item state=state /> }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
