//! Notice Bar Component
//!
//! Shows the latest error; dismissed by click or after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

const AUTO_DISMISS_MS: u32 = 6_000;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        if let Some(notice) = ctx.notice.get() {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                ctx.dismiss(notice.id);
            });
        }
    });

    view! {
        {move || ctx.notice.get().map(|notice| {
            let id = notice.id;
            view! {
                <div class="notice-bar" role="alert">
                    <span class="notice-text">{notice.text}</span>
                    <button class="close-btn" on:click=move |_| ctx.dismiss(id)>"×"</button>
                </div>
            }
        })}
    }
}
