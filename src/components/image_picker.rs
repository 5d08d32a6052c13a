//! Image Picker Component
//!
//! Shows the local preview, the stored image, or a placeholder, and lets the
//! user pick a new file. The pick is validated before a preview is created.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::DetailState;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::browser::{self, ObjectUrl};
use crate::context::use_app_context;
use crate::store::SignalState;

#[component]
pub fn ImagePicker(state: SignalState<DetailState<ObjectUrl>>) -> impl IntoView {
    let ctx = use_app_context();
    let signal = state.signal();

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow picking the same file again
        input.set_value("");

        spawn_local(async move {
            match browser::read_image(file).await {
                Ok((image, preview)) => {
                    if let Some(Err(e)) = signal.try_update(|s| s.pick_image(image, move |_| preview)) {
                        ctx.notify(e);
                    }
                }
                Err(message) => ctx.notify(message),
            }
        });
    };

    let display = move || signal.with(|s| s.display_image().map(str::to_string));
    let active = move || signal.with(DetailState::is_active);
    let busy = move || signal.with(DetailState::is_busy);
    let has_pick = move || signal.with(|s| s.picked_file().is_some());

    view! {
        <div class="image-box">
            {move || match display() {
                Some(src) => view! { <img class="item-image" src=src alt="attached image" /> }.into_any(),
                None => view! { <div class="image-placeholder">"No image"</div> }.into_any(),
            }}
            <label class=move || if active() { "image-btn edit" } else { "image-btn add" }>
                <input
                    type="file"
                    accept="image/*"
                    class="hidden"
                    disabled=busy
                    on:change=on_change
                />
                {move || if active() { "Edit image" } else { "+ Add image" }}
            </label>
            <Show when=has_pick>
                <button
                    type="button"
                    class="discard-btn"
                    disabled=busy
                    on:click=move |_| signal.update(|s| s.discard_pick())
                >
                    "Discard"
                </button>
            </Show>
        </div>
    }
}
