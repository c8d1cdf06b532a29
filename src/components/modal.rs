//! Modal Component
//!
//! Bottom sheet with a title bar. Page scrolling is locked while open.

use leptos::prelude::*;

fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    let _ = body.style().set_property("overflow", value);
}

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    Effect::new(move |_| lock_body_scroll(open.get()));
    on_cleanup(|| lock_body_scroll(false));

    view! {
        <Show when=move || open.get()>
            <div class="modal-layer">
                <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
                <div class="modal-sheet">
                    <div class="modal-header">
                        <h2>{move || title.get()}</h2>
                        <button class="icon-btn" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
