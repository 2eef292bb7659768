//! Question input row shared by the landing and chat views.

use leptos::prelude::*;

use crate::state::session::{self, SessionContext};

/// Text input plus send button. Enter submits; empty input is ignored by
/// the orchestrator, so no client-side guard is needed here.
#[component]
pub fn InputBar(#[prop(optional)] placeholder: Option<&'static str>) -> impl IntoView {
    let cx = expect_context::<SessionContext>();
    let input = cx.input;

    let do_send = move || session::submit(cx);
    let on_click = move |_| do_send();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="input-bar">
            <input
                class="input-bar__field"
                type="text"
                placeholder=placeholder.unwrap_or("Ask a follow up question...")
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="btn btn--primary" on:click=on_click>
                "Send"
            </button>
        </div>
    }
}
