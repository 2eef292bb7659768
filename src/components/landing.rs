//! Landing view shown when the active conversation has no messages yet.

use leptos::prelude::*;

use crate::components::input_bar::InputBar;

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="landing">
            <h1 class="landing__title">"Ask about Nigerian tax law"</h1>
            <p class="landing__subtitle">
                "Answers are generated from the tax acts, circulars, and policy documents, with sources cited."
            </p>
            <InputBar placeholder="What would you like to know?"/>
        </div>
    }
}
