//! Assistant message bubble with citations, copy button, and timing.

use leptos::prelude::*;

use crate::state::chat::{Citation, Message};
use crate::state::ui::UiState;

/// One assistant reply: the answer text, a "Sources:" block when citations
/// are present, and a copy button with a transient "Copied!" indicator.
#[component]
pub fn AssistantMessage(message: Message) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let id = message.id;
    let text = message.text.clone();
    let copy_text = message.text.clone();
    let citations = message.citations.clone();
    let time = message.generation_time.clone();

    let is_copied = move || ui.get().copied_message_id == Some(id);
    let on_copy = move |_| copy_to_clipboard(ui, id, copy_text.clone());

    view! {
        <div class="ai-message">
            <div class="ai-message__bubble">
                <pre class="ai-message__text">{text}</pre>
            </div>

            {(!citations.is_empty())
                .then(|| view! { <CitationList citations=citations.clone()/> })}

            <div class="ai-message__footer">
                <button class="ai-message__copy" on:click=on_copy>
                    {move || if is_copied() { "Copied!" } else { "Copy" }}
                </button>
                {time.map(|t| {
                    view! {
                        <span class="ai-message__time">{format!("Generated in {t}s")}</span>
                    }
                })}
            </div>
        </div>
    }
}

/// The "Sources:" block under a cited reply.
#[component]
fn CitationList(citations: Vec<Citation>) -> impl IntoView {
    view! {
        <div class="ai-message__citations">
            <p class="ai-message__citations-label">"Sources:"</p>
            <ul>
                {citations
                    .into_iter()
                    .map(|c| {
                        let kind = if c.document_type.is_empty() {
                            "document".to_owned()
                        } else {
                            c.document_type
                        };
                        view! {
                            <li>
                                <span class="ai-message__citation-kind">{kind}</span>
                                " — "
                                {c.source_path}
                                {c.page_number.map(|p| format!(", p. {p}"))}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// Write `text` to the clipboard and flash the indicator for two seconds.
fn copy_to_clipboard(ui: RwSignal<UiState>, id: u64, text: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Some(window) = web_sys::window() {
                let promise = window.navigator().clipboard().write_text(&text);
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            }

            ui.update(|u| u.copied_message_id = Some(id));
            gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
            ui.update(|u| {
                if u.copied_message_id == Some(id) {
                    u.copied_message_id = None;
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ui, id, text);
    }
}
