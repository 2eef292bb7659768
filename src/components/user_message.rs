//! User message bubble with in-place edit-and-regenerate.

use leptos::prelude::*;

use crate::state::chat::Message;
use crate::state::session::{self, EditState, SessionContext};

/// One user message. The edit button swaps the bubble for a textarea bound
/// to the edit snapshot; "Regenerate" resubmits and replaces the paired
/// assistant reply in place, "Cancel" discards the snapshot.
#[component]
pub fn UserMessage(message: Message) -> impl IntoView {
    let cx = expect_context::<SessionContext>();

    let id = message.id;
    let text = message.text.clone();

    let is_editing = move || cx.edit.get().is_editing(id);
    let on_cancel = move |_| cx.edit.update(EditState::cancel);
    let on_regenerate = move |_| session::submit_regeneration(cx);

    view! {
        <div class="user-message">
            {move || {
                if is_editing() {
                    view! {
                        <div class="user-message__editor">
                            <textarea
                                class="user-message__textarea"
                                prop:value=move || cx.edit.get().draft
                                on:input=move |ev| {
                                    cx.edit.update(|e| e.draft = event_target_value(&ev));
                                }
                            ></textarea>
                            <div class="user-message__editor-actions">
                                <button class="btn btn--primary" on:click=on_regenerate>
                                    "Regenerate"
                                </button>
                                <button class="btn" on:click=on_cancel>
                                    "Cancel"
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                } else {
                    let text = text.clone();
                    let snapshot = text.clone();
                    let on_edit = move |_| {
                        let chat = cx.chat.get_untracked();
                        let Some(conversation) = chat.active_conversation() else {
                            return;
                        };
                        cx.edit.update(|e| e.begin(conversation, id, &snapshot));
                    };
                    view! {
                        <div class="user-message__bubble">
                            <p class="user-message__text">{text}</p>
                            <button class="user-message__edit" on:click=on_edit title="Edit">
                                "Edit"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
