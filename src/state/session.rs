//! The conversation session orchestrator.
//!
//! `submit` and `submit_regeneration` drive the per-conversation
//! `Idle -> Pending -> Idle` cycle: optimistic user-message append, remote
//! query, and reconciliation of the reply into the conversation the request
//! was issued for. Both the success and the failure arm funnel through a
//! commit on [`ChatState`], so a conversation can never be left pending.
//!
//! Requests carry the conversation id as a correlation token; a reply is
//! committed against that id even when the user has switched threads in the
//! meantime. There is no cancellation and no retry: a superseded request
//! still commits whenever it resolves.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::state::chat::{ChatState, Conversation, Reply, Role};

/// The signals the orchestrator operates on, provided once via context so
/// the core stays decoupled from any particular component tree.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub chat: RwSignal<ChatState>,
    pub edit: RwSignal<EditState>,
    pub input: RwSignal<String>,
}

/// Edit-and-regenerate controller state: `Viewing` when `editing_id` is
/// `None`, `Editing` otherwise.
#[derive(Clone, Debug, Default)]
pub struct EditState {
    pub editing_id: Option<u64>,
    /// Snapshot of the text being edited.
    pub draft: String,
    /// Conversation the edited message belongs to; replies are correlated
    /// against this id, not the active selection.
    pub conversation_id: Option<String>,
    /// Id of the assistant message that will be replaced in place.
    pub regen_target: Option<u64>,
}

impl EditState {
    /// Enter editing mode on a user message, remembering the assistant
    /// message paired with it as the regeneration target.
    pub fn begin(&mut self, conversation: &Conversation, user_message_id: u64, current_text: &str) {
        let Some(message) = conversation.find_message(user_message_id) else {
            return;
        };
        if message.role != Role::User {
            return;
        }

        self.editing_id = Some(user_message_id);
        self.draft = current_text.to_owned();
        self.conversation_id = Some(conversation.id.clone());
        self.regen_target = conversation.reply_for(user_message_id).map(|m| m.id);
    }

    /// Discard the snapshot and return to viewing. No side effects.
    pub fn cancel(&mut self) {
        self.editing_id = None;
        self.draft = String::new();
        self.conversation_id = None;
        self.regen_target = None;
    }

    pub fn is_editing(&self, message_id: u64) -> bool {
        self.editing_id == Some(message_id)
    }
}

/// Submit the current input buffer as a query.
///
/// Empty or whitespace-only input is rejected without side effects. The
/// user message becomes visible immediately; the assistant reply (or the
/// fixed fallback on any failure) is appended when the call resolves.
pub fn submit(cx: SessionContext) {
    let text = cx.input.get_untracked();

    let mut issued = None;
    cx.chat.update(|chat| issued = chat.begin_send(&text));
    let Some((conversation_id, user_message_id)) = issued else {
        return;
    };

    cx.input.set(String::new());
    let thread_id = conversation_id.clone();
    dispatch_query(cx, text, thread_id, move |chat, reply| {
        chat.commit_reply(&conversation_id, reply, user_message_id);
    });
}

/// Resubmit an edited user message, replacing its paired assistant reply in
/// place instead of appending. Exits editing mode in all cases.
pub fn submit_regeneration(cx: SessionContext) {
    let edit = cx.edit.get_untracked();
    let (Some(conversation_id), Some(target)) = (edit.conversation_id.clone(), edit.regen_target)
    else {
        cx.edit.update(EditState::cancel);
        return;
    };

    let text = edit.draft.clone();
    cx.edit.update(EditState::cancel);
    if text.trim().is_empty() {
        return;
    }

    cx.chat.update(|chat| chat.mark_pending(&conversation_id));
    let request_conversation = conversation_id.clone();
    dispatch_query(cx, text, conversation_id, move |chat, reply| {
        chat.commit_regeneration(&request_conversation, target, &reply);
    });
}

/// Issue the remote query and run `commit` with its outcome. Failure is
/// converted to [`Reply::fallback`] here; nothing propagates past this
/// boundary.
#[cfg(feature = "hydrate")]
fn dispatch_query(
    cx: SessionContext,
    question: String,
    thread_id: String,
    commit: impl FnOnce(&mut ChatState, Reply) + 'static,
) {
    leptos::task::spawn_local(async move {
        let started = js_sys::Date::now();
        let reply = match crate::net::api::post_query(&question, &thread_id).await {
            Ok(response) => response.assistant_reply(elapsed_seconds(started)),
            Err(e) => {
                leptos::logging::warn!("query failed: {e}");
                Reply::fallback()
            }
        };
        cx.chat.update(|chat| commit(chat, reply));
    });
}

/// Server-side rendering never issues queries; resolve with the fallback so
/// no conversation is stranded in the pending state.
#[cfg(not(feature = "hydrate"))]
fn dispatch_query(
    cx: SessionContext,
    _question: String,
    _thread_id: String,
    commit: impl FnOnce(&mut ChatState, Reply) + 'static,
) {
    cx.chat.update(|chat| commit(chat, Reply::fallback()));
}

#[cfg(feature = "hydrate")]
fn elapsed_seconds(started: f64) -> String {
    format!("{:.2}", (js_sys::Date::now() - started) / 1000.0)
}
