#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::HashSet;

/// Placeholder title for a conversation that has not received its first
/// message yet.
pub const DEFAULT_TITLE: &str = "New chat";

/// Synthetic assistant text shown when a query fails.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// Titles are cut at this many characters with a trailing ellipsis.
const TITLE_MAX_CHARS: usize = 40;

/// Conversation store plus the active-thread selection.
///
/// This is a plain struct so the sequencing and reconciliation logic can be
/// tested natively; components wrap it in an `RwSignal` provided via context.
/// Mutations replace the `conversations` collection wholesale rather than
/// editing a `Conversation` in place, so any clone taken by a reader stays
/// internally consistent.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub conversations: Vec<Conversation>,
    pub active_id: Option<String>,
    /// Conversations with an outstanding query. Nothing stops a second
    /// submit on the same conversation while the first is in flight; see
    /// the double-send tests.
    pub pending: HashSet<String>,
}

/// A single chat thread.
#[derive(Clone, Debug)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    /// Milliseconds since epoch; 0.0 outside the browser.
    pub updated_at: f64,
    next_message_id: u64,
}

/// One message in a conversation. Ids are assigned from the owning
/// conversation's counter, so they are unique within the thread and
/// increase with creation order.
#[derive(Clone, Debug)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub text: String,
    pub citations: Vec<Citation>,
    /// Query round-trip in seconds, e.g. "1.42". `None` on user messages,
    /// "0.0" on synthetic failure replies.
    pub generation_time: Option<String>,
    /// For assistant messages, the id of the user message being answered.
    pub reply_to: Option<u64>,
}

/// A source reference attached to an assistant reply.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Citation {
    #[serde(default)]
    pub document_type: String,
    pub source_path: String,
    #[serde(default)]
    pub page_number: Option<u32>,
}

/// Message roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A message not yet owned by a conversation; `append_message` assigns
/// the id.
#[derive(Clone, Debug)]
pub struct MessageDraft {
    pub role: Role,
    pub text: String,
    pub citations: Vec<Citation>,
    pub generation_time: Option<String>,
    pub reply_to: Option<u64>,
}

impl MessageDraft {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            citations: Vec::new(),
            generation_time: None,
            reply_to: None,
        }
    }

    pub fn assistant(reply: Reply, reply_to: u64) -> Self {
        Self {
            role: Role::Assistant,
            text: reply.text,
            citations: reply.citations,
            generation_time: Some(reply.generation_time),
            reply_to: Some(reply_to),
        }
    }
}

/// Outcome of a query, success or fallback, ready to be committed.
#[derive(Clone, Debug)]
pub struct Reply {
    pub text: String,
    pub citations: Vec<Citation>,
    pub generation_time: String,
}

impl Reply {
    /// The fixed reply substituted when the remote call fails.
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_REPLY.to_owned(),
            citations: Vec::new(),
            generation_time: "0.0".to_owned(),
        }
    }
}

impl ChatState {
    /// Create an empty conversation, prepend it to the list, make it
    /// active, and return its id.
    pub fn create_conversation(&mut self) -> String {
        let conversation = Conversation {
            id: uuid::Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_owned(),
            messages: Vec::new(),
            updated_at: now_ms(),
            next_message_id: 1,
        };
        let id = conversation.id.clone();

        let mut next = Vec::with_capacity(self.conversations.len() + 1);
        next.push(conversation);
        next.extend(self.conversations.iter().cloned());
        self.conversations = next;

        self.active_id = Some(id.clone());
        id
    }

    /// Make `id` the active conversation. Silent no-op for an unknown id.
    pub fn select_conversation(&mut self, id: &str) {
        if self.conversations.iter().any(|c| c.id == id) {
            self.active_id = Some(id.to_owned());
        }
    }

    /// Append a message to one conversation and return its assigned id,
    /// or `None` when the conversation does not exist.
    ///
    /// The first message also stamps the title (flattened, truncated) if it
    /// is still the placeholder. The title never changes after that.
    pub fn append_message(&mut self, conversation_id: &str, draft: &MessageDraft) -> Option<u64> {
        let mut assigned = None;

        self.conversations = self
            .conversations
            .iter()
            .map(|c| {
                if c.id != conversation_id {
                    return c.clone();
                }

                let id = c.next_message_id;
                assigned = Some(id);

                let title = if c.messages.is_empty() && c.title == DEFAULT_TITLE {
                    derive_title(&draft.text)
                } else {
                    c.title.clone()
                };

                let mut messages = c.messages.clone();
                messages.push(Message {
                    id,
                    role: draft.role,
                    text: draft.text.clone(),
                    citations: draft.citations.clone(),
                    generation_time: draft.generation_time.clone(),
                    reply_to: draft.reply_to,
                });

                Conversation {
                    id: c.id.clone(),
                    title,
                    messages,
                    updated_at: now_ms(),
                    next_message_id: id + 1,
                }
            })
            .collect();

        assigned
    }

    /// Swap the body of exactly one message, keeping its id, role, reply
    /// pairing, and position. Used only by regeneration.
    pub fn replace_message(&mut self, conversation_id: &str, message_id: u64, reply: &Reply) {
        self.conversations = self
            .conversations
            .iter()
            .map(|c| {
                if c.id != conversation_id {
                    return c.clone();
                }

                let messages = c
                    .messages
                    .iter()
                    .map(|m| {
                        if m.id != message_id {
                            return m.clone();
                        }
                        Message {
                            id: m.id,
                            role: m.role,
                            text: reply.text.clone(),
                            citations: reply.citations.clone(),
                            generation_time: Some(reply.generation_time.clone()),
                            reply_to: m.reply_to,
                        }
                    })
                    .collect();

                Conversation {
                    id: c.id.clone(),
                    title: c.title.clone(),
                    messages,
                    updated_at: now_ms(),
                    next_message_id: c.next_message_id,
                }
            })
            .collect();
    }

    /// Front half of a submit: validate the input, create a conversation if
    /// none is active, append the user message optimistically, and mark the
    /// conversation pending.
    ///
    /// Returns the correlation pair `(conversation_id, user_message_id)`,
    /// or `None` for empty/whitespace input (no state change).
    pub fn begin_send(&mut self, text: &str) -> Option<(String, u64)> {
        if text.trim().is_empty() {
            return None;
        }

        let conversation_id = match &self.active_id {
            Some(id) => id.clone(),
            None => self.create_conversation(),
        };

        let message_id = self.append_message(&conversation_id, &MessageDraft::user(text))?;
        self.mark_pending(&conversation_id);
        Some((conversation_id, message_id))
    }

    /// Flag a conversation as having a query in flight.
    pub fn mark_pending(&mut self, conversation_id: &str) {
        self.pending.insert(conversation_id.to_owned());
    }

    /// Back half of a submit: append the assistant reply (real or fallback)
    /// to the conversation the request was issued for and clear its pending
    /// flag. The correlation id decides the write target, never the current
    /// selection.
    pub fn commit_reply(&mut self, conversation_id: &str, reply: Reply, reply_to: u64) {
        self.append_message(conversation_id, &MessageDraft::assistant(reply, reply_to));
        self.pending.remove(conversation_id);
    }

    /// Back half of a regeneration: replace the paired assistant message in
    /// place and clear the pending flag.
    pub fn commit_regeneration(&mut self, conversation_id: &str, message_id: u64, reply: &Reply) {
        self.replace_message(conversation_id, message_id, reply);
        self.pending.remove(conversation_id);
    }

    /// Drop all conversations. Used on logout.
    pub fn reset(&mut self) {
        self.conversations = Vec::new();
        self.active_id = None;
        self.pending.clear();
    }

    pub fn active_conversation(&self) -> Option<&Conversation> {
        let id = self.active_id.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn is_pending(&self, conversation_id: &str) -> bool {
        self.pending.contains(conversation_id)
    }

    /// Whether the active conversation has a query in flight.
    pub fn active_is_pending(&self) -> bool {
        self.active_id
            .as_deref()
            .is_some_and(|id| self.is_pending(id))
    }
}

impl Conversation {
    pub fn find_message(&self, message_id: u64) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == message_id)
    }

    /// The assistant message answering `user_message_id`, located by the
    /// reply pairing stamped at creation time.
    pub fn reply_for(&self, user_message_id: u64) -> Option<&Message> {
        self.messages
            .iter()
            .find(|m| m.role == Role::Assistant && m.reply_to == Some(user_message_id))
    }
}

/// Derive a conversation title from its first message: newlines flattened,
/// cut at [`TITLE_MAX_CHARS`] characters with a trailing "...".
fn derive_title(text: &str) -> String {
    let flat = text.replace('\n', " ");
    let flat = flat.trim();
    let mut title: String = flat.chars().take(TITLE_MAX_CHARS).collect();
    if flat.chars().count() > TITLE_MAX_CHARS {
        title.push_str("...");
    }
    title
}

/// Wall-clock milliseconds; requires a browser environment.
fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
