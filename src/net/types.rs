//! Wire types for the answering service's JSON contract.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use crate::state::chat::{Citation, Reply};

/// Assistant text substituted when the response carries no usable content.
pub const NO_RESPONSE: &str = "No response received.";

/// The authenticated user, as returned by `GET /me`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub email: String,
}

/// `POST /query` request body. `thread_id` is the correlation token.
#[derive(Clone, Debug, serde::Serialize)]
pub struct QueryRequest {
    pub question: String,
    pub thread_id: String,
}

/// `POST /query` response body.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub messages: Vec<QueryMessage>,
}

/// One role-tagged entry in a query response.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct QueryMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<QueryMetadata>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct QueryMetadata {
    #[serde(default)]
    pub citations: Vec<Citation>,
}

impl QueryResponse {
    /// Extract the first `role == "assistant"` entry as a committable
    /// [`Reply`]. Missing content falls back to [`NO_RESPONSE`], missing
    /// citation metadata to an empty list.
    pub fn assistant_reply(&self, generation_time: String) -> Reply {
        let entry = self.messages.iter().find(|m| m.role == "assistant");

        let text = entry
            .and_then(|m| m.content.clone())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| NO_RESPONSE.to_owned());
        let citations = entry
            .and_then(|m| m.metadata.as_ref())
            .map(|meta| meta.citations.clone())
            .unwrap_or_default();

        Reply {
            text,
            citations,
            generation_time,
        }
    }
}

/// `POST /login` request body.
#[derive(Clone, Debug, serde::Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /login` response body.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST /signup` request body. Field names follow the service contract.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "userType")]
    pub user_type: String,
    pub gender: String,
}

/// Error body shape: services report a human-readable `detail` string.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
