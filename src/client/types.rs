//! Wire types for the chat endpoint

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`
///
/// `cards` and `session_id` serialize as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub cards: Option<Vec<String>>,
    pub session_id: Option<String>,
}

/// Successful reply from the assistant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub session_id: String,
    pub response: String,
}
