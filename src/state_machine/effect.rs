//! Effects produced by state transitions

use super::state::Turn;
use crate::client::{ChatRequest, ClientErrorKind};

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Remove the welcome placeholder from the transcript
    ClearWelcome,

    /// Append a turn to the history
    AppendTurn(Turn),

    /// Pending flag changed
    NotifyPending(bool),

    /// Issue the request to the assistant
    SendRequest(ChatRequest),

    /// Record diagnostic detail of a failed request
    LogFailure {
        kind: ClientErrorKind,
        detail: String,
    },
}

impl Effect {
    pub fn append_user(content: impl Into<String>) -> Self {
        Effect::AppendTurn(Turn::user(content))
    }

    pub fn append_agent(content: impl Into<String>) -> Self {
        Effect::AppendTurn(Turn::agent(content))
    }

    pub fn append_error(content: impl Into<String>) -> Self {
        Effect::AppendTurn(Turn::error(content))
    }
}
