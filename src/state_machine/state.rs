//! Session state and turn types

use serde::{Deserialize, Serialize};

/// Where a single submission is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Ready for a submission
    #[default]
    Idle,
    /// Request in flight
    Sending,
}

/// State carried between submissions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub phase: Phase,
    /// Assigned by the first successful reply, echoed on every request after
    pub session_id: Option<String>,
    /// Set once the welcome placeholder has been removed
    pub welcome_cleared: bool,
}

impl SessionState {
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Sending
    }
}

/// Who a turn is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Agent,
    Error,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Agent => "agent",
            Role::Error => "error",
        }
    }
}

/// One message in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn agent(content: impl Into<String>) -> Self {
        Self {
            role: Role::Agent,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            role: Role::Error,
            content: content.into(),
        }
    }
}
