//! Remote assistant error types

use thiserror::Error;

/// Failure of a single chat request, with classification
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub kind: ClientErrorKind,
    pub message: String,
}

impl ClientError {
    pub fn new(kind: ClientErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Network, message)
    }

    pub fn status(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Status, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::MalformedPayload, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Config, message)
    }
}

/// Error classification, used for diagnostics only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    /// Connection refused, reset, DNS failure
    Network,
    /// Non-success HTTP status
    Status,
    /// Success status with a body that is not a chat reply
    MalformedPayload,
    /// Client could not be constructed
    Config,
}

impl ClientErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Status => "status",
            Self::MalformedPayload => "malformed_payload",
            Self::Config => "config",
        }
    }
}
