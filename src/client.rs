//! Remote assistant abstraction
//!
//! One `POST` per submission, no retries and no timeout.

mod error;
mod http;
mod types;

#[cfg(test)]
pub mod testing;

pub use error::{ClientError, ClientErrorKind};
pub use http::HttpAssistantClient;
pub use types::{ChatReply, ChatRequest};

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for the chat endpoint
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Send one user turn and wait for the reply
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError>;
}

#[async_trait]
impl<T: AssistantClient + ?Sized> AssistantClient for Arc<T> {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        (**self).chat(request).await
    }
}

/// Logging wrapper for assistant clients
pub struct LoggingClient {
    inner: Arc<dyn AssistantClient>,
}

impl LoggingClient {
    pub fn new(inner: Arc<dyn AssistantClient>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl AssistantClient for LoggingClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        let start = std::time::Instant::now();
        let result = self.inner.chat(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::info!(
                    session_id = %reply.session_id,
                    duration_ms = %duration.as_millis(),
                    cards = request.cards.as_ref().map_or(0, Vec::len),
                    "Chat request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    duration_ms = %duration.as_millis(),
                    kind = e.kind.as_str(),
                    error = %e.message,
                    "Chat request failed"
                );
            }
        }

        result
    }
}
