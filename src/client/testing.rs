//! Mock assistant clients for testing

use super::{AssistantClient, ChatReply, ChatRequest, ClientError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock client that returns queued results in order
#[derive(Default)]
pub struct MockAssistantClient {
    responses: Mutex<VecDeque<Result<ChatReply, ClientError>>>,
    /// Record of all requests made
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl MockAssistantClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, session_id: &str, response: &str) {
        self.responses.lock().unwrap().push_back(Ok(ChatReply {
            session_id: session_id.to_string(),
            response: response.to_string(),
        }));
    }

    /// Queue a failure
    pub fn queue_error(&self, error: ClientError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssistantClient for MockAssistantClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::network("No mock response queued")))
    }
}

/// Mock client that holds each request until released
pub struct GatedMockClient {
    inner: MockAssistantClient,
    release: Arc<Notify>,
    /// Notified when a request starts (for test synchronization)
    pub request_started: Arc<Notify>,
}

impl GatedMockClient {
    pub fn new() -> Self {
        Self {
            inner: MockAssistantClient::new(),
            release: Arc::new(Notify::new()),
            request_started: Arc::new(Notify::new()),
        }
    }

    pub fn queue_reply(&self, session_id: &str, response: &str) {
        self.inner.queue_reply(session_id, response);
    }

    /// Let the in-flight request complete
    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl AssistantClient for GatedMockClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        self.request_started.notify_one();
        self.release.notified().await;
        self.inner.chat(request).await
    }
}
