//! HTTP implementation of the assistant client

use super::{AssistantClient, ChatReply, ChatRequest, ClientError};
use crate::config::ClientConfig;
use async_trait::async_trait;
use reqwest::Client;

/// Talks to the assistant's JSON chat endpoint
pub struct HttpAssistantClient {
    client: Client,
    endpoint: String,
    health_url: String,
}

impl HttpAssistantClient {
    /// Build a client. No request timeout is set: a send waits until the
    /// server answers or the transport fails.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ClientError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            health_url: config.health_url.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Probe the assistant's health endpoint
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_err(|e| ClientError::network(format!("Health check failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::status(format!("Health check returned HTTP {status}")))
        }
    }
}

#[async_trait]
impl AssistantClient for HttpAssistantClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::network(format!("Connection failed: {e}"))
                } else {
                    ClientError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(ClientError::status(format!("HTTP {status}: {body}")));
        }

        serde_json::from_str(&body).map_err(|e| {
            ClientError::malformed(format!("Failed to parse response: {e} - body: {body}"))
        })
    }
}
