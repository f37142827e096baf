//! Client configuration from the environment

use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/chat";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid endpoint URL {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

/// Log output format for the terminal front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Configuration for the chat client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Chat endpoint, e.g. `http://localhost:8000/api/chat`
    pub endpoint: String,
    /// Liveness probe URL
    pub health_url: String,
    pub log_format: LogFormat,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("CARD_ADVISOR_ENDPOINT").ok(),
            std::env::var("CARD_ADVISOR_HEALTH_URL").ok(),
            std::env::var("CARD_ADVISOR_LOG_FORMAT").ok(),
        )
    }

    fn from_vars(
        endpoint: Option<String>,
        health_url: Option<String>,
        log_format: Option<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let parsed = validate_url(&endpoint)?;

        let health_url = match health_url {
            Some(url) => {
                validate_url(&url)?;
                url
            }
            None => {
                let mut health = parsed;
                health.set_path("/health");
                health.set_query(None);
                health.to_string()
            }
        };

        let log_format = match log_format.as_deref() {
            Some("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json,
        };

        Ok(Self {
            endpoint,
            health_url,
            log_format,
        })
    }
}

fn validate_url(url: &str) -> Result<reqwest::Url, ConfigError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidEndpoint {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ConfigError::InvalidEndpoint {
            url: url.to_string(),
            reason: format!("unsupported scheme {other}"),
        }),
    }
}
