use thiserror::Error;

/// Message reported for connectivity failures.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network connection failed. Please check your internet connection.";

// Lowercased fragments that mark an error chain as a connectivity problem.
const NETWORK_ERROR_HINTS: &[&str] = &[
    "network",
    "connection refused",
    "connection reset",
    "connection closed",
    "error sending request",
    "failed to fetch",
    "dns error",
    "failed to lookup address",
    "timed out",
    "unreachable",
];

/// Admin client error types
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing failed: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for client construction and internal plumbing
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Create an invalid header error
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error looks like a connectivity failure rather than a
    /// parsing or programming error.
    pub fn is_network(&self) -> bool {
        if let Self::Http(err) = self {
            if err.is_connect() || err.is_timeout() || (err.is_request() && !err.is_builder()) {
                return true;
            }
        }

        let chain = self.chain_text().to_lowercase();
        NETWORK_ERROR_HINTS.iter().any(|hint| chain.contains(hint))
    }

    /// Human readable text placed into a failed envelope.
    pub fn user_message(&self) -> String {
        if self.is_network() {
            NETWORK_ERROR_MESSAGE.to_string()
        } else {
            format!("Unexpected error while processing the request: {}", self)
        }
    }

    fn chain_text(&self) -> String {
        let mut text = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            text.push_str(": ");
            text.push_str(&err.to_string());
            source = err.source();
        }
        text
    }
}
