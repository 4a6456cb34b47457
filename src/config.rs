use crate::error::{ClientError, ClientResult};
use url::Url;

/// Environment variable holding the API base address.
pub const BASE_URL_ENV: &str = "ADMIN_API_BASE_URL";

/// Local development address used when the environment does not set one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Immutable client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the given base address.
    ///
    /// The address must be absolute; a trailing `/` is dropped so endpoint
    /// paths can be appended verbatim.
    pub fn new(base_url: impl AsRef<str>) -> ClientResult<Self> {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::config(format!(
                "base URL '{}' cannot carry endpoint paths",
                trimmed
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        })
    }

    /// Read the base address from `ADMIN_API_BASE_URL`, falling back to the
    /// local development address.
    pub fn from_env() -> ClientResult<Self> {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// Override the User-Agent sent with every request
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new("https://api.example.com/v1/").unwrap();
        assert_eq!(config.base_url(), "https://api.example.com/v1");
    }

    #[test]
    fn relative_base_is_rejected() {
        assert!(ClientConfig::new("/api").is_err());
        assert!(ClientConfig::new("mailto:ops@example.com").is_err());
    }

    #[test]
    fn default_points_at_local_development() {
        assert_eq!(ClientConfig::default().base_url(), DEFAULT_BASE_URL);
    }
}
