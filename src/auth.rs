use crate::{
    config::ClientConfig,
    error::{ClientError, ClientResult},
};
use log::debug;
use reqwest::{
    cookie::{CookieStore, Jar},
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

/// Name of the cookie holding the session token.
pub const AUTH_COOKIE: &str = "auth-token";

/// Source of the bearer credential attached to authenticated requests.
///
/// The client never caches the token: `read` is called on every request and
/// `clear` whenever the server answers 401 or 403.
#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    /// Current token, if a session exists
    async fn read(&self) -> Option<String>;

    /// Drop the stored token
    async fn clear(&self);

    /// Apply the bearer credential to the request headers
    async fn apply_auth(&self, headers: &mut HeaderMap) -> ClientResult<()> {
        let Some(token) = self.read().await.filter(|token| !token.is_empty()) else {
            return Ok(());
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ClientError::invalid_header(format!("Invalid auth header: {}", e)))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);

        Ok(())
    }
}

/// Token kept in the `auth-token` cookie of a cookie jar.
///
/// Share [`CookieCredentials::jar`] with the HTTP client through
/// `reqwest::ClientBuilder::cookie_provider` to pick up tokens the server
/// sets on login.
#[derive(Clone)]
pub struct CookieCredentials {
    jar: Arc<Jar>,
    url: Url,
}

impl CookieCredentials {
    /// Create an empty cookie store scoped to the given API address
    pub fn new(url: impl AsRef<str>) -> ClientResult<Self> {
        Ok(Self::with_jar(Arc::new(Jar::default()), Url::parse(url.as_ref())?))
    }

    /// Create a cookie store scoped to the configured API address
    pub fn for_config(config: &ClientConfig) -> ClientResult<Self> {
        Self::new(config.base_url())
    }

    /// Use an existing jar
    pub fn with_jar(jar: Arc<Jar>, url: Url) -> Self {
        Self { jar, url }
    }

    /// Store a token in the `auth-token` cookie
    pub fn set_token(&self, token: &str) {
        self.jar
            .add_cookie_str(&format!("{}={}; Path=/", AUTH_COOKIE, token), &self.url);
    }

    pub fn jar(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }
}

#[async_trait::async_trait]
impl CredentialStore for CookieCredentials {
    async fn read(&self) -> Option<String> {
        let header = self.jar.cookies(&self.url)?;
        find_cookie(header.to_str().ok()?, AUTH_COOKIE)
    }

    async fn clear(&self) {
        debug!("Expiring {} cookie", AUTH_COOKIE);
        self.jar.add_cookie_str(
            &format!("{}=; Max-Age=0; Path=/", AUTH_COOKIE),
            &self.url,
        );
    }
}

/// Find a non-empty cookie value in a `Cookie` header string.
fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Token held in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentials {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }

    pub async fn set_token(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }
}

#[async_trait::async_trait]
impl CredentialStore for MemoryCredentials {
    async fn read(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    async fn clear(&self) {
        self.token.write().await.take();
    }
}

/// No credential at all
#[derive(Debug, Clone)]
pub struct NoCredentials;

#[async_trait::async_trait]
impl CredentialStore for NoCredentials {
    async fn read(&self) -> Option<String> {
        None
    }

    async fn clear(&self) {}
}
