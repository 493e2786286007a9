//! HTTP client that signs each request

use crate::auth::OauthSigner;
use crate::config::Credentials;
use crate::error::{Error, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("dmarchive/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// HTTP client with OAuth 1.0a signing
pub struct HttpClient {
    client: Client,
    signer: OauthSigner,
}

impl HttpClient {
    /// Create a client with default configuration
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(credentials, HttpClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: HttpClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            signer: OauthSigner::new(credentials),
        }
    }

    /// Make a signed GET request
    ///
    /// `url` must not carry a query string of its own; `query` is appended
    /// to the URL and included in the signature base string. Returns the
    /// response regardless of status; callers decide what a non-success
    /// status means. Transport failures map to [`Error::Http`].
    pub async fn get_signed(&self, url: &str, query: &[(String, String)]) -> Result<Response> {
        let mut full_url = Url::parse(url)?;
        for (key, value) in query {
            full_url.query_pairs_mut().append_pair(key, value);
        }

        let authorization = self.signer.authorization_header("GET", url, query);

        let response = self
            .client
            .get(full_url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(Error::Http)?;

        Ok(response)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("signer", &self.signer)
            .finish_non_exhaustive()
    }
}
