//! Credential and fetch configuration
//!
//! Credentials are an explicit struct handed to the signer at construction
//! time, so the core pipeline has no ambient environment dependency and can
//! be exercised with fake keys in tests.

use std::time::Duration;
use tracing::warn;

/// Default dm_events endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.twitter.com/2/dm_events";

/// Event fields requested on every page
pub const DEFAULT_EVENT_FIELDS: &str = "id,text,created_at,sender_id,recipient_id";

/// Maximum page size the platform documents for dm_events
pub const MAX_PAGE_SIZE: u32 = 100;

/// OAuth 1.0a user-context credentials
///
/// Four secrets: the app's consumer key pair and the user's access token
/// pair. Values are not validated here; an absent or wrong credential
/// surfaces as an authentication failure from the remote service.
#[derive(Clone)]
pub struct Credentials {
    /// Consumer (API) key
    pub consumer_key: String,
    /// Consumer (API) secret
    pub consumer_secret: String,
    /// User access token
    pub access_token: String,
    /// User access token secret
    pub access_token_secret: String,
}

/// Environment variable names, matching what the Twitter developer portal
/// hands out
const ENV_VARS: [&str; 4] = [
    "TWITTER_CLIENT_ID",
    "TWITTER_CLIENT_SECRET",
    "TWITTER_ACCESS_TOKEN",
    "TWITTER_ACCESS_TOKEN_SECRET",
];

impl Credentials {
    /// Create credentials from explicit values
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Read credentials from the process environment
    ///
    /// Missing variables become empty strings (with a warning) rather than
    /// hard errors; the remote service is the authority on whether the
    /// credentials work.
    pub fn from_env() -> Self {
        let mut values: [String; 4] = Default::default();
        for (slot, name) in values.iter_mut().zip(ENV_VARS) {
            match std::env::var(name) {
                Ok(value) => *slot = value,
                Err(_) => warn!("{name} is not set; the API will reject unsigned requests"),
            }
        }
        let [consumer_key, consumer_secret, access_token, access_token_secret] = values;
        Self {
            consumer_key,
            consumer_secret,
            access_token,
            access_token_secret,
        }
    }
}

// Secrets stay out of logs and panics.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &redact(&self.consumer_key))
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &redact(&self.access_token))
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

/// Keep a short identifying prefix, hide the rest
fn redact(value: &str) -> String {
    if value.len() <= 4 {
        "<redacted>".to_string()
    } else {
        format!("{}…", &value[..4])
    }
}

/// Configuration for one fetch operation
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// List endpoint URL
    pub endpoint: String,
    /// Records requested per page (platform ceiling is 100)
    pub page_size: u32,
    /// Value for the `dm_event.fields` query parameter
    pub event_fields: String,
    /// Fixed pause between pages, to stay under the rate limit
    pub page_delay: Duration,
    /// Maximum pages to fetch (None = follow tokens until exhaustion)
    pub max_pages: Option<u32>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: MAX_PAGE_SIZE,
            event_fields: DEFAULT_EVENT_FIELDS.to_string(),
            page_delay: Duration::from_secs(1),
            max_pages: None,
        }
    }
}

impl FetchConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the page size, clamped to the platform ceiling
    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size.min(MAX_PAGE_SIZE);
        self
    }

    /// Set the fields requested for each event
    #[must_use]
    pub fn with_event_fields(mut self, fields: impl Into<String>) -> Self {
        self.event_fields = fields.into();
        self
    }

    /// Set the pause between pages
    #[must_use]
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Cap the number of pages fetched
    ///
    /// A cap of zero means no requests are issued at all.
    #[must_use]
    pub fn with_max_pages(mut self, max: u32) -> Self {
        self.max_pages = Some(max);
        self
    }
}
