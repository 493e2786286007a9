//! Pagination types
//!
//! The serde view of one dm_events response plus the outcome types returned
//! by the fetch loop.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One direct-message event: a mapping with a variable field set
///
/// The API does not guarantee a fixed shape; different events carry
/// different subsets of fields, so events stay as raw JSON objects and the
/// output layer unions the keys.
pub type Record = Map<String, Value>;

/// Serde view of one dm_events response body
///
/// Transient: lives for one request/response cycle, then its records are
/// appended to the accumulator and its token consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct DmEventsPage {
    /// Records on this page, if any
    #[serde(default)]
    pub data: Option<Vec<Record>>,
    /// Pagination metadata, if any
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

/// The `meta` section of a dm_events response
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    /// Opaque cursor for the next page
    #[serde(default)]
    pub next_token: Option<String>,
}

impl DmEventsPage {
    /// The continuation token, if the response advertises a next page
    pub fn next_token(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.next_token.as_deref())
    }
}

/// How a fetch run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// Every page was consumed
    Complete,
    /// The API returned a non-success status; the accumulator holds the
    /// pages that preceded it
    HttpError {
        /// HTTP status code
        status: u16,
        /// Diagnostic payload from the response
        body: String,
    },
    /// The request never got a response (connect failure, timeout, bad body)
    Transport {
        /// Description of the failure
        message: String,
    },
    /// The configured page cap was reached while a further token existed
    PageLimit {
        /// The cap that was hit
        limit: u32,
    },
}

impl FetchStatus {
    /// Check if the run consumed every page
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Check if the run ended on a credentials rejection
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::HttpError { status: 401 | 403, .. })
    }
}

/// Everything a fetch run produced
///
/// Errors truncate rather than fail: the records collected before the
/// failure are always returned, and `status` says whether they are the
/// whole history.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Accumulated records, in API arrival order
    pub records: Vec<Record>,
    /// Pages fetched (including an error page that contributed no records)
    pub pages_fetched: u32,
    /// How the run ended
    pub status: FetchStatus,
}

impl FetchOutcome {
    /// Check if the run consumed every page
    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// Check if the run stopped early
    pub fn is_truncated(&self) -> bool {
        !self.is_complete()
    }
}
