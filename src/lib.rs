//! # dmarchive
//!
//! Archive your Twitter direct-message history to a timestamped CSV.
//!
//! The crate drives the Twitter v2 `dm_events` endpoint: every request is
//! signed with an OAuth 1.0a user context, pages are followed through the
//! cursor token until the API reports no more, and the collected events are
//! flattened into a single CSV whose header is the union of every field seen.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dmarchive::config::{Credentials, FetchConfig};
//! use dmarchive::http::HttpClient;
//! use dmarchive::pagination::DmFetcher;
//! use dmarchive::output::CsvWriter;
//!
//! #[tokio::main]
//! async fn main() -> dmarchive::Result<()> {
//!     let credentials = Credentials::from_env();
//!     let client = HttpClient::new(credentials);
//!     let fetcher = DmFetcher::new(client, FetchConfig::default());
//!
//!     let outcome = fetcher.fetch_all().await;
//!     CsvWriter::new().write(&outcome.records, "twitter_dms.csv")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Credentials ──► OauthSigner ──► HttpClient ──► DmFetcher ──► CsvWriter
//!   (config)        (auth)          (http)      (pagination)    (output)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Credential and fetch configuration
pub mod config;

/// OAuth 1.0a request signing
pub mod auth;

/// Signed HTTP client
pub mod http;

/// Cursor pagination over the dm_events endpoint
pub mod pagination;

/// CSV output with schema unification
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
