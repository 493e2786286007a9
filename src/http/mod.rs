//! Signed HTTP client
//!
//! A thin wrapper over `reqwest` that signs every GET with the OAuth 1.0a
//! Authorization header. Status handling is left to the caller: the
//! pagination loop owns the partial-result-on-error policy.

mod client;

pub use client::{HttpClient, HttpClientConfig};
