//! OAuth 1.0a request signing
//!
//! The dm_events endpoint requires a user-context OAuth 1.0a signature on
//! every request. This module builds the `Authorization: OAuth ...` header
//! from the four credential strings: HMAC-SHA1 over the RFC 5849 signature
//! base string, base64-encoded.

mod signer;

pub use signer::{percent_encode, OauthSigner};

#[cfg(test)]
pub(crate) use signer::signature_base_string;

#[cfg(test)]
mod tests;
