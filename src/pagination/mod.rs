//! Cursor pagination over the dm_events endpoint
//!
//! The core of the pipeline: follow the `meta.next_token` cursor until the
//! API stops returning one, accumulating records in arrival order. Any
//! failure mid-run truncates the fetch instead of discarding it. The
//! outcome carries an explicit status so callers can tell a clean run from
//! a partial one.

mod fetcher;
mod types;

pub use fetcher::DmFetcher;
pub use types::{DmEventsPage, FetchOutcome, FetchStatus, PageMeta, Record};
