//! The fetch loop

use super::types::{DmEventsPage, FetchOutcome, FetchStatus, Record};
use crate::config::FetchConfig;
use crate::http::HttpClient;
use tracing::{debug, info, warn};

/// Drives the dm_events endpoint to exhaustion
///
/// Owns the accumulator for the lifetime of one fetch operation; ownership
/// of the records transfers to the caller through [`FetchOutcome`].
pub struct DmFetcher {
    client: HttpClient,
    config: FetchConfig,
}

impl DmFetcher {
    /// Create a fetcher
    pub fn new(client: HttpClient, config: FetchConfig) -> Self {
        Self { client, config }
    }

    /// Fetch every page of DM history
    ///
    /// Infallible by design: every failure mode becomes a truncation status
    /// on the outcome, so whatever was collected before the failure is
    /// never lost.
    pub async fn fetch_all(&self) -> FetchOutcome {
        let mut records: Vec<Record> = Vec::new();
        let mut next_token: Option<String> = None;
        let mut pages_fetched: u32 = 0;

        // A zero page cap means no requests at all.
        if self.config.max_pages == Some(0) {
            info!("Page limit 0 reached before the first request");
            return FetchOutcome {
                records,
                pages_fetched,
                status: FetchStatus::PageLimit { limit: 0 },
            };
        }

        loop {
            let query = self.page_query(next_token.as_deref());

            let response = match self.client.get_signed(&self.config.endpoint, &query).await {
                Ok(response) => response,
                Err(e) => {
                    warn!("Request failed after {pages_fetched} pages: {e}");
                    return FetchOutcome {
                        records,
                        pages_fetched,
                        status: FetchStatus::Transport {
                            message: e.to_string(),
                        },
                    };
                }
            };

            pages_fetched += 1;
            let status = response.status();

            if !status.is_success() {
                // Partial-result policy: report the diagnostic payload and
                // keep what we have. The failing page contributes nothing.
                let body = response.text().await.unwrap_or_default();
                warn!("Error: {}", status.as_u16());
                warn!("{body}");
                return FetchOutcome {
                    records,
                    pages_fetched,
                    status: FetchStatus::HttpError {
                        status: status.as_u16(),
                        body,
                    },
                };
            }

            let page: DmEventsPage = match response.json().await {
                Ok(page) => page,
                Err(e) => {
                    warn!("Failed to decode page {pages_fetched}: {e}");
                    return FetchOutcome {
                        records,
                        pages_fetched,
                        status: FetchStatus::Transport {
                            message: e.to_string(),
                        },
                    };
                }
            };

            let token = page.next_token().map(ToString::to_string);

            if let Some(data) = page.data {
                debug!("Page {pages_fetched}: fetched {} records", data.len());
                records.extend(data);
            } else {
                // Metadata-only pages still advance the cursor.
                debug!("Page {pages_fetched}: no data section");
            }

            match token {
                Some(token) => {
                    if let Some(limit) = self.config.max_pages {
                        if pages_fetched >= limit {
                            info!("Page limit {limit} reached with more pages available");
                            return FetchOutcome {
                                records,
                                pages_fetched,
                                status: FetchStatus::PageLimit { limit },
                            };
                        }
                    }
                    next_token = Some(token);
                    // Fixed pause between pages to stay under the rate limit.
                    tokio::time::sleep(self.config.page_delay).await;
                }
                None => {
                    info!("Pagination complete: {} records in {pages_fetched} pages", records.len());
                    return FetchOutcome {
                        records,
                        pages_fetched,
                        status: FetchStatus::Complete,
                    };
                }
            }
        }
    }

    /// Query parameters for one page request
    fn page_query(&self, token: Option<&str>) -> Vec<(String, String)> {
        let mut query = vec![
            (
                "dm_event.fields".to_string(),
                self.config.event_fields.clone(),
            ),
            ("max_results".to_string(), self.config.page_size.to_string()),
        ];
        if let Some(token) = token {
            query.push(("pagination_token".to_string(), token.to_string()));
        }
        query
    }
}
