//! Run orchestration
//!
//! Wires the pipeline together: credentials from the environment, one fetch
//! run, one CSV write. Pagination errors never fail the run, they truncate
//! it, and the truncation is printed. Only a file-write failure produces a
//! nonzero exit.

use crate::cli::Cli;
use crate::config::{Credentials, FetchConfig};
use crate::error::Result;
use crate::http::HttpClient;
use crate::output::{timestamped_filename, CsvWriter};
use crate::pagination::{DmFetcher, FetchStatus};
use std::time::Duration;

/// Executes one archive run from parsed CLI arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the pipeline
    pub async fn run(&self) -> Result<()> {
        // Honor a .env file the way the developer portal quickstarts do.
        dotenvy::dotenv().ok();
        let credentials = Credentials::from_env();

        let fetcher = DmFetcher::new(HttpClient::new(credentials), self.fetch_config());

        println!("Fetching DMs...");
        let outcome = fetcher.fetch_all().await;

        match &outcome.status {
            FetchStatus::Complete => {}
            FetchStatus::HttpError { status, body } => {
                println!("Error: {status}");
                println!("{body}");
                if outcome.status.is_auth_rejection() {
                    println!(
                        "The API rejected the credentials; check the TWITTER_* environment variables"
                    );
                }
            }
            FetchStatus::Transport { message } => {
                println!("Error: {message}");
            }
            FetchStatus::PageLimit { limit } => {
                println!("Stopped at the {limit}-page limit; more DMs remain");
            }
        }

        if outcome.records.is_empty() {
            println!("No DMs found");
            return Ok(());
        }

        println!("Found {} DMs", outcome.records.len());

        let filename = self
            .cli
            .output_dir
            .join(timestamped_filename(chrono::Local::now()));
        let written = CsvWriter::new().write(&outcome.records, &filename)?;
        println!("Saved {written} DMs to {}", filename.display());

        Ok(())
    }

    fn fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig::new()
            .with_page_size(self.cli.page_size)
            .with_page_delay(Duration::from_millis(self.cli.page_delay_ms));
        if let Some(endpoint) = &self.cli.endpoint {
            config = config.with_endpoint(endpoint);
        }
        if let Some(max) = self.cli.max_pages {
            config = config.with_max_pages(max);
        }
        config
    }
}
