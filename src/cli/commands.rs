//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Archive your Twitter direct-message history to a timestamped CSV
///
/// Credentials are read from the environment (a `.env` file is honored):
/// TWITTER_CLIENT_ID, TWITTER_CLIENT_SECRET, TWITTER_ACCESS_TOKEN,
/// TWITTER_ACCESS_TOKEN_SECRET.
#[derive(Parser, Debug)]
#[command(name = "dmarchive")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory the CSV is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Maximum pages to fetch (default: follow tokens until exhaustion)
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Pause between pages, in milliseconds
    #[arg(long, default_value = "1000")]
    pub page_delay_ms: u64,

    /// Records per page (API ceiling is 100)
    #[arg(long, default_value = "100")]
    pub page_size: u32,

    /// Override the dm_events endpoint URL
    #[arg(long, hide = true)]
    pub endpoint: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
