//! CLI module
//!
//! Argument parsing and the run orchestration: load credentials, fetch every
//! page, write the timestamped CSV.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
