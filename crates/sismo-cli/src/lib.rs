//! Shared pieces of the `sismo-fetch` and `sismo-sync` binaries.
//!
//! The two tools are chained by an external job:
//!
//! ```text
//! sismo-fetch -u <url> > snapshot.json
//! sismo-sync -b <bucket> -f <key> -l snapshot.json
//! ```
//!
//! When the OVSICORI page cannot be fetched, `sismo-fetch` still exits 0 and
//! writes an empty snapshot (`[]`). A `sismo-sync` run on that file replaces
//! the cached record with `[]` and prints `True`, so jobs that act on `True`
//! should check the snapshot is non-empty first.

use clap::ValueEnum;
use log::LevelFilter;
use sismo::SeismicRecord;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Renders records for stdout. An empty slice is `[]` in JSON and an empty
/// string in text.
pub fn render_records(
    records: &[SeismicRecord],
    format: &OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(records),
        OutputFormat::Text => Ok(records
            .iter()
            .map(|record| record.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Logs go to stderr; stdout is reserved for the tool's result so it can be
/// redirected into a snapshot file.
pub fn init_logging(level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(level.into())
        .target(env_logger::Target::Stderr)
        .init();
}

/// Python-style boolean, the format downstream pipeline steps match on.
pub fn render_updated(updated: bool) -> &'static str {
    if updated { "True" } else { "False" }
}
