//! ua_analyzer library: User-Agent classification and access log statistics
//!
//! This library classifies HTTP User-Agent strings (mobile device, bot and bot
//! category, browser, operating system) and summarises the agents found in
//! combined-format web server access logs.
//!
//! # Example
//!
//! ```no_run
//! use ua_analyzer::{process_log_file, generate_report};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let stats = process_log_file("/var/log/nginx/access.log").await?;
//! println!("{}", generate_report(&stats));
//! # Ok(())
//! # }
//! ```
//!
//! Classification itself is synchronous:
//!
//! ```
//! use ua_analyzer::classifier;
//!
//! let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 15_0 like Mac OS X) AppleWebKit/605.1.15";
//! assert!(classifier::is_mobile(ua));
//! ```

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod catalog;
#[allow(missing_docs)]
pub mod classifier;
#[allow(missing_docs)]
pub mod config;
pub mod error_handling;
pub mod initialization;
#[allow(missing_docs)]
pub mod parse;
pub mod report;
#[allow(missing_docs)]
pub mod stats;

// Re-export public API
pub use catalog::{BotCategory, Browser, OperatingSystem, PatternCatalog};
pub use classifier::{analyze, Classifier, UserAgentAnalysis};
pub use config::{Config, LogFormat, LogLevel, ReportFormat};
pub use error_handling::IngestionError;
pub use parse::{parse_log_line, LogEntry};
pub use report::generate_report;
pub use run::{process_log_file, run_analysis};
pub use stats::{analyze_user_agents, UserAgentStats};

// Internal run module (log file ingestion and report rendering)
mod run {
    use anyhow::{Context, Result};
    use log::{info, warn};
    use std::path::Path;

    use crate::config::{Config, ReportFormat};
    use crate::error_handling::IngestionError;
    use crate::parse::parse_log_lines;
    use crate::report::{generate_report, to_json};
    use crate::stats::{analyze_user_agents, UserAgentStats};

    /// Reads an access log and computes User-Agent statistics.
    ///
    /// The whole file is read before parsing. Blank lines are discarded and
    /// malformed lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`IngestionError::Read`] if the file cannot be read as UTF-8 text.
    pub async fn process_log_file(path: impl AsRef<Path>) -> Result<UserAgentStats, IngestionError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| IngestionError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let parsed = parse_log_lines(&content);
        info!("Processing {} log entries...", parsed.lines);
        info!("Successfully parsed {} log entries", parsed.entries.len());
        if parsed.skipped() > 0 {
            warn!("Skipped {} malformed log lines", parsed.skipped());
        }
        if parsed.entries.is_empty() {
            warn!("No log entries found in {}", path.display());
        }

        Ok(analyze_user_agents(&parsed.entries))
    }

    /// Runs an analysis with the provided configuration and renders the report.
    ///
    /// # Errors
    ///
    /// Fails if the log file cannot be read or the JSON report cannot be rendered.
    pub async fn run_analysis(config: &Config) -> Result<String> {
        let stats = process_log_file(&config.file)
            .await
            .context("Failed to analyze access log")?;

        info!(
            "Analysis complete: total={}, mobile={}, bots={}, unique={}",
            stats.total, stats.mobile, stats.bots, stats.unique_user_agents
        );

        match config.report_format {
            ReportFormat::Text => Ok(generate_report(&stats)),
            ReportFormat::Json => to_json(&stats).context("Failed to render JSON report"),
        }
    }
}
