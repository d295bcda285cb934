//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format of the analysis report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Markdown summary (default)
    Text,
    /// Full statistics as pretty-printed JSON
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use ua_analyzer::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("/var/log/nginx/access.log"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Access log to analyze
    pub file: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Report format
    pub report_format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("access.log"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            report_format: ReportFormat::Text,
        }
    }
}

/// Command-line interface.
///
/// # Examples
///
/// ```bash
/// # Summarise an access log
/// ua_analyzer analyze /var/log/nginx/access.log
///
/// # Full statistics as JSON
/// ua_analyzer analyze access.log --format json
///
/// # Classify a single User-Agent
/// ua_analyzer classify "GPTBot/1.0 (+https://openai.com/gptbot)"
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ua_analyzer",
    about = "Classifies User-Agent strings and summarises access logs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze the User-Agents of a combined-format access log
    #[command(name = "analyze")]
    Analyze(AnalyzeCommand),
    /// Classify a single User-Agent string
    #[command(name = "classify")]
    Classify(ClassifyCommand),
}

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    /// Access log file to read
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Report format: text|json
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(Debug, Args)]
pub struct ClassifyCommand {
    /// User-Agent string to classify
    pub user_agent: String,
}

impl AnalyzeCommand {
    /// Builds the library configuration for this invocation.
    pub fn into_config(self, log_level: LogLevel, log_format: LogFormat) -> Config {
        Config {
            file: self.file,
            log_level,
            log_format,
            report_format: self.format,
        }
    }
}
