//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (ranking limits, log format markers)
//! - CLI option types and parsing
//! - The library-level `Config` struct

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{AnalyzeCommand, Cli, ClassifyCommand, Command, Config, LogFormat, LogLevel, ReportFormat};
