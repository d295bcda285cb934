//! Parsed access log record types.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One request from a combined-format access log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Client address as written in the log (IP or hostname)
    pub ip: String,
    /// Request time; `None` if the bracketed value was not a valid timestamp
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub method: String,
    pub path: Option<String>,
    pub protocol: Option<String>,
    pub status: u16,
    /// Response size in bytes (`-` is recorded as 0)
    pub size: u64,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
}

impl LogEntry {
    /// Builds an entry carrying only an address and a User-Agent.
    ///
    /// Useful when statistics are computed from a source other than a log
    /// file; the remaining fields are empty.
    pub fn from_user_agent(ip: impl Into<String>, user_agent: Option<&str>) -> Self {
        Self {
            ip: ip.into(),
            timestamp: None,
            method: String::new(),
            path: None,
            protocol: None,
            status: 0,
            size: 0,
            referer: None,
            user_agent: user_agent.map(str::to_string),
        }
    }
}

/// Result of parsing a whole log text.
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    /// Non-blank lines seen
    pub lines: usize,
    /// Lines that matched the combined log layout, in input order
    pub entries: Vec<LogEntry>,
}

impl ParsedLog {
    /// Number of non-blank lines that were skipped as malformed.
    pub fn skipped(&self) -> usize {
        self.lines - self.entries.len()
    }
}
