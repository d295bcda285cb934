//! Access log parsing.
//!
//! Recognises the combined log format used by Apache and Nginx:
//!
//! ```text
//! 66.249.74.123 - - [14/Sep/2024:09:30:18 +0000] "GET /robots.txt HTTP/1.1" 200 234 "-" "Googlebot/2.1"
//! ```
//!
//! Lines that do not have this shape are not errors; they yield `None` and
//! the caller skips them. A status that does not fit `u16`, or a size that is
//! neither `-` nor an unsigned integer, also counts as the wrong shape: such
//! lines are dropped and do not count toward the request total.

mod models;


use chrono::DateTime;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use crate::config::{LOG_FIELD_ABSENT, LOG_TIMESTAMP_FORMAT};

pub use models::{LogEntry, ParsedLog};

// ip, ident, user, [timestamp], "request", status, size, "referer", "user agent"
const COMBINED_LOG_PATTERN: &str =
    r#"^(\S+) \S+ \S+ \[([^\]]+)\] "([^"]*)" (\d+) (\S+) "([^"]*)" "([^"]*)""#;

static COMBINED_LOG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(COMBINED_LOG_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in COMBINED_LOG_RE: {}. This is a programming error.",
            COMBINED_LOG_PATTERN, e
        )
    })
});

fn absent_if_dash(value: &str) -> Option<String> {
    (value != LOG_FIELD_ABSENT).then(|| value.to_string())
}

/// Parses a single combined-format access log line.
///
/// # Returns
///
/// The parsed entry, or `None` if the line does not match the combined log
/// layout or its status/size fields are not valid numbers.
pub fn parse_log_line(line: &str) -> Option<LogEntry> {
    let caps = COMBINED_LOG_RE.captures(line)?;

    let status = match caps[4].parse::<u16>() {
        Ok(status) => status,
        Err(_) => {
            debug!("Skipping log line with invalid status {:?}", &caps[4]);
            return None;
        }
    };

    let size = if &caps[5] == LOG_FIELD_ABSENT {
        0
    } else {
        match caps[5].parse::<u64>() {
            Ok(size) => size,
            Err(_) => {
                debug!("Skipping log line with invalid size {:?}", &caps[5]);
                return None;
            }
        }
    };

    let timestamp = match DateTime::parse_from_str(&caps[2], LOG_TIMESTAMP_FORMAT) {
        Ok(ts) => Some(ts),
        Err(e) => {
            debug!("Unparseable log timestamp {:?}: {}", &caps[2], e);
            None
        }
    };

    let mut request = caps[3].split(' ');
    let method = request.next().unwrap_or_default().to_string();
    let path = request.next().map(str::to_string);
    let protocol = request.next().map(str::to_string);

    Some(LogEntry {
        ip: caps[1].to_string(),
        timestamp,
        method,
        path,
        protocol,
        status,
        size,
        referer: absent_if_dash(&caps[6]),
        user_agent: absent_if_dash(&caps[7]),
    })
}

/// Parses a complete log text, one record per line.
///
/// Blank lines are discarded before counting; malformed lines are counted in
/// `lines` but produce no entry.
pub fn parse_log_lines(content: &str) -> ParsedLog {
    let mut parsed = ParsedLog::default();
    for line in content.lines().filter(|line| !line.trim().is_empty()) {
        parsed.lines += 1;
        match parse_log_line(line) {
            Some(entry) => parsed.entries.push(entry),
            None => debug!("Skipping malformed log line: {}", line),
        }
    }
    parsed
}
