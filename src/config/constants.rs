//! Configuration constants.
//!
//! Limits and placeholder values shared by the aggregation and report layers.

/// Number of most frequent User-Agent strings kept in the statistics.
pub const TOP_USER_AGENTS_LIMIT: usize = 10;

/// Number of entries shown in the browser and OS distributions of the report.
pub const DISTRIBUTION_LIMIT: usize = 10;

/// Placeholder for a missing name or version in distribution keys.
pub const UNKNOWN: &str = "unknown";

/// Percentage rendered when there are no records to divide by.
pub const EMPTY_PERCENTAGE: &str = "0.00";

/// Marker used by the combined log format for an absent field.
pub const LOG_FIELD_ABSENT: &str = "-";

/// `chrono` format of the bracketed combined log timestamp
/// (e.g. `14/Sep/2024:09:30:15 +0000`).
pub const LOG_TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";
