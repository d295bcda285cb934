//! Aggregate statistics types.

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::BotCategory;
use crate::classifier::UserAgentAnalysis;

/// Per-request classification kept in the statistics, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedEntry {
    pub ip: String,
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub path: Option<String>,
    pub user_agent: String,
    pub analysis: UserAgentAnalysis,
}

/// Summary of the User-Agents seen across a set of log entries.
///
/// `total` counts every entry. All other measurements only count entries
/// that carry a User-Agent. Count maps keep first-seen order, which is the
/// tie-break for every ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAgentStats {
    pub total: usize,
    pub mobile: usize,
    pub bots: usize,
    /// Bot count per primary category (only categories that appeared)
    pub bot_categories: IndexMap<BotCategory, usize>,
    /// Count per `"<browser> <version>"` key
    pub browsers: IndexMap<String, usize>,
    /// Count per `"<os> <version>"` key
    pub operating_systems: IndexMap<String, usize>,
    pub unique_user_agents: usize,
    /// Most frequent User-Agent strings, most frequent first
    pub top_user_agents: IndexMap<String, usize>,
    pub detailed_analysis: Vec<DetailedEntry>,
    /// `mobile / total * 100`, two decimals
    pub mobile_percentage: String,
    /// `bots / total * 100`, two decimals
    pub bot_percentage: String,
}
