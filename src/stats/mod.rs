//! User-Agent statistics over parsed log entries.
//!
//! Statistics are built by a single left-to-right fold: [`StatsAccumulator`]
//! classifies each entry as it is recorded and [`StatsAccumulator::finish`]
//! derives the rankings and percentages. Each accumulator owns its state, so
//! independent runs never share anything but the read-only catalog.

mod types;

#[cfg(test)]
mod tests;

use indexmap::IndexMap;
use std::hash::Hash;

use crate::catalog::BotCategory;
use crate::classifier::Classifier;
use crate::config::{EMPTY_PERCENTAGE, TOP_USER_AGENTS_LIMIT};
use crate::parse::LogEntry;

pub use types::{DetailedEntry, UserAgentStats};

/// Incremental builder for [`UserAgentStats`].
#[derive(Debug)]
pub struct StatsAccumulator<'a> {
    classifier: Classifier<'a>,
    total: usize,
    mobile: usize,
    bots: usize,
    bot_categories: IndexMap<BotCategory, usize>,
    browsers: IndexMap<String, usize>,
    operating_systems: IndexMap<String, usize>,
    // keys double as the distinct User-Agent set
    user_agent_counts: IndexMap<String, usize>,
    detailed_analysis: Vec<DetailedEntry>,
}

impl Default for StatsAccumulator<'static> {
    fn default() -> Self {
        Self::new(Classifier::default())
    }
}

fn increment<K: Hash + Eq>(counts: &mut IndexMap<K, usize>, key: K) {
    *counts.entry(key).or_insert(0) += 1;
}

impl<'a> StatsAccumulator<'a> {
    pub fn new(classifier: Classifier<'a>) -> Self {
        Self {
            classifier,
            total: 0,
            mobile: 0,
            bots: 0,
            bot_categories: IndexMap::new(),
            browsers: IndexMap::new(),
            operating_systems: IndexMap::new(),
            user_agent_counts: IndexMap::new(),
            detailed_analysis: Vec::new(),
        }
    }

    /// Folds one entry into the running statistics.
    ///
    /// Entries without a User-Agent (absent or empty) only count toward
    /// `total`.
    pub fn record(&mut self, entry: &LogEntry) {
        self.total += 1;

        let Some(user_agent) = entry.user_agent.as_deref().filter(|ua| !ua.is_empty()) else {
            return;
        };

        increment(&mut self.user_agent_counts, user_agent.to_string());

        let analysis = self.classifier.analyze(user_agent);

        if analysis.is_mobile {
            self.mobile += 1;
        }
        if analysis.is_bot {
            self.bots += 1;
            if let Some(category) = analysis.bot_category {
                increment(&mut self.bot_categories, category);
            }
        }

        increment(&mut self.browsers, analysis.browser.bucket_key());
        increment(&mut self.operating_systems, analysis.os.bucket_key());

        self.detailed_analysis.push(DetailedEntry {
            ip: entry.ip.clone(),
            timestamp: entry.timestamp,
            path: entry.path.clone(),
            user_agent: user_agent.to_string(),
            analysis,
        });
    }

    /// Number of entries recorded so far.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Derives rankings and percentages and returns the final statistics.
    pub fn finish(self) -> UserAgentStats {
        let top_user_agents = ranked(&self.user_agent_counts, TOP_USER_AGENTS_LIMIT)
            .into_iter()
            .collect();

        UserAgentStats {
            total: self.total,
            mobile: self.mobile,
            bots: self.bots,
            bot_categories: self.bot_categories,
            browsers: self.browsers,
            operating_systems: self.operating_systems,
            unique_user_agents: self.user_agent_counts.len(),
            top_user_agents,
            detailed_analysis: self.detailed_analysis,
            mobile_percentage: percentage(self.mobile, self.total),
            bot_percentage: percentage(self.bots, self.total),
        }
    }
}

/// Computes statistics for a slice of log entries.
///
/// # Example
///
/// ```
/// use ua_analyzer::parse::LogEntry;
/// use ua_analyzer::stats::analyze_user_agents;
///
/// let entries = vec![
///     LogEntry::from_user_agent("10.0.0.1", Some("curl/8.4.0")),
///     LogEntry::from_user_agent("10.0.0.2", None),
/// ];
/// let stats = analyze_user_agents(&entries);
/// assert_eq!(stats.total, 2);
/// assert_eq!(stats.bots, 1);
/// assert_eq!(stats.bot_percentage, "50.00");
/// ```
pub fn analyze_user_agents(entries: &[LogEntry]) -> UserAgentStats {
    let mut accumulator = StatsAccumulator::default();
    for entry in entries {
        accumulator.record(entry);
    }
    accumulator.finish()
}

/// Returns up to `limit` entries sorted by descending count.
///
/// The sort is stable, so equal counts keep the map's insertion order.
pub fn ranked<K: Clone>(counts: &IndexMap<K, usize>, limit: usize) -> Vec<(K, usize)> {
    let mut entries: Vec<(K, usize)> = counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(limit);
    entries
}

/// Formats `count / total * 100` with two decimals, rounding halves up.
///
/// Works in hundredths of a percent with integer arithmetic, so ratios such
/// as 1/800 (exactly 0.125%) render as `"0.13"`.
///
/// With no records the ratio is undefined; `"0.00"` is reported instead.
pub fn percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return EMPTY_PERCENTAGE.to_string();
    }
    let (count, total) = (count as u128, total as u128);
    let hundredths = (count * 20_000 + total) / (2 * total);
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
