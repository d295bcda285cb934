//! Report rendering for User-Agent statistics.

use crate::config::DISTRIBUTION_LIMIT;
use crate::stats::{ranked, UserAgentStats};

fn bullet_list<I>(items: I) -> String
where
    I: IntoIterator<Item = String>,
{
    items.into_iter().collect::<Vec<_>>().join("\n")
}

/// Renders the statistics as a Markdown summary.
///
/// Browser and OS distributions show the ten largest buckets; bot categories
/// are listed in full. Rankings tie-break by first-seen order.
pub fn generate_report(stats: &UserAgentStats) -> String {
    let top_user_agents = bullet_list(
        stats
            .top_user_agents
            .iter()
            .map(|(ua, count)| format!("- {}x: {}", count, ua)),
    );

    let browsers = bullet_list(
        ranked(&stats.browsers, DISTRIBUTION_LIMIT)
            .into_iter()
            .map(|(browser, count)| format!("- {}: {}", browser, count)),
    );

    let bot_categories = bullet_list(
        ranked(&stats.bot_categories, stats.bot_categories.len())
            .into_iter()
            .map(|(category, count)| format!("- {}: {}", category.to_string().replace('_', " "), count)),
    );

    let operating_systems = bullet_list(
        ranked(&stats.operating_systems, DISTRIBUTION_LIMIT)
            .into_iter()
            .map(|(os, count)| format!("- {}: {}", os, count)),
    );

    let report = format!(
        r#"
# Access Log Analysis Report

## Summary
- Total Requests: {total}
- Unique User Agents: {unique}
- Mobile Requests: {mobile} ({mobile_pct}%)
- Bot Requests: {bots} ({bot_pct}%)

## Top User Agents
{top_user_agents}

## Browser Distribution
{browsers}

## Bot Categories
{bot_categories}

## Operating System Distribution
{operating_systems}
"#,
        total = stats.total,
        unique = stats.unique_user_agents,
        mobile = stats.mobile,
        mobile_pct = stats.mobile_percentage,
        bots = stats.bots,
        bot_pct = stats.bot_percentage,
    );

    report.trim().to_string()
}

/// Renders the full statistics, including per-request detail, as pretty JSON.
pub fn to_json(stats: &UserAgentStats) -> serde_json::Result<String> {
    serde_json::to_string_pretty(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::LogEntry;
    use crate::stats::analyze_user_agents;

    fn sample_stats() -> UserAgentStats {
        analyze_user_agents(&[
            LogEntry::from_user_agent(
                "192.168.1.100",
                Some("Mozilla/5.0 (iPhone; CPU iPhone OS 15_2 like Mac OS X) Safari/604.1"),
            ),
            LogEntry::from_user_agent(
                "192.168.1.101",
                Some("Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)"),
            ),
            LogEntry::from_user_agent(
                "192.168.1.102",
                Some("Mozilla/5.0 (iPhone; CPU iPhone OS 15_2 like Mac OS X) Safari/604.1"),
            ),
        ])
    }

    #[test]
    fn test_report_summary_section() {
        let report = generate_report(&sample_stats());

        assert!(report.starts_with("# Access Log Analysis Report"));
        assert!(report.contains("- Total Requests: 3"));
        assert!(report.contains("- Unique User Agents: 2"));
        assert!(report.contains("- Mobile Requests: 2 (66.67%)"));
        assert!(report.contains("- Bot Requests: 1 (33.33%)"));
    }

    #[test]
    fn test_report_distributions() {
        let report = generate_report(&sample_stats());

        assert!(report.contains(
            "- 2x: Mozilla/5.0 (iPhone; CPU iPhone OS 15_2 like Mac OS X) Safari/604.1"
        ));
        assert!(report.contains("- safari 604: 2"));
        assert!(report.contains("- search engines: 1"));
        assert!(report.contains("- ios 15_2: 2"));
    }

    #[test]
    fn test_report_for_empty_input() {
        let report = generate_report(&analyze_user_agents(&[]));
        assert!(report.contains("- Total Requests: 0"));
        assert!(report.contains("- Mobile Requests: 0 (0.00%)"));
        assert!(report.ends_with("## Operating System Distribution"));
    }

    #[test]
    fn test_json_output() {
        let json = to_json(&sample_stats()).expect("stats should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

        assert_eq!(value["total"], 3);
        assert_eq!(value["bot_percentage"], "33.33");
        assert_eq!(value["bot_categories"]["search_engines"], 1);
        assert_eq!(value["detailed_analysis"][1]["analysis"]["bot_category"], "search_engines");
        assert_eq!(value["detailed_analysis"][0]["analysis"]["os"]["name"], "ios");
    }
}
