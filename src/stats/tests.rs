//! Tests for User-Agent statistics.

use super::*;

const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 15_2 like Mac OS X) Safari/604.1";
const GOOGLEBOT_UA: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
const CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/96.0.4664.110";

fn sample_entries() -> Vec<LogEntry> {
    vec![
        LogEntry::from_user_agent("192.168.1.100", Some(IPHONE_UA)),
        LogEntry::from_user_agent("192.168.1.101", Some(GOOGLEBOT_UA)),
        LogEntry::from_user_agent("192.168.1.102", Some(CHROME_UA)),
        LogEntry::from_user_agent("192.168.1.103", Some(IPHONE_UA)),
    ]
}

#[test]
fn test_analyze_sample_entries() {
    let stats = analyze_user_agents(&sample_entries());

    assert_eq!(stats.total, 4);
    assert_eq!(stats.mobile, 2);
    assert_eq!(stats.bots, 1);
    assert_eq!(stats.unique_user_agents, 3);
    assert_eq!(stats.mobile_percentage, "50.00");
    assert_eq!(stats.bot_percentage, "25.00");
}

#[test]
fn test_top_user_agents() {
    let stats = analyze_user_agents(&sample_entries());

    assert_eq!(stats.top_user_agents.get(IPHONE_UA), Some(&2));
    let order: Vec<&str> = stats.top_user_agents.keys().map(String::as_str).collect();
    // ties keep first-seen order
    assert_eq!(order, vec![IPHONE_UA, GOOGLEBOT_UA, CHROME_UA]);
}

#[test]
fn test_browser_and_os_buckets() {
    let stats = analyze_user_agents(&sample_entries());

    assert_eq!(stats.browsers.get("safari 604"), Some(&2));
    assert_eq!(stats.browsers.get("chrome 96"), Some(&1));
    assert_eq!(stats.browsers.get("unknown unknown"), Some(&1));
    assert_eq!(stats.operating_systems.get("ios 15_2"), Some(&2));
    assert_eq!(stats.operating_systems.get("windows 10.0"), Some(&1));
}

#[test]
fn test_bot_categories_count_primary_only() {
    let entries = vec![
        LogEntry::from_user_agent("1.1.1.1", Some(GOOGLEBOT_UA)),
        LogEntry::from_user_agent("1.1.1.2", Some("GPTBot/1.0 (+https://openai.com/gptbot)")),
        LogEntry::from_user_agent("1.1.1.3", Some(GOOGLEBOT_UA)),
    ];
    let stats = analyze_user_agents(&entries);

    assert_eq!(stats.bots, 3);
    assert_eq!(stats.bot_categories.get(&BotCategory::SearchEngines), Some(&2));
    assert_eq!(stats.bot_categories.get(&BotCategory::AiLlm), Some(&1));
    // generic also matches both, but only the primary category is counted
    assert_eq!(stats.bot_categories.get(&BotCategory::Generic), None);
}

#[test]
fn test_entries_without_user_agent_only_count_toward_total() {
    let entries = vec![
        LogEntry::from_user_agent("192.168.1.100", None),
        LogEntry::from_user_agent("192.168.1.101", Some("Mozilla/5.0 (iPhone) Safari/604.1")),
        LogEntry::from_user_agent("192.168.1.102", Some("")),
    ];
    let stats = analyze_user_agents(&entries);

    assert_eq!(stats.total, 3);
    assert_eq!(stats.unique_user_agents, 1);
    assert_eq!(stats.mobile, 1);
    assert_eq!(stats.detailed_analysis.len(), 1);
    assert_eq!(stats.browsers.values().sum::<usize>(), 1);
    assert_eq!(stats.mobile_percentage, "33.33");
}

#[test]
fn test_empty_input_reports_zero_percentages() {
    let stats = analyze_user_agents(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.mobile_percentage, "0.00");
    assert_eq!(stats.bot_percentage, "0.00");
    assert!(stats.top_user_agents.is_empty());
}

#[test]
fn test_top_user_agents_limited_to_ten() {
    let entries: Vec<LogEntry> = (0..15)
        .map(|i| LogEntry::from_user_agent("10.0.0.1", Some(format!("agent-{}", i).as_str())))
        .collect();
    let stats = analyze_user_agents(&entries);

    assert_eq!(stats.unique_user_agents, 15);
    assert_eq!(stats.top_user_agents.len(), TOP_USER_AGENTS_LIMIT);
    assert_eq!(stats.top_user_agents.keys().next().map(String::as_str), Some("agent-0"));
}

#[test]
fn test_detailed_analysis_in_input_order() {
    let stats = analyze_user_agents(&sample_entries());
    let ips: Vec<&str> = stats.detailed_analysis.iter().map(|d| d.ip.as_str()).collect();
    assert_eq!(
        ips,
        vec!["192.168.1.100", "192.168.1.101", "192.168.1.102", "192.168.1.103"]
    );
    assert!(stats.detailed_analysis[1].analysis.is_bot);
}

#[test]
fn test_aggregation_is_idempotent() {
    let entries = sample_entries();
    let first = analyze_user_agents(&entries);
    let mut second = analyze_user_agents(&entries);
    for (a, b) in first
        .detailed_analysis
        .iter()
        .zip(second.detailed_analysis.iter_mut())
    {
        b.analysis.timestamp = a.analysis.timestamp;
    }
    assert_eq!(first, second);
}

#[test]
fn test_counts_bounded_by_total() {
    let stats = analyze_user_agents(&sample_entries());
    assert!(stats.mobile <= stats.total);
    assert!(stats.bots <= stats.total);
}

#[test]
fn test_ranked_is_stable() {
    let mut counts = IndexMap::new();
    counts.insert("b", 1);
    counts.insert("a", 3);
    counts.insert("c", 1);
    counts.insert("d", 3);
    assert_eq!(
        ranked(&counts, 3),
        vec![("a", 3), ("d", 3), ("b", 1)]
    );
}

#[test]
fn test_percentage_formatting() {
    assert_eq!(percentage(1, 3), "33.33");
    assert_eq!(percentage(2, 3), "66.67");
    assert_eq!(percentage(3, 3), "100.00");
    assert_eq!(percentage(0, 0), "0.00");
}

#[test]
fn test_percentage_rounds_halves_up() {
    assert_eq!(percentage(1, 800), "0.13");
    assert_eq!(percentage(5, 800), "0.63");
    assert_eq!(percentage(1, 32), "3.13");
    assert_eq!(percentage(1, 160), "0.63");
    assert_eq!(percentage(1, 8), "12.50");
    assert_eq!(percentage(0, 7), "0.00");
}

#[test]
fn test_accumulator_tracks_total() {
    let mut accumulator = StatsAccumulator::default();
    for entry in sample_entries() {
        accumulator.record(&entry);
    }
    assert_eq!(accumulator.total(), 4);
    assert_eq!(accumulator.finish().bots, 1);
}
