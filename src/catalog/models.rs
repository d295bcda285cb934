//! Rule identities for the pattern catalog.
//!
//! Each rule set in the catalog is keyed by one of these closed enums. The
//! string form (`Display`, `AsRef<str>`, serde) is the snake_case name used in
//! reports and JSON output.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterMacro};

/// Named bucket of automated (non-human) request sources.
///
/// Variant order matches the catalog declaration order, which decides the
/// primary category when an identifier matches more than one bucket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display, EnumIterMacro,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BotCategory {
    /// AI crawlers and LLM agents (GPTBot, ClaudeBot, CCBot, ...)
    AiLlm,
    /// Search engine crawlers (Googlebot, bingbot, ...)
    SearchEngines,
    /// SEO and marketing crawlers (AhrefsBot, SemrushBot, ...)
    SeoMarketing,
    /// Link-preview agents of social platforms
    SocialMedia,
    /// Internet-wide scanners run by security researchers
    SecurityResearch,
    /// Uptime and performance probes
    Monitoring,
    /// Archival crawlers
    Archive,
    /// Feed and RSS fetchers
    Feed,
    /// Shopping and price-comparison bots
    Ecommerce,
    /// Catch-all for generic bot tokens, headless browsers and HTTP client libraries
    Generic,
}

/// Browser families known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Browser {
    Chrome,
    Firefox,
    Safari,
    Edge,
    Opera,
    /// Legacy Internet Explorer (MSIE / Trident)
    Ie,
    /// No browser rule matched
    Unknown,
}

/// Operating system families known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OperatingSystem {
    Windows,
    Macos,
    Android,
    Ios,
    Linux,
    /// No OS rule matched
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_bot_category_names() {
        let names: Vec<String> = BotCategory::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "ai_llm",
                "search_engines",
                "seo_marketing",
                "social_media",
                "security_research",
                "monitoring",
                "archive",
                "feed",
                "ecommerce",
                "generic",
            ]
        );
    }

    #[test]
    fn test_browser_and_os_names() {
        assert_eq!(Browser::Ie.as_ref(), "ie");
        assert_eq!(Browser::Unknown.as_ref(), "unknown");
        assert_eq!(OperatingSystem::Macos.as_ref(), "macos");
        assert_eq!(OperatingSystem::Ios.as_ref(), "ios");
    }

    #[test]
    fn test_serialize_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&BotCategory::SearchEngines).unwrap(),
            "\"search_engines\""
        );
        assert_eq!(
            serde_json::to_string(&OperatingSystem::Macos).unwrap(),
            "\"macos\""
        );
    }
}
