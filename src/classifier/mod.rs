//! User-Agent classification.
//!
//! Applies the [`PatternCatalog`] rules to a raw identifier string and
//! produces a structured [`UserAgentAnalysis`]. Classification never fails:
//! an absent identifier is passed as the empty string and matches nothing.
//!
//! Free functions use the process-wide catalog; [`Classifier`] borrows any
//! catalog, which is what tests and embedders with their own catalog use.

mod models;


use chrono::Utc;

use crate::catalog::PatternCatalog;

pub use models::{BotDetection, BrowserInfo, OsInfo, UserAgentAnalysis};

/// Classifier bound to a pattern catalog.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    catalog: &'a PatternCatalog,
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new(PatternCatalog::global())
    }
}

impl<'a> Classifier<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        Self { catalog }
    }

    /// True if the identifier carries a mobile device token.
    pub fn is_mobile(&self, user_agent: &str) -> bool {
        self.catalog.is_mobile(user_agent)
    }

    /// True if any bot category matches.
    pub fn is_bot(&self, user_agent: &str) -> bool {
        self.catalog.is_bot(user_agent)
    }

    /// Detects the browser using first-match-wins over the catalog order.
    ///
    /// Returns `unknown` with no version when no browser rule matches.
    pub fn detect_browser(&self, user_agent: &str) -> BrowserInfo {
        match self.catalog.first_browser(user_agent) {
            Some((name, version)) => BrowserInfo { name, version },
            None => BrowserInfo::unknown(),
        }
    }

    /// Detects the operating system using first-match-wins over the catalog order.
    pub fn detect_os(&self, user_agent: &str) -> OsInfo {
        match self.catalog.first_os(user_agent) {
            Some((name, version)) => OsInfo { name, version },
            None => OsInfo::unknown(),
        }
    }

    /// Collects every matching bot category.
    ///
    /// Unlike browser and OS detection this scans all categories; callers rely
    /// on multi-category membership, so it must not short-circuit.
    pub fn detect_bot_category(&self, user_agent: &str) -> BotDetection {
        let categories = self.catalog.bot_categories(user_agent);
        BotDetection {
            is_bot: !categories.is_empty(),
            primary_category: categories.first().copied(),
            categories,
        }
    }

    /// Runs every detector and stamps the result with the current time.
    pub fn analyze(&self, user_agent: &str) -> UserAgentAnalysis {
        let bots = self.detect_bot_category(user_agent);
        UserAgentAnalysis {
            user_agent: user_agent.to_string(),
            is_mobile: self.is_mobile(user_agent),
            is_bot: bots.is_bot,
            bot_category: bots.primary_category,
            bot_categories: bots.categories,
            browser: self.detect_browser(user_agent),
            os: self.detect_os(user_agent),
            timestamp: Utc::now(),
        }
    }
}

/// True if the identifier carries a mobile device token.
pub fn is_mobile(user_agent: &str) -> bool {
    Classifier::default().is_mobile(user_agent)
}

/// True if any bot category matches.
pub fn is_bot(user_agent: &str) -> bool {
    Classifier::default().is_bot(user_agent)
}

/// See [`Classifier::detect_browser`].
pub fn detect_browser(user_agent: &str) -> BrowserInfo {
    Classifier::default().detect_browser(user_agent)
}

/// See [`Classifier::detect_os`].
pub fn detect_os(user_agent: &str) -> OsInfo {
    Classifier::default().detect_os(user_agent)
}

/// See [`Classifier::detect_bot_category`].
pub fn detect_bot_category(user_agent: &str) -> BotDetection {
    Classifier::default().detect_bot_category(user_agent)
}

/// Classifies a User-Agent string against the process-wide catalog.
///
/// # Example
///
/// ```
/// use ua_analyzer::classifier::analyze;
///
/// let analysis = analyze("GPTBot/1.0 (+https://openai.com/gptbot)");
/// assert!(analysis.is_bot);
/// assert_eq!(analysis.bot_category.map(|c| c.to_string()).as_deref(), Some("ai_llm"));
/// ```
pub fn analyze(user_agent: &str) -> UserAgentAnalysis {
    Classifier::default().analyze(user_agent)
}
