//! Static registry of User-Agent matching rules.
//!
//! The catalog holds four independent rule sets:
//! - a single device-class pattern recognising mobile tokens
//! - ordered, case-insensitive bot category patterns (plus their union)
//! - ordered browser patterns capturing a major version
//! - ordered operating system patterns capturing a version (Linux captures none)
//!
//! Rule order is part of the contract: browser and OS lookups return the first
//! rule that matches, and the first matching bot category is the primary one.
//! The catalog is immutable once built; the process-wide instance is built on
//! first use and shared by reference.

mod models;
mod patterns;

use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};
use std::sync::LazyLock;

pub use models::{BotCategory, Browser, OperatingSystem};

use patterns::{BOT_CATEGORY_PATTERNS, BROWSER_PATTERNS, MOBILE_PATTERN, OS_PATTERNS};

/// Compiles a static pattern, panicking with the offending pattern if it is invalid.
///
/// Catalog patterns are compile-time constants, so a failure here is a
/// programming error rather than a runtime condition.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

fn compile_case_insensitive_unsafe(pattern: &str, context: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| {
            panic!(
                "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
                pattern, context, e
            )
        })
}

/// A named rule that captures a version token.
#[derive(Debug, Clone)]
pub struct VersionRule<K> {
    pub name: K,
    pub pattern: Regex,
}

impl<K: Copy> VersionRule<K> {
    /// Returns the rule name and the first non-empty capture group if the rule matches.
    ///
    /// Alternated patterns (e.g. `OPR/(\d+)|Opera/(\d+)`) only fill one group,
    /// so the first group that participated in the match is the version.
    fn capture(&self, user_agent: &str) -> Option<(K, Option<String>)> {
        let caps = self.pattern.captures(user_agent)?;
        let version = caps
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .find(|v| !v.is_empty())
            .map(str::to_string);
        Some((self.name, version))
    }
}

/// Immutable, ordered pattern catalog.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    mobile: Regex,
    bot_categories: Vec<BotCategory>,
    bot_set: RegexSet,
    any_bot: Regex,
    browsers: Vec<VersionRule<Browser>>,
    operating_systems: Vec<VersionRule<OperatingSystem>>,
}

static CATALOG: LazyLock<PatternCatalog> = LazyLock::new(PatternCatalog::new);

impl PatternCatalog {
    /// Builds a catalog from the built-in rule tables.
    ///
    /// The combined "any bot" pattern is derived here, once, from the
    /// category sources.
    pub fn new() -> Self {
        let bot_categories: Vec<BotCategory> =
            BOT_CATEGORY_PATTERNS.iter().map(|(name, _)| *name).collect();

        let bot_set = RegexSetBuilder::new(BOT_CATEGORY_PATTERNS.iter().map(|(_, p)| *p))
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| {
                panic!(
                    "Failed to compile bot category set: {}. This is a programming error.",
                    e
                )
            });

        let combined = BOT_CATEGORY_PATTERNS
            .iter()
            .map(|(_, p)| *p)
            .collect::<Vec<_>>()
            .join("|");
        let any_bot = compile_case_insensitive_unsafe(&combined, "ANY_BOT");

        let browsers = BROWSER_PATTERNS
            .iter()
            .map(|(name, p)| VersionRule {
                name: *name,
                pattern: compile_regex_unsafe(p, &name.to_string()),
            })
            .collect();

        let operating_systems = OS_PATTERNS
            .iter()
            .map(|(name, p)| VersionRule {
                name: *name,
                pattern: compile_regex_unsafe(p, &name.to_string()),
            })
            .collect();

        Self {
            mobile: compile_regex_unsafe(MOBILE_PATTERN, "MOBILE"),
            bot_categories,
            bot_set,
            any_bot,
            browsers,
            operating_systems,
        }
    }

    /// Returns the process-wide catalog.
    pub fn global() -> &'static PatternCatalog {
        &CATALOG
    }

    /// True if the identifier contains a mobile device token.
    pub fn is_mobile(&self, user_agent: &str) -> bool {
        self.mobile.is_match(user_agent)
    }

    /// True if any bot category matches.
    pub fn is_bot(&self, user_agent: &str) -> bool {
        self.any_bot.is_match(user_agent)
    }

    /// Every bot category whose pattern matches, in declaration order.
    ///
    /// All categories are tested; this never stops at the first hit.
    pub fn bot_categories(&self, user_agent: &str) -> Vec<BotCategory> {
        self.bot_set
            .matches(user_agent)
            .into_iter()
            .map(|idx| self.bot_categories[idx])
            .collect()
    }

    /// First matching browser rule, with its captured version.
    pub fn first_browser(&self, user_agent: &str) -> Option<(Browser, Option<String>)> {
        self.browsers
            .iter()
            .find_map(|rule| rule.capture(user_agent))
    }

    /// First matching OS rule, with its captured version.
    pub fn first_os(&self, user_agent: &str) -> Option<(OperatingSystem, Option<String>)> {
        self.operating_systems
            .iter()
            .find_map(|rule| rule.capture(user_agent))
    }

    /// Bot categories in declaration order.
    pub fn bot_category_order(&self) -> &[BotCategory] {
        &self.bot_categories
    }

    /// Browser rules in precedence order.
    pub fn browser_rules(&self) -> &[VersionRule<Browser>] {
        &self.browsers
    }

    /// OS rules in precedence order.
    pub fn os_rules(&self) -> &[VersionRule<OperatingSystem>] {
        &self.operating_systems
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::new()
    }
}
