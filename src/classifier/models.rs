//! Classification result types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{BotCategory, Browser, OperatingSystem};
use crate::config::UNKNOWN;

/// Browser family and major version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserInfo {
    pub name: Browser,
    pub version: Option<String>,
}

impl BrowserInfo {
    pub fn unknown() -> Self {
        Self {
            name: Browser::Unknown,
            version: None,
        }
    }

    /// Distribution bucket key: `"<name> <version-or-unknown>"`.
    pub fn bucket_key(&self) -> String {
        format!("{} {}", self.name, self.version.as_deref().unwrap_or(UNKNOWN))
    }
}

/// Operating system family and version.
///
/// Versions are kept exactly as written in the identifier (`10.0`, `15_2`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OsInfo {
    pub name: OperatingSystem,
    pub version: Option<String>,
}

impl OsInfo {
    pub fn unknown() -> Self {
        Self {
            name: OperatingSystem::Unknown,
            version: None,
        }
    }

    /// Distribution bucket key: `"<name> <version-or-unknown>"`.
    pub fn bucket_key(&self) -> String {
        format!("{} {}", self.name, self.version.as_deref().unwrap_or(UNKNOWN))
    }
}

/// Result of bot category detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotDetection {
    pub is_bot: bool,
    /// Every matching category, in catalog declaration order.
    pub categories: Vec<BotCategory>,
    /// First element of `categories`.
    pub primary_category: Option<BotCategory>,
}

/// Complete classification of one User-Agent string.
///
/// Everything except `timestamp` is a pure function of `user_agent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAgentAnalysis {
    pub user_agent: String,
    pub is_mobile: bool,
    pub is_bot: bool,
    pub bot_category: Option<BotCategory>,
    pub bot_categories: Vec<BotCategory>,
    pub browser: BrowserInfo,
    pub os: OsInfo,
    /// Time the analysis ran
    pub timestamp: DateTime<Utc>,
}
