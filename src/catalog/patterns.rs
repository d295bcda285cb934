//! Pattern sources for the catalog.
//!
//! Device-class, browser and OS patterns are case-sensitive and match the
//! literal tokens vendors emit. Bot category patterns are compiled
//! case-insensitively by the catalog.

use super::models::{BotCategory, Browser, OperatingSystem};

// Device class
pub(crate) const MOBILE_PATTERN: &str =
    r"iPhone|iPad|iPod|Android|Windows Phone|BlackBerry|Opera Mini|IEMobile";

// Bot categories
const AI_LLM_PATTERN: &str = r"GPTBot|ChatGPT|Claude-Web|ClaudeBot|Google-Extended|CCBot|anthropic-ai|OpenAI|Perplexity|AI2Bot|Meta-ExternalAgent|Bytespider|Claude|Bard";
const SEARCH_ENGINES_PATTERN: &str = r"Googlebot|bingbot|Baiduspider|YandexBot|DuckDuckBot|Yahoo! Slurp|Slurp|Sogou|Exabot|facebookexternalhit";
const SEO_MARKETING_PATTERN: &str = r"AhrefsBot|SemrushBot|MJ12bot|DotBot|BLEXBot|SiteAuditBot|LinkpadBot|BrandVerity|DataForSeoBot";
const SOCIAL_MEDIA_PATTERN: &str = r"facebookexternalhit|Twitterbot|LinkedInBot|Pinterest|WhatsApp|Slack|Discord|Telegram|SkypeUriPreview|Applebot|TelegramBot";
const SECURITY_RESEARCH_PATTERN: &str =
    r"Shodan|Censys|ZoomBot|InternetMeasurement|ResearchScan|SecurityTracker|nuclei";
const MONITORING_PATTERN: &str =
    r"UptimeRobot|Pingdom|StatusCake|Site24x7|GTmetrix|WebPageTest|Uptimebot|Monitor|CheckBot";
const ARCHIVE_PATTERN: &str =
    r"archive\.org|Wayback|Internet Archive|ArchiveBot|ia_archiver|Wayback Machine";
const FEED_PATTERN: &str =
    r"Feedfetcher-Google|FeedBurner|Feedly|RSS|FeedBot|PubSubHubbub|Superfeedr";
const ECOMMERCE_PATTERN: &str =
    r"ShopBot|PriceBot|Shopping|Amazon|Shopify|WooCommerce|PriceSpider|Priceonomics";
const GENERIC_PATTERN: &str = r"bot|crawler|spider|scraper|PhantomJS|HeadlessChrome|Selenium|curl|wget|HTTPie|Postman|python-requests|Go-http-client";

/// Bot category rules in declaration order.
pub(crate) const BOT_CATEGORY_PATTERNS: &[(BotCategory, &str)] = &[
    (BotCategory::AiLlm, AI_LLM_PATTERN),
    (BotCategory::SearchEngines, SEARCH_ENGINES_PATTERN),
    (BotCategory::SeoMarketing, SEO_MARKETING_PATTERN),
    (BotCategory::SocialMedia, SOCIAL_MEDIA_PATTERN),
    (BotCategory::SecurityResearch, SECURITY_RESEARCH_PATTERN),
    (BotCategory::Monitoring, MONITORING_PATTERN),
    (BotCategory::Archive, ARCHIVE_PATTERN),
    (BotCategory::Feed, FEED_PATTERN),
    (BotCategory::Ecommerce, ECOMMERCE_PATTERN),
    (BotCategory::Generic, GENERIC_PATTERN),
];

/// Browser rules in precedence order.
///
/// Chrome, Edge and Opera UAs embed a `Safari/` token, so Safari is checked
/// after them. Chromium-based Edge and Opera also carry `Chrome/` and are
/// bucketed as Chrome; only UAs without that token reach their own rules.
pub(crate) const BROWSER_PATTERNS: &[(Browser, &str)] = &[
    (Browser::Chrome, r"Chrome/(\d+)"),
    (Browser::Firefox, r"Firefox/(\d+)"),
    (Browser::Edge, r"Edg/(\d+)"),
    (Browser::Opera, r"OPR/(\d+)|Opera/(\d+)"),
    (Browser::Safari, r"Safari/(\d+)"),
    (Browser::Ie, r"MSIE (\d+)|Trident.*rv:(\d+)"),
];

/// OS rules in precedence order.
///
/// iOS UAs carry a `like Mac OS X` token and Android UAs carry `Linux`, so
/// both precede the more general rule they overlap with.
pub(crate) const OS_PATTERNS: &[(OperatingSystem, &str)] = &[
    (OperatingSystem::Windows, r"Windows NT (\d+\.\d+)"),
    (OperatingSystem::Ios, r"OS (\d+[._]\d+) like Mac OS X"),
    (OperatingSystem::Macos, r"Mac OS X (\d+[._]\d+)"),
    (OperatingSystem::Android, r"Android (\d+\.?\d*)"),
    (OperatingSystem::Linux, r"Linux"),
];
