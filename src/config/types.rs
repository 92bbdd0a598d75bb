// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_SEARCH_PATH: &str = "/api/search/guards";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_MAX_VISIBLE: usize = 8;
pub const DEFAULT_NOTIFICATION_MS: u64 = 4_000;

/// Search API connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_search_path")]
    pub search_path: String,
    /// Bearer token for authenticated requests
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            search_path: default_search_path(),
            token: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Type-ahead behaviour
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// 0 sends a request on every keystroke
    #[serde(default)]
    pub debounce_ms: u64,
    /// Treat whitespace-only input like an empty query
    #[serde(default)]
    pub ignore_blank_queries: bool,
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: 0,
            ignore_blank_queries: false,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_notification_ms")]
    pub duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            duration_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_search_path() -> String {
    DEFAULT_SEARCH_PATH.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

fn default_notification_ms() -> u64 {
    DEFAULT_NOTIFICATION_MS
}
