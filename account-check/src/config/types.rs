use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default HikerAPI endpoint
pub const DEFAULT_PROVIDER_URL: &str = "https://api.hikerapi.com";
/// Default base used to build canonical profile links
pub const DEFAULT_PROFILE_URL_BASE: &str = "https://instagram.com";
/// Default username list for the file-driven mode
pub const DEFAULT_USERNAMES_FILE: &str = "usernames.txt";
/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Main configuration structure for account checks
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Data provider settings
    pub provider: ProviderConfig,
    /// File-driven batch settings
    pub batch: BatchConfig,
    /// HTTP API settings
    pub server: ServerConfig,
    /// Base URL for canonical profile links, without trailing slash
    pub profile_url_base: String,
}

/// Data provider (HikerAPI) connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the provider API
    pub base_url: String,
    /// Access key sent as `x-access-key`
    pub token: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

/// Settings for the file-driven batch mode
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Newline-delimited username list
    pub usernames_file: PathBuf,
    /// Directory receiving the CSV reports
    pub output_dir: PathBuf,
    /// Lower bound of the pause between lookups
    pub min_delay_ms: u64,
    /// Upper bound of the pause between lookups
    pub max_delay_ms: u64,
}

/// Settings for the HTTP API
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Lower bound of the pause between lookups in `/api/check-multiple`
    pub min_delay_ms: u64,
    /// Upper bound of the pause between lookups in `/api/check-multiple`
    pub max_delay_ms: u64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            batch: BatchConfig::default(),
            server: ServerConfig::default(),
            profile_url_base: DEFAULT_PROFILE_URL_BASE.to_string(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROVIDER_URL.to_string(),
            token: None,
            timeout_seconds: 30,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            usernames_file: PathBuf::from(DEFAULT_USERNAMES_FILE),
            output_dir: PathBuf::from("."),
            min_delay_ms: 1_000,
            max_delay_ms: 2_000,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            min_delay_ms: 500,
            max_delay_ms: 1_000,
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// The configured token, ignoring blank values
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

impl BatchConfig {
    pub fn delay_bounds(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.min_delay_ms),
            Duration::from_millis(self.max_delay_ms),
        )
    }
}

impl ServerConfig {
    pub fn delay_bounds(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.min_delay_ms),
            Duration::from_millis(self.max_delay_ms),
        )
    }

    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Join a profile base URL and a username
pub fn profile_url(base: &str, username: &str) -> String {
    let base = if base.trim().is_empty() {
        DEFAULT_PROFILE_URL_BASE
    } else {
        base.trim_end_matches('/')
    };
    format!("{}/{}", base, username)
}
