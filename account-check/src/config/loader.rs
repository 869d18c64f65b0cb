use crate::config::types::CheckerConfig;
use crate::error::{AccountCheckError, Result};
use std::path::Path;
use tracing::debug;

/// Environment variable holding the provider access key
pub const TOKEN_ENV: &str = "HIKER_API_TOKEN";
/// Environment variable overriding the provider base URL
pub const PROVIDER_URL_ENV: &str = "HIKER_API_URL";
/// Environment variable overriding the HTTP listen port
pub const PORT_ENV: &str = "PORT";

impl CheckerConfig {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist, then apply environment overrides and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load_file_or_default(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file without touching the environment
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let content = std::fs::read_to_string(path_ref)?;

        toml::from_str(&content).map_err(|e| {
            AccountCheckError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })
    }

    fn load_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        if path_ref.exists() {
            debug!("loading configuration from {}", path_ref.display());
            Self::load_from_file(path_ref)
        } else {
            debug!(
                "configuration file {} not found, using defaults",
                path_ref.display()
            );
            Ok(Self::default())
        }
    }

    /// Apply overrides from a key lookup (normally the process environment)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(TOKEN_ENV) {
            self.provider.token = Some(token);
        }

        if let Some(url) = lookup(PROVIDER_URL_ENV) {
            self.provider.base_url = url;
        }

        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port.trim().parse().map_err(|_| {
                AccountCheckError::invalid_config(format!(
                    "{} must be a port number, got '{}'",
                    PORT_ENV, port
                ))
            })?;
        }

        Ok(())
    }

    /// Check internal consistency of the configuration
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.provider.base_url).map_err(|e| {
            AccountCheckError::invalid_config(format!(
                "provider.base_url '{}' is not a valid URL: {}",
                self.provider.base_url, e
            ))
        })?;

        if self.provider.timeout_seconds == 0 {
            return Err(AccountCheckError::invalid_config(
                "provider.timeout_seconds must be greater than zero",
            ));
        }

        if self.batch.min_delay_ms > self.batch.max_delay_ms {
            return Err(AccountCheckError::invalid_config(format!(
                "batch.min_delay_ms ({}) is greater than batch.max_delay_ms ({})",
                self.batch.min_delay_ms, self.batch.max_delay_ms
            )));
        }

        if self.server.min_delay_ms > self.server.max_delay_ms {
            return Err(AccountCheckError::invalid_config(format!(
                "server.min_delay_ms ({}) is greater than server.max_delay_ms ({})",
                self.server.min_delay_ms, self.server.max_delay_ms
            )));
        }

        Ok(())
    }
}

/// Load a newline-delimited username list.
///
/// Lines are trimmed, blank lines skipped and a leading `@` removed.
pub fn load_usernames<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        return Err(AccountCheckError::UsernamesFileNotFound {
            path: path_ref.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path_ref)?;
    Ok(parse_usernames(&content))
}

/// Parse usernames from newline-delimited text
pub fn parse_usernames(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(normalize_username)
        .map(str::to_string)
        .collect()
}

/// Strip surrounding whitespace and one leading `@`; `None` when nothing is left
pub fn normalize_username(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let name = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();
    (!name.is_empty()).then_some(name)
}
