use std::{env, time::Duration};

/// Default GitHub REST API base URL.
pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";

/// Content repository connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    /// Owner of the content repository.
    pub owner: String,
    /// Name of the content repository.
    pub repository: String,
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// Access token. `None` selects the in-memory repositories.
    pub token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl GitHubConfig {
    /// Returns true when remote repositories should be used.
    pub fn is_remote(&self) -> bool {
        self.token.is_some()
    }

    /// Get the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Content repository settings.
    pub github: GitHubConfig,
    /// Cache TTL in seconds (default: 900)
    pub cache_ttl_seconds: u64,
    /// Interval between expired-entry sweeps in seconds (default: 300)
    pub cache_sweep_interval_seconds: u64,
    /// Public base URL of the site, used for canonical links.
    pub site_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GITHUB_OWNER` - Content repository owner (default: "")
    /// - `GITHUB_REPOSITORY` - Content repository name (default: "")
    /// - `GITHUB_BASE_URL` - API base URL (default: "https://api.github.com")
    /// - `GITHUB_TOKEN` - Access token; empty or unset means in-memory data
    /// - `GITHUB_TIMEOUT_SECONDS` - Request timeout (default: 30)
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 900)
    /// - `CACHE_SWEEP_INTERVAL_SECONDS` - Sweep interval (default: 300)
    /// - `SITE_URL` - Public base URL (default: "http://localhost:8080")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };
        let text = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            github: GitHubConfig {
                owner: text("GITHUB_OWNER", ""),
                repository: text("GITHUB_REPOSITORY", ""),
                base_url: text("GITHUB_BASE_URL", DEFAULT_GITHUB_BASE_URL)
                    .trim_end_matches('/')
                    .to_string(),
                token: lookup("GITHUB_TOKEN")
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty()),
                timeout_seconds: number("GITHUB_TIMEOUT_SECONDS", 30),
            },
            cache_ttl_seconds: number("CACHE_TTL_SECONDS", 900),
            cache_sweep_interval_seconds: number("CACHE_SWEEP_INTERVAL_SECONDS", 300),
            site_url: text("SITE_URL", "http://localhost:8080")
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the sweep interval as a Duration, never shorter than one second.
    pub fn cache_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.cache_sweep_interval_seconds.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.github.owner, "");
        assert_eq!(config.github.repository, "");
        assert_eq!(config.github.base_url, DEFAULT_GITHUB_BASE_URL);
        assert_eq!(config.github.token, None);
        assert_eq!(config.github.timeout(), Duration::from_secs(30));
        assert_eq!(config.cache_ttl(), Duration::from_secs(900));
        assert_eq!(config.cache_sweep_interval(), Duration::from_secs(300));
        assert_eq!(config.site_url, "http://localhost:8080");
        assert!(!config.github.is_remote());
    }

    #[test]
    fn test_token_selects_remote() {
        let config = config_from(&[
            ("GITHUB_OWNER", "benidevo"),
            ("GITHUB_REPOSITORY", "portfolio-data"),
            ("GITHUB_TOKEN", "ghp_secret"),
        ]);

        assert!(config.github.is_remote());
        assert_eq!(config.github.token.as_deref(), Some("ghp_secret"));
        assert_eq!(config.github.owner, "benidevo");
        assert_eq!(config.github.repository, "portfolio-data");
    }

    #[test]
    fn test_blank_token_selects_in_memory() {
        let config = config_from(&[("GITHUB_TOKEN", "   ")]);
        assert!(!config.github.is_remote());
    }

    #[test]
    fn test_numeric_overrides_and_fallbacks() {
        let config = config_from(&[
            ("CACHE_TTL_SECONDS", "60"),
            ("CACHE_SWEEP_INTERVAL_SECONDS", "0"),
            ("GITHUB_TIMEOUT_SECONDS", "not-a-number"),
        ]);

        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.cache_sweep_interval(), Duration::from_secs(1));
        assert_eq!(config.github.timeout_seconds, 30);
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = config_from(&[
            ("GITHUB_BASE_URL", "http://127.0.0.1:9000/"),
            ("SITE_URL", "https://example.com/"),
        ]);

        assert_eq!(config.github.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.site_url, "https://example.com");
    }
}
