//! Runtime configuration for the word API

use anyhow::{Context, Result};
use reqwest::Url;
use std::time::Duration;

/// Public word API used when no other base URL is configured
pub const DEFAULT_API_URL: &str = "https://www.wordgamedb.com/api/v1";

/// Environment variable that overrides the API base URL
pub const API_URL_ENV: &str = "HANGMAN_API_URL";

/// Where and how to reach the word API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
    timeout: Option<Duration>,
}

impl ApiConfig {
    /// Build a configuration from a base URL
    ///
    /// A trailing slash is added when missing so endpoint paths are joined
    /// under the base rather than replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let url = Url::parse(&normalized)
            .with_context(|| format!("invalid API base URL '{base_url}'"))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("API base URL must use http or https, got '{}'", url.scheme());
        }

        Ok(Self {
            base_url: url,
            timeout: None,
        })
    }

    /// Apply a per-request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Absolute URL of an endpoint below the base
    ///
    /// # Errors
    ///
    /// Returns an error if `path` cannot be joined onto the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("cannot join '{path}' onto {}", self.base_url))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(&format!("{DEFAULT_API_URL}/")).expect("default URL is valid"),
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_api() {
        let config = ApiConfig::default();
        assert_eq!(
            config.endpoint("categories").unwrap().as_str(),
            "https://www.wordgamedb.com/api/v1/categories"
        );
        assert!(config.timeout().is_none());
    }

    #[test]
    fn base_without_trailing_slash_keeps_last_segment() {
        let config = ApiConfig::new("http://localhost:8080/api/v1").unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:8080/api/v1/");
        assert_eq!(
            config.endpoint("words").unwrap().as_str(),
            "http://localhost:8080/api/v1/words"
        );
    }

    #[test]
    fn rejects_bad_urls() {
        assert!(ApiConfig::new("not a url").is_err());
        assert!(ApiConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn timeout_is_applied() {
        let config = ApiConfig::default().with_timeout(Some(Duration::from_secs(3)));
        assert_eq!(config.timeout(), Some(Duration::from_secs(3)));
    }
}
