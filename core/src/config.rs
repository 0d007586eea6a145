//! Client configuration.
//!
//! Hosts either build a `ClientConfig` in code or call
//! `ClientConfig::from_env()` once at startup and pass the result to
//! `ForumApi::new`.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8090";

/// Where the API lives and how long a single call may take.
///
/// `timeout: None` leaves the transport's default in place (no overall
/// deadline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read `FORUM_API_URL` and `FORUM_API_TIMEOUT_SECS`, falling back to the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("FORUM_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = lookup("FORUM_API_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        Self { base_url, timeout }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8090");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = ClientConfig::from_lookup(|key| match key {
            "FORUM_API_URL" => Some("http://api.example:9000".to_string()),
            "FORUM_API_TIMEOUT_SECS" => Some("15".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url, "http://api.example:9000");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn from_env_reads_process_environment() {
        // the only test in this crate that touches these variables
        std::env::set_var("FORUM_API_URL", "http://forum.internal:8080");
        std::env::set_var("FORUM_API_TIMEOUT_SECS", "3");
        let config = ClientConfig::from_env();
        std::env::remove_var("FORUM_API_URL");
        std::env::remove_var("FORUM_API_TIMEOUT_SECS");

        assert_eq!(config.base_url, "http://forum.internal:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn bad_timeout_is_ignored() {
        let config = ClientConfig::from_lookup(|key| match key {
            "FORUM_API_TIMEOUT_SECS" => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
    }
}
