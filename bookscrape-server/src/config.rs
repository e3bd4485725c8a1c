//! Server configuration from environment variables

use anyhow::{Context, Result};
use bookscrape_core::fetch::DEFAULT_ENDPOINT;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 60;

/// Runtime settings, read once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// BOOKSCRAPE_BIND_ADDR
    pub bind_addr: SocketAddr,

    /// BOOKSCRAPE_BROWSERLESS_URL
    pub browserless_url: String,

    /// BOOKSCRAPE_FETCH_TIMEOUT_SECS
    pub fetch_timeout: Duration,

    /// BOOKSCRAPE_CORS_ORIGINS: `*` or a comma-separated list. `None`
    /// allows the local development origins.
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            browserless_url: DEFAULT_ENDPOINT.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("BOOKSCRAPE_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("Invalid BOOKSCRAPE_BIND_ADDR: {bind_addr}"))?;

        let fetch_timeout = match lookup("BOOKSCRAPE_FETCH_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse()
                .with_context(|| format!("Invalid BOOKSCRAPE_FETCH_TIMEOUT_SECS: {secs}"))?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            browserless_url: lookup("BOOKSCRAPE_BROWSERLESS_URL")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            fetch_timeout: Duration::from_secs(fetch_timeout),
            cors_origins: lookup("BOOKSCRAPE_CORS_ORIGINS"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.browserless_url, "https://chrome.browserless.io/content");
        assert_eq!(config.fetch_timeout, Duration::from_secs(60));
        assert!(config.cors_origins.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BOOKSCRAPE_BIND_ADDR", "0.0.0.0:8080"),
            ("BOOKSCRAPE_FETCH_TIMEOUT_SECS", "5"),
            ("BOOKSCRAPE_CORS_ORIGINS", "*"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
        assert_eq!(config.cors_origins.as_deref(), Some("*"));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = ServerConfig::from_lookup(lookup(&[("BOOKSCRAPE_FETCH_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("BOOKSCRAPE_FETCH_TIMEOUT_SECS"));
    }
}
