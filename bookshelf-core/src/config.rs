//! Client configuration
//!
//! A [`ClientConfig`] is fixed for the lifetime of a request hook. It can be
//! built explicitly or read from the environment:
//!
//! - `BOOKSHELF_BASE_URL` - origin all request paths are joined to
//!   (default `http://localhost:3000`)
//! - `BOOKSHELF_NOTICE_TTL_SECS` - how long a notification stays visible
//!   (default `5`)

use crate::error::ConfigError;
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(5);

pub const BASE_URL_ENV: &str = "BOOKSHELF_BASE_URL";
pub const NOTICE_TTL_ENV: &str = "BOOKSHELF_NOTICE_TTL_SECS";

/// Configuration shared by every request a hook issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    notice_ttl: Duration,
}

impl ClientConfig {
    /// Create a configuration for the given base address
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            notice_ttl: DEFAULT_NOTICE_TTL,
        })
    }

    /// Read the configuration from `BOOKSHELF_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(&base_url)?;

        if let Some(raw) = lookup(NOTICE_TTL_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNoticeTtl(raw.clone()))?;
            config.notice_ttl = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Override how long notifications stay visible
    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn notice_ttl(&self) -> Duration {
        self.notice_ttl
    }

    /// Join a relative path to the base address with a single `/`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}
