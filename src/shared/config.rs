//! Environment-driven configuration
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file through `dotenvy`. Every key has a default so the storefront runs with
//! no configuration at all.

use std::env;
use std::time::Duration;

use crate::modules::catalog::domain::value_objects::SearchField;
use crate::shared::errors::{AppError, AppResult};

pub const FEED_URL_VAR: &str = "STOREFRONT_FEED_URL";
pub const COUNTRY_VAR: &str = "STOREFRONT_COUNTRY";
pub const FEED_LIMIT_VAR: &str = "STOREFRONT_FEED_LIMIT";
pub const TIMEOUT_VAR: &str = "STOREFRONT_TIMEOUT_SECS";
pub const SEARCH_FIELDS_VAR: &str = "STOREFRONT_SEARCH_FIELDS";
pub const USER_AGENT_VAR: &str = "STOREFRONT_USER_AGENT";

/// Upstream caps the top-albums feed at 200 entries.
pub const MAX_FEED_LIMIT: u32 = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Full feed URL; when set it replaces the country/limit template.
    pub feed_url: Option<String>,
    pub country: String,
    /// Requested entry count. The API can and will return fewer.
    pub feed_limit: u32,
    pub request_timeout: Duration,
    pub search_fields: Vec<SearchField>,
    pub user_agent: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            feed_url: None,
            country: "us".to_string(),
            feed_limit: 100,
            request_timeout: Duration::from_secs(10),
            search_fields: SearchField::ALL.to_vec(),
            user_agent: format!("storefront/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl StorefrontConfig {
    /// Load `.env` (if present) and read configuration from the environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = non_empty(lookup(FEED_URL_VAR)) {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AppError::ConfigError(format!(
                    "{} must be an http(s) URL, got '{}'",
                    FEED_URL_VAR, url
                )));
            }
            config.feed_url = Some(url);
        }

        if let Some(country) = non_empty(lookup(COUNTRY_VAR)) {
            config.country = country.to_lowercase();
        }

        if let Some(limit) = non_empty(lookup(FEED_LIMIT_VAR)) {
            config.feed_limit = parse_limit(&limit)?;
        }

        if let Some(timeout) = non_empty(lookup(TIMEOUT_VAR)) {
            let secs: u64 = timeout.parse().map_err(|_| {
                AppError::ConfigError(format!("{} must be whole seconds, got '{}'", TIMEOUT_VAR, timeout))
            })?;
            if secs == 0 {
                return Err(AppError::ConfigError(format!("{} must be positive", TIMEOUT_VAR)));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(fields) = non_empty(lookup(SEARCH_FIELDS_VAR)) {
            config.search_fields = SearchField::parse_list(&fields)?;
        }

        if let Some(agent) = non_empty(lookup(USER_AGENT_VAR)) {
            config.user_agent = agent;
        }

        Ok(config)
    }

    /// Set the requested feed size, validating the upstream bound
    pub fn with_feed_limit(mut self, limit: u32) -> AppResult<Self> {
        check_limit(limit)?;
        self.feed_limit = limit;
        Ok(self)
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = country.trim().to_lowercase();
        self
    }

    /// The URL the top-albums feed is fetched from
    pub fn resolved_feed_url(&self) -> String {
        match &self.feed_url {
            Some(url) => url.clone(),
            None => format!(
                "https://itunes.apple.com/{}/rss/topalbums/limit={}/json",
                urlencoding::encode(&self.country),
                self.feed_limit
            ),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_limit(raw: &str) -> AppResult<u32> {
    let limit: u32 = raw.parse().map_err(|_| {
        AppError::ConfigError(format!("{} must be a number, got '{}'", FEED_LIMIT_VAR, raw))
    })?;
    check_limit(limit)?;
    Ok(limit)
}

fn check_limit(limit: u32) -> AppResult<()> {
    if limit == 0 || limit > MAX_FEED_LIMIT {
        return Err(AppError::ConfigError(format!(
            "feed limit must be between 1 and {}, got {}",
            MAX_FEED_LIMIT, limit
        )));
    }
    Ok(())
}
