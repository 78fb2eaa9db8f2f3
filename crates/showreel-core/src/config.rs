//! Site-wide configuration.
//!
//! [`SiteConfig`] gathers the API credential, the fetch and cache settings and
//! the presentation tuning knobs for the carousel and the stats count-up.
//! Every field has a serde default so partial JSON documents load cleanly.

use serde::{Deserialize, Serialize};

use crate::cache::CacheConfig;
use crate::carousel::CarouselConfig;
use crate::error::{Error, Result};
use crate::stats::CountUpConfig;
use crate::youtube::{DEFAULT_API_BASE_URL, MAX_BATCH_SIZE};

/// Default request timeout for native API calls, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Environment variable holding the API key.
pub const API_KEY_ENV_VAR: &str = "YOUTUBE_API_KEY";

/// Color theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark palette.
    #[default]
    Dark,
    /// Light palette.
    Light,
    /// Follow the operating system preference.
    System,
}

impl Theme {
    /// Value stored in the key-value store and used as the `data-theme` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::System => "system",
        }
    }

    /// Parse a stored preference. Unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// The theme the toggle switches to.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light | Self::System => Self::Dark,
        }
    }
}

/// Top-level site configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// API key for the video-metadata API. `None` disables enrichment.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the video-metadata API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Maximum IDs per network call.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Response cache settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Carousel motion settings.
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Stats count-up settings.
    #[serde(default)]
    pub stats: CountUpConfig,

    /// Request timeout for native API calls.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

const fn default_batch_size() -> usize {
    MAX_BATCH_SIZE
}

const fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: default_api_base_url(),
            batch_size: MAX_BATCH_SIZE,
            cache: CacheConfig::default(),
            carousel: CarouselConfig::default(),
            stats: CountUpConfig::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl SiteConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from the process environment.
    ///
    /// Only the API key is read; an empty value counts as missing.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV_VAR).ok();
        Self::default().with_api_key(api_key)
    }

    /// Set the API key. Blank keys are treated as absent.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        self
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the batch size, clamped to `1..=50`.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.clamp(1, MAX_BATCH_SIZE);
        self
    }

    /// Replace the cache configuration.
    #[must_use]
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// The batch size actually used, whatever was deserialized.
    #[must_use]
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.clamp(1, MAX_BATCH_SIZE)
    }

    /// The API key, or the missing-credential error.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(Error::missing_api_key)
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Serialize the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validated(mut self) -> Self {
        self.batch_size = self.effective_batch_size();
        self.api_key = self
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        self
    }
}
