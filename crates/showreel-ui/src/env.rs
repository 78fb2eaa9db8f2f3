//! Runtime configuration injected by the hosting page.
//!
//! The page may define `window.ENV_CONFIG` before the WASM module loads:
//!
//! ```html
//! <script>window.ENV_CONFIG = { YOUTUBE_API_KEY: "...", CACHE_TTL_SECS: 3600 };</script>
//! ```
//!
//! Values missing there fall back to what was baked in at compile time.

use serde::Deserialize;
use showreel_core::{API_KEY_ENV_VAR, CacheConfig, SiteConfig};
use wasm_bindgen::JsValue;

/// Name of the global object holding runtime configuration.
pub const ENV_CONFIG_GLOBAL: &str = "ENV_CONFIG";

/// API key compiled into the bundle, if any.
pub const COMPILED_API_KEY: Option<&str> = option_env!("YOUTUBE_API_KEY");

/// Keys recognised in `window.ENV_CONFIG`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnvConfig {
    /// Video-metadata API key.
    #[serde(rename = "YOUTUBE_API_KEY", default)]
    pub youtube_api_key: Option<String>,
    /// Override for the cache TTL.
    #[serde(rename = "CACHE_TTL_SECS", default)]
    pub cache_ttl_secs: Option<u64>,
    /// Override for the API base URL.
    #[serde(rename = "YOUTUBE_API_BASE_URL", default)]
    pub api_base_url: Option<String>,
}

impl EnvConfig {
    /// Build the site configuration, preferring runtime values over `compiled_key`.
    #[must_use]
    pub fn into_site_config(self, compiled_key: Option<&str>) -> SiteConfig {
        let api_key = self
            .youtube_api_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| compiled_key.map(str::to_string));

        let mut cache = CacheConfig::default();
        if let Some(ttl) = self.cache_ttl_secs {
            cache = cache.with_ttl(ttl);
        }

        let mut config = SiteConfig::new().with_api_key(api_key).with_cache(cache);
        if let Some(url) = self.api_base_url.filter(|url| !url.trim().is_empty()) {
            config = config.with_api_base_url(url);
        }
        config
    }
}

/// Read `window.ENV_CONFIG`. Returns defaults when it is absent or malformed.
pub fn read_env_config() -> EnvConfig {
    let Some(window) = web_sys::window() else {
        return EnvConfig::default();
    };

    let value = js_sys::Reflect::get(&window, &JsValue::from_str(ENV_CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        leptos::logging::log!("{} is not defined, using compiled defaults", ENV_CONFIG_GLOBAL);
        return EnvConfig::default();
    }

    match serde_wasm_bindgen::from_value::<EnvConfig>(value) {
        Ok(env) => env,
        Err(e) => {
            leptos::logging::warn!("Ignoring malformed {}: {}", ENV_CONFIG_GLOBAL, e);
            EnvConfig::default()
        }
    }
}

/// Site configuration for this page load.
pub fn load_site_config() -> SiteConfig {
    let config = read_env_config().into_site_config(COMPILED_API_KEY);
    if config.api_key.is_none() {
        leptos::logging::warn!(
            "{} is not set; showing placeholder thumbnails and zero stats",
            API_KEY_ENV_VAR
        );
    }
    config
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use showreel_core::DEFAULT_CACHE_TTL_SECS;

    #[test]
    fn test_runtime_key_wins() {
        let env = EnvConfig {
            youtube_api_key: Some("runtime".to_string()),
            ..EnvConfig::default()
        };
        let config = env.into_site_config(Some("compiled"));
        assert_eq!(config.api_key.as_deref(), Some("runtime"));
    }

    #[test]
    fn test_compiled_key_fallback() {
        let config = EnvConfig::default().into_site_config(Some("compiled"));
        assert_eq!(config.api_key.as_deref(), Some("compiled"));
    }

    #[test]
    fn test_blank_runtime_key_falls_back() {
        let env = EnvConfig {
            youtube_api_key: Some("   ".to_string()),
            ..EnvConfig::default()
        };
        assert_eq!(
            env.into_site_config(Some("compiled")).api_key.as_deref(),
            Some("compiled")
        );
        let env = EnvConfig {
            youtube_api_key: Some(String::new()),
            ..EnvConfig::default()
        };
        assert!(env.into_site_config(None).api_key.is_none());
    }

    #[test]
    fn test_ttl_override() {
        let config = EnvConfig::default().into_site_config(None);
        assert_eq!(config.cache.ttl_secs, DEFAULT_CACHE_TTL_SECS);

        let env = EnvConfig {
            cache_ttl_secs: Some(60),
            ..EnvConfig::default()
        };
        assert_eq!(env.into_site_config(None).cache.ttl_secs, 60);
    }

    #[test]
    fn test_base_url_override() {
        let env = EnvConfig {
            api_base_url: Some("http://localhost:8080/v3".to_string()),
            ..EnvConfig::default()
        };
        assert_eq!(
            env.into_site_config(None).api_base_url,
            "http://localhost:8080/v3"
        );
    }
}
