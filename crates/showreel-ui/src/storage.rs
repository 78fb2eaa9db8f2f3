//! Browser adapters for the core cache seams.

use showreel_core::{CacheError, Clock, KeyValueStore, MemoryStore, Result, Theme};
use wasm_bindgen::JsValue;

/// Key under which the theme preference is stored.
pub const THEME_KEY: &str = "showreel.theme";

/// Key-value store backed by `window.localStorage`.
///
/// Falls back to an in-memory map when local storage is disabled (private
/// browsing, sandboxed iframes), so caching degrades to one page load.
#[derive(Debug)]
pub enum BrowserStore {
    /// `window.localStorage`.
    Local(web_sys::Storage),
    /// Page-lifetime map.
    Memory(MemoryStore),
}

impl BrowserStore {
    /// Open local storage, or an in-memory store if it is unavailable.
    pub fn open() -> Self {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Self::Local(storage),
            Some(Err(e)) => {
                leptos::logging::warn!("localStorage unavailable: {}", js_reason(&e));
                Self::in_memory()
            }
            _ => Self::in_memory(),
        }
    }

    /// A store that lives for this page load only.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    /// Whether values survive a reload.
    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::Local(storage) => storage.get_item(key).map_err(|e| {
                CacheError::ReadFailed {
                    key: key.to_string(),
                    reason: js_reason(&e),
                }
                .into()
            }),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            // Quota errors land here.
            Self::Local(storage) => storage.set_item(key, value).map_err(|e| {
                CacheError::WriteFailed {
                    key: key.to_string(),
                    reason: js_reason(&e),
                }
                .into()
            }),
            Self::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<()> {
        match self {
            Self::Local(storage) => storage.remove_item(key).map_err(|e| {
                CacheError::WriteFailed {
                    key: key.to_string(),
                    reason: js_reason(&e),
                }
                .into()
            }),
            Self::Memory(store) => store.remove(key),
        }
    }
}

/// Wall clock backed by `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        let now = js_sys::Date::now();
        if now.is_finite() && now > 0.0 {
            now as u64
        } else {
            0
        }
    }
}

/// Stored theme preference, if any.
pub fn load_theme(store: &impl KeyValueStore) -> Option<Theme> {
    match store.get(THEME_KEY) {
        Ok(value) => value.as_deref().and_then(Theme::parse),
        Err(e) => {
            leptos::logging::warn!("Failed to read theme preference: {}", e);
            None
        }
    }
}

/// Persist the theme preference. Failures are logged and otherwise ignored.
pub fn save_theme(store: &impl KeyValueStore, theme: Theme) {
    if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
        leptos::logging::warn!("Failed to save theme preference: {}", e);
    }
}

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fallback_round_trips_values() {
        let store = BrowserStore::in_memory();
        assert!(!store.is_persistent());
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_theme_preference_persists() {
        let store = BrowserStore::in_memory();
        assert_eq!(load_theme(&store), None);
        save_theme(&store, Theme::Light);
        assert_eq!(load_theme(&store), Some(Theme::Light));
        save_theme(&store, Theme::Light.toggled());
        assert_eq!(load_theme(&store), Some(Theme::Dark));
    }

    #[test]
    fn test_unknown_theme_value_is_ignored() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(load_theme(&store), None);
    }
}
