//! Time-boxed caching of API responses.
//!
//! This module provides:
//! - [`KeyValueStore`], the storage seam, with an in-memory and a file-backed
//!   implementation (the browser crate adds one over `localStorage`)
//! - [`Clock`], the time seam
//! - [`ResponseCache`], which wraps payloads in a timestamped [`CacheEntry`]
//!   and only hands them back while they are younger than the TTL
//!
//! # Example
//!
//! ```rust
//! use showreel_core::cache::{CacheConfig, MemoryStore, ResponseCache, SystemClock};
//!
//! let cache = ResponseCache::new(MemoryStore::new(), SystemClock, &CacheConfig::default());
//! cache.put("showreel.example", &vec![1_u64, 2, 3]).unwrap();
//!
//! let hit: Option<Vec<u64>> = cache.get_fresh("showreel.example");
//! assert_eq!(hit, Some(vec![1, 2, 3]));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// Default cache TTL in seconds (1 hour).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 60;

/// Default prefix for cache keys.
pub const DEFAULT_KEY_PREFIX: &str = "showreel";

/// Cache key suffix for raw API results.
pub const VIDEO_DETAILS_KEY: &str = "video_details";

/// Cache key suffix for aggregate totals.
pub const VIDEO_STATS_KEY: &str = "video_stats";

/// Cache configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// Whether caching is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Time-to-live for cache entries in seconds.
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,

    /// Prefix joined to every key with a dot.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

const fn default_true() -> bool {
    true
}

const fn default_ttl() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
            key_prefix: default_key_prefix(),
        }
    }
}

impl CacheConfig {
    /// Create a new cache configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cache TTL.
    #[must_use]
    pub const fn with_ttl(mut self, ttl_secs: u64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    /// Set the key prefix.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Disable caching entirely.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Full key for a cache slot, e.g. `showreel.video_details`.
    #[must_use]
    pub fn key(&self, name: &str) -> String {
        if self.key_prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.key_prefix)
        }
    }

    /// Key under which raw API results are stored.
    #[must_use]
    pub fn details_key(&self) -> String {
        self.key(VIDEO_DETAILS_KEY)
    }

    /// Key under which aggregate totals are stored.
    #[must_use]
    pub fn stats_key(&self) -> String {
        self.key(VIDEO_STATS_KEY)
    }
}

/// String key-value storage.
///
/// Methods take `&self`; implementations use interior mutability where the
/// backend needs it.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Source of the current time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}

/// Wall clock backed by [`std::time::SystemTime`].
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// In-memory store, used in tests and when persistent storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::{FileStore, default_cache_directory};

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use tracing::{debug, info};

    use super::KeyValueStore;
    use crate::error::{CacheError, Error, Result};

    const ENTRY_EXTENSION: &str = "json";

    /// File-backed store: one JSON file per key inside a cache directory.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        /// Open a store rooted at `dir`, creating the directory if needed.
        pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
            let dir = dir.into();
            if !dir.exists() {
                fs::create_dir_all(&dir).map_err(|e| {
                    Error::Cache(CacheError::DirectoryCreationFailed {
                        path: dir.clone(),
                        reason: e.to_string(),
                    })
                })?;
                info!("Created cache directory {}", dir.display());
            }
            Ok(Self { dir })
        }

        /// The directory holding the entries.
        #[must_use]
        pub fn dir(&self) -> &Path {
            &self.dir
        }

        /// Delete every entry file. Returns how many were removed.
        pub fn clear(&self) -> Result<usize> {
            let read_dir = fs::read_dir(&self.dir).map_err(|e| {
                Error::Cache(CacheError::StorageUnavailable {
                    reason: format!("{}: {e}", self.dir.display()),
                })
            })?;

            let mut removed = 0;
            for entry in read_dir.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == ENTRY_EXTENSION) {
                    fs::remove_file(&path)?;
                    removed += 1;
                }
            }
            debug!("Cleared {} cache entries from {}", removed, self.dir.display());
            Ok(removed)
        }

        fn path_for(&self, key: &str) -> PathBuf {
            let name: String = key
                .chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                        c
                    } else {
                        '_'
                    }
                })
                .collect();
            self.dir.join(format!("{name}.{ENTRY_EXTENSION}"))
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            match fs::read_to_string(self.path_for(key)) {
                Ok(content) => Ok(Some(content)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(Error::Cache(CacheError::ReadFailed {
                    key: key.to_string(),
                    reason: e.to_string(),
                })),
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            fs::write(self.path_for(key), value).map_err(|e| {
                Error::Cache(CacheError::WriteFailed {
                    key: key.to_string(),
                    reason: e.to_string(),
                })
            })
        }

        fn remove(&self, key: &str) -> Result<()> {
            match fs::remove_file(self.path_for(key)) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(Error::Cache(CacheError::WriteFailed {
                    key: key.to_string(),
                    reason: e.to_string(),
                })),
            }
        }
    }

    /// Get the default cache directory path.
    #[must_use]
    pub fn default_cache_directory() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("showreel")
            .join("cache")
    }
}

/// A payload tagged with its write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// Cached value.
    pub payload: T,
    /// Write time in Unix epoch milliseconds.
    pub timestamp: u64,
}

impl<T> CacheEntry<T> {
    /// Whether the entry is still inside its TTL at `now_ms`.
    #[must_use]
    pub const fn is_fresh(&self, now_ms: u64, ttl_ms: u64) -> bool {
        now_ms.saturating_sub(self.timestamp) < ttl_ms
    }
}

/// Timestamped cache over a [`KeyValueStore`].
#[derive(Debug)]
pub struct ResponseCache<S, C> {
    store: S,
    clock: C,
    ttl_ms: u64,
    enabled: bool,
}

impl<S: KeyValueStore, C: Clock> ResponseCache<S, C> {
    /// Create a cache with the TTL and enabled flag from `config`.
    pub fn new(store: S, clock: C, config: &CacheConfig) -> Self {
        Self {
            store,
            clock,
            ttl_ms: config.ttl_secs.saturating_mul(1000),
            enabled: config.enabled,
        }
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Current time according to the cache's clock.
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Fetch a payload if present, readable and younger than the TTL.
    ///
    /// Storage failures and corrupt entries are logged and reported as a miss.
    pub fn get_fresh<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        if !self.enabled {
            return None;
        }

        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Cache miss for {}", key);
                return None;
            }
            Err(e) => {
                warn!("Cache read failed for {}: {}", key, e);
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Ignoring corrupt cache entry {}: {}", key, e);
                return None;
            }
        };

        let now = self.clock.now_ms();
        if entry.is_fresh(now, self.ttl_ms) {
            debug!(
                "Cache hit for {} (age {} ms)",
                key,
                now.saturating_sub(entry.timestamp)
            );
            Some(entry.payload)
        } else {
            debug!("Cache entry {} expired", key);
            None
        }
    }

    /// Store a payload stamped with the current time.
    pub fn put<T: Serialize>(&self, key: &str, payload: &T) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = CacheEntry {
            payload,
            timestamp: self.clock.now_ms(),
        };
        let raw = serde_json::to_string(&entry)?;
        self.store.set(key, &raw)?;
        debug!("Cached {} ({} bytes)", key, raw.len());
        Ok(())
    }

    /// Drop a cached entry.
    pub fn invalidate(&self, key: &str) -> Result<()> {
        self.store.remove(key)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::cell::Cell;

    use mockall::predicate::eq;
    use tempfile::TempDir;

    use super::*;
    use crate::error::{CacheError, Error};

    const HOUR_MS: u64 = 3_600_000;

    /// Clock whose time can be moved forward between calls.
    struct ManualClock(Rc<Cell<u64>>);

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            self.0.get()
        }
    }

    fn manual_cache(start_ms: u64) -> (ResponseCache<MemoryStore, ManualClock>, Rc<Cell<u64>>) {
        let time = Rc::new(Cell::new(start_ms));
        let cache = ResponseCache::new(
            MemoryStore::new(),
            ManualClock(Rc::clone(&time)),
            &CacheConfig::default(),
        );
        (cache, time)
    }

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert!(config.enabled);
        assert_eq!(config.ttl_secs, DEFAULT_CACHE_TTL_SECS);
        assert_eq!(config.details_key(), "showreel.video_details");
        assert_eq!(config.stats_key(), "showreel.video_stats");
    }

    #[test]
    fn test_cache_config_builder() {
        let config = CacheConfig::new().with_ttl(60).with_key_prefix("");
        assert_eq!(config.ttl_secs, 60);
        assert_eq!(config.details_key(), "video_details");
        assert!(!CacheConfig::disabled().enabled);
    }

    #[test]
    fn test_fresh_entry_is_returned() {
        let (cache, time) = manual_cache(1_000);
        cache.put("k", &vec!["a".to_string()]).unwrap();

        time.set(1_000 + HOUR_MS - 1);
        let hit: Option<Vec<String>> = cache.get_fresh("k");
        assert_eq!(hit, Some(vec!["a".to_string()]));
    }

    #[test]
    fn test_entry_expires_at_ttl() {
        let (cache, time) = manual_cache(1_000);
        cache.put("k", &42_u64).unwrap();

        time.set(1_000 + HOUR_MS);
        assert_eq!(cache.get_fresh::<u64>("k"), None);
    }

    #[test]
    fn test_clock_going_backwards_counts_as_fresh() {
        let (cache, time) = manual_cache(10_000);
        cache.put("k", &1_u8).unwrap();
        time.set(5_000);
        assert_eq!(cache.get_fresh::<u8>("k"), Some(1));
    }

    #[test]
    fn test_corrupt_entry_is_a_miss() {
        let (cache, _) = manual_cache(0);
        cache.store().set("k", "{not json").unwrap();
        assert_eq!(cache.get_fresh::<u64>("k"), None);

        cache.store().set("k", r#"{"payload":"text","timestamp":0}"#).unwrap();
        assert_eq!(cache.get_fresh::<u64>("k"), None);
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let (cache, _) = manual_cache(0);
        cache.put("k", &1_u8).unwrap();
        cache.invalidate("k").unwrap();
        assert_eq!(cache.get_fresh::<u8>("k"), None);
        assert!(cache.store().is_empty());
    }

    #[test]
    fn test_disabled_cache_never_stores() {
        let cache = ResponseCache::new(
            MemoryStore::new(),
            ManualClock(Rc::new(Cell::new(0))),
            &CacheConfig::disabled(),
        );
        cache.put("k", &1_u8).unwrap();
        assert!(cache.store().is_empty());
        assert_eq!(cache.get_fresh::<u8>("k"), None);
    }

    #[test]
    fn test_put_writes_timestamped_entry() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_set()
            .with(eq("k"), eq(r#"{"payload":7,"timestamp":1234}"#))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut clock = MockClock::new();
        clock.expect_now_ms().return_const(1234_u64);

        let cache = ResponseCache::new(store, clock, &CacheConfig::default());
        cache.put("k", &7_u32).unwrap();
    }

    #[test]
    fn test_store_read_failure_is_a_miss() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|key| {
            Err(Error::Cache(CacheError::ReadFailed {
                key: key.to_string(),
                reason: "denied".to_string(),
            }))
        });
        let mut clock = MockClock::new();
        clock.expect_now_ms().never();

        let cache = ResponseCache::new(store, clock, &CacheConfig::default());
        assert_eq!(cache.get_fresh::<u8>("k"), None);
    }

    #[test]
    fn test_store_write_failure_propagates() {
        let mut store = MockKeyValueStore::new();
        store.expect_set().returning(|key, _| {
            Err(Error::Cache(CacheError::WriteFailed {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            }))
        });
        let mut clock = MockClock::new();
        clock.expect_now_ms().return_const(0_u64);

        let cache = ResponseCache::new(store, clock, &CacheConfig::default());
        assert!(cache.put("k", &1_u8).is_err());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::new(temp_dir.path().join("nested")).unwrap();

        assert_eq!(store.get("showreel.video_details").unwrap(), None);
        store.set("showreel.video_details", "[1,2]").unwrap();
        assert_eq!(
            store.get("showreel.video_details").unwrap().as_deref(),
            Some("[1,2]")
        );
        assert!(store.dir().join("showreel.video_details.json").exists());

        store.remove("showreel.video_details").unwrap();
        store.remove("showreel.video_details").unwrap();
        assert_eq!(store.get("showreel.video_details").unwrap(), None);
    }

    #[test]
    fn test_file_store_sanitizes_keys() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::new(temp_dir.path()).unwrap();
        store.set("../escape/key", "x").unwrap();
        assert!(store.dir().join(".._escape_key.json").exists());
    }

    #[test]
    fn test_file_store_clear() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::new(temp_dir.path()).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        std::fs::write(temp_dir.path().join("keep.txt"), "x").unwrap();

        assert_eq!(store.clear().unwrap(), 2);
        assert_eq!(store.get("a").unwrap(), None);
        assert!(temp_dir.path().join("keep.txt").exists());
    }

    #[test]
    fn test_file_backed_cache_survives_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = CacheConfig::default();
        {
            let cache = ResponseCache::new(
                FileStore::new(temp_dir.path()).unwrap(),
                SystemClock,
                &config,
            );
            cache.put(&config.stats_key(), &(300_u64, 12_u64)).unwrap();
        }
        let cache = ResponseCache::new(
            FileStore::new(temp_dir.path()).unwrap(),
            SystemClock,
            &config,
        );
        assert_eq!(
            cache.get_fresh::<(u64, u64)>(&config.stats_key()),
            Some((300, 12))
        );
    }

    #[test]
    fn test_default_cache_directory() {
        let dir = default_cache_directory();
        assert!(dir.ends_with("showreel/cache"));
    }
}
