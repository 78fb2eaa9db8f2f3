//! `Showreel` Core Library
//!
//! This crate provides the platform-independent logic of the `Showreel`
//! portfolio site:
//! - The portfolio video catalog and `YouTube` video ID extraction
//! - Detail fetching from the YouTube Data API with a time-boxed cache
//! - The infinite-loop carousel controller
//! - Aggregate statistics and their count-up presentation
//! - Site configuration
//!
//! It builds for native targets and for `wasm32`; storage and time are
//! reached through the [`KeyValueStore`] and [`Clock`] traits so each target
//! plugs in its own.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result`], with typed errors per domain.
//! See the [`error`] module for details.
//!
//! ```rust,ignore
//! use showreel_core::{Catalog, DetailFetcher, SiteConfig, YouTubeClient};
//!
//! let config = SiteConfig::from_env();
//! let client = YouTubeClient::new(&config)?;
//! let fetcher = DetailFetcher::new(client, store, clock, &config);
//! let (projects, stats) = fetcher.enrich(&Catalog::portfolio().latest_first()).await;
//! ```

pub mod cache;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod shuffle;
pub mod stats;
pub mod thumbnail;
pub mod video_id;
pub mod youtube;

pub use cache::{
    CacheConfig, CacheEntry, Clock, DEFAULT_CACHE_TTL_SECS, KeyValueStore, MemoryStore,
    ResponseCache, VIDEO_DETAILS_KEY, VIDEO_STATS_KEY,
};
#[cfg(not(target_arch = "wasm32"))]
pub use cache::{FileStore, SystemClock, default_cache_directory};
pub use carousel::{
    CARD_GAP_PX, CarouselConfig, CarouselController, CarouselState, DEFAULT_ARROW_JUMP_PX,
    DEFAULT_COPIES, DEFAULT_DRAG_MULTIPLIER, DEFAULT_SPEED_PX_PER_SEC, Direction, next_index,
    prev_index, render_sequence,
};
pub use catalog::{Catalog, Category, VideoProject, VideoStatistics, WorkTab};
pub use config::{API_KEY_ENV_VAR, SiteConfig, Theme};
pub use error::{ApiError, CacheError, Error, Result};
pub use fetcher::{DetailFetcher, Enrichment, FetchOutcome, fallback, merge_details};
pub use shuffle::{shuffle_with, shuffled};
pub use stats::{
    AggregateStats, CountUp, CountUpConfig, CountUpTrigger, aggregate, format_compact,
    format_with_commas,
};
pub use thumbnail::{ThumbnailQuality, best_thumbnail, placeholder_thumbnail, thumbnail_url};
pub use video_id::{VideoId, extract_video_id, is_valid_video_id, parse_video_url};
pub use youtube::{
    DEFAULT_API_BASE_URL, MAX_BATCH_SIZE, Thumbnail, Thumbnails, VideoApi, VideoDetails,
    YouTubeClient, parse_videos_response,
};
