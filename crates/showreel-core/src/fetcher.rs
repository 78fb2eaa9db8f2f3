//! Catalog enrichment through the video API, with a time-boxed cache.
//!
//! A fresh cache entry short-circuits the network entirely. On a miss the
//! requested IDs are deduplicated, split into batches and fetched batch by
//! batch; a failing batch only costs its own IDs, which fall back to
//! placeholder data.

use std::collections::{HashMap, HashSet};

use tracing::{debug, error, info, warn};

use crate::cache::{Clock, KeyValueStore, ResponseCache};
use crate::catalog::{VideoProject, VideoStatistics};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::stats::{AggregateStats, aggregate};
use crate::thumbnail::{best_thumbnail, placeholder_thumbnail};
use crate::video_id::VideoId;
use crate::youtube::{VideoApi, VideoDetails};

/// Result of a detail fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Details by video ID.
    pub details: HashMap<VideoId, VideoDetails>,
    /// Whether the details came from the cache without a network call.
    pub from_cache: bool,
    /// Requested IDs for which no details are available.
    pub failed: Vec<VideoId>,
}

impl FetchOutcome {
    /// Details for one ID.
    #[must_use]
    pub fn get(&self, id: &VideoId) -> Option<&VideoDetails> {
        self.details.get(id)
    }
}

/// Enriched projects with their totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    /// Projects in input order.
    pub projects: Vec<VideoProject>,
    /// Totals over `projects`.
    pub stats: AggregateStats,
    /// Whether the details came from the cache.
    pub from_cache: bool,
    /// IDs that fell back to placeholder data.
    pub failed: Vec<VideoId>,
}

/// Fetches and caches video details, and enriches catalog entries with them.
pub struct DetailFetcher<A, S, C> {
    api: A,
    cache: ResponseCache<S, C>,
    batch_size: usize,
    details_key: String,
    stats_key: String,
}

impl<A: VideoApi, S: KeyValueStore, C: Clock> DetailFetcher<A, S, C> {
    /// Create a fetcher over `api`, caching in `store`.
    pub fn new(api: A, store: S, clock: C, config: &SiteConfig) -> Self {
        Self {
            api,
            cache: ResponseCache::new(store, clock, &config.cache),
            batch_size: config.effective_batch_size(),
            details_key: config.cache.details_key(),
            stats_key: config.cache.stats_key(),
        }
    }

    /// The underlying API.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// The response cache.
    pub const fn cache(&self) -> &ResponseCache<S, C> {
        &self.cache
    }

    /// Fetch details for `ids`, serving from the cache while it is fresh.
    ///
    /// A fresh entry answers the whole request: IDs it does not hold (new
    /// catalog entries, or ones that failed when it was written) are reported
    /// in `failed` without a network call until the entry expires or is
    /// [invalidated](Self::invalidate).
    pub async fn fetch_details(&self, ids: &[VideoId]) -> FetchOutcome {
        let unique = dedup(ids);

        if let Some(cached) = self
            .cache
            .get_fresh::<Vec<VideoDetails>>(&self.details_key)
        {
            let details: HashMap<_, _> = cached.into_iter().map(|d| (d.id.clone(), d)).collect();
            let failed = missing(&unique, &details);
            info!("Serving {} video details from cache", details.len());
            return FetchOutcome {
                details,
                from_cache: true,
                failed,
            };
        }

        let mut details = HashMap::with_capacity(unique.len());
        let mut failed = Vec::new();

        for chunk in unique.chunks(self.batch_size) {
            match self.api.fetch_batch(chunk).await {
                Ok(batch) => {
                    debug!("Fetched {} of {} requested details", batch.len(), chunk.len());
                    for item in batch {
                        details.insert(item.id.clone(), item);
                    }
                    for id in chunk {
                        if !details.contains_key(id) {
                            warn!("No details returned for {}", id);
                            failed.push(id.clone());
                        }
                    }
                }
                Err(e) => {
                    error!("Failed to fetch details for {} videos: {}", chunk.len(), e);
                    failed.extend(chunk.iter().cloned());
                }
            }
        }

        if !details.is_empty() {
            let ordered: Vec<&VideoDetails> = unique.iter().filter_map(|id| details.get(id)).collect();
            if let Err(e) = self.cache.put(&self.details_key, &ordered) {
                warn!("Failed to cache video details: {}", e);
            }
        }

        info!(
            "Fetched details for {} videos ({} failed)",
            details.len(),
            failed.len()
        );
        FetchOutcome {
            details,
            from_cache: false,
            failed,
        }
    }

    /// Enrich `projects` and compute their totals.
    ///
    /// Every project comes back, enriched where details exist and with
    /// placeholder data otherwise. Freshly fetched totals are cached.
    pub async fn enrich(&self, projects: &[VideoProject]) -> (Vec<VideoProject>, AggregateStats) {
        let enrichment = self.enrich_detailed(projects).await;
        (enrichment.projects, enrichment.stats)
    }

    /// Like [`enrich`](Self::enrich), also reporting where the data came from.
    pub async fn enrich_detailed(&self, projects: &[VideoProject]) -> Enrichment {
        let ids: Vec<VideoId> = projects.iter().map(|p| p.id.clone()).collect();
        let outcome = self.fetch_details(&ids).await;

        let enriched: Vec<VideoProject> = projects
            .iter()
            .map(|p| match outcome.get(&p.id) {
                Some(details) => merge_details(p, details),
                None => fallback(p),
            })
            .collect();
        let stats = aggregate(&enriched);

        if !outcome.from_cache && !outcome.details.is_empty() {
            self.store_stats(&stats);
        }

        Enrichment {
            projects: enriched,
            stats,
            from_cache: outcome.from_cache,
            failed: outcome.failed,
        }
    }

    fn store_stats(&self, stats: &AggregateStats) {
        if let Err(e) = self.cache.put(&self.stats_key, stats) {
            warn!("Failed to cache video stats: {}", e);
        }
    }

    /// Totals from the last successful fetch, while still fresh.
    pub fn cached_stats(&self) -> Option<AggregateStats> {
        self.cache.get_fresh(&self.stats_key)
    }

    /// Fetch one video through the single-item endpoint, bypassing the cache.
    pub async fn fetch_single(&self, id: &VideoId) -> Result<VideoDetails> {
        self.api.fetch_one(id).await
    }

    /// Drop both cache entries so the next fetch goes to the network.
    pub fn invalidate(&self) -> Result<()> {
        self.cache.invalidate(&self.details_key)?;
        self.cache.invalidate(&self.stats_key)
    }
}

/// Apply API details to a catalog entry.
#[must_use]
pub fn merge_details(project: &VideoProject, details: &VideoDetails) -> VideoProject {
    let title = details.title.trim();
    VideoProject {
        title: if title.is_empty() {
            project.title.clone()
        } else {
            title.to_string()
        },
        year: project.year.clone().or_else(|| details.published_year()),
        thumbnail_url: Some(best_thumbnail(&project.id, &details.thumbnails)),
        statistics: details.statistics,
        ..project.clone()
    }
}

/// Placeholder data for an entry whose details could not be fetched.
#[must_use]
pub fn fallback(project: &VideoProject) -> VideoProject {
    VideoProject {
        thumbnail_url: Some(placeholder_thumbnail(&project.id)),
        statistics: VideoStatistics::default(),
        ..project.clone()
    }
}

fn dedup(ids: &[VideoId]) -> Vec<VideoId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().filter(|id| seen.insert(*id)).cloned().collect()
}

fn missing(ids: &[VideoId], details: &HashMap<VideoId, VideoDetails>) -> Vec<VideoId> {
    ids.iter()
        .filter(|id| !details.contains_key(*id))
        .cloned()
        .collect()
}
