//! Client for the YouTube Data API `videos` endpoint.
//!
//! The API is reached through the [`VideoApi`] trait so the fetcher can be
//! driven by a fake in tests. [`YouTubeClient`] is the `reqwest`
//! implementation; it runs natively and in the browser.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::VideoStatistics;
use crate::config::SiteConfig;
use crate::error::{ApiError, Error, Result};
use crate::video_id::VideoId;

/// Default base URL of the YouTube Data API.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Maximum number of IDs the `videos` endpoint accepts per call.
pub const MAX_BATCH_SIZE: usize = 50;

const VIDEO_PARTS: &str = "snippet,statistics";

/// A single thumbnail rendition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Image URL.
    pub url: String,
    /// Width in pixels.
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels.
    #[serde(default)]
    pub height: Option<u32>,
}

/// Thumbnail renditions keyed by size, as listed by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnails {
    /// 120x90.
    pub default: Option<Thumbnail>,
    /// 320x180.
    pub medium: Option<Thumbnail>,
    /// 480x360.
    pub high: Option<Thumbnail>,
    /// 640x480.
    pub standard: Option<Thumbnail>,
    /// 1280x720.
    pub maxres: Option<Thumbnail>,
}

/// Metadata for one video, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDetails {
    /// Video ID.
    pub id: VideoId,
    /// Title set by the uploader.
    pub title: String,
    /// Description text.
    #[serde(default)]
    pub description: String,
    /// Uploading channel name.
    #[serde(default)]
    pub channel_title: String,
    /// RFC 3339 publication timestamp.
    #[serde(default)]
    pub published_at: String,
    /// Available thumbnails.
    #[serde(default)]
    pub thumbnails: Thumbnails,
    /// View and like counts.
    #[serde(default)]
    pub statistics: VideoStatistics,
}

impl VideoDetails {
    /// Publication year taken from `published_at`, if present.
    #[must_use]
    pub fn published_year(&self) -> Option<String> {
        let year = self.published_at.get(..4)?;
        year.chars()
            .all(|c| c.is_ascii_digit())
            .then(|| year.to_string())
    }
}

/// Access to video metadata.
#[allow(async_fn_in_trait)]
pub trait VideoApi {
    /// Fetch details for up to [`MAX_BATCH_SIZE`] IDs in one call.
    ///
    /// IDs unknown to the API are simply absent from the result.
    async fn fetch_batch(&self, ids: &[VideoId]) -> Result<Vec<VideoDetails>>;

    /// Fetch details for a single ID.
    ///
    /// Fails with [`ApiError::NotFound`] when the API has no such video.
    async fn fetch_one(&self, id: &VideoId) -> Result<VideoDetails> {
        self.fetch_batch(std::slice::from_ref(id))
            .await?
            .into_iter()
            .find(|d| &d.id == id)
            .ok_or_else(|| {
                ApiError::NotFound {
                    id: id.to_string(),
                }
                .into()
            })
    }
}

/// `reqwest`-backed client for the `videos` endpoint.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    timeout: Option<Duration>,
}

impl YouTubeClient {
    /// Create a client from site configuration.
    ///
    /// Fails with a configuration error when no API key is set.
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        let timeout =
            (config.request_timeout_secs > 0).then(|| Duration::from_secs(config.request_timeout_secs));
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Full URL of the `videos` endpoint.
    #[must_use]
    pub fn videos_url(&self) -> String {
        format!("{}/videos", self.base_url)
    }
}

impl VideoApi for YouTubeClient {
    async fn fetch_batch(&self, ids: &[VideoId]) -> Result<Vec<VideoDetails>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        if ids.len() > MAX_BATCH_SIZE {
            return Err(Error::Configuration(format!(
                "batch of {} IDs exceeds the API limit of {MAX_BATCH_SIZE}",
                ids.len()
            )));
        }

        let joined = ids
            .iter()
            .map(VideoId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        debug!("Requesting details for {} videos", ids.len());

        let request = self.http.get(self.videos_url()).query(&[
            ("id", joined.as_str()),
            ("key", self.api_key.as_str()),
            ("part", VIDEO_PARTS),
        ]);
        #[cfg(not(target_arch = "wasm32"))]
        let request = match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| Error::network_error(format!("Failed to reach video API: {e}")))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::network_error(format!("Failed to read API response: {e}")))?;

        if !status.is_success() {
            let message = parse_error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
            warn!("Video API returned {}: {}", status.as_u16(), message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        parse_videos_response(&body)
    }
}

#[derive(Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<ApiVideo>,
}

#[derive(Deserialize)]
struct ApiVideo {
    id: String,
    #[serde(default)]
    snippet: ApiSnippet,
    #[serde(default)]
    statistics: ApiStatistics,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ApiSnippet {
    title: String,
    description: String,
    channel_title: String,
    published_at: String,
    thumbnails: Thumbnails,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ApiStatistics {
    view_count: Option<Value>,
    like_count: Option<Value>,
}

// Counts arrive as decimal strings; anything unreadable is zero.
fn parse_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

/// Parse a `videos` list response body.
///
/// Items whose ID is malformed are dropped with a warning.
pub fn parse_videos_response(body: &str) -> Result<Vec<VideoDetails>> {
    let response: VideoListResponse =
        serde_json::from_str(body).map_err(|e| ApiError::InvalidResponse {
            reason: e.to_string(),
        })?;

    let details = response
        .items
        .into_iter()
        .filter_map(|item| {
            let id = match VideoId::parse(&item.id) {
                Ok(id) => id,
                Err(e) => {
                    warn!("Dropping API item: {}", e);
                    return None;
                }
            };
            Some(VideoDetails {
                id,
                title: item.snippet.title,
                description: item.snippet.description,
                channel_title: item.snippet.channel_title,
                published_at: item.snippet.published_at,
                thumbnails: item.snippet.thumbnails,
                statistics: VideoStatistics {
                    view_count: parse_count(item.statistics.view_count.as_ref()),
                    like_count: parse_count(item.statistics.like_count.as_ref()),
                },
            })
        })
        .collect();
    Ok(details)
}

/// Extract `error.message` from an API error body.
#[must_use]
pub fn parse_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
        .filter(|m| !m.is_empty())
}
