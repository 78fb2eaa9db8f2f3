//! Thumbnail URL helpers.
//!
//! Thumbnails come from two places: the API response, which lists the sizes
//! that actually exist for a video, and the static image host, which serves
//! every size token for any ID but may return a gray placeholder for sizes
//! that were never generated.

use serde::{Deserialize, Serialize};

use crate::video_id::VideoId;
use crate::youtube::Thumbnails;

/// Base URL of the static thumbnail host.
pub const THUMBNAIL_HOST: &str = "https://img.youtube.com/vi";

/// Size tokens understood by the static thumbnail host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThumbnailQuality {
    /// 120x90.
    Default,
    /// 320x180.
    Medium,
    /// 480x360. Always available.
    #[default]
    High,
    /// 640x480.
    Standard,
    /// 1280x720. Not generated for every video.
    MaxRes,
}

impl ThumbnailQuality {
    /// File name stem used by the static host.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medium => "mqdefault",
            Self::High => "hqdefault",
            Self::Standard => "sddefault",
            Self::MaxRes => "maxresdefault",
        }
    }
}

/// Static host URL for a video at the given size.
#[must_use]
pub fn thumbnail_url(id: &VideoId, quality: ThumbnailQuality) -> String {
    format!("{THUMBNAIL_HOST}/{id}/{}.jpg", quality.token())
}

/// Placeholder thumbnail shown before, or instead of, enrichment.
#[must_use]
pub fn placeholder_thumbnail(id: &VideoId) -> String {
    thumbnail_url(id, ThumbnailQuality::High)
}

/// Pick the best thumbnail from an API response.
///
/// Prefers `maxres`, then `high`, then falls back to the static host's
/// `hqdefault` for the ID.
#[must_use]
pub fn best_thumbnail(id: &VideoId, thumbnails: &Thumbnails) -> String {
    thumbnails
        .maxres
        .as_ref()
        .or(thumbnails.high.as_ref())
        .map(|t| t.url.clone())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| placeholder_thumbnail(id))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::youtube::Thumbnail;

    fn id() -> VideoId {
        VideoId::parse("r-_40oLqawY").unwrap()
    }

    fn thumb(url: &str) -> Option<Thumbnail> {
        Some(Thumbnail {
            url: url.to_string(),
            width: None,
            height: None,
        })
    }

    #[test]
    fn test_thumbnail_url_tokens() {
        assert_eq!(
            thumbnail_url(&id(), ThumbnailQuality::High),
            "https://img.youtube.com/vi/r-_40oLqawY/hqdefault.jpg"
        );
        assert_eq!(
            thumbnail_url(&id(), ThumbnailQuality::MaxRes),
            "https://img.youtube.com/vi/r-_40oLqawY/maxresdefault.jpg"
        );
        assert_eq!(ThumbnailQuality::Medium.token(), "mqdefault");
        assert_eq!(ThumbnailQuality::Standard.token(), "sddefault");
        assert_eq!(ThumbnailQuality::Default.token(), "default");
    }

    #[test]
    fn test_best_thumbnail_prefers_maxres() {
        let thumbnails = Thumbnails {
            maxres: thumb("https://i.ytimg.com/vi/x/maxresdefault.jpg"),
            high: thumb("https://i.ytimg.com/vi/x/hqdefault.jpg"),
            ..Thumbnails::default()
        };
        assert_eq!(
            best_thumbnail(&id(), &thumbnails),
            "https://i.ytimg.com/vi/x/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_best_thumbnail_falls_back_to_high() {
        let thumbnails = Thumbnails {
            high: thumb("https://i.ytimg.com/vi/x/hqdefault.jpg"),
            medium: thumb("https://i.ytimg.com/vi/x/mqdefault.jpg"),
            ..Thumbnails::default()
        };
        assert_eq!(
            best_thumbnail(&id(), &thumbnails),
            "https://i.ytimg.com/vi/x/hqdefault.jpg"
        );
    }

    #[test]
    fn test_best_thumbnail_falls_back_to_static_host() {
        let thumbnails = Thumbnails {
            medium: thumb("https://i.ytimg.com/vi/x/mqdefault.jpg"),
            ..Thumbnails::default()
        };
        assert_eq!(best_thumbnail(&id(), &thumbnails), placeholder_thumbnail(&id()));
    }
}
