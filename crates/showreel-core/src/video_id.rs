//! Video ID parsing and extraction from `YouTube` URLs.
//!
//! A video is identified by an 11-character token drawn from
//! `[A-Za-z0-9_-]`. [`VideoId`] can only be built from a string that passes
//! that check, so anything holding one can format URLs without re-validating.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Length of a `YouTube` video ID.
pub const VIDEO_ID_LEN: usize = 11;

// Token runs until the next '#', '&' or '?'; length is checked afterwards.
static VIDEO_URL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*").ok()
});

static SHORTS_URL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^.*(youtube\.com/shorts/)([^#&?]*).*").ok());

/// A validated 11-character `YouTube` video ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Parse a bare video ID.
    pub fn parse(value: &str) -> Result<Self> {
        if is_valid_video_id(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(Error::InvalidVideoId(value.to_string()))
        }
    }

    /// The ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch page URL.
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }

    /// Shorts page URL.
    #[must_use]
    pub fn shorts_url(&self) -> String {
        format!("https://www.youtube.com/shorts/{}", self.0)
    }

    /// Muted, chrome-less looping embed used for hover previews.
    #[must_use]
    pub fn preview_embed_url(&self) -> String {
        let id = &self.0;
        format!(
            "https://www.youtube.com/embed/{id}?autoplay=1&mute=1&controls=0&modestbranding=1\
             &loop=1&playlist={id}&playsinline=1&rel=0&iv_load_policy=3&fs=0&disablekb=1"
        )
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VideoId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if is_valid_video_id(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidVideoId(value))
        }
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

/// Check whether a string has the shape of a video ID.
#[must_use]
pub fn is_valid_video_id(value: &str) -> bool {
    value.len() == VIDEO_ID_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Extract the video ID from a `YouTube` URL.
///
/// Recognised shapes: `youtu.be/<id>`, `/v/<id>`, `/u/<x>/<id>`,
/// `/embed/<id>`, `watch?v=<id>`, `&v=<id>` and `youtube.com/shorts/<id>`.
/// Returns `None` for anything else, including tokens that are not exactly
/// 11 valid characters.
///
/// # Examples
///
/// ```rust
/// use showreel_core::video_id::extract_video_id;
///
/// let id = extract_video_id("https://www.youtube.com/watch?v=r-_40oLqawY").unwrap();
/// assert_eq!(id.as_str(), "r-_40oLqawY");
///
/// assert!(extract_video_id("https://example.com/video").is_none());
/// ```
#[must_use]
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let url = url.trim();
    capture_token(VIDEO_URL_RE.as_ref(), url)
        .or_else(|| capture_token(SHORTS_URL_RE.as_ref(), url))
        .and_then(|token| VideoId::parse(token).ok())
}

/// Like [`extract_video_id`], with an error that says why the URL was rejected.
pub fn parse_video_url(url: &str) -> Result<VideoId> {
    extract_video_id(url).ok_or_else(|| Error::InvalidUrl {
        url: url.to_string(),
        reason: "expected a watch, shorts, embed or youtu.be link with an 11-character ID"
            .to_string(),
    })
}

fn capture_token<'a>(re: Option<&Regex>, url: &'a str) -> Option<&'a str> {
    let token = re?.captures(url)?.get(2)?.as_str();
    (token.len() == VIDEO_ID_LEN).then_some(token)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn extracted(url: &str) -> Option<String> {
        extract_video_id(url).map(String::from)
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extracted("https://www.youtube.com/watch?v=r-_40oLqawY"),
            Some("r-_40oLqawY".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extracted("https://www.youtube.com/watch?v=UeNa1cJhO5s&t=42s"),
            Some("UeNa1cJhO5s".to_string())
        );
        assert_eq!(
            extracted("https://www.youtube.com/watch?feature=share&v=UeNa1cJhO5s"),
            Some("UeNa1cJhO5s".to_string())
        );
    }

    #[test]
    fn test_shorts_url() {
        assert_eq!(
            extracted("https://www.youtube.com/shorts/KgPq-v7TjYI"),
            Some("KgPq-v7TjYI".to_string())
        );
        assert_eq!(
            extracted("https://youtube.com/shorts/co54jm8eaJg"),
            Some("co54jm8eaJg".to_string())
        );
    }

    #[test]
    fn test_embed_and_short_links() {
        assert_eq!(
            extracted("https://www.youtube.com/embed/5KvmYGkMIvM?autoplay=1"),
            Some("5KvmYGkMIvM".to_string())
        );
        assert_eq!(
            extracted("https://youtu.be/HfUTAtIy0MA"),
            Some("HfUTAtIy0MA".to_string())
        );
        assert_eq!(
            extracted("https://www.youtube.com/v/90nd1uhdrM4"),
            Some("90nd1uhdrM4".to_string())
        );
    }

    #[test]
    fn test_fragment_terminates_token() {
        assert_eq!(
            extracted("https://youtu.be/eTmvtdsHb8w#comments"),
            Some("eTmvtdsHb8w".to_string())
        );
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!(extracted("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(
            extracted("https://www.youtube.com/watch?v=r-_40oLqawYextra"),
            None
        );
        assert_eq!(extracted("https://www.youtube.com/shorts/abc"), None);
    }

    #[test]
    fn test_unrecognised_urls_rejected() {
        assert_eq!(extracted(""), None);
        assert_eq!(extracted("https://example.com/r-_40oLqawY"), None);
        assert_eq!(extracted("https://www.youtube.com/playlist?list=PLabc"), None);
        assert_eq!(extracted("not a url at all"), None);
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert_eq!(extracted("https://www.youtube.com/watch?v=abc.def.ghi"), None);
    }

    #[test]
    fn test_extracted_ids_are_always_eleven_chars() {
        let urls = [
            "https://www.youtube.com/watch?v=r-_40oLqawY",
            "https://www.youtube.com/watch?v=1234567890",
            "https://youtu.be/_VMyiirPCtU?si=xyz",
            "https://www.youtube.com/shorts/5k01mwI-Yxc",
            "https://www.youtube.com/embed/",
            "youtube.com/watch?v=",
        ];
        for url in urls {
            if let Some(id) = extract_video_id(url) {
                assert_eq!(id.as_str().len(), VIDEO_ID_LEN, "{url}");
            }
        }
    }

    #[test]
    fn test_parse_video_url_error() {
        let err = parse_video_url("https://example.com").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_video_id_parse() {
        assert!(VideoId::parse("r-_40oLqawY").is_ok());
        assert!(VideoId::parse("r-_40oLqaw").is_err());
        assert!(VideoId::parse("r-_40oLqaw!").is_err());
    }

    #[test]
    fn test_video_id_urls() {
        let id = VideoId::parse("gm56GVNYJpk").unwrap();
        assert_eq!(id.watch_url(), "https://www.youtube.com/watch?v=gm56GVNYJpk");
        assert_eq!(id.shorts_url(), "https://www.youtube.com/shorts/gm56GVNYJpk");
        let embed = id.preview_embed_url();
        assert!(embed.starts_with("https://www.youtube.com/embed/gm56GVNYJpk?"));
        assert!(embed.contains("mute=1"));
        assert!(embed.contains("playlist=gm56GVNYJpk"));
    }

    #[test]
    fn test_video_id_serde() {
        let id = VideoId::parse("8xGP_gnWIW0").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"8xGP_gnWIW0\"");

        let back: VideoId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<VideoId>("\"bad\"").is_err());
    }
}
