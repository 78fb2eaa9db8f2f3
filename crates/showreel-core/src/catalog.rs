//! The portfolio video catalog.
//!
//! The catalog is declared as source URLs with display metadata. IDs are
//! extracted once when the catalog is built; an entry whose URL yields no ID
//! is skipped with a warning rather than failing the whole page.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::video_id::{VideoId, extract_video_id};

/// Kind of catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Long-form video, shown in a 16:9 card.
    Video,
    /// Vertical short, shown in a 9:16 card.
    Short,
}

impl Category {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Short => "Short",
        }
    }
}

/// Filter tabs above the carousel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkTab {
    /// Everything.
    #[default]
    Portfolio,
    /// Vertical shorts.
    Shorts,
    /// Long-form videos.
    LongVideos,
}

impl WorkTab {
    /// All tabs in display order.
    pub const ALL: [Self; 3] = [Self::Portfolio, Self::Shorts, Self::LongVideos];

    /// Tab caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Portfolio => "Portfolio",
            Self::Shorts => "Shorts",
            Self::LongVideos => "Long Videos",
        }
    }

    /// Whether an entry is shown under this tab.
    #[must_use]
    pub const fn includes(self, project: &VideoProject) -> bool {
        match self {
            Self::Portfolio => true,
            Self::Shorts => project.is_short,
            Self::LongVideos => !project.is_short,
        }
    }
}

/// View and like counts for a single video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStatistics {
    /// Total views.
    pub view_count: u64,
    /// Total likes.
    pub like_count: u64,
}

/// A catalog entry, optionally enriched with API data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoProject {
    /// External video identifier.
    pub id: VideoId,
    /// Display title.
    pub title: String,
    /// Entry kind.
    pub category: Category,
    /// Whether the entry renders as a vertical short.
    pub is_short: bool,
    /// Publication year, when known.
    pub year: Option<String>,
    /// Thumbnail to display. `None` until enrichment or fallback.
    pub thumbnail_url: Option<String>,
    /// Counts, zero until enrichment succeeds.
    pub statistics: VideoStatistics,
}

impl VideoProject {
    /// Create an un-enriched entry.
    #[must_use]
    pub fn new(id: VideoId, title: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            title: title.into(),
            category,
            is_short: category == Category::Short,
            year: None,
            thumbnail_url: None,
            statistics: VideoStatistics::default(),
        }
    }

    /// Link to the video on its host.
    #[must_use]
    pub fn watch_url(&self) -> String {
        if self.is_short {
            self.id.shorts_url()
        } else {
            self.id.watch_url()
        }
    }
}

/// Declared catalog entries: source URL, title, category.
const PORTFOLIO_SOURCES: &[(&str, &str, Category)] = &[
    ("https://www.youtube.com/watch?v=r-_40oLqawY", "Video Project 1", Category::Video),
    ("https://www.youtube.com/watch?v=UeNa1cJhO5s", "Video Project 2", Category::Video),
    ("https://www.youtube.com/watch?v=5KvmYGkMIvM", "Video Project 3", Category::Video),
    ("https://www.youtube.com/watch?v=HfUTAtIy0MA", "Video Project 4", Category::Video),
    ("https://www.youtube.com/watch?v=90nd1uhdrM4", "Video Project 5", Category::Video),
    ("https://www.youtube.com/watch?v=eTmvtdsHb8w", "Video Project 6", Category::Video),
    ("https://www.youtube.com/shorts/KgPq-v7TjYI", "Short Video 1", Category::Short),
    ("https://www.youtube.com/shorts/KGqmHB-7fFc", "Short Video 2", Category::Short),
    ("https://www.youtube.com/shorts/FBmjQ6fNpas", "Short Video 3", Category::Short),
    ("https://www.youtube.com/shorts/_VMyiirPCtU", "Short Video 4", Category::Short),
    ("https://www.youtube.com/watch?v=PjDgNbg1RtM", "Short Video 5", Category::Short),
    ("https://www.youtube.com/watch?v=G62QsMn1sG8", "Video Project 7", Category::Video),
    ("https://www.youtube.com/watch?v=0xE_PmWqqu0", "Video Project 8", Category::Video),
    ("https://www.youtube.com/watch?v=-W3dWXB3H_U", "Video Project 9", Category::Video),
    ("https://www.youtube.com/watch?v=RyOZv_eVLw4", "Video Project 10", Category::Video),
    ("https://www.youtube.com/watch?v=wvEVQB6r5Tg", "Video Project 11", Category::Video),
    ("https://www.youtube.com/watch?v=-vEtFnyz4wU", "Video Project 12", Category::Video),
    (
        "https://www.youtube.com/watch?v=ZxKPSctpi0E",
        "What if Palpatine Defeated Mace Windu Before Anakin Arrived",
        Category::Video,
    ),
    (
        "https://www.youtube.com/watch?v=lveGVl5S06k",
        "What If R2-D2 Was Reprogrammed with HK-47's Assassin Protocols",
        Category::Video,
    ),
    (
        "https://www.youtube.com/watch?v=kU0ZwzQlSFk",
        "What if Padme JOINED Anakin on Mustafar",
        Category::Video,
    ),
    (
        "https://www.youtube.com/watch?v=iPhbUwPRHEw",
        "What if Revan AND Darth Bane Awakened During The Clone Wars",
        Category::Video,
    ),
    (
        "https://youtube.com/shorts/co54jm8eaJg",
        "Pahalgam Te*ror Attack 2025 | The Ideological Assault on India's Diversity",
        Category::Short,
    ),
    (
        "https://www.youtube.com/watch?v=Cl28FRUmxQs",
        "What if Anakin Trusted Mace Windu and Stayed in the Jedi Temple",
        Category::Video,
    ),
    (
        "https://www.youtube.com/watch?v=O5vyAsEdDSo",
        "What if Anakin Skywalker Left The Jedi Order After Killing Dooku",
        Category::Video,
    ),
    (
        "https://www.youtube.com/watch?v=TTnU_Bz2-v4",
        "What if Darth Vader MASTERED Force Drain to Regenerate His Body",
        Category::Video,
    ),
    ("https://www.youtube.com/shorts/TFn9FPZ_NDg", "US job market Nancy", Category::Short),
    ("https://www.youtube.com/shorts/5k01mwI-Yxc", "ArthurHayes Bitcoin Nancy", Category::Short),
    (
        "https://www.youtube.com/watch?v=aKDSDr24gCk",
        "What if Palpatine Used Predator INSTEAD of Order 66",
        Category::Video,
    ),
    (
        "https://www.youtube.com/watch?v=oGCA-yu4BwM",
        "What if Revan Awakened To Train Anakin and Starkiller",
        Category::Video,
    ),
    (
        "https://www.youtube.com/watch?v=gm56GVNYJpk",
        "What If Obi-Wan DIDN'T Survive Order 66",
        Category::Video,
    ),
    (
        "https://www.youtube.com/watch?v=8xGP_gnWIW0",
        "What if The Jedi Had Visions of Anakin Burning on Mustafar",
        Category::Video,
    ),
    (
        "https://www.youtube.com/watch?v=pmbd3ZfVFZg",
        "What if Anakin Skywalker Had The Sharingan",
        Category::Video,
    ),
    (
        "https://www.youtube.com/shorts/WD2t-jV4gkM",
        "Why a Major General Fasted in Kashmir During Ramadan! 🇮🇳 @MajGenYashMor",
        Category::Short,
    ),
    (
        "https://www.youtube.com/shorts/DaudFOjxnK0",
        "Operation Sindoor: Symbolism, Strategy & Propaganda in India-Pakistan Conflict #indianarmy",
        Category::Short,
    ),
    (
        "https://www.youtube.com/watch?v=u_wZIB5EjfM",
        "What if The Father From Mortis SAVED Anakin on Mustafar",
        Category::Video,
    ),
    (
        "https://www.youtube.com/watch?v=M7ir4M4VF3o",
        "From ₹30 to ₹1 Crore? The Fantasy Sports Scam You Need to Know",
        Category::Video,
    ),
    ("https://www.youtube.com/shorts/hW_qDxCvGf0", "Caleb Ad Footage", Category::Short),
    ("https://www.youtube.com/shorts/kiL4Z53WMt4", "Trial", Category::Short),
];

/// An ordered list of portfolio entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    projects: Vec<VideoProject>,
}

impl Catalog {
    /// The built-in portfolio catalog.
    #[must_use]
    pub fn portfolio() -> Self {
        Self::from_sources(PORTFOLIO_SOURCES)
    }

    /// Build a catalog from `(url, title, category)` triples.
    ///
    /// Entries whose URL does not contain a recognizable ID are skipped.
    #[must_use]
    pub fn from_sources(sources: &[(&str, &str, Category)]) -> Self {
        let projects: Vec<VideoProject> = sources
            .iter()
            .filter_map(|&(url, title, category)| match extract_video_id(url) {
                Some(id) => Some(VideoProject::new(id, title, category)),
                None => {
                    warn!("Skipping catalog entry '{}': no video ID in {}", title, url);
                    None
                }
            })
            .collect();
        debug!("Catalog built with {} entries", projects.len());
        Self { projects }
    }

    /// Entries with the most recently added first.
    #[must_use]
    pub fn latest_first(&self) -> Vec<VideoProject> {
        self.projects.iter().rev().cloned().collect()
    }

    /// IDs of every entry, in declaration order.
    #[must_use]
    pub fn ids(&self) -> Vec<VideoId> {
        self.projects.iter().map(|p| p.id.clone()).collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Iterate over entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, VideoProject> {
        self.projects.iter()
    }

    /// Vertical shorts only.
    #[must_use]
    pub fn shorts(&self) -> Vec<VideoProject> {
        self.filtered(|p| p.is_short)
    }

    /// Long-form videos only.
    #[must_use]
    pub fn long_form(&self) -> Vec<VideoProject> {
        self.filtered(|p| !p.is_short)
    }

    /// Entries shown under `tab`.
    #[must_use]
    pub fn for_tab(&self, tab: WorkTab) -> Vec<VideoProject> {
        self.filtered(|p| tab.includes(p))
    }

    fn filtered(&self, keep: impl Fn(&VideoProject) -> bool) -> Vec<VideoProject> {
        self.projects.iter().filter(|p| keep(p)).cloned().collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a VideoProject;
    type IntoIter = std::slice::Iter<'a, VideoProject>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}
