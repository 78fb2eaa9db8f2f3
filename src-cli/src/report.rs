//! Text and JSON rendering of command results.

use serde::Serialize;
use showreel_core::{AggregateStats, VideoProject, format_compact, format_with_commas};

/// Result of the `catalog` command.
#[derive(Debug, Serialize)]
pub struct CatalogReport<'a> {
    /// Totals across the whole catalog.
    pub stats: AggregateStats,
    /// Whether the details came from the cache.
    pub from_cache: bool,
    /// Listed entries.
    pub projects: &'a [VideoProject],
}

/// Totals as aligned text lines.
#[must_use]
pub fn stats_text(stats: &AggregateStats) -> String {
    format!(
        "Total views  {:>15}  ({})\nTotal likes  {:>15}  ({})\nVideos       {:>15}\n",
        format_with_commas(stats.views),
        format_compact(stats.views),
        format_with_commas(stats.likes),
        format_compact(stats.likes),
        stats.videos_label(),
    )
}

/// One line per entry: id, kind, year, views, likes and title.
#[must_use]
pub fn catalog_text(projects: &[VideoProject]) -> String {
    let mut out = format!(
        "{:<11}  {:<5}  {:<4}  {:>13}  {:>9}  {}\n",
        "ID", "KIND", "YEAR", "VIEWS", "LIKES", "TITLE"
    );
    for project in projects {
        out.push_str(&format!(
            "{:<11}  {:<5}  {:<4}  {:>13}  {:>9}  {}\n",
            project.id.as_str(),
            project.category.label(),
            project.year.as_deref().unwrap_or("-"),
            format_with_commas(project.statistics.view_count),
            format_with_commas(project.statistics.like_count),
            project.title,
        ));
    }
    out
}

/// Pretty JSON for any serializable report.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use showreel_core::{Category, VideoId, VideoStatistics};

    fn project(id: &str, category: Category, views: u64) -> VideoProject {
        let mut p = VideoProject::new(VideoId::parse(id).unwrap(), format!("Clip {id}"), category);
        p.statistics = VideoStatistics {
            view_count: views,
            like_count: views / 10,
        };
        p
    }

    #[test]
    fn test_stats_text() {
        let stats = AggregateStats {
            views: 1_234_567,
            likes: 8_900,
            videos: 38,
        };
        let text = stats_text(&stats);
        assert!(text.contains("1,234,567"));
        assert!(text.contains("(1.2M)"));
        assert!(text.contains("8,900"));
        assert!(text.contains("(8.9K)"));
        assert!(text.contains("38+"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_catalog_text_lists_every_project() {
        let mut short = project("PjDgNbg1RtM", Category::Short, 2_500);
        short.year = Some("2024".to_string());
        let projects = vec![project("r-_40oLqawY", Category::Video, 100), short];

        let text = catalog_text(&projects);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("r-_40oLqawY  Video  -"));
        assert!(lines[2].contains("Short  2024"));
        assert!(lines[2].contains("2,500"));
        assert!(lines[2].ends_with("Clip PjDgNbg1RtM"));
    }

    #[test]
    fn test_catalog_json_shape() {
        let projects = vec![project("UeNa1cJhO5s", Category::Video, 42)];
        let report = CatalogReport {
            stats: AggregateStats {
                views: 42,
                likes: 4,
                videos: 1,
            },
            from_cache: true,
            projects: &projects,
        };
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(value["stats"]["views"], 42);
        assert_eq!(value["from_cache"], true);
        assert_eq!(value["projects"][0]["id"], "UeNa1cJhO5s");
        assert_eq!(value["projects"][0]["statistics"]["view_count"], 42);
    }
}
