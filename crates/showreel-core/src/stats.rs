//! Portfolio totals and their count-up presentation.

use serde::{Deserialize, Serialize};

use crate::catalog::VideoProject;

/// Default count-up duration in milliseconds.
pub const DEFAULT_COUNT_UP_DURATION_MS: u64 = 2000;

/// Default interval between count-up frames in milliseconds.
pub const DEFAULT_COUNT_UP_TICK_MS: u64 = 20;

/// Summed statistics across the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Total views.
    pub views: u64,
    /// Total likes.
    pub likes: u64,
    /// Number of catalog entries.
    pub videos: usize,
}

impl AggregateStats {
    /// Label for the video counter, e.g. `38+`.
    #[must_use]
    pub fn videos_label(&self) -> String {
        format!("{}+", self.videos)
    }
}

/// Sum view and like counts over `projects`.
#[must_use]
pub fn aggregate(projects: &[VideoProject]) -> AggregateStats {
    projects.iter().fold(
        AggregateStats {
            videos: projects.len(),
            ..AggregateStats::default()
        },
        |acc, p| AggregateStats {
            views: acc.views.saturating_add(p.statistics.view_count),
            likes: acc.likes.saturating_add(p.statistics.like_count),
            videos: acc.videos,
        },
    )
}

/// Count-up timing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountUpConfig {
    /// Total animation time.
    #[serde(default = "default_duration")]
    pub duration_ms: u64,
    /// Interval between displayed frames.
    #[serde(default = "default_tick")]
    pub tick_ms: u64,
}

const fn default_duration() -> u64 {
    DEFAULT_COUNT_UP_DURATION_MS
}

const fn default_tick() -> u64 {
    DEFAULT_COUNT_UP_TICK_MS
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_COUNT_UP_DURATION_MS,
            tick_ms: DEFAULT_COUNT_UP_TICK_MS,
        }
    }
}

/// Linear interpolation from zero to a target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    duration_ms: u64,
}

impl CountUp {
    /// Count up to `target` over `duration_ms`.
    #[must_use]
    pub const fn new(target: u64, duration_ms: u64) -> Self {
        Self {
            target,
            duration_ms,
        }
    }

    /// Count up to `target` with the configured duration.
    #[must_use]
    pub const fn with_config(target: u64, config: &CountUpConfig) -> Self {
        Self::new(target, config.duration_ms)
    }

    /// Final value.
    #[must_use]
    pub const fn target(&self) -> u64 {
        self.target
    }

    /// Displayed value after `elapsed_ms`, floored and never above the target.
    #[must_use]
    pub fn value_at(&self, elapsed_ms: u64) -> u64 {
        if self.is_finished(elapsed_ms) {
            return self.target;
        }
        let scaled = u128::from(self.target) * u128::from(elapsed_ms) / u128::from(self.duration_ms);
        u64::try_from(scaled).unwrap_or(self.target).min(self.target)
    }

    /// Whether the animation has reached its target.
    #[must_use]
    pub const fn is_finished(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// Latch that fires on the first visibility notification only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountUpTrigger {
    fired: bool,
}

impl CountUpTrigger {
    /// Create an unfired trigger.
    #[must_use]
    pub const fn new() -> Self {
        Self { fired: false }
    }

    /// Report a visibility change. Returns `true` exactly once, on the first
    /// notification with `visible == true`.
    pub const fn notify(&mut self, visible: bool) -> bool {
        if visible && !self.fired {
            self.fired = true;
            true
        } else {
            false
        }
    }

    /// Whether the trigger has fired.
    #[must_use]
    pub const fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Format with thousands separators: `1234567` → `1,234,567`.
#[must_use]
pub fn format_with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Compact form with a `K`, `M` or `B` suffix: `1500` → `1.5K`, `2000000` → `2M`.
#[must_use]
pub fn format_compact(value: u64) -> String {
    const UNITS: [(u64, &str); 3] = [
        (1_000_000_000, "B"),
        (1_000_000, "M"),
        (1_000, "K"),
    ];

    for (scale, suffix) in UNITS {
        if value >= scale {
            let scaled = format!("{:.1}", value as f64 / scale as f64);
            let trimmed = scaled.strip_suffix(".0").unwrap_or(&scaled);
            return format!("{trimmed}{suffix}");
        }
    }
    value.to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::{Category, VideoStatistics};
    use crate::video_id::VideoId;

    fn project(id: &str, views: u64, likes: u64) -> VideoProject {
        let mut p = VideoProject::new(VideoId::parse(id).unwrap(), "t", Category::Video);
        p.statistics = VideoStatistics {
            view_count: views,
            like_count: likes,
        };
        p
    }

    #[test]
    fn test_aggregate_sums_views() {
        let projects = vec![
            project("r-_40oLqawY", 100, 3),
            project("UeNa1cJhO5s", 200, 4),
        ];
        let stats = aggregate(&projects);
        assert_eq!(stats.views, 300);
        assert_eq!(stats.likes, 7);
        assert_eq!(stats.videos, 2);
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[]), AggregateStats::default());
    }

    #[test]
    fn test_aggregate_matches_per_item_sum() {
        let projects: Vec<_> = (0..10_u64)
            .map(|i| project("5KvmYGkMIvM", i * 1_000, i))
            .collect();
        let stats = aggregate(&projects);
        let expected: u64 = projects.iter().map(|p| p.statistics.view_count).sum();
        assert_eq!(stats.views, expected);
        assert_eq!(stats.likes, 45);
    }

    #[test]
    fn test_aggregate_saturates() {
        let projects = vec![
            project("r-_40oLqawY", u64::MAX, 0),
            project("UeNa1cJhO5s", 1, 0),
        ];
        assert_eq!(aggregate(&projects).views, u64::MAX);
    }

    #[test]
    fn test_videos_label() {
        let stats = AggregateStats {
            videos: 38,
            ..AggregateStats::default()
        };
        assert_eq!(stats.videos_label(), "38+");
    }

    #[test]
    fn test_count_up_interpolates() {
        let count = CountUp::new(1_000, 2_000);
        assert_eq!(count.value_at(0), 0);
        assert_eq!(count.value_at(500), 250);
        assert_eq!(count.value_at(1_999), 999);
        assert_eq!(count.value_at(2_000), 1_000);
        assert_eq!(count.value_at(10_000), 1_000);
        assert!(!count.is_finished(1_999));
        assert!(count.is_finished(2_000));
    }

    #[test]
    fn test_count_up_floors() {
        let count = CountUp::new(7, 2_000);
        assert_eq!(count.value_at(1_000), 3);
    }

    #[test]
    fn test_count_up_zero_duration() {
        let count = CountUp::new(42, 0);
        assert_eq!(count.value_at(0), 42);
    }

    #[test]
    fn test_count_up_large_target() {
        let count = CountUp::with_config(u64::MAX, &CountUpConfig::default());
        assert_eq!(count.value_at(1_000), u64::MAX / 2);
        assert_eq!(count.target(), u64::MAX);
    }

    #[test]
    fn test_trigger_fires_once() {
        let mut trigger = CountUpTrigger::new();
        assert!(!trigger.notify(false));
        assert!(trigger.notify(true));
        assert!(trigger.has_fired());
        assert!(!trigger.notify(false));
        assert!(!trigger.notify(true));
    }

    #[test]
    fn test_format_with_commas() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1_000), "1,000");
        assert_eq!(format_with_commas(1_234_567), "1,234,567");
        assert_eq!(format_with_commas(12_345_678_901), "12,345,678,901");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(1_000), "1K");
        assert_eq!(format_compact(1_500), "1.5K");
        assert_eq!(format_compact(2_000_000), "2M");
        assert_eq!(format_compact(2_340_000), "2.3M");
        assert_eq!(format_compact(1_000_000_000), "1B");
        assert_eq!(format_compact(7_260_000_000), "7.3B");
    }
}
