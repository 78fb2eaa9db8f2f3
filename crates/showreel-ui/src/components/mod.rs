//! UI components for the portfolio page.

mod footer;
mod header;
mod hero;
mod loading;
mod showcase;
mod stats_section;
mod theme_toggle;
mod video_card;
mod work_tabs;

pub use footer::Footer;
pub use header::Header;
pub use hero::{Hero, REC_BLINK_MS};
pub use loading::Skeleton;
pub use showcase::{CAROUSEL_TICK_MS, Showcase};
pub use stats_section::StatsSection;
pub use theme_toggle::{ThemeContext, ThemeProvider, ThemeToggle, use_theme};
pub use video_card::{CAROUSEL_INDEX_ATTR, VideoCard};
pub use work_tabs::{WorkSection, WorkTabs};
