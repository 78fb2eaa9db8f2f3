//! Theme configuration for `Showreel`.
//!
//! Two palettes share one set of CSS variable names; the active one is picked
//! by the `data-theme` attribute on the document element.

use showreel_core::Theme;

/// Color palette for the site.
pub mod colors {
    /// Dark palette (default).
    pub mod dark {
        /// Page background.
        pub const BACKGROUND: &str = "#0a0a0a";
        /// Cards and raised surfaces.
        pub const SURFACE: &str = "#161616";
        /// Skeleton blocks and hovered surfaces.
        pub const MUTED: &str = "#262626";
        /// Primary text.
        pub const TEXT: &str = "#fafafa";
        /// Secondary text.
        pub const TEXT_MUTED: &str = "#a3a3a3";
        /// Hairlines.
        pub const BORDER: &str = "rgba(255, 255, 255, 0.08)";
        /// Header backdrop.
        pub const GLASS: &str = "rgba(10, 10, 10, 0.75)";
    }

    /// Light palette.
    pub mod light {
        /// Page background.
        pub const BACKGROUND: &str = "#ffffff";
        /// Cards and raised surfaces.
        pub const SURFACE: &str = "#f5f5f5";
        /// Skeleton blocks and hovered surfaces.
        pub const MUTED: &str = "#e5e5e5";
        /// Primary text.
        pub const TEXT: &str = "#0a0a0a";
        /// Secondary text.
        pub const TEXT_MUTED: &str = "#525252";
        /// Hairlines.
        pub const BORDER: &str = "rgba(0, 0, 0, 0.08)";
        /// Header backdrop.
        pub const GLASS: &str = "rgba(255, 255, 255, 0.75)";
    }

    /// Accents shared by both palettes.
    pub mod accent {
        /// Recording indicator and highlights.
        pub const REC: &str = "#ef4444";
        /// Links and focus rings.
        pub const PRIMARY: &str = "#f97316";
        /// Play button overlay.
        pub const OVERLAY: &str = "rgba(0, 0, 0, 0.45)";
    }
}

/// Typography settings.
pub mod typography {
    /// Body font stack.
    pub const FONT_FAMILY: &str =
        "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif";
    /// Heading font stack.
    pub const FONT_FAMILY_HEADING: &str = "'Inter', -apple-system, BlinkMacSystemFont, sans-serif";
    /// Monospace stack, used for the REC badge and counters.
    pub const FONT_FAMILY_MONO: &str = "'JetBrains Mono', ui-monospace, SFMono-Regular, monospace";
}

/// Card geometry.
pub mod cards {
    /// Height shared by both card shapes.
    pub const HEIGHT: &str = "350px";
    /// Width of a 9:16 shorts card.
    pub const SHORT_WIDTH: &str = "197px";
    /// Width of a 16:9 long-form card.
    pub const VIDEO_WIDTH: &str = "500px";
    /// Gap between cards; must match the core carousel gap.
    pub const GAP: &str = "12px";
}

/// Border radius values.
pub mod radius {
    /// Small radius.
    pub const SM: &str = "6px";
    /// Card radius.
    pub const MD: &str = "12px";
    /// Pill radius.
    pub const FULL: &str = "9999px";
}

/// Transitions.
pub mod animation {
    /// Hover and tab changes.
    pub const FAST: &str = "150ms ease-out";
    /// Theme switches.
    pub const NORMAL: &str = "300ms ease";
}

/// `data-theme` value for `theme`, resolving [`Theme::System`] against the
/// browser preference.
#[must_use]
pub const fn resolved_theme_attr(theme: Theme, prefers_light: bool) -> &'static str {
    match theme {
        Theme::System if prefers_light => Theme::Light.as_str(),
        Theme::System => Theme::Dark.as_str(),
        other => other.as_str(),
    }
}

/// Generate CSS custom properties for both palettes.
#[must_use]
pub fn generate_css_variables() -> String {
    format!(
        r#":root {{
  --font-family: {font_family};
  --font-family-heading: {font_family_heading};
  --font-family-mono: {font_family_mono};

  --card-height: {card_height};
  --card-short-width: {card_short_width};
  --card-video-width: {card_video_width};
  --card-gap: {card_gap};

  --radius-sm: {radius_sm};
  --radius-md: {radius_md};
  --radius-full: {radius_full};

  --transition-fast: {transition_fast};
  --transition-normal: {transition_normal};

  --accent-rec: {accent_rec};
  --accent-primary: {accent_primary};
  --overlay: {overlay};
}}

:root, [data-theme="dark"] {{
  --bg: {dark_bg};
  --surface: {dark_surface};
  --muted: {dark_muted};
  --text: {dark_text};
  --text-muted: {dark_text_muted};
  --border: {dark_border};
  --glass: {dark_glass};
}}

[data-theme="light"] {{
  --bg: {light_bg};
  --surface: {light_surface};
  --muted: {light_muted};
  --text: {light_text};
  --text-muted: {light_text_muted};
  --border: {light_border};
  --glass: {light_glass};
}}"#,
        font_family = typography::FONT_FAMILY,
        font_family_heading = typography::FONT_FAMILY_HEADING,
        font_family_mono = typography::FONT_FAMILY_MONO,
        card_height = cards::HEIGHT,
        card_short_width = cards::SHORT_WIDTH,
        card_video_width = cards::VIDEO_WIDTH,
        card_gap = cards::GAP,
        radius_sm = radius::SM,
        radius_md = radius::MD,
        radius_full = radius::FULL,
        transition_fast = animation::FAST,
        transition_normal = animation::NORMAL,
        accent_rec = colors::accent::REC,
        accent_primary = colors::accent::PRIMARY,
        overlay = colors::accent::OVERLAY,
        dark_bg = colors::dark::BACKGROUND,
        dark_surface = colors::dark::SURFACE,
        dark_muted = colors::dark::MUTED,
        dark_text = colors::dark::TEXT,
        dark_text_muted = colors::dark::TEXT_MUTED,
        dark_border = colors::dark::BORDER,
        dark_glass = colors::dark::GLASS,
        light_bg = colors::light::BACKGROUND,
        light_surface = colors::light::SURFACE,
        light_muted = colors::light::MUTED,
        light_text = colors::light::TEXT,
        light_text_muted = colors::light::TEXT_MUTED,
        light_border = colors::light::BORDER,
        light_glass = colors::light::GLASS,
    )
}
