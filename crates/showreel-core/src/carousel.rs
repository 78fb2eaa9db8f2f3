//! Infinite-loop carousel controller.
//!
//! The carousel renders several back-to-back copies of the item list and
//! scrolls a horizontal offset across them. Whenever the offset leaves the
//! first copy it is shifted by exactly one set width, which is invisible
//! because the copies are identical.
//!
//! The controller is pure state: the UI feeds it elapsed time, pointer and
//! hover events and the measured set width, and reads back the offset.

use serde::{Deserialize, Serialize};

/// Auto-scroll speed: 2 px every 15 ms.
pub const DEFAULT_SPEED_PX_PER_SEC: f64 = 2.0 * 1000.0 / 15.0;

/// Distance covered by one arrow press.
pub const DEFAULT_ARROW_JUMP_PX: f64 = 600.0;

/// Drag distance multiplier.
pub const DEFAULT_DRAG_MULTIPLIER: f64 = 2.0;

/// Number of rendered copies of the item list.
pub const DEFAULT_COPIES: usize = 3;

/// Horizontal gap between cards, in pixels.
pub const CARD_GAP_PX: f64 = 12.0;

// A long pause (hidden tab, debugger) must not fling the track.
const MAX_STEP_MS: f64 = 100.0;

// Time constant of the arrow glide's exponential approach.
const GLIDE_TIME_CONSTANT_MS: f64 = 120.0;

const GLIDE_SNAP_PX: f64 = 0.5;

/// Carousel motion settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Auto-scroll speed.
    #[serde(default = "default_speed")]
    pub speed_px_per_sec: f64,
    /// Distance per arrow press.
    #[serde(default = "default_arrow_jump")]
    pub arrow_jump_px: f64,
    /// Offset change per pixel of pointer travel.
    #[serde(default = "default_drag_multiplier")]
    pub drag_multiplier: f64,
    /// Rendered copies of the item list.
    #[serde(default = "default_copies")]
    pub copies: usize,
}

const fn default_speed() -> f64 {
    DEFAULT_SPEED_PX_PER_SEC
}

const fn default_arrow_jump() -> f64 {
    DEFAULT_ARROW_JUMP_PX
}

const fn default_drag_multiplier() -> f64 {
    DEFAULT_DRAG_MULTIPLIER
}

const fn default_copies() -> usize {
    DEFAULT_COPIES
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            speed_px_per_sec: DEFAULT_SPEED_PX_PER_SEC,
            arrow_jump_px: DEFAULT_ARROW_JUMP_PX,
            drag_multiplier: DEFAULT_DRAG_MULTIPLIER,
            copies: DEFAULT_COPIES,
        }
    }
}

/// Who is driving the offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CarouselState {
    /// The controller advances the offset over time.
    #[default]
    AutoScrolling,
    /// The user is dragging the track.
    Dragging,
}

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward earlier items.
    Left,
    /// Toward later items.
    Right,
}

impl Direction {
    const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Scroll state of one carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselController {
    config: CarouselConfig,
    state: CarouselState,
    offset: f64,
    set_width: f64,
    hovered: bool,
    pending_glide: f64,
    drag_start_x: f64,
    drag_start_offset: f64,
    item_count: usize,
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl CarouselController {
    /// Create a controller at offset zero with an unknown set width.
    #[must_use]
    pub const fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            state: CarouselState::AutoScrolling,
            offset: 0.0,
            set_width: 0.0,
            hovered: false,
            pending_glide: 0.0,
            drag_start_x: 0.0,
            drag_start_offset: 0.0,
            item_count: 0,
        }
    }

    /// Current scroll offset in pixels.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> CarouselState {
        self.state
    }

    /// Measured width of one copy of the item list.
    #[must_use]
    pub const fn set_width(&self) -> f64 {
        self.set_width
    }

    /// Whether the pointer is over the carousel.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Arrow distance not yet travelled.
    #[must_use]
    pub const fn pending_glide(&self) -> f64 {
        self.pending_glide
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Advance by `elapsed_ms` of wall time and return the new offset.
    ///
    /// Auto-scroll stops while hovered; an arrow glide keeps going. Nothing
    /// moves while dragging.
    pub fn step(&mut self, elapsed_ms: f64) -> f64 {
        if self.state == CarouselState::Dragging || !elapsed_ms.is_finite() {
            return self.offset;
        }
        let dt = elapsed_ms.clamp(0.0, MAX_STEP_MS);

        if !self.hovered {
            self.offset += self.config.speed_px_per_sec * dt / 1000.0;
        }

        if self.pending_glide != 0.0 {
            let mut portion = self.pending_glide * (1.0 - (-dt / GLIDE_TIME_CONSTANT_MS).exp());
            if (self.pending_glide - portion).abs() < GLIDE_SNAP_PX {
                portion = self.pending_glide;
            }
            self.offset += portion;
            self.pending_glide -= portion;
        }

        self.wrap();
        self.offset
    }

    /// Record the measured single-set width and re-wrap the offset.
    ///
    /// Non-finite or negative widths count as unknown.
    pub fn set_set_width(&mut self, width: f64) {
        self.set_width = if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        };
        self.wrap();
    }

    /// Single-set width from the track's total scroll width.
    ///
    /// The trailing gap after the last card is missing from the scroll
    /// width, so it is added back before dividing.
    #[must_use]
    pub fn measure_set_width(scroll_width: f64, gap_px: f64, copies: usize) -> f64 {
        if copies == 0 || scroll_width <= 0.0 {
            return 0.0;
        }
        (scroll_width + gap_px) / copies as f64
    }

    /// Start a drag at horizontal position `x`.
    pub const fn pointer_down(&mut self, x: f64) {
        self.state = CarouselState::Dragging;
        self.drag_start_x = x;
        self.drag_start_offset = self.offset;
        self.pending_glide = 0.0;
    }

    /// Follow the pointer during a drag. Ignored otherwise.
    pub fn pointer_move(&mut self, x: f64) {
        if self.state != CarouselState::Dragging {
            return;
        }
        self.offset =
            self.drag_start_offset + (self.drag_start_x - x) * self.config.drag_multiplier;
        self.wrap();
    }

    /// End a drag.
    pub const fn pointer_up(&mut self) {
        self.state = CarouselState::AutoScrolling;
    }

    /// End a drag because the pointer left the track.
    pub const fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Pause auto-scroll while the pointer is over the carousel.
    pub const fn hover_enter(&mut self) {
        self.hovered = true;
    }

    /// Resume auto-scroll.
    pub const fn hover_leave(&mut self) {
        self.hovered = false;
    }

    /// Queue an arrow jump, consumed smoothly by [`step`](Self::step).
    pub fn nudge(&mut self, direction: Direction) {
        self.pending_glide += direction.sign() * self.config.arrow_jump_px;
    }

    /// Record how many items are rendered, for keyboard focus.
    pub const fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
    }

    /// Rendered item count.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Index focused by ArrowRight from `index`.
    #[must_use]
    pub const fn focus_next(&self, index: usize) -> Option<usize> {
        next_index(index, self.item_count)
    }

    /// Index focused by ArrowLeft from `index`.
    #[must_use]
    pub const fn focus_prev(&self, index: usize) -> Option<usize> {
        prev_index(index, self.item_count)
    }

    fn wrap(&mut self) {
        if self.set_width > 0.0 {
            self.offset = self.offset.rem_euclid(self.set_width);
            // rem_euclid rounds a tiny negative offset up to exactly the width.
            if self.offset >= self.set_width {
                self.offset = 0.0;
            }
        }
    }
}

/// `(index + 1) % count`, or `None` when there is nothing to focus.
#[must_use]
pub const fn next_index(index: usize, count: usize) -> Option<usize> {
    if count == 0 {
        None
    } else {
        Some((index % count + 1) % count)
    }
}

/// `(index - 1 + count) % count`, or `None` when there is nothing to focus.
#[must_use]
pub const fn prev_index(index: usize, count: usize) -> Option<usize> {
    if count == 0 {
        None
    } else {
        Some((index % count + count - 1) % count)
    }
}

/// The sequence actually rendered: `copies` back-to-back repeats of `items`.
#[must_use]
pub fn render_sequence<T: Clone>(items: &[T], copies: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() * copies);
    for _ in 0..copies {
        out.extend_from_slice(items);
    }
    out
}
