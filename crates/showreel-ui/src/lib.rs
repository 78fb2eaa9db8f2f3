//! `Showreel` UI - Leptos-based portfolio site.
//!
//! This crate renders the portfolio in the browser and adapts the core
//! library to it: `localStorage` for the response cache, `Date.now()` as the
//! clock and `window.ENV_CONFIG` for runtime configuration.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// Cast wrapping is acceptable for display purposes
#![allow(clippy::cast_possible_wrap)]
// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod app;
pub mod components;
pub mod env;
pub mod storage;
pub mod theme;

pub use app::App;
