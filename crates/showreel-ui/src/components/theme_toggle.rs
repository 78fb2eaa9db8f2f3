//! Light/dark theme toggle.
//!
//! The preference is kept in the same key-value store as the response cache
//! and applied as `data-theme` on the document element.

use leptos::prelude::*;
use showreel_core::Theme;

use crate::storage::{BrowserStore, load_theme, save_theme};
use crate::theme::resolved_theme_attr;

const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

/// Context for reading and switching the theme.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current preference.
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    /// Switch between light and dark.
    pub fn toggle(&self) {
        self.set_theme.update(|theme| *theme = theme.toggled());
    }
}

/// Get the theme context.
///
/// # Panics
///
/// Panics if called outside of a [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn prefers_light() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(PREFERS_LIGHT_QUERY).ok().flatten())
        .is_some_and(|mql| mql.matches())
}

fn apply_theme(theme: Theme) {
    let attr = resolved_theme_attr(theme, prefers_light());
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        && let Err(e) = root.set_attribute("data-theme", attr)
    {
        leptos::logging::warn!("Failed to apply theme: {:?}", e);
    }
}

/// Provides [`ThemeContext`] and keeps the document and store in sync with it.
#[component]

pub fn ThemeProvider(
    /// Child components that can access the theme context.
    children: Children,
) -> impl IntoView {
    let store = StoredValue::new_local(BrowserStore::open());
    let initial = store.with_value(load_theme).unwrap_or_default();
    let (theme, set_theme) = signal(initial);
    provide_context(ThemeContext { theme, set_theme });

    Effect::new(move || {
        let current = theme.get();
        apply_theme(current);
        store.with_value(|s| save_theme(s, current));
    });

    children()
}

/// Button that flips the theme.
#[component]

pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let is_dark = move || resolved_theme_attr(ctx.theme.get(), prefers_light()) == "dark";

    view! {
        <button
            class="theme-toggle"
            aria-label=move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |e| {
                e.stop_propagation();
                ctx.toggle();
            }
        >
            {move || {
                if is_dark() {
                    view! {
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <circle cx="12" cy="12" r="5" />
                            <path d="M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42" />
                        </svg>
                    }
                        .into_any()
                } else {
                    view! {
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" />
                        </svg>
                    }
                        .into_any()
                }
            }}
        </button>
    }
}
