//! Header component.

use leptos::prelude::*;

use super::ThemeToggle;

/// Page header with the wordmark and theme toggle.
#[component]

pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="logo" href="#top">
                <span class="logo-text">"sk"</span>
                <span class="logo-dot">"."</span>
            </a>
            <ThemeToggle />
        </header>
    }
}
