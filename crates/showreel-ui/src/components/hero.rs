//! Hero section.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Interval of the REC indicator blink.
pub const REC_BLINK_MS: u64 = 800;

/// Id of the section "View My Work" scrolls to.
pub const WORK_SECTION_ID: &str = "work";

const CONTACT_MAILTO: &str = "mailto:kadgonds@gmail.com";

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Instagram", "https://www.instagram.com/samundar.mai/"),
    ("Twitter", "https://x.com/samundarmai"),
    ("LinkedIn", "http://www.linkedin.com/in/sagarkadgond"),
];

fn scroll_to_work() {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(WORK_SECTION_ID))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Intro with the REC badge, calls to action and social links.
#[component]

pub fn Hero() -> impl IntoView {
    let (rec_on, set_rec_on) = signal(true);

    match set_interval_with_handle(
        move || set_rec_on.update(|on| *on = !*on),
        Duration::from_millis(REC_BLINK_MS),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => leptos::logging::warn!("REC indicator will not blink: {:?}", e),
    }

    view! {
        <section class="hero" id="top">
            <div class="rec-badge">
                <span class="rec-dot" class:rec-dot-off=move || !rec_on.get()></span>
                <span class="rec-label">"REC"</span>
            </div>
            <div class="hero-kicker">"VIDEO EDITOR"</div>
            <h1 class="hero-title">
                "Hi, I'm " <span class="hero-name">"Sagar Kadgond"</span> <br />
                "I craft compelling " <span class="hero-underline">"visual"</span> <br />
                "stories through editing."
            </h1>
            <p class="hero-subtitle">
                "Based in India, I transform raw footage into captivating visual narratives "
                "that evoke emotion and leave a lasting impression."
            </p>
            <div class="hero-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |e| {
                        e.stop_propagation();
                        scroll_to_work();
                    }
                >
                    "View My Work"
                </button>
                <a class="btn btn-secondary" href=CONTACT_MAILTO aria-label="Get in touch via email">
                    "Get in Touch"
                </a>
            </div>
            <ul class="social-links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|(name, url)| {
                        view! {
                            <li>
                                <a
                                    href=*url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=format!("Visit Sagar's {name} profile")
                                >
                                    {*name}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
