//! Carousel card for a single video.

use leptos::prelude::*;
use showreel_core::{VideoProject, placeholder_thumbnail};
use web_sys::{KeyboardEvent, MouseEvent};

/// Attribute carrying a card's position in the rendered sequence.
pub const CAROUSEL_INDEX_ATTR: &str = "data-carousel-index";

/// A thumbnail card linking to the video. Shorts render 9:16, everything
/// else 16:9. Hovering swaps the thumbnail for a muted looping preview.
#[component]

pub fn VideoCard(
    /// The project to display.
    project: VideoProject,
    /// Position in the rendered sequence.
    index: usize,
    /// Called on key presses while the card has focus.
    #[prop(optional)]
    on_keydown: Option<Callback<(usize, KeyboardEvent)>>,
    /// Called before the link is followed.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let (previewing, set_previewing) = signal(false);

    let card_class = if project.is_short {
        "video-card video-card-short"
    } else {
        "video-card video-card-wide"
    };
    let thumbnail = project
        .thumbnail_url
        .clone()
        .unwrap_or_else(|| placeholder_thumbnail(&project.id));
    let embed_url = project.id.preview_embed_url();
    let title = project.title.clone();
    let label = format!("Watch {}", project.title);
    let year = project.year.clone();

    view! {
        <a
            class=card_class
            href=project.watch_url()
            target="_blank"
            rel="noopener noreferrer"
            tabindex="0"
            draggable="false"
            aria-label=label
            data-carousel-index=index
            on:mouseenter=move |_| set_previewing.set(true)
            on:mouseleave=move |_| set_previewing.set(false)
            on:focus=move |_| set_previewing.set(true)
            on:blur=move |_| set_previewing.set(false)
            on:keydown=move |e| {
                if let Some(callback) = on_keydown {
                    callback.run((index, e));
                }
            }
            on:click=move |e| {
                if let Some(callback) = on_click {
                    callback.run(e);
                }
            }
        >
            <img
                class="video-thumbnail"
                src=thumbnail
                alt=title.clone()
                loading="lazy"
                draggable="false"
            />
            {move || {
                previewing
                    .get()
                    .then(|| {
                        view! {
                            <iframe
                                class="video-preview"
                                src=embed_url.clone()
                                title=format!("Preview of {title}")
                                allow="autoplay; encrypted-media"
                                tabindex="-1"
                            ></iframe>
                        }
                    })
            }}
            <div class="video-play" aria-hidden="true">
                <svg viewBox="0 0 24 24" fill="currentColor">
                    <path d="M8 5v14l11-7z" />
                </svg>
            </div>
            <div class="video-caption">
                <h3 class="video-title">{project.title.clone()}</h3>
                {year.map(|y| view! { <span class="video-year">{y}</span> })}
            </div>
        </a>
    }
}
