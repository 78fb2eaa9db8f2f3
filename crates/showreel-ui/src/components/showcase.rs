//! Infinite auto-scrolling video carousel.
//!
//! The list is rendered several times back to back and translated by the
//! controller's offset. A fixed-interval ticker feeds elapsed wall time into
//! [`CarouselController::step`]; pointer, hover, arrow and keyboard input
//! go straight to the controller.

use std::time::Duration;

use leptos::ev;
use leptos::leptos_dom::helpers::{
    request_animation_frame, set_interval_with_handle, window_event_listener,
};
use leptos::prelude::*;
use showreel_core::{
    CARD_GAP_PX, CarouselConfig, CarouselController, Direction, VideoProject, render_sequence,
};
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};

use super::VideoCard;
use super::video_card::CAROUSEL_INDEX_ATTR;

/// Ticker interval driving the auto-scroll.
pub const CAROUSEL_TICK_MS: u64 = 16;

// Pointer travel below this still counts as a click.
const CLICK_SLOP_PX: f64 = 5.0;

/// Carousel over `projects`.
#[component]

pub fn Showcase(
    /// Projects in display order.
    #[prop(into)]
    projects: Signal<Vec<VideoProject>>,
    /// Motion settings.
    #[prop(optional)]
    config: Option<CarouselConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let controller = StoredValue::new(CarouselController::new(config));
    let (offset, set_offset) = signal(0.0_f64);
    let (dragging, set_dragging) = signal(false);
    let drag_origin = StoredValue::new(0.0_f64);
    let drag_travel = StoredValue::new(0.0_f64);
    let track_ref = NodeRef::<leptos::html::Div>::new();

    let sequence = Memo::new(move |_| render_sequence(&projects.get(), config.copies));

    let measure = move || {
        if let Some(track) = track_ref.get_untracked() {
            let width = CarouselController::measure_set_width(
                f64::from(track.scroll_width()),
                CARD_GAP_PX,
                config.copies,
            );
            controller.update_value(|c| c.set_set_width(width));
        }
    };

    let focus_card = move |index: usize| {
        let selector = format!("[{CAROUSEL_INDEX_ATTR}=\"{index}\"]");
        if let Some(track) = track_ref.get_untracked()
            && let Ok(Some(card)) = track.query_selector(&selector)
            && let Ok(card) = card.dyn_into::<web_sys::HtmlElement>()
            && let Err(e) = card.focus()
        {
            leptos::logging::warn!("Failed to focus card {}: {:?}", index, e);
        }
    };

    // Re-measure whenever the rendered set changes.
    Effect::new(move || {
        let count = sequence.with(Vec::len);
        controller.update_value(|c| c.set_item_count(count));
        request_animation_frame(measure);
    });

    let last_tick = StoredValue::new(js_sys::Date::now());
    match set_interval_with_handle(
        move || {
            let now = js_sys::Date::now();
            let elapsed = now - last_tick.get_value();
            last_tick.set_value(now);

            if controller.with_value(|c| c.set_width() <= 0.0) {
                measure();
            }
            if let Some(next) = controller.try_update_value(|c| c.step(elapsed)) {
                set_offset.set(next);
            }
        },
        Duration::from_millis(CAROUSEL_TICK_MS),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => leptos::logging::error!("Failed to start carousel ticker: {:?}", e),
    }

    let resize = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || resize.remove());

    let on_card_keydown = Callback::new(move |(index, e): (usize, KeyboardEvent)| {
        let target = match e.key().as_str() {
            "ArrowRight" => controller.with_value(|c| c.focus_next(index)),
            "ArrowLeft" => controller.with_value(|c| c.focus_prev(index)),
            _ => None,
        };
        if let Some(next) = target {
            e.prevent_default();
            focus_card(next);
        }
    });

    // A drag that ends over a card must not open it.
    let on_card_click = Callback::new(move |e: MouseEvent| {
        if drag_travel.get_value() > CLICK_SLOP_PX {
            e.prevent_default();
        }
    });

    let nudge = move |direction: Direction| {
        controller.update_value(|c| c.nudge(direction));
    };

    view! {
        <div
            class="carousel"
            aria-label="Video showcase carousel"
            on:mouseenter=move |_| controller.update_value(CarouselController::hover_enter)
            on:mouseleave=move |_| controller.update_value(CarouselController::hover_leave)
        >
            <button
                class="carousel-arrow carousel-arrow-left"
                aria-label="Previous videos"
                on:click=move |e| {
                    e.stop_propagation();
                    nudge(Direction::Left);
                }
            >
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M15 18l-6-6 6-6" />
                </svg>
            </button>

            <div
                class="carousel-viewport"
                class:carousel-dragging=move || dragging.get()
                on:pointerdown=move |e| {
                    let x = f64::from(e.client_x());
                    drag_origin.set_value(x);
                    drag_travel.set_value(0.0);
                    controller.update_value(|c| c.pointer_down(x));
                    set_dragging.set(true);
                }
                on:pointermove=move |e| {
                    if !dragging.get_untracked() {
                        return;
                    }
                    let x = f64::from(e.client_x());
                    drag_travel.set_value((x - drag_origin.get_value()).abs());
                    if let Some(next) = controller
                        .try_update_value(|c| {
                            c.pointer_move(x);
                            c.offset()
                        })
                    {
                        set_offset.set(next);
                    }
                }
                on:pointerup=move |_| {
                    controller.update_value(CarouselController::pointer_up);
                    set_dragging.set(false);
                }
                on:pointerleave=move |_| {
                    controller.update_value(CarouselController::pointer_leave);
                    set_dragging.set(false);
                }
            >
                <div
                    class="carousel-track"
                    node_ref=track_ref
                    style:transform=move || format!("translate3d({}px, 0, 0)", -offset.get())
                >
                    <For
                        each=move || sequence.get().into_iter().enumerate()
                        key=|(index, project)| {
                            (*index, project.id.clone(), project.thumbnail_url.clone())
                        }
                        children=move |(index, project)| {
                            view! {
                                <VideoCard
                                    project=project
                                    index=index
                                    on_keydown=on_card_keydown
                                    on_click=on_card_click
                                />
                            }
                        }
                    />
                </div>
                {move || {
                    sequence
                        .with(Vec::is_empty)
                        .then(|| {
                            view! {
                                <p class="carousel-empty">"No videos in this category yet."</p>
                            }
                        })
                }}
            </div>

            <button
                class="carousel-arrow carousel-arrow-right"
                aria-label="Next videos"
                on:click=move |e| {
                    e.stop_propagation();
                    nudge(Direction::Right);
                }
            >
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M9 18l6-6-6-6" />
                </svg>
            </button>
        </div>
    }
}
