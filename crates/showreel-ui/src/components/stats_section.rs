//! Aggregate statistics with a count-up animation.
//!
//! Counting starts the first time the section scrolls into view and runs
//! once; targets that arrive later are picked up on the next frame.

use leptos::prelude::*;
use leptos::task::spawn_local;
use showreel_core::{CountUp, CountUpTrigger, format_compact, format_with_commas};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Skeleton;
use crate::app::use_portfolio;

/// Fraction of the section that must be visible to start counting.
const VISIBILITY_THRESHOLD: f64 = 0.3;

/// "Cut to the Numbers" section.
#[component]

pub fn StatsSection() -> impl IntoView {
    let portfolio = use_portfolio();
    let count_up = portfolio.config.with_value(|c| c.stats);
    let duration_ms = count_up.duration_ms;
    let tick_ms = count_up.tick_ms.max(1) as u32;

    let (elapsed, set_elapsed) = signal(0_u64);
    let trigger = StoredValue::new(CountUpTrigger::new());
    let observer = StoredValue::new_local(None::<IntersectionObserver>);
    let section_ref = NodeRef::<leptos::html::Section>::new();

    let start_counting = move || {
        spawn_local(async move {
            let started = js_sys::Date::now();
            loop {
                gloo_timers::future::TimeoutFuture::new(tick_ms).await;
                let ms = (js_sys::Date::now() - started).max(0.0) as u64;
                if set_elapsed.try_set(ms.min(duration_ms)).is_some() || ms >= duration_ms {
                    break;
                }
            }
        });
    };

    Effect::new(move || {
        let Some(section) = section_ref.get() else {
            return;
        };

        let on_visible = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, obs: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if trigger.try_update_value(|t| t.notify(visible)) == Some(true) {
                    obs.disconnect();
                    start_counting();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        match IntersectionObserver::new_with_options(on_visible.as_ref().unchecked_ref(), &options)
        {
            Ok(obs) => {
                obs.observe(&section);
                observer.set_value(Some(obs));
            }
            Err(e) => {
                leptos::logging::warn!("IntersectionObserver unavailable: {:?}", e);
                if trigger.try_update_value(|t| t.notify(true)) == Some(true) {
                    start_counting();
                }
            }
        }
        // Owned by the observer from here on.
        on_visible.forget();
    });

    on_cleanup(move || {
        if let Some(Some(obs)) = observer.try_get_value() {
            obs.disconnect();
        }
    });

    let animated = move |target: u64| CountUp::new(target, duration_ms).value_at(elapsed.get());
    let views = move || animated(portfolio.stats.get().views);
    let likes = move || animated(portfolio.stats.get().likes);
    let videos = move || animated(portfolio.stats.get().videos as u64);

    view! {
        <section class="stats-section" node_ref=section_ref aria-labelledby="stats-heading">
            <div class="section-heading centered">
                <h2 id="stats-heading">"Cut to the Numbers"</h2>
                <div class="section-rule" aria-hidden="true"></div>
                <p class="section-subtitle">
                    "From rough cuts to real results: numbers from behind the timeline"
                </p>
            </div>
            <div class="stats-grid" role="list">
                <StatCard
                    label="Total Views"
                    loading=portfolio.loading
                    value=Signal::derive(move || format_compact(views()))
                    spoken=Signal::derive(move || format!("{} total views", format_with_commas(views())))
                />
                <StatCard
                    label="Total Likes"
                    loading=portfolio.loading
                    value=Signal::derive(move || format_compact(likes()))
                    spoken=Signal::derive(move || format!("{} total likes", format_with_commas(likes())))
                />
                <StatCard
                    label="Videos"
                    loading=portfolio.loading
                    value=Signal::derive(move || format!("{}+", videos()))
                    spoken=Signal::derive(move || format!("{}+ videos", videos()))
                />
            </div>
        </section>
    }
}

/// One counter in the stats grid.
#[component]
fn StatCard(
    /// Caption below the number.
    label: &'static str,
    /// Show a skeleton instead of the number.
    #[prop(into)]
    loading: Signal<bool>,
    /// Displayed number.
    value: Signal<String>,
    /// Screen-reader text.
    spoken: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card" role="listitem">
            {move || {
                if loading.get() {
                    view! { <Skeleton count=1 class="skeleton-stat" /> }.into_any()
                } else {
                    view! {
                        <p class="stat-value" aria-live="polite">
                            <span aria-hidden="true">{move || value.get()}</span>
                            <span class="sr-only">{move || spoken.get()}</span>
                        </p>
                    }
                        .into_any()
                }
            }}
            <h3 class="stat-label">{label}</h3>
        </div>
    }
}
