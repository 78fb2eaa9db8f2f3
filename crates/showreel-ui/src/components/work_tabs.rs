//! Work section: category tabs above the carousel.

use leptos::prelude::*;
use showreel_core::{VideoProject, WorkTab};

use super::Showcase;
use super::hero::WORK_SECTION_ID;
use crate::app::use_portfolio;

/// Tab strip for [`WorkTab`].
#[component]

pub fn WorkTabs(
    /// Currently selected tab.
    #[prop(into)]
    active: Signal<WorkTab>,
    /// Called when a tab is picked.
    on_select: Callback<WorkTab>,
) -> impl IntoView {
    view! {
        <div class="work-tabs" role="tablist">
            {WorkTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="work-tab"
                            class:work-tab-active=move || active.get() == tab
                            role="tab"
                            aria-selected=move || (active.get() == tab).to_string()
                            on:click=move |e| {
                                e.stop_propagation();
                                on_select.run(tab);
                            }
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// "Selected Work" section with tabs and the carousel.
#[component]

pub fn WorkSection() -> impl IntoView {
    let portfolio = use_portfolio();
    let (tab, set_tab) = signal(WorkTab::default());
    let carousel = portfolio.config.with_value(|c| c.carousel);

    let visible = Signal::derive(move || {
        let tab = tab.get();
        portfolio.projects.with(|projects| {
            projects
                .iter()
                .filter(|p| tab.includes(p))
                .cloned()
                .collect::<Vec<VideoProject>>()
        })
    });

    view! {
        <section id=WORK_SECTION_ID class="work-section" aria-labelledby="work-heading">
            <div class="section-heading">
                <h2 id="work-heading">"Selected Work"</h2>
                <div class="section-rule" aria-hidden="true"></div>
            </div>
            <WorkTabs active=tab on_select=Callback::new(move |t| set_tab.set(t)) />
            <Showcase projects=visible config=carousel />
        </section>
    }
}
