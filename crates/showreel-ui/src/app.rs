//! Main application component.

use leptos::prelude::*;
use leptos::task::spawn_local;
use rand::SeedableRng;
use rand::rngs::StdRng;
use showreel_core::{
    AggregateStats, Catalog, DetailFetcher, SiteConfig, VideoProject, YouTubeClient, aggregate,
    fallback, shuffled,
};

use crate::components::{Footer, Header, Hero, StatsSection, ThemeProvider, WorkSection};
use crate::env::load_site_config;
use crate::storage::{BrowserClock, BrowserStore};
use crate::theme::generate_css_variables;

/// Portfolio data shared with the sections below the header.
#[derive(Clone, Copy)]
pub struct PortfolioContext {
    /// Catalog entries in display order, enriched once details arrive.
    pub projects: ReadSignal<Vec<VideoProject>>,
    /// Totals across the catalog.
    pub stats: ReadSignal<AggregateStats>,
    /// Whether details are still being fetched.
    pub loading: ReadSignal<bool>,
    /// Configuration for this page load.
    pub config: StoredValue<SiteConfig>,
}

/// Access the portfolio context.
///
/// # Panics
///
/// Panics if called outside of [`App`].
pub fn use_portfolio() -> PortfolioContext {
    expect_context::<PortfolioContext>()
}

/// Catalog entries in shuffled display order with placeholder thumbnails.
pub fn initial_projects(catalog: &Catalog, seed: u64) -> Vec<VideoProject> {
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled(&catalog.latest_first(), &mut rng)
        .iter()
        .map(fallback)
        .collect()
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Main application component.
#[component]

pub fn App() -> impl IntoView {
    let css_vars = generate_css_variables();

    let config = load_site_config();
    let initial = initial_projects(&Catalog::portfolio(), random_seed());

    let (projects, set_projects) = signal(initial.clone());
    let (stats, set_stats) = signal(aggregate(&initial));
    let (loading, set_loading) = signal(true);

    provide_context(PortfolioContext {
        projects,
        stats,
        loading,
        config: StoredValue::new(config.clone()),
    });

    // Fetch details once on mount; placeholders are already on screen.
    Effect::new(move || {
        let config = config.clone();
        let input = initial.clone();
        spawn_local(async move {
            let client = match YouTubeClient::new(&config) {
                Ok(client) => client,
                Err(e) => {
                    leptos::logging::error!("Video details unavailable: {}", e);
                    set_loading.set(false);
                    return;
                }
            };

            let fetcher = DetailFetcher::new(client, BrowserStore::open(), BrowserClock, &config);
            if let Some(cached) = fetcher.cached_stats() {
                set_stats.set(cached);
            }

            let (enriched, totals) = fetcher.enrich(&input).await;
            leptos::logging::log!(
                "Loaded details for {} videos ({} views)",
                enriched.len(),
                totals.views
            );
            set_projects.set(enriched);
            set_stats.set(totals);
            set_loading.set(false);
        });
    });

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <ThemeProvider>
            <Header />
            <main class="page">
                <Hero />
                <WorkSection />
                <StatsSection />
            </main>
            <Footer />
        </ThemeProvider>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_projects_is_permutation_with_placeholders() {
        let catalog = Catalog::portfolio();
        let projects = initial_projects(&catalog, 7);

        assert_eq!(projects.len(), catalog.len());
        let mut ids: Vec<_> = projects.iter().map(|p| p.id.to_string()).collect();
        let mut expected: Vec<_> = catalog.iter().map(|p| p.id.to_string()).collect();
        ids.sort();
        expected.sort();
        assert_eq!(ids, expected);

        assert!(projects.iter().all(|p| p.thumbnail_url.is_some()));
        assert_eq!(aggregate(&projects).views, 0);
    }

    #[test]
    fn test_initial_projects_order_depends_on_seed() {
        let catalog = Catalog::portfolio();
        assert_eq!(initial_projects(&catalog, 1), initial_projects(&catalog, 1));
        assert_ne!(initial_projects(&catalog, 1), initial_projects(&catalog, 2));
    }
}
