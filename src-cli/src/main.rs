//! Showreel - command-line companion for the portfolio site.
//!
//! Fetches the portfolio's video details through the same fetcher and cache
//! logic as the site, backed by a file cache, and prints totals or the
//! enriched catalog.

mod cli;
mod error;
mod logging;
mod report;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use showreel_core::{
    Catalog, DetailFetcher, Enrichment, FileStore, SiteConfig, SystemClock, WorkTab, YouTubeClient,
    default_cache_directory, parse_video_url,
};
use tracing::{debug, error, info, warn};

use crate::cli::{Cli, Command};
use crate::error::{CliError, Result};
use crate::logging::{LoggingConfig, LoggingGuard, level_for_verbosity};
use crate::report::{CatalogReport, catalog_text, stats_text, to_json};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Without logging the command still runs; the failure is only reported.
    let _guard = match init_logging(&cli) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: {e}");
            None
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn logging_config(cli: &Cli) -> LoggingConfig {
    let config = LoggingConfig::auto()
        .with_console_level(level_for_verbosity(cli.verbose))
        .with_file_logging(!cli.no_log_file);
    match &cli.log_dir {
        Some(dir) => config.with_log_directory(dir.clone()),
        None => config,
    }
}

fn init_logging(cli: &Cli) -> Result<LoggingGuard> {
    Ok(logging::init(&logging_config(cli))?)
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let cache_dir = cli.cache_dir.clone().unwrap_or_else(default_cache_directory);
    debug!("Using cache directory {}", cache_dir.display());

    match cli.command {
        Command::Extract { ref urls } => extract(urls, cli.json),
        Command::ClearCache => clear_cache(&cache_dir, cli.json),
        Command::Stats => {
            let enrichment = enrich(&config, &cache_dir, cli.refresh, WorkTab::Portfolio).await?;
            if cli.json {
                println!("{}", to_json(&enrichment.stats)?);
            } else {
                print!("{}", stats_text(&enrichment.stats));
            }
            Ok(())
        }
        Command::Catalog { tab } => {
            let enrichment = enrich(&config, &cache_dir, cli.refresh, tab.into()).await?;
            if cli.json {
                let report = CatalogReport {
                    stats: enrichment.stats,
                    from_cache: enrichment.from_cache,
                    projects: &enrichment.projects,
                };
                println!("{}", to_json(&report)?);
            } else {
                print!("{}", catalog_text(&enrichment.projects));
            }
            Ok(())
        }
    }
}

/// Environment and optional config file, with command-line overrides on top.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| CliError::ConfigFile {
                path: path.clone(),
                source,
            })?;
            let from_file = SiteConfig::from_json(&json)?;
            info!("Loaded configuration from {}", path.display());
            if from_file.api_key.is_some() {
                from_file
            } else {
                from_file.with_api_key(SiteConfig::from_env().api_key)
            }
        }
        None => SiteConfig::from_env(),
    };

    if let Some(ttl) = cli.ttl_secs {
        let cache = config.cache.clone().with_ttl(ttl);
        config = config.with_cache(cache);
    }
    if let Some(timeout) = cli.timeout_secs {
        config = config.with_request_timeout(timeout);
    }
    Ok(config)
}

/// Enrich the catalog; totals always cover the whole catalog, `tab` only
/// filters the listed projects.
async fn enrich(
    config: &SiteConfig,
    cache_dir: &Path,
    refresh: bool,
    tab: WorkTab,
) -> Result<Enrichment> {
    let client = YouTubeClient::new(config)?;
    let store = FileStore::new(cache_dir)?;
    let fetcher = DetailFetcher::new(client, store, SystemClock, config);

    if refresh {
        info!("Refreshing cached video details");
        fetcher.invalidate()?;
    }

    let catalog = Catalog::portfolio();
    let enrichment = fetcher.enrich_detailed(&catalog.latest_first()).await;
    if !enrichment.failed.is_empty() {
        warn!(
            "{} videos fell back to placeholder data",
            enrichment.failed.len()
        );
    }
    info!(
        "Enriched {} videos ({})",
        enrichment.projects.len(),
        if enrichment.from_cache { "cached" } else { "fresh" }
    );

    let projects = enrichment
        .projects
        .iter()
        .filter(|p| tab.includes(p))
        .cloned()
        .collect();
    Ok(Enrichment {
        projects,
        ..enrichment
    })
}

fn extract(urls: &[String], json: bool) -> Result<()> {
    let mut found = Vec::with_capacity(urls.len());
    let mut rejected = 0;

    for url in urls {
        match parse_video_url(url) {
            Ok(id) => found.push((url.as_str(), Some(id.to_string()))),
            Err(e) => {
                warn!("{e}");
                rejected += 1;
                found.push((url.as_str(), None));
            }
        }
    }

    if json {
        let entries: Vec<_> = found
            .iter()
            .map(|(url, id)| serde_json::json!({ "url": url, "id": id }))
            .collect();
        println!("{}", to_json(&entries)?);
    } else {
        for (url, id) in &found {
            match id {
                Some(id) => println!("{id}"),
                None => eprintln!("no video ID in {url}"),
            }
        }
    }

    if rejected == 0 {
        Ok(())
    } else {
        Err(CliError::UnrecognizedUrls {
            count: rejected,
            total: urls.len(),
        })
    }
}

fn clear_cache(cache_dir: &Path, json: bool) -> Result<()> {
    let removed = if cache_dir.exists() {
        FileStore::new(cache_dir)?.clear()?
    } else {
        0
    };
    info!("Removed {removed} cache entries from {}", cache_dir.display());

    if json {
        println!("{}", serde_json::json!({ "removed": removed }));
    } else {
        println!("Removed {removed} cache entries");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::logging::LoggingError;
    use showreel_core::{KeyValueStore, VIDEO_DETAILS_KEY};
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("showreel").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_ttl_flag_overrides_config() {
        let config = load_config(&cli(&["--ttl-secs", "120", "stats"])).unwrap();
        assert_eq!(config.cache.ttl_secs, 120);
    }

    #[test]
    fn test_timeout_flag_overrides_config() {
        let config = load_config(&cli(&["--timeout-secs", "3", "stats"])).unwrap();
        assert_eq!(config.request_timeout_secs, 3);

        let config = load_config(&cli(&["stats"])).unwrap();
        assert_eq!(
            config.request_timeout_secs,
            showreel_core::config::DEFAULT_REQUEST_TIMEOUT_SECS
        );
    }

    #[test]
    fn test_config_file_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{"api_key":"from-file","batch_size":10}"#).unwrap();

        let config = load_config(&cli(&["--config", path.to_str().unwrap(), "stats"])).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.batch_size, 10);
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let err = load_config(&cli(&["--config", "/nonexistent/site.json", "stats"])).unwrap_err();
        assert!(matches!(err, CliError::ConfigFile { .. }));
    }

    #[test]
    fn test_logging_flags_shape_config() {
        let config = logging_config(&cli(&["-vv", "--no-log-file", "--log-dir", "/tmp/sr", "stats"]));
        assert_eq!(config.console_level, tracing::Level::DEBUG);
        assert!(!config.file_logging);
        assert_eq!(config.log_directory, std::path::PathBuf::from("/tmp/sr"));
    }

    #[test]
    fn test_unusable_log_directory_is_a_logging_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let log_dir = blocker.join("logs");

        let result = init_logging(&cli(&["--log-dir", log_dir.to_str().unwrap(), "stats"]));
        assert!(matches!(
            result,
            Err(CliError::Logging(LoggingError::AppenderFailed { .. }))
        ));
    }

    #[test]
    fn test_extract_counts_rejected_urls() {
        let urls = vec![
            "https://www.youtube.com/watch?v=r-_40oLqawY".to_string(),
            "https://example.com/not-a-video".to_string(),
        ];
        let err = extract(&urls, true).unwrap_err();
        assert!(matches!(
            err,
            CliError::UnrecognizedUrls { count: 1, total: 2 }
        ));
        assert!(extract(&urls[..1], false).is_ok());
    }

    #[test]
    fn test_clear_cache_removes_entries() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        store.set(VIDEO_DETAILS_KEY, "[]").unwrap();

        clear_cache(dir.path(), false).unwrap();
        assert_eq!(store.get(VIDEO_DETAILS_KEY).unwrap(), None);
    }

    #[test]
    fn test_clear_cache_missing_directory_is_noop() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");
        clear_cache(&missing, true).unwrap();
        assert!(!missing.exists());
    }

    #[tokio::test]
    async fn test_enrich_without_api_key_fails_fast() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let result = enrich(&config, dir.path(), false, WorkTab::Portfolio).await;
        assert!(matches!(
            result,
            Err(CliError::Core(showreel_core::Error::Configuration(_)))
        ));
    }
}
