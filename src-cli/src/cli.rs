//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use showreel_core::WorkTab;

/// Fetch portfolio video details and totals from the YouTube Data API.
#[derive(Debug, Parser)]
#[command(name = "showreel", version, about)]
pub struct Cli {
    /// Ignore and replace any cached API results.
    #[arg(long, global = true)]
    pub refresh: bool,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Cache directory (defaults to the platform cache directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Cache time-to-live in seconds.
    #[arg(long, global = true, value_name = "N")]
    pub ttl_secs: Option<u64>,

    /// Request timeout in seconds (0 disables it).
    #[arg(long, global = true, value_name = "N")]
    pub timeout_secs: Option<u64>,

    /// Site configuration file (JSON).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log directory (defaults to the platform data directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Do not write a log file.
    #[arg(long, global = true)]
    pub no_log_file: bool,

    /// Increase console verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print total views, likes and video count.
    Stats,
    /// List the enriched catalog.
    Catalog {
        /// Which entries to list.
        #[arg(long, value_enum, default_value_t = TabArg::Portfolio)]
        tab: TabArg,
    },
    /// Print the video IDs embedded in URLs.
    Extract {
        /// Watch, shorts, embed or short-link URLs.
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Delete cached API results.
    ClearCache,
}

/// Catalog filter, mirroring the site's tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    /// Everything.
    Portfolio,
    /// Vertical shorts only.
    Shorts,
    /// Long-form videos only.
    LongVideos,
}

impl From<TabArg> for WorkTab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Portfolio => Self::Portfolio,
            TabArg::Shorts => Self::Shorts,
            TabArg::LongVideos => Self::LongVideos,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_stats_with_global_flags() {
        let cli = Cli::try_parse_from([
            "showreel",
            "--refresh",
            "--json",
            "--ttl-secs",
            "60",
            "--timeout-secs",
            "5",
            "--cache-dir",
            "/tmp/cache",
            "stats",
        ])
        .unwrap();
        assert!(cli.refresh);
        assert!(cli.json);
        assert_eq!(cli.ttl_secs, Some(60));
        assert_eq!(cli.timeout_secs, Some(5));
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/cache")));
        assert!(matches!(cli.command, Command::Stats));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["showreel", "catalog", "--tab", "shorts", "--json", "-vv"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Catalog { tab } => assert_eq!(WorkTab::from(tab), WorkTab::Shorts),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_catalog_tab_defaults_to_portfolio() {
        let cli = Cli::try_parse_from(["showreel", "catalog"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Catalog {
                tab: TabArg::Portfolio
            }
        ));
    }

    #[test]
    fn test_extract_requires_urls() {
        assert!(Cli::try_parse_from(["showreel", "extract"]).is_err());
        let cli = Cli::try_parse_from([
            "showreel",
            "extract",
            "https://youtu.be/r-_40oLqawY",
            "https://www.youtube.com/shorts/PjDgNbg1RtM",
        ])
        .unwrap();
        match cli.command {
            Command::Extract { urls } => assert_eq!(urls.len(), 2),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_clear_cache_command() {
        let cli = Cli::try_parse_from(["showreel", "clear-cache"]).unwrap();
        assert!(matches!(cli.command, Command::ClearCache));
    }
}
