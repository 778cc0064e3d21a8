//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Convert subcommand options into the operation argument types.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read `SPLUNK_*` variables; the config loader owns those.

use clap::{Args, Parser, Subcommand};
use splunk_catalog_client::tools::PageArgs;
use splunk_catalog_config::FiredAlertsSource;

#[derive(Parser, Debug)]
#[command(name = "splunk-catalog")]
#[command(
    about = "Browse a Splunk deployment's saved searches, alerts, indexes and macros",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  splunk-catalog indexes --count 20\n  splunk-catalog alerts --title BT_Alert --offset 10\n  splunk-catalog fired-alerts --ss-name 'BT_Alert*' --earliest -7d\n  splunk-catalog alerts-by-keyword okta\n"
)]
pub struct Cli {
    /// Base URL of the Splunk management port (overrides SPLUNK_URL)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token (overrides SPLUNK_TOKEN)
    #[arg(short = 'a', long, global = true)]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Title tag used by alerts-by-keyword (default BT_Alert)
    #[arg(long, global = true)]
    pub alert_category: Option<String>,

    /// Where fired alerts come from: audit or native
    #[arg(long, global = true, value_name = "SOURCE")]
    pub fired_alerts_source: Option<FiredAlertsSource>,

    /// Serve Prometheus metrics on this address (e.g. 127.0.0.1:9090)
    #[arg(long, global = true, env = "SPLUNK_METRICS_BIND", value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Paging options shared by every listing subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct PageOpts {
    /// Maximum number of items to return
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Zero-based offset into the full listing
    #[arg(long)]
    pub offset: Option<usize>,
}

impl From<PageOpts> for PageArgs {
    fn from(opts: PageOpts) -> Self {
        PageArgs {
            count: opts.count,
            offset: opts.offset,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List saved searches (default 10, max 100)
    SavedSearches {
        #[command(flatten)]
        page: PageOpts,
    },

    /// List alerts: saved searches with at least one action
    Alerts {
        #[command(flatten)]
        page: PageOpts,

        /// Case-insensitive substring the title must contain
        #[arg(short, long)]
        title: Option<String>,
    },

    /// List fired alerts (default 100)
    FiredAlerts {
        #[command(flatten)]
        page: PageOpts,

        /// Saved search name pattern, wildcards allowed (default *)
        #[arg(long)]
        ss_name: Option<String>,

        /// Earliest time modifier (default -24h)
        #[arg(short, long, allow_hyphen_values = true)]
        earliest: Option<String>,
    },

    /// List indexes (default 10, max 100)
    Indexes {
        #[command(flatten)]
        page: PageOpts,
    },

    /// List search macros (default 10, max 100)
    Macros {
        #[command(flatten)]
        page: PageOpts,
    },

    /// Find alerts in the configured category that reference a keyword
    AlertsByKeyword {
        /// Keyword to look for in titles, descriptions, searches and macros
        keyword: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_page_options_parse() {
        let cli = Cli::try_parse_from(["splunk-catalog", "indexes", "-c", "20", "--offset", "40"])
            .unwrap();
        match cli.command {
            Commands::Indexes { page } => {
                assert_eq!(page.count, Some(20));
                assert_eq!(page.offset, Some(40));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_earliest_accepts_leading_hyphen() {
        let cli = Cli::try_parse_from([
            "splunk-catalog",
            "fired-alerts",
            "--earliest",
            "-7d",
            "--ss-name",
            "BT_Alert*",
        ])
        .unwrap();
        match cli.command {
            Commands::FiredAlerts {
                ss_name, earliest, ..
            } => {
                assert_eq!(ss_name.as_deref(), Some("BT_Alert*"));
                assert_eq!(earliest.as_deref(), Some("-7d"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "splunk-catalog",
            "alerts-by-keyword",
            "okta",
            "--fired-alerts-source",
            "native",
            "--timeout",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.fired_alerts_source, Some(FiredAlertsSource::Native));
        assert_eq!(cli.timeout, Some(10));
    }

    #[test]
    fn test_keyword_is_required() {
        assert!(Cli::try_parse_from(["splunk-catalog", "alerts-by-keyword"]).is_err());
    }
}
