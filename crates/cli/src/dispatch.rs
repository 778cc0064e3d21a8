//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route the parsed subcommand to the matching catalog operation.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading or printing (see `main()`).
//!
//! Invariants:
//! - Every operation receives the same client and cancellation token.
//! - Operations never fail with `Err`; failures come back as error output.

use splunk_catalog_client::tools::{
    self, KeywordArgs, ListAlertsArgs, ListFiredAlertsArgs, ToolOutput,
};
use splunk_catalog_client::{CancellationToken, SplunkClient};
use splunk_catalog_config::CatalogConfig;
use tracing::debug;

use crate::args::Commands;

/// Run one subcommand against the catalog.
pub(crate) async fn run_command(
    command: Commands,
    client: &SplunkClient,
    settings: &CatalogConfig,
    cancel: &CancellationToken,
) -> ToolOutput {
    debug!(?command, "Dispatching catalog command");

    match command {
        Commands::SavedSearches { page } => {
            tools::list_saved_searches(client, page.into(), cancel).await
        }
        Commands::Alerts { page, title } => {
            let args = ListAlertsArgs {
                page: page.into(),
                title,
            };
            tools::list_alerts(client, args, cancel).await
        }
        Commands::FiredAlerts {
            page,
            ss_name,
            earliest,
        } => {
            let args = ListFiredAlertsArgs {
                page: page.into(),
                ss_name,
                earliest,
            };
            tools::list_fired_alerts(client, settings, args, cancel).await
        }
        Commands::Indexes { page } => tools::list_indexes(client, page.into(), cancel).await,
        Commands::Macros { page } => tools::list_macros(client, page.into(), cancel).await,
        Commands::AlertsByKeyword { keyword } => {
            let args = KeywordArgs {
                keyword: Some(keyword),
            };
            tools::alerts_by_keyword(client, settings, args, cancel).await
        }
    }
}
