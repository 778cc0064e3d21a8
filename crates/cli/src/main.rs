//! splunk-catalog - read-only catalog of a Splunk deployment.
//!
//! Responsibilities:
//! - Parse command-line arguments and layer them over env/.env configuration.
//! - Run one catalog operation and print its text output.
//! - Translate failures and Ctrl+C into structured exit codes.
//!
//! Does NOT handle:
//! - Any REST or search logic (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can feed clap env defaults.
//! - Logs go to stderr; stdout carries only operation output.

mod args;
mod cancellation;
mod dispatch;
mod error;

use anyhow::Context;
use args::Cli;
use cancellation::{cancel_on_ctrl_c, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use splunk_catalog_client::{CancellationToken, MetricsCollector, MetricsExporter, SplunkClient};
use splunk_catalog_config::{CatalogConfig, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let _metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!("Metrics exporter started on http://{}/metrics", bind_addr);
                Some(exporter)
            }
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let (client, settings) = match connect(&cli) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    let cancel = CancellationToken::new();
    cancel_on_ctrl_c(&cancel);

    let output = run_command(cli.command, &client, &settings, &cancel).await;

    let exit_code = if cancel.is_cancelled() {
        print_cancelled_message();
        ExitCode::Interrupted
    } else if output.is_error {
        eprintln!("{}", output.text);
        ExitCode::GeneralError
    } else {
        println!("{}", output.text);
        ExitCode::Success
    };

    std::process::exit(exit_code.as_i32());
}

/// Build the configuration and the shared client.
///
/// Precedence: CLI flags over environment variables over `.env`.
fn connect(cli: &Cli) -> anyhow::Result<(SplunkClient, CatalogConfig)> {
    let mut loader = ConfigLoader::new()
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref token) = cli.api_token {
        loader = loader.with_api_token(token.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(ref category) = cli.alert_category {
        loader = loader.with_alert_category(category.clone());
    }
    if let Some(source) = cli.fired_alerts_source {
        loader = loader.with_fired_alerts_source(source);
    }

    let config = loader.build().context("Failed to build configuration")?;

    let mut builder = SplunkClient::builder().from_config(&config);
    if cli.metrics_bind.is_some() {
        builder = builder.metrics(MetricsCollector::new());
    }
    let client = builder.build().context("Failed to build client")?;

    Ok((client, config.catalog))
}
