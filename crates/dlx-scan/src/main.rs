//! Dislocation Severity Scanner - Entry Point
//!
//! Scans the configured ticker universe for price dislocations and
//! writes a JSON report. Exits 1 when any CRITICAL dislocation is
//! present (a business signal, not a failure).

use anyhow::Result;
use clap::Parser;
use dlx_core::{Severity, Ticker};
use dlx_scan::{AppConfig, Application, ScanOptions};
use std::path::PathBuf;
use tracing::info;

/// Dislocation Severity Scanner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tickers to scan: comma-separated symbols, or "all" for the
    /// configured universe
    #[arg(long, default_value = "all")]
    tickers: String,

    /// Minimum severity for a ticker to appear in the report results
    #[arg(long, default_value = "NORMAL")]
    threshold: Severity,

    /// Report output path (overrides the configured path)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Configuration file path (can also be set via DLX_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

fn parse_selection(tickers: &str) -> Option<Vec<Ticker>> {
    if tickers.eq_ignore_ascii_case("all") {
        return None;
    }
    Some(
        tickers
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(Ticker::new)
            .collect(),
    )
}

fn main() -> Result<()> {
    let args = Args::parse();

    dlx_telemetry::init_logging()?;

    info!("Starting dlx-scan v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(args.config.as_deref())?;

    let options = ScanOptions {
        tickers: parse_selection(&args.tickers),
        threshold: args.threshold,
        output: args.output,
    };

    let app = Application::new(config)?;
    let outcome = app.run(&options)?;

    info!(report = %outcome.report_path.display(), "Scan complete");

    if outcome.critical_present {
        info!("CRITICAL dislocations present, exiting 1");
        std::process::exit(1);
    }

    Ok(())
}
