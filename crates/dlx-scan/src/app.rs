//! Main application orchestration.
//!
//! Wires the pieces of one scan:
//! - Ticker universe and price data loading
//! - Per-ticker classification via the report assembler
//! - Console summary and JSON report output

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use dlx_core::{Severity, Ticker};
use dlx_feed::{FactsSource, Universe};
use dlx_report::{write_report, ReportAssembler, ReportDocument};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Per-invocation options from the CLI.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Explicit ticker selection; None scans the whole universe.
    pub tickers: Option<Vec<Ticker>>,
    /// Minimum severity for a ticker to appear under `results`.
    pub threshold: Severity,
    /// Report path override.
    pub output: Option<PathBuf>,
}

/// Outcome of one scan.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Whether any analyzed ticker classified CRITICAL. Drives the
    /// process exit code.
    pub critical_present: bool,
    /// Where the report was written.
    pub report_path: PathBuf,
}

/// Main application.
#[derive(Debug)]
pub struct Application {
    config: AppConfig,
}

impl Application {
    /// Create a new application, validating the classifier config.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config
            .classifier
            .validate()
            .map_err(AppError::Config)?;
        Ok(Self { config })
    }

    /// Run one scan.
    pub fn run(&self, options: &ScanOptions) -> AppResult<ScanOutcome> {
        let universe = Universe::from_file(Path::new(&self.config.data.universe_path))?;
        let tickers = self.select_tickers(&universe, options)?;
        info!(tickers = tickers.len(), threshold = %options.threshold, "Starting scan");

        let source = FactsSource::load(
            Path::new(&self.config.data.history_path),
            self.config.data.quotes_path.as_deref().map(Path::new),
        )?;

        let assembler = ReportAssembler::new(self.config.classifier.clone(), options.threshold);
        let document = assembler.assemble(&source, &tickers);

        document.summary.log_summary();

        let report_path = options
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.config.output.report_path));
        write_report(&document, &report_path)?;

        Ok(ScanOutcome {
            critical_present: document.summary.has_critical(),
            report_path,
        })
    }

    /// Run one scan and return the document instead of writing it.
    /// Used by tests that assert on report contents directly.
    pub fn run_in_memory(&self, options: &ScanOptions) -> AppResult<ReportDocument> {
        let universe = Universe::from_file(Path::new(&self.config.data.universe_path))?;
        let tickers = self.select_tickers(&universe, options)?;

        let source = FactsSource::load(
            Path::new(&self.config.data.history_path),
            self.config.data.quotes_path.as_deref().map(Path::new),
        )?;

        let assembler = ReportAssembler::new(self.config.classifier.clone(), options.threshold);
        Ok(assembler.assemble(&source, &tickers))
    }

    /// Resolve the ticker selection against the universe.
    ///
    /// An explicit selection is taken as-is; tickers outside the universe
    /// are still scanned (the feed layer reports missing data), with a
    /// warning. The full-universe selection requires a non-empty universe.
    fn select_tickers(
        &self,
        universe: &Universe,
        options: &ScanOptions,
    ) -> AppResult<Vec<Ticker>> {
        match &options.tickers {
            Some(selection) => {
                for ticker in selection {
                    if !universe.contains(ticker) {
                        warn!(%ticker, "Ticker not in configured universe");
                    }
                }
                Ok(selection.clone())
            }
            None => {
                if universe.is_empty() {
                    return Err(AppError::Config(format!(
                        "ticker universe at {} is empty",
                        self.config.data.universe_path
                    )));
                }
                Ok(universe.symbols())
            }
        }
    }
}
