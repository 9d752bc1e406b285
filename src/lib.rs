pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod report;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, OutputConfig};
pub use error::{HeyReportError, Result, UserFriendlyError};

// Core functionality re-exports
pub use parser::{extract_metrics, HeyOutputParser, ParsedMetrics};
pub use report::{ExtractionOutcome, MetricKind, MetricResult, ResultWriter, WrittenResult};
pub use ui::{OutputFormatter, OutputMode};

use std::path::Path;

/// Main library interface: parse a hey report and write the result files
pub struct HeyReport {
    config: Config,
    output_formatter: OutputFormatter,
    dry_run: bool,
}

impl HeyReport {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        Self {
            config,
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
            dry_run: false,
        }
    }

    /// Create a HeyReport instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(config, output_mode, cli_args.verbose, cli_args.quiet)
            .with_dry_run(cli_args.dry_run))
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Extract both metrics from `input` and write whichever were found
    pub fn process_file(&self, input: &Path) -> Result<ExtractionOutcome> {
        self.output_formatter
            .start_operation(&format!("Parsing hey output from {}", input.display()));

        let metrics = extract_metrics(input)?;
        self.output_formatter.debug(&format!(
            "requests/sec = {:?}, p95 latency (secs) = {:?}",
            metrics.requests_per_sec, metrics.p95_latency_secs
        ));

        if metrics.is_empty() {
            self.output_formatter
                .warning("No Requests/sec or p95 latency figures found; nothing written");
        }

        let writer = ResultWriter::from_config(&self.config).with_dry_run(self.dry_run);
        let outcome = writer.write_metrics(input, &metrics)?;

        for result in &outcome.written {
            self.output_formatter
                .info(&format!("{} -> {}", result.kind.name(), result.path.display()));
        }

        Ok(outcome)
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &HeyReportError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
