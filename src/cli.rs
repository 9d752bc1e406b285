use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const USAGE: &str = "Usage: hey-report <hey-output-file>";

#[derive(Parser, Debug)]
#[command(name = "hey-report")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract throughput and p95 latency from hey load-test output")]
#[command(
    long_about = "hey-report reads the console summary printed by the hey load generator \
                  and writes the requests/sec and p95 latency figures as JSON result files."
)]
#[command(after_help = "EXAMPLES:\n  \
    hey http://127.0.0.1:8080 > raw-output.txt\n  \
    hey-report raw-output.txt\n  \
    hey-report raw-output.txt --output-dir bench-results --verbose")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// File holding hey's console output
    pub input: PathBuf,

    /// Directory to write result files into (defaults to the current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for console messages
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Parse and report without writing result files
    #[arg(long, help = "Show the extracted metrics without writing any files")]
    pub dry_run: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        config.merge_with_cli_args(&self.create_cli_overrides());
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new().with_output_dir(self.output_dir.clone())
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
