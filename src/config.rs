use crate::error::{HeyReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_THROUGHPUT_FILE: &str = "throughput_results.json";
pub const DEFAULT_LATENCY_FILE: &str = "latency_results.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub throughput_file: String,
    pub latency_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            throughput_file: DEFAULT_THROUGHPUT_FILE.to_string(),
            latency_file: DEFAULT_LATENCY_FILE.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(HeyReportError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| HeyReportError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| HeyReportError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["hey-report.toml", ".hey-report.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref output_dir) = cli_args.output_dir {
            self.output.directory = output_dir.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_file_name("throughput_file", &self.output.throughput_file)?;
        validate_file_name("latency_file", &self.output.latency_file)?;

        if self.output.throughput_file == self.output.latency_file {
            return Err(HeyReportError::Config {
                message: format!(
                    "throughput_file and latency_file must differ (both are '{}')",
                    self.output.throughput_file
                ),
            });
        }

        if self.output.directory.as_os_str().is_empty() {
            return Err(HeyReportError::Config {
                message: "Output directory must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn throughput_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.throughput_file)
    }

    pub fn latency_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.latency_file)
    }
}

// Result files always land directly inside the output directory.
fn validate_file_name(key: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(HeyReportError::Config {
            message: format!("{} must not be empty", key),
        });
    }

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(HeyReportError::Config {
            message: format!("{} must be a plain file name, got '{}'", key, name),
        });
    }

    Ok(())
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub output_dir: Option<PathBuf>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }
}
