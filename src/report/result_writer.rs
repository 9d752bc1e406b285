use crate::config::Config;
use crate::error::{HeyReportError, Result};
use crate::parser::ParsedMetrics;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Throughput,
    Latency,
}

impl MetricKind {
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Throughput => "HTTP RPS",
            MetricKind::Latency => "HTTP p95 Latency",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::Throughput => "req/s",
            MetricKind::Latency => "ms",
        }
    }

    /// Value in output units, latency converted from seconds to milliseconds
    pub fn value_from(&self, metrics: &ParsedMetrics) -> Option<f64> {
        match self {
            MetricKind::Throughput => metrics.requests_per_sec,
            MetricKind::Latency => metrics.p95_latency_ms(),
        }
    }
}

/// One entry of a result file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub name: String,
    pub unit: String,
    pub value: f64,
}

impl MetricResult {
    pub fn new(kind: MetricKind, value: f64) -> Self {
        Self {
            name: kind.name().to_string(),
            unit: kind.unit().to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrittenResult {
    pub kind: MetricKind,
    pub path: PathBuf,
    pub value: f64,
}

/// What a run found and what it wrote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    pub input: PathBuf,
    pub metrics: ParsedMetrics,
    pub written: Vec<WrittenResult>,
    pub skipped: Vec<MetricKind>,
    pub dry_run: bool,
}

pub struct ResultWriter {
    throughput_path: PathBuf,
    latency_path: PathBuf,
    dry_run: bool,
}

impl ResultWriter {
    pub fn new(throughput_path: PathBuf, latency_path: PathBuf) -> Self {
        Self {
            throughput_path,
            latency_path,
            dry_run: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.throughput_path(), config.latency_path())
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn path_for(&self, kind: MetricKind) -> &Path {
        match kind {
            MetricKind::Throughput => &self.throughput_path,
            MetricKind::Latency => &self.latency_path,
        }
    }

    /// Write one file per present metric. Absent metrics leave their file untouched.
    pub fn write_metrics(
        &self,
        input: &Path,
        metrics: &ParsedMetrics,
    ) -> Result<ExtractionOutcome> {
        let mut written = Vec::new();
        let mut skipped = Vec::new();

        for kind in [MetricKind::Throughput, MetricKind::Latency] {
            match kind.value_from(metrics) {
                Some(value) => {
                    let path = self.path_for(kind).to_path_buf();
                    if !self.dry_run {
                        write_result_file(&path, &MetricResult::new(kind, value))?;
                    }
                    written.push(WrittenResult { kind, path, value });
                }
                None => skipped.push(kind),
            }
        }

        Ok(ExtractionOutcome {
            input: input.to_path_buf(),
            metrics: *metrics,
            written,
            skipped,
            dry_run: self.dry_run,
        })
    }
}

/// Render a result as the pretty-printed single-element array stored on disk
pub fn render_result(result: &MetricResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&[result])?)
}

fn write_result_file(path: &Path, result: &MetricResult) -> Result<()> {
    let json_content = render_result(result)?;

    fs::write(path, json_content).map_err(|e| HeyReportError::WriteOutput {
        path: path.display().to_string(),
        source: e,
    })
}
