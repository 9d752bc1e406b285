use crate::error::{HeyReportError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const REQUESTS_PER_SEC_LABEL: &str = "Requests/sec:";
const LATENCY_SECTION_HEADER: &str = "Latency distribution:";
const PERCENTILE_ROW_MARKER: &str = "% in";
const P95_ROW_MARKER: &str = "95%";

// Digits with at most one decimal point.
const P95_LATENCY_PATTERN: &str = r"95% in (\d+(?:\.\d*)?|\.\d+) secs";

const REQUESTS_PER_SEC_FIELD: &str = "Requests/sec";
const P95_LATENCY_FIELD: &str = "p95 latency";

/// Metrics pulled out of a single hey report
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedMetrics {
    pub requests_per_sec: Option<f64>,
    pub p95_latency_secs: Option<f64>,
}

impl ParsedMetrics {
    pub fn p95_latency_ms(&self) -> Option<f64> {
        self.p95_latency_secs.map(|secs| secs * 1000.0)
    }

    pub fn is_empty(&self) -> bool {
        self.requests_per_sec.is_none() && self.p95_latency_secs.is_none()
    }
}

/// Single-pass scanner over hey's console summary.
///
/// `Requests/sec:` lines are matched on every line, so a later line
/// overwrites an earlier one. Only the first `Latency distribution:`
/// section is inspected, and within it only the first row mentioning
/// both `% in` and `95%`.
pub struct HeyOutputParser {
    latency_pattern: Regex,
}

impl HeyOutputParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            latency_pattern: Regex::new(P95_LATENCY_PATTERN)?,
        })
    }

    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ParsedMetrics> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| HeyReportError::ReadInput {
            path: path.display().to_string(),
            source: e,
        })?;

        self.parse_str(&content)
    }

    pub fn parse_str(&self, content: &str) -> Result<ParsedMetrics> {
        let lines: Vec<&str> = content.lines().collect();
        let mut metrics = ParsedMetrics::default();
        let mut latency_section_seen = false;

        for (index, raw_line) in lines.iter().enumerate() {
            let line = raw_line.trim();

            if line.starts_with(REQUESTS_PER_SEC_LABEL) {
                let tokens: Vec<&str> = line.split_whitespace().collect();
                if let Some(token) = tokens.get(1) {
                    metrics.requests_per_sec =
                        Some(parse_number(REQUESTS_PER_SEC_FIELD, index + 1, token)?);
                }
            }

            if !latency_section_seen && line.contains(LATENCY_SECTION_HEADER) {
                latency_section_seen = true;
                metrics.p95_latency_secs = self.scan_latency_section(&lines, index + 1)?;
            }
        }

        Ok(metrics)
    }

    /// Scan from `start` to the end of input for the first p95 row.
    fn scan_latency_section(&self, lines: &[&str], start: usize) -> Result<Option<f64>> {
        for (offset, raw_line) in lines.iter().skip(start).enumerate() {
            let line = raw_line.trim();
            if !(line.contains(PERCENTILE_ROW_MARKER) && line.contains(P95_ROW_MARKER)) {
                continue;
            }

            let Some(caps) = self.latency_pattern.captures(line) else {
                return Ok(None);
            };

            let line_number = start + offset + 1;
            let secs = parse_number(P95_LATENCY_FIELD, line_number, &caps[1])?;

            // Results are written in milliseconds; the scaled value must fit too.
            if !(secs * 1000.0).is_finite() {
                return Err(HeyReportError::NonFiniteNumber {
                    field: P95_LATENCY_FIELD.to_string(),
                    line: line_number,
                    token: caps[1].to_string(),
                });
            }

            return Ok(Some(secs));
        }

        Ok(None)
    }
}

fn parse_number(field: &str, line: usize, token: &str) -> Result<f64> {
    let value: f64 = token.parse().map_err(|e| HeyReportError::InvalidNumber {
        field: field.to_string(),
        line,
        token: token.to_string(),
        source: e,
    })?;

    if !value.is_finite() {
        return Err(HeyReportError::NonFiniteNumber {
            field: field.to_string(),
            line,
            token: token.to_string(),
        });
    }

    Ok(value)
}

/// Read a hey report from disk and return whatever metrics it carries
pub fn extract_metrics<P: AsRef<Path>>(path: P) -> Result<ParsedMetrics> {
    HeyOutputParser::new()?.parse_file(path)
}
