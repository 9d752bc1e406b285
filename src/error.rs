use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeyReportError {
    #[error("{usage}")]
    Usage { usage: String },

    #[error("Failed to read input file {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write result file {path}: {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {field} value '{token}' on line {line}")]
    InvalidNumber {
        field: String,
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Non-finite {field} value '{token}' on line {line}")]
    NonFiniteNumber {
        field: String,
        line: usize,
        token: String,
    },

    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl HeyReportError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HeyReportError::Usage { .. } => 1,
            HeyReportError::ReadInput { .. } => 2,
            HeyReportError::InvalidNumber { .. } | HeyReportError::NonFiniteNumber { .. } => 3,
            HeyReportError::Config { .. } => 4,
            HeyReportError::WriteOutput { .. } => 5,
            _ => 1,
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for HeyReportError {
    fn user_message(&self) -> String {
        match self {
            HeyReportError::ReadInput { path, source } => {
                format!("Cannot read hey output '{}': {}", path, source)
            }
            HeyReportError::WriteOutput { path, source } => {
                format!("Cannot write result file '{}': {}", path, source)
            }
            HeyReportError::InvalidNumber {
                field, line, token, ..
            } => {
                format!(
                    "Line {}: '{}' is not a valid {} value",
                    line, token, field
                )
            }
            HeyReportError::NonFiniteNumber { field, line, token } => {
                format!(
                    "Line {}: {} value '{}' is not a finite number",
                    line, field, token
                )
            }
            HeyReportError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            HeyReportError::ReadInput { .. } => Some(
                "Check that the file exists and was produced with: hey <url> > raw-output.txt".to_string()
            ),
            HeyReportError::WriteOutput { .. } => Some(
                "Ensure the output directory exists and is writable, or pick another one with --output-dir.".to_string()
            ),
            HeyReportError::InvalidNumber { .. } | HeyReportError::NonFiniteNumber { .. } => Some(
                "The input does not look like unmodified hey console output.".to_string()
            ),
            HeyReportError::Config { .. } => Some(
                "Check your configuration file syntax and the [output] file names.".to_string()
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HeyReportError>;
