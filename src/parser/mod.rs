pub mod hey_output;

pub use hey_output::{extract_metrics, HeyOutputParser, ParsedMetrics};
