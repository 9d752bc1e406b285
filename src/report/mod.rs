pub mod result_writer;

pub use result_writer::{ExtractionOutcome, MetricKind, MetricResult, ResultWriter, WrittenResult};
