//! Aggregation of classification results into a batch report

mod aggregator;
mod types;

pub use aggregator::Aggregator;
pub use types::{Report, ReportRow};
