//! Batch processing of email records
//!
//! The runner feeds each record through the classifier, one at a time, and
//! never aborts on a bad record: missing text classifies as uncategorized
//! and a missing identifier gets a synthetic sequential one.

mod runner;
mod types;

pub use runner::BatchRunner;
pub use types::{ClassificationResult, EmailRecord};
