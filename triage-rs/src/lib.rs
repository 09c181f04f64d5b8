//! triage-rs: keyword triage for volunteer-application email
//!
//! Classifies free-text volunteer-application emails into a fixed set of
//! categories by case-insensitive keyword matching, then aggregates the
//! per-email decisions into a summary report.
//!
//! # Design
//!
//! - **Rule set**: an immutable, validated list of categories with trigger
//!   and exclusion terms; declaration order is priority order
//! - **Classifier**: pure function of (rule set, text) - first
//!   non-excluded category with a matching trigger wins
//! - **Batch runner**: sequential, never aborts on a bad email (missing
//!   text classifies as uncategorized, missing ids become synthetic)
//! - **Aggregator**: per-category counts and percentages, zero-count
//!   categories included, deterministic
//!
//! The CLI and HTTP layers are thin collaborators around those four pieces.
//!
//! # Example
//!
//! ```
//! use triage_rs::batch::{BatchRunner, EmailRecord};
//! use triage_rs::report::Aggregator;
//! use triage_rs::rules::RuleSet;
//!
//! let rules = RuleSet::builtin();
//! let runner = BatchRunner::new(&rules);
//!
//! let records = vec![
//!     EmailRecord::new("1", "I want to foster a dog"),
//!     EmailRecord::new("2", "Looking to adopt a kitten"),
//! ];
//!
//! let results = runner.run(&records);
//! let report = Aggregator::new(&rules).aggregate(&results, "demo");
//! assert_eq!(report.total, 2);
//! ```
//!
//! # Modules
//!
//! - [`rules`]: categories, trigger/exclusion terms, rule-set validation
//! - [`classifier`]: the keyword matching engine
//! - [`batch`]: email records and the sequential batch runner
//! - [`report`]: aggregation into counts and percentages
//! - [`ingest`]: directory scanning for .txt email files
//! - [`export`]: CSV/table rendering and per-category organizing
//! - [`api`]: axum HTTP interface
//! - [`config`]: TOML configuration and rule files

pub mod api;
pub mod batch;
pub mod classifier;
pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod report;
pub mod rules;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TriageError};
