//! Keyword classification engine
//!
//! Pure function of (rule set, text): normalizes the text, walks the
//! categories in priority order and returns the first non-excluded match.

mod engine;

pub use engine::{Classification, Classifier};
