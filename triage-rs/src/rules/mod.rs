//! Category rules for keyword-based email triage
//!
//! A [`RuleSet`] maps each [`Category`] to its trigger terms (substrings
//! whose presence assigns the category) and optional exclusion terms
//! (substrings that veto the category). Declaration order in the set is
//! priority order: when an email matches several categories, the earliest
//! declared one wins.

mod set;
mod types;

pub use set::RuleSet;
pub use types::{Category, CategoryRule};
