//! Batch types and data structures

use serde::Serialize;

use crate::rules::Category;

/// One input unit as handed over by the ingestion layer.
///
/// Either field may be absent when the source was unreadable; the batch
/// runner substitutes fallbacks instead of failing.
#[derive(Debug, Clone)]
pub struct EmailRecord {
    /// Unique identifier, typically the source file name.
    pub id: Option<String>,
    /// Extracted plain text (subject and body combined upstream).
    pub text: Option<String>,
}

impl EmailRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text: Some(text.into()),
        }
    }
}

/// The classifier's decision for one email. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Identifier of the email (synthetic if the record had none).
    pub email_id: String,
    /// Assigned category.
    pub category: Category,
    /// Trigger terms that produced the match, for auditability.
    pub matched_terms: Vec<String>,
}
