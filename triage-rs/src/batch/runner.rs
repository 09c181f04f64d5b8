//! Sequential batch runner

use crate::classifier::Classifier;
use crate::rules::RuleSet;

use super::types::{ClassificationResult, EmailRecord};

/// Runs a batch of email records through the classifier.
///
/// Stateless between calls: running the same input twice yields identical
/// results. Hosts that want cancellation can call [`classify_record`] per
/// email instead of [`run`].
///
/// [`classify_record`]: BatchRunner::classify_record
/// [`run`]: BatchRunner::run
pub struct BatchRunner<'a> {
    classifier: Classifier<'a>,
}

impl<'a> BatchRunner<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            classifier: Classifier::new(rules),
        }
    }

    /// Classify a single record at the given zero-based batch position.
    ///
    /// Partial-failure policy: missing or blank text is treated as empty
    /// (classifying as uncategorized) and a missing or blank id becomes
    /// `email-<n>` with n the one-based position. A bad record never
    /// aborts the batch.
    pub fn classify_record(&self, position: usize, record: &EmailRecord) -> ClassificationResult {
        let text = record.text.as_deref().unwrap_or("");
        let classification = self.classifier.classify(text);

        let email_id = match &record.id {
            Some(id) if !id.trim().is_empty() => id.clone(),
            _ => format!("email-{}", position + 1),
        };

        ClassificationResult {
            email_id,
            category: classification.category,
            matched_terms: classification.matched_terms,
        }
    }

    /// Classify every record, preserving input order, one result per record.
    pub fn run(&self, records: &[EmailRecord]) -> Vec<ClassificationResult> {
        records
            .iter()
            .enumerate()
            .map(|(position, record)| self.classify_record(position, record))
            .collect()
    }
}
