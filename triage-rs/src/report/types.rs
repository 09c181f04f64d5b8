//! Report types and data structures

use serde::Serialize;

use crate::rules::Category;

/// Count and share of one category within a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Category this row describes.
    pub category: Category,
    /// Number of emails assigned to the category.
    pub count: usize,
    /// Share of the batch in percent, rounded to one decimal place.
    /// 0.0 for an empty batch.
    pub percentage: f64,
}

/// Summary of one batch run.
///
/// Recomputed from the batch's classification results on every run; rows
/// follow rule-set priority order with `UNCATEGORIZED` last and include
/// zero-count categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Opaque batch label supplied by the caller (e.g. a timestamp).
    pub batch_id: String,
    /// Total emails processed.
    pub total: usize,
    /// How many of them no rule matched.
    pub uncategorized: usize,
    /// One row per category.
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Count for a category, 0 when the category has no row.
    pub fn count_for(&self, category: Category) -> usize {
        self.rows
            .iter()
            .find(|row| row.category == category)
            .map_or(0, |row| row.count)
    }
}
