//! Report aggregation

use std::collections::HashMap;

use crate::batch::ClassificationResult;
use crate::rules::{Category, RuleSet};

use super::types::{Report, ReportRow};

/// Turns a batch's classification results into a [`Report`].
pub struct Aggregator<'a> {
    rules: &'a RuleSet,
}

impl<'a> Aggregator<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Aggregate one batch.
    ///
    /// Every rule-set category gets a row even with zero matches, in
    /// priority order, followed by `UNCATEGORIZED`. Deterministic for a
    /// given input multiset; an empty batch yields total 0 and all
    /// percentages 0.0.
    pub fn aggregate(&self, results: &[ClassificationResult], batch_id: &str) -> Report {
        let total = results.len();

        let mut counts: HashMap<Category, usize> = HashMap::new();
        for result in results {
            *counts.entry(result.category).or_insert(0) += 1;
        }

        let rows: Vec<ReportRow> = self
            .rules
            .categories()
            .chain(std::iter::once(Category::Uncategorized))
            .map(|category| {
                let count = counts.get(&category).copied().unwrap_or(0);
                ReportRow {
                    category,
                    count,
                    percentage: percentage(count, total),
                }
            })
            .collect();

        let uncategorized = counts.get(&Category::Uncategorized).copied().unwrap_or(0);

        Report {
            batch_id: batch_id.to_string(),
            total,
            uncategorized,
            rows,
        }
    }
}

/// Share of `count` in `total` as a percent, rounded to one decimal place.
/// Defined as 0.0 when the batch is empty.
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 100.0 / total as f64 * 10.0).round() / 10.0
}
