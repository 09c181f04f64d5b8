//! Plain-text report table for the CLI

use std::fmt::Write;

use crate::report::Report;

/// Render the report as an aligned text table.
pub fn render_table(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out, "EMAIL CATEGORIZATION REPORT  ({})", report.batch_id);
    let _ = writeln!(out, "{}", "=".repeat(50));
    for row in &report.rows {
        let _ = writeln!(
            out,
            "  {:<20} : {:>4}  ({:>5.1}%)",
            row.category.as_str(),
            row.count,
            row.percentage
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(50));
    let _ = writeln!(out, "  {:<20} : {:>4}", "TOTAL", report.total);
    let _ = writeln!(out, "{}", "=".repeat(50));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportRow;
    use crate::rules::Category;

    #[test]
    fn test_table_lists_every_row_and_total() {
        let report = Report {
            batch_id: "test".to_string(),
            total: 2,
            uncategorized: 1,
            rows: vec![
                ReportRow {
                    category: Category::DogFoster,
                    count: 1,
                    percentage: 50.0,
                },
                ReportRow {
                    category: Category::Uncategorized,
                    count: 1,
                    percentage: 50.0,
                },
            ],
        };

        let table = render_table(&report);
        assert!(table.contains("DOG_FOSTER"));
        assert!(table.contains("UNCATEGORIZED"));
        assert!(table.contains("TOTAL"));
        assert!(table.contains("50.0%"));
    }
}
