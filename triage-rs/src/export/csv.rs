//! CSV report writer

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::report::Report;

/// Write a report as CSV: a `category,count,percentage` header, one row per
/// category, and a trailing TOTAL row.
pub fn write_csv<W: Write>(writer: &mut W, report: &Report) -> Result<()> {
    writeln!(writer, "category,count,percentage")?;
    for row in &report.rows {
        writeln!(
            writer,
            "{},{},{:.1}",
            row.category.as_str(),
            row.count,
            row.percentage
        )?;
    }
    let total_pct = if report.total == 0 { 0.0 } else { 100.0 };
    writeln!(writer, "TOTAL,{},{:.1}", report.total, total_pct)?;
    Ok(())
}

/// Save the report as `email_report_<batch_id>.csv` under `dir`, creating
/// the directory if needed. Returns the written path.
pub fn save_csv(report: &Report, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("email_report_{}.csv", report.batch_id));
    let mut file = fs::File::create(&path)?;
    write_csv(&mut file, report)?;
    Ok(path)
}
