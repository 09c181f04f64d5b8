//! Copy classified emails into per-category folders

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::batch::ClassificationResult;
use crate::error::Result;
use crate::ingest::EmailFile;

/// Copy each email file into `out_dir/<CATEGORY>/`, pairing files with
/// results by position (the batch runner preserves input order). Copies
/// rather than moves so the source directory stays intact. Returns the
/// number of files placed.
pub fn organize_emails(
    files: &[EmailFile],
    results: &[ClassificationResult],
    out_dir: &Path,
) -> Result<usize> {
    let mut placed = 0;

    for (file, result) in files.iter().zip(results) {
        let category_dir = out_dir.join(result.category.as_str());
        fs::create_dir_all(&category_dir)?;

        let target = category_dir.join(&file.file_name);
        match fs::copy(&file.path, &target) {
            Ok(_) => placed += 1,
            Err(e) => warn!("Failed to copy {}: {}", file.path.display(), e),
        }
    }

    Ok(placed)
}
