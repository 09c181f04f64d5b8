//! Directory scanner for email files

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::batch::EmailRecord;
use crate::error::{Result, TriageError};

const PREVIEW_LEN: usize = 60;

/// One email file found on disk, paired with its extracted record.
#[derive(Debug, Clone)]
pub struct EmailFile {
    /// Location on disk, kept for the organize step.
    pub path: PathBuf,
    /// File name, doubles as the record id.
    pub file_name: String,
    /// First line of the content, truncated for listings.
    pub preview: String,
    /// Record handed to the batch runner.
    pub record: EmailRecord,
}

/// Scan `dir` for `.txt` files and read each into an [`EmailFile`].
///
/// Files are sorted by name so batches are deterministic. An unreadable
/// file is logged and kept with `text: None`; the batch runner will
/// classify it as uncategorized rather than dropping it.
pub fn load_directory(dir: &Path) -> Result<Vec<EmailFile>> {
    if !dir.is_dir() {
        return Err(TriageError::NotFound(format!(
            "email directory {}",
            dir.display()
        )));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().map(|ext| ext == "txt").unwrap_or(false)
        })
        .collect();
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (text, preview) = match fs::read_to_string(&path) {
            Ok(content) => {
                let preview = preview_line(&content);
                (Some(content), preview)
            }
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                (None, String::new())
            }
        };

        debug!("Ingested {}", file_name);
        files.push(EmailFile {
            record: EmailRecord {
                id: Some(file_name.clone()),
                text,
            },
            path,
            file_name,
            preview,
        });
    }

    Ok(files)
}

fn preview_line(content: &str) -> String {
    let first_line = content.trim().lines().next().unwrap_or("");
    if first_line.chars().count() > PREVIEW_LEN {
        let truncated: String = first_line.chars().take(PREVIEW_LEN).collect();
        format!("{}...", truncated)
    } else {
        first_line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_loads_txt_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "b.txt", "I want a dog");
        write_file(dir.path(), "a.txt", "Kitten please");
        write_file(dir.path(), "notes.md", "not an email");

        let files = load_directory(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name, "a.txt");
        assert_eq!(files[1].file_name, "b.txt");
        assert_eq!(files[0].record.text.as_deref(), Some("Kitten please"));
    }

    #[test]
    fn test_preview_is_first_line_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let long_line = "x".repeat(80);
        write_file(dir.path(), "long.txt", &format!("{}\nsecond line", long_line));

        let files = load_directory(dir.path()).unwrap();
        assert_eq!(files[0].preview.chars().count(), PREVIEW_LEN + 3);
        assert!(files[0].preview.ends_with("..."));
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let result = load_directory(Path::new("/no/such/directory"));
        assert!(matches!(result, Err(TriageError::NotFound(_))));
    }

    #[test]
    fn test_empty_directory_yields_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        let files = load_directory(dir.path()).unwrap();
        assert!(files.is_empty());
    }
}
