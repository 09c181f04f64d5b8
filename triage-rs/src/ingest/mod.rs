//! Ingestion of plain-text email files
//!
//! Collaborator layer in front of the core: scans a directory for `.txt`
//! files and turns each into an [`crate::batch::EmailRecord`]. The core
//! itself never touches the file system.

mod directory;

pub use directory::{load_directory, EmailFile};
