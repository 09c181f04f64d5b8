//! Report export and email organization
//!
//! Serialization side of the boundary: renders a [`crate::report::Report`]
//! as CSV or a text table and can copy classified email files into
//! per-category folders. The logical schema lives in the report itself.

mod csv;
mod organize;
mod table;

pub use csv::{save_csv, write_csv};
pub use organize::organize_emails;
pub use table::render_table;
