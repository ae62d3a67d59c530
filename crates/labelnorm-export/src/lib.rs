//! Boundary collaborators around the pipeline: reading labels in and
//! writing (original, normalized) pairs out.

pub mod error;
pub mod reader;
pub mod tsv;
pub mod xlsx;

pub use error::ExportError;
pub use reader::{read_labels, read_labels_from};
pub use tsv::{write_tsv, write_tsv_to};
pub use xlsx::write_xlsx;

/// Column headers shared by every tabular exporter.
pub const HEADERS: [&str; 2] = ["Original Label", "Corrected Label"];
