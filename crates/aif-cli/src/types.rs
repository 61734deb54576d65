use std::path::PathBuf;

use aif_model::CanonicalDocument;

/// Outcome of a `project` run, kept for summary printing.
#[derive(Debug)]
pub struct ProjectResult {
    pub record_id: String,
    pub output_path: Option<PathBuf>,
    pub document: CanonicalDocument,
}
