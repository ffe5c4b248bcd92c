use crate::domain::constants::DOCUMENT_VERSION;
use crate::domain::errors::ScanError;
use crate::domain::models::{FolderRecord, ReportDocument};
use crate::services::storage::write_new;
use std::path::Path;

pub fn build_document(root: &Path, max_depth: u32, records: Vec<FolderRecord>) -> ReportDocument {
    ReportDocument {
        version: DOCUMENT_VERSION,
        root: root.display().to_string(),
        max_depth,
        folders: records,
    }
}

pub fn save_document(path: &Path, doc: &ReportDocument) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(doc)?;
    write_new(path, &body)?;
    Ok(())
}

pub fn load_document(path: &Path) -> Result<ReportDocument, ScanError> {
    let invalid = |reason: String| ScanError::Document {
        path: path.to_path_buf(),
        reason,
    };
    let raw = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let doc: ReportDocument = serde_json::from_str(&raw).map_err(|e| invalid(e.to_string()))?;
    if doc.version != DOCUMENT_VERSION {
        return Err(invalid(format!("unsupported version {}", doc.version)));
    }
    Ok(doc)
}
