use crate::domain::errors::{FetchError, ScanError};
use crate::domain::models::{FolderRecord, SkipReason, SkipRecord};
use crate::services::acl::{fetch_record, AclSource};
use crate::services::walker::{walk, DirSource};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub records: Vec<FolderRecord>,
    pub skipped: Vec<SkipRecord>,
}

/// Walk `root` and fetch every folder's descriptor, in walk order. Denied
/// and vanished folders are skipped; any other fetch failure ends the run.
pub fn scan(
    dirs: &impl DirSource,
    acls: &impl AclSource,
    root: &Path,
    max_depth: u32,
) -> Result<ScanOutcome, ScanError> {
    let walked = walk(dirs, root, max_depth)?;
    let mut outcome = ScanOutcome {
        records: Vec::with_capacity(walked.folders.len()),
        skipped: walked.skipped,
    };

    for folder in walked.folders {
        match fetch_record(acls, &folder) {
            Ok(record) => {
                info!("exporting ... {}", record.path);
                outcome.records.push(record);
            }
            Err(FetchError::AccessDenied) => skip(&mut outcome, &folder, SkipReason::AccessDenied),
            Err(FetchError::NotFound) => skip(&mut outcome, &folder, SkipReason::NotFound),
            Err(FetchError::Other(source)) => {
                return Err(ScanError::FetchUnknown {
                    path: folder,
                    source,
                })
            }
        }
    }
    Ok(outcome)
}

fn skip(outcome: &mut ScanOutcome, folder: &Path, reason: SkipReason) {
    let record = SkipRecord {
        path: folder.display().to_string(),
        reason,
        detail: None,
    };
    warn!("continuing ... {} {}", record.path, record);
    outcome.skipped.push(record);
}
