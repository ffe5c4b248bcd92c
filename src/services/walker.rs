use crate::domain::errors::ScanError;
use crate::domain::models::{SkipReason, SkipRecord};
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Directory listing facility of the host.
pub trait DirSource {
    /// Fails unless `root` is a directory the walk can start from.
    fn probe(&self, root: &Path) -> io::Result<()>;
    /// Immediate child folders of `dir`, in enumeration order.
    fn subdirs(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

pub struct LocalFs;

impl DirSource for LocalFs {
    fn probe(&self, root: &Path) -> io::Result<()> {
        let meta = std::fs::metadata(root)?;
        if !meta.is_dir() {
            return Err(io::Error::other("not a directory"));
        }
        Ok(())
    }

    fn subdirs(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut out = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            // file_type() does not follow symlinks, so linked folders are not entered.
            if entry.file_type()?.is_dir() {
                out.push(entry.path());
            }
        }
        Ok(out)
    }
}

#[derive(Debug, Default)]
pub struct Walk {
    pub folders: Vec<PathBuf>,
    pub skipped: Vec<SkipRecord>,
}

/// Root first, then a pre-order walk no deeper than `max_depth` levels.
pub fn walk(source: &impl DirSource, root: &Path, max_depth: u32) -> Result<Walk, ScanError> {
    source
        .probe(root)
        .map_err(|e| ScanError::RootUnwalkable {
            path: root.to_path_buf(),
            source: e,
        })?;

    let mut walk = Walk {
        folders: vec![root.to_path_buf()],
        skipped: Vec::new(),
    };
    if max_depth == 0 {
        return Ok(walk);
    }

    let children = source
        .subdirs(root)
        .map_err(|e| ScanError::RootUnwalkable {
            path: root.to_path_buf(),
            source: e,
        })?;
    for child in children {
        descend(source, child, max_depth - 1, &mut walk);
    }
    Ok(walk)
}

fn descend(source: &impl DirSource, dir: PathBuf, depth_left: u32, walk: &mut Walk) {
    walk.folders.push(dir.clone());
    if depth_left == 0 {
        return;
    }
    match source.subdirs(&dir) {
        Ok(children) => {
            for child in children {
                descend(source, child, depth_left - 1, walk);
            }
        }
        Err(e) => {
            let skip = SkipRecord {
                path: dir.display().to_string(),
                reason: SkipReason::ListingFailed,
                detail: Some(e.to_string()),
            };
            warn!("continuing ... {} {}", skip.path, skip);
            walk.skipped.push(skip);
        }
    }
}
