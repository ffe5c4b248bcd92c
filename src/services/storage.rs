use crate::domain::errors::ScanError;
use std::io::Write;
use std::path::Path;

/// Fails if anything, even a dangling symlink, already sits at `path`.
pub fn ensure_absent(path: &Path) -> Result<(), ScanError> {
    if std::fs::symlink_metadata(path).is_ok() {
        return Err(ScanError::OutputExists(path.to_path_buf()));
    }
    Ok(())
}

/// Create `path` and write `body`; never replaces an existing file.
pub fn write_new(path: &Path, body: &str) -> Result<(), ScanError> {
    let write_err = |source: std::io::Error| ScanError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            return Err(ScanError::OutputExists(path.to_path_buf()))
        }
        Err(e) => return Err(write_err(e)),
    };
    file.write_all(body.as_bytes()).map_err(write_err)?;
    Ok(())
}
