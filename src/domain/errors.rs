use std::io;
use std::path::PathBuf;

/// Why a folder's descriptor could not be read.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("access denied")]
    AccessDenied,
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Other(io::Error),
}

impl From<io::Error> for FetchError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FetchError::NotFound,
            io::ErrorKind::PermissionDenied => FetchError::AccessDenied,
            _ => FetchError::Other(err),
        }
    }
}

/// Failures that end the run.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    #[error("output already exists: {}", .0.display())]
    OutputExists(PathBuf),
    #[error("cannot walk root {}", path.display())]
    RootUnwalkable { path: PathBuf, source: io::Error },
    #[error("cannot read permissions of {}", path.display())]
    FetchUnknown { path: PathBuf, source: io::Error },
    #[error("cannot write {}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("invalid report document {}: {}", path.display(), reason)]
    Document { path: PathBuf, reason: String },
}

impl ScanError {
    pub fn code(&self) -> &'static str {
        match self {
            ScanError::OutputExists(_) => "OUTPUT_EXISTS",
            ScanError::RootUnwalkable { .. } => "ROOT_UNWALKABLE",
            ScanError::FetchUnknown { .. } => "FETCH_FAILED",
            ScanError::Write { .. } => "WRITE_FAILED",
            ScanError::Document { .. } => "DOCUMENT_INVALID",
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("invalid config {}: {}", path.display(), reason)]
pub struct ConfigError {
    pub path: PathBuf,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::{FetchError, ScanError};
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn io_errors_classify_into_fetch_failures() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(matches!(FetchError::from(denied), FetchError::AccessDenied));

        let missing = io::Error::from(io::ErrorKind::NotFound);
        assert!(matches!(FetchError::from(missing), FetchError::NotFound));

        let other = io::Error::other("disk on fire");
        assert!(matches!(FetchError::from(other), FetchError::Other(_)));
    }

    #[test]
    fn fatal_message_names_its_cause_once() {
        let err = ScanError::RootUnwalkable {
            path: PathBuf::from("/data"),
            source: io::Error::other("disk on fire"),
        };
        assert_eq!(err.to_string(), "cannot walk root /data");

        let message = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(message, "cannot walk root /data: disk on fire");
    }
}
