//! Error types for fsquery

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Result type alias
pub type FsResult<T> = Result<T, FsError>;

/// Failure kind codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    NotFolder,
    NotFile,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not-found",
            ErrorKind::NotFolder => "not-folder",
            ErrorKind::NotFile => "not-file",
            ErrorKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type
///
/// Cloning is cheap: the OS error behind [`FsError::Unknown`] is shared, so a
/// failure can be forwarded down a query chain without losing its payload.
#[derive(Error, Debug, Clone)]
pub enum FsError {
    #[error("Path not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Path is not a folder: {}", .path.display())]
    NotFolder { path: PathBuf },

    #[error("Path is not a file: {}", .path.display())]
    NotFile { path: PathBuf },

    #[error("Cannot inspect {}: {source}", .path.display())]
    Unknown {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },
}

impl FsError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        FsError::NotFound { path: path.into() }
    }

    pub fn not_folder(path: impl Into<PathBuf>) -> Self {
        FsError::NotFolder { path: path.into() }
    }

    pub fn not_file(path: impl Into<PathBuf>) -> Self {
        FsError::NotFile { path: path.into() }
    }

    /// Translate an OS error raised while inspecting `path`.
    ///
    /// Absence becomes [`FsError::NotFound`]; anything else is kept as the
    /// payload of [`FsError::Unknown`].
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        if err.kind() == io::ErrorKind::NotFound {
            FsError::NotFound { path }
        } else {
            FsError::Unknown { path, source: Arc::new(err) }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FsError::NotFound { .. } => ErrorKind::NotFound,
            FsError::NotFolder { .. } => ErrorKind::NotFolder,
            FsError::NotFile { .. } => ErrorKind::NotFile,
            FsError::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// The path the failure refers to
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound { path }
            | FsError::NotFolder { path }
            | FsError::NotFile { path }
            | FsError::Unknown { path, .. } => path,
        }
    }

    /// Diagnostic payload, present only for [`ErrorKind::Unknown`]
    pub fn payload(&self) -> Option<&io::Error> {
        match self {
            FsError::Unknown { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }

    /// Whether two failures are the same value; `Unknown` compares by payload identity.
    pub fn same_as(&self, other: &FsError) -> bool {
        match (self, other) {
            (FsError::Unknown { path: a, source: x }, FsError::Unknown { path: b, source: y }) => {
                a == b && Arc::ptr_eq(x, y)
            }
            _ => self.kind() == other.kind() && self.path() == other.path(),
        }
    }
}
