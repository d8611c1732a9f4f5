//! Query inputs

use fsq_core::{Entry, FileEntry, FolderEntry};
use std::path::{Path, PathBuf};

/// Where a query starts: a path still to be probed, or an entry already resolved.
#[derive(Debug, Clone)]
pub enum Source<E> {
    Path(PathBuf),
    Entry(E),
}

impl<E> From<&str> for Source<E> {
    fn from(path: &str) -> Self {
        Source::Path(PathBuf::from(path))
    }
}

impl<E> From<String> for Source<E> {
    fn from(path: String) -> Self {
        Source::Path(PathBuf::from(path))
    }
}

impl<E> From<&String> for Source<E> {
    fn from(path: &String) -> Self {
        Source::Path(PathBuf::from(path))
    }
}

impl<E> From<&Path> for Source<E> {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

impl<E> From<PathBuf> for Source<E> {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

impl<E> From<&PathBuf> for Source<E> {
    fn from(path: &PathBuf) -> Self {
        Source::Path(path.clone())
    }
}

impl From<FolderEntry> for Source<FolderEntry> {
    fn from(entry: FolderEntry) -> Self {
        Source::Entry(entry)
    }
}

impl From<Entry> for Source<Entry> {
    fn from(entry: Entry) -> Self {
        Source::Entry(entry)
    }
}

impl From<FileEntry> for Source<Entry> {
    fn from(entry: FileEntry) -> Self {
        Source::Entry(entry.into())
    }
}

impl From<FolderEntry> for Source<Entry> {
    fn from(entry: FolderEntry) -> Self {
        Source::Entry(entry.into())
    }
}
