//! The node probe contract

use crate::entry::{Entry, EntryKind, FileEntry, FolderEntry, Narrow};
use crate::error::{FsError, FsResult};
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

/// Resolves one path to a classified entry.
///
/// Implementations make `path` absolute and normalized, inspect it once, and
/// translate OS errors with [`FsError::from_io`]. Nothing is cached: every
/// call is a fresh snapshot.
pub trait NodeProbe {
    fn probe(&self, path: &Path) -> FsResult<Entry>;

    /// Fails with `not-folder` if the entry exists but is a file.
    fn probe_folder(&self, path: &Path) -> FsResult<FolderEntry> {
        narrow_probed(self.probe(path))
    }

    /// Fails with `not-file` if the entry exists but is a folder.
    fn probe_file(&self, path: &Path) -> FsResult<FileEntry> {
        narrow_probed(self.probe(path))
    }

    fn probe_as<T: Narrow>(&self, path: &Path) -> FsResult<T>
    where
        Self: Sized,
    {
        narrow_probed(self.probe(path))
    }
}

/// Narrow a probe result, failing with the kind-mismatch error for `T`.
pub fn narrow_probed<T: Narrow>(result: FsResult<Entry>) -> FsResult<T> {
    let entry = result?;
    let path = entry.path().to_path_buf();
    T::narrow(entry).ok_or_else(|| match T::REQUIRED {
        Some(EntryKind::Folder) => FsError::not_folder(path),
        _ => FsError::not_file(path),
    })
}

impl<P: NodeProbe + ?Sized> NodeProbe for &P {
    fn probe(&self, path: &Path) -> FsResult<Entry> {
        (**self).probe(path)
    }
}

impl<P: NodeProbe + ?Sized> NodeProbe for Box<P> {
    fn probe(&self, path: &Path) -> FsResult<Entry> {
        (**self).probe(path)
    }
}

impl<P: NodeProbe + ?Sized> NodeProbe for Rc<P> {
    fn probe(&self, path: &Path) -> FsResult<Entry> {
        (**self).probe(path)
    }
}

impl<P: NodeProbe + ?Sized> NodeProbe for Arc<P> {
    fn probe(&self, path: &Path) -> FsResult<Entry> {
        (**self).probe(path)
    }
}
