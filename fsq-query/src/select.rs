//! Selectors bound to a folder

use crate::resolve::{candidates, first_match};
use fsq_core::{Entry, EntryKind, FileEntry, FolderEntry, FsError, FsResult, Narrow, NodeProbe};
use fsq_providers::LocalProbe;
use std::marker::PhantomData;
use tracing::debug;

/// An empty extension list: try the bare name only.
pub const NO_EXTENSIONS: [&str; 0] = [];

/// Selector factory over a fallible folder
#[derive(Debug, Clone)]
pub struct Select<P = LocalProbe> {
    folder: FsResult<FolderEntry>,
    probe: P,
}

impl<P: NodeProbe + Clone> Select<P> {
    pub fn new(folder: FsResult<FolderEntry>, probe: P) -> Self {
        Self { folder, probe }
    }

    /// Exactly one file
    pub fn file(&self) -> SingleSelect<FileEntry, P> {
        SingleSelect::file(self.folder.clone(), self.probe.clone())
    }

    /// Exactly one folder
    pub fn folder(&self) -> SingleSelect<FolderEntry, P> {
        SingleSelect::folder(self.folder.clone(), self.probe.clone())
    }

    /// Any number of entries of either kind
    pub fn nodes(&self) -> MultiSelect<Entry, P> {
        MultiSelect::nodes(self.folder.clone(), self.probe.clone())
    }

    pub fn files(&self) -> MultiSelect<FileEntry, P> {
        MultiSelect::files(self.folder.clone(), self.probe.clone())
    }

    pub fn folders(&self) -> MultiSelect<FolderEntry, P> {
        MultiSelect::folders(self.folder.clone(), self.probe.clone())
    }
}

/// Resolves exactly one entry of kind `T`.
///
/// Candidates are tried in the order given; the first that exists with the
/// right kind wins and nothing after it is probed. A same-named entry of the
/// wrong kind counts as absent.
#[derive(Debug, Clone)]
pub struct SingleSelect<T, P = LocalProbe> {
    folder: FsResult<FolderEntry>,
    probe: P,
    kind: PhantomData<fn() -> T>,
}

impl<P: NodeProbe> SingleSelect<FileEntry, P> {
    pub fn file(folder: FsResult<FolderEntry>, probe: P) -> Self {
        Self { folder, probe, kind: PhantomData }
    }
}

impl<P: NodeProbe> SingleSelect<FolderEntry, P> {
    pub fn folder(folder: FsResult<FolderEntry>, probe: P) -> Self {
        Self { folder, probe, kind: PhantomData }
    }
}

impl<T: Narrow, P: NodeProbe> SingleSelect<T, P> {
    pub fn required(&self) -> Option<EntryKind> {
        T::REQUIRED
    }

    /// Resolve `name` with each extension in turn.
    ///
    /// Extensions may be given with or without the leading dot. An empty list
    /// tries the bare name. Fails with `not-found` on the containing folder
    /// when no candidate matches, or forwards the folder's own failure.
    pub fn by_path<I, S>(&self, name: &str, extensions: I) -> FsResult<T>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let folder = self.folder.as_ref().map_err(Clone::clone)?;
        let candidates = candidates(extensions);

        first_match(&self.probe, folder, name, &candidates).ok_or_else(|| {
            debug!(name, folder = %folder.path.display(), "no candidate matched");
            FsError::not_found(&folder.path)
        })
    }

    /// Resolve `name` exactly, without extensions.
    pub fn by_name(&self, name: &str) -> FsResult<T> {
        self.by_path(name, NO_EXTENSIONS)
    }
}

/// Resolves zero or more entries of kind `T`.
///
/// Each input path is resolved on its own with the same first-match rule as
/// [`SingleSelect`]. Paths that do not resolve are left out of the result;
/// only an unresolved folder fails the whole selection.
#[derive(Debug, Clone)]
pub struct MultiSelect<T, P = LocalProbe> {
    folder: FsResult<FolderEntry>,
    probe: P,
    kind: PhantomData<fn() -> T>,
}

impl<P: NodeProbe> MultiSelect<Entry, P> {
    pub fn nodes(folder: FsResult<FolderEntry>, probe: P) -> Self {
        Self { folder, probe, kind: PhantomData }
    }
}

impl<P: NodeProbe> MultiSelect<FileEntry, P> {
    pub fn files(folder: FsResult<FolderEntry>, probe: P) -> Self {
        Self { folder, probe, kind: PhantomData }
    }
}

impl<P: NodeProbe> MultiSelect<FolderEntry, P> {
    pub fn folders(folder: FsResult<FolderEntry>, probe: P) -> Self {
        Self { folder, probe, kind: PhantomData }
    }
}

impl<T: Narrow, P: NodeProbe> MultiSelect<T, P> {
    pub fn required(&self) -> Option<EntryKind> {
        T::REQUIRED
    }

    pub fn by_path<I, S>(&self, name: &str, extensions: I) -> FsResult<Vec<T>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.by_paths([name], extensions)
    }

    /// Resolve `name` exactly, without extensions.
    pub fn by_name(&self, name: &str) -> FsResult<Vec<T>> {
        self.by_paths([name], NO_EXTENSIONS)
    }

    /// Resolve every path relative to the folder, keeping input order.
    ///
    /// Duplicate inputs are resolved (and returned) independently.
    pub fn by_paths<N, M, I, S>(&self, paths: N, extensions: I) -> FsResult<Vec<T>>
    where
        N: IntoIterator<Item = M>,
        M: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let folder = self.folder.as_ref().map_err(Clone::clone)?;
        let candidates = candidates(extensions);

        let found = paths
            .into_iter()
            .filter_map(|p| {
                let p = p.as_ref();
                let found = first_match(&self.probe, folder, p, &candidates);
                if found.is_none() {
                    debug!(path = p, folder = %folder.path.display(), "omitting unresolved path");
                }
                found
            })
            .collect();

        Ok(found)
    }
}
