//! Queries on an arbitrary entry

use crate::navigator::FolderQuery;
use crate::source::Source;
use fsq_core::{path, Entry, FsError, FsResult, NodeProbe};
use fsq_providers::LocalProbe;

/// Immutable handle on a fallible entry of either kind
#[derive(Debug, Clone)]
pub struct NodeQuery<P = LocalProbe> {
    probe: P,
    result: FsResult<Entry>,
}

impl<P: NodeProbe + Clone> NodeQuery<P> {
    pub fn new(probe: P, source: impl Into<Source<Entry>>) -> Self {
        let result = match source.into() {
            Source::Path(path) => probe.probe(&path),
            Source::Entry(entry) => Ok(entry),
        };
        Self { probe, result }
    }

    pub fn from_result(probe: P, result: FsResult<Entry>) -> Self {
        Self { probe, result }
    }

    /// The containing folder, probed afresh.
    ///
    /// The root is its own parent.
    pub fn parent(&self) -> FolderQuery<P> {
        match &self.result {
            Ok(entry) => FolderQuery::new(self.probe.clone(), path::parent_dir(entry.path())),
            Err(err) => FolderQuery::from_result(self.probe.clone(), Err(err.clone())),
        }
    }

    /// Continue as a folder query without probing again.
    pub fn as_folder(&self) -> FolderQuery<P> {
        let result = match &self.result {
            Ok(Entry::Folder(folder)) => Ok(folder.clone()),
            Ok(Entry::File(file)) => Err(FsError::not_folder(&file.path)),
            Err(err) => Err(err.clone()),
        };
        FolderQuery::from_result(self.probe.clone(), result)
    }

    pub fn result(&self) -> &FsResult<Entry> {
        &self.result
    }

    pub fn into_result(self) -> FsResult<Entry> {
        self.result
    }
}
