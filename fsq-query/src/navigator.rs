//! Folder navigation

use crate::select::Select;
use crate::source::Source;
use fsq_core::{path, FolderEntry, FsResult, NodeProbe};
use fsq_providers::LocalProbe;
use std::path::Path;
use tracing::debug;

/// Immutable handle on a fallible folder.
///
/// Each [`cd`](FolderQuery::cd) probes afresh and yields a new query; once the
/// folder is a failure, every later step forwards that failure untouched and
/// performs no I/O.
#[derive(Debug, Clone)]
pub struct FolderQuery<P = LocalProbe> {
    probe: P,
    result: FsResult<FolderEntry>,
}

impl<P: NodeProbe + Clone> FolderQuery<P> {
    /// A path is probed as a folder; an entry is taken as already valid.
    pub fn new(probe: P, source: impl Into<Source<FolderEntry>>) -> Self {
        let result = match source.into() {
            Source::Path(path) => probe.probe_folder(&path),
            Source::Entry(entry) => Ok(entry),
        };
        Self { probe, result }
    }

    pub fn from_result(probe: P, result: FsResult<FolderEntry>) -> Self {
        Self { probe, result }
    }

    /// Move to `segment` relative to this folder.
    pub fn cd(&self, segment: impl AsRef<Path>) -> Self {
        match &self.result {
            Ok(folder) => {
                let target = path::join(&folder.path, segment);
                debug!(from = %folder.path.display(), to = %target.display(), "cd");
                Self::new(self.probe.clone(), target)
            }
            Err(err) => {
                debug!(kind = %err.kind(), "cd skipped after failure");
                Self::from_result(self.probe.clone(), Err(err.clone()))
            }
        }
    }

    pub fn select(&self) -> Select<P> {
        Select::new(self.result.clone(), self.probe.clone())
    }

    pub fn result(&self) -> &FsResult<FolderEntry> {
        &self.result
    }

    pub fn into_result(self) -> FsResult<FolderEntry> {
        self.result
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{projects, CountingProbe};
    use fsq_core::{EntryKind, ErrorKind, Metadata};
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_cd_into_child() {
        let probe = CountingProbe::new(projects());
        let query = FolderQuery::new(&probe, "/projects").cd("projectA");

        let folder = query.result().as_ref().unwrap();
        assert_eq!(folder.path, PathBuf::from("/projects/projectA"));
        assert_eq!(folder.name(), "projectA");
    }

    #[test]
    fn test_cd_through_parent() {
        let probe = CountingProbe::new(projects());
        let query = FolderQuery::new(&probe, "/projects").cd("projectA").cd("../projectB");

        assert_eq!(query.into_result().unwrap().path, PathBuf::from("/projects/projectB"));
    }

    #[test]
    fn test_cd_from_entry_does_no_io() {
        let probe = CountingProbe::new(projects());
        let entry = FolderEntry::new("/projects", Metadata::new());

        let query = FolderQuery::new(&probe, entry);
        assert!(query.is_ok());
        assert_eq!(probe.count(), 0);

        let query = query.cd("projectA/src");
        assert!(query.is_ok());
        assert_eq!(probe.probed(), vec![PathBuf::from("/projects/projectA/src")]);
    }

    #[test]
    fn test_cd_missing_short_circuits() {
        let probe = CountingProbe::new(projects());
        let missing = FolderQuery::new(&probe, "/projects").cd("projectC");

        let err = missing.result().as_ref().unwrap_err().clone();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), Path::new("/projects/projectC"));

        let probes = probe.count();
        let deeper = missing.cd("a").cd("b").cd("c");
        assert_eq!(probe.count(), probes);

        let forwarded = deeper.into_result().unwrap_err();
        assert!(forwarded.same_as(&err));
        assert_eq!(forwarded.to_string(), err.to_string());
    }

    #[test]
    fn test_cd_forwards_unknown_failure_with_payload() {
        let memory = projects().with_failure("/projects/locked", io::ErrorKind::PermissionDenied);
        let probe = CountingProbe::new(memory);
        let locked = FolderQuery::new(&probe, "/projects").cd("locked");

        let err = locked.result().as_ref().unwrap_err().clone();
        assert_eq!(err.kind(), ErrorKind::Unknown);

        let probes = probe.count();
        let deeper = locked.cd("a").cd("b");
        let files = deeper.select().files().by_paths(["index"], ["js"]);
        assert_eq!(probe.count(), probes);

        let forwarded = files.unwrap_err();
        assert!(forwarded.same_as(&err));
        assert_eq!(
            forwarded.payload().map(|e| e.kind()),
            Some(io::ErrorKind::PermissionDenied)
        );
        assert!(deeper.into_result().unwrap_err().same_as(&err));
    }

    #[test]
    fn test_cd_into_file_fails() {
        let probe = CountingProbe::new(projects());
        let query = FolderQuery::new(&probe, "/projects/projectA").cd("package.json");

        let err = query.into_result().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFolder);
    }

    #[test]
    fn test_start_from_file_fails() {
        let probe = CountingProbe::new(projects());
        let query = FolderQuery::new(&probe, "/projects/projectA/src/index.js");
        assert_eq!(query.result().as_ref().unwrap_err().kind(), ErrorKind::NotFolder);
    }

    #[test]
    fn test_select_after_failure_probes_nothing() {
        let probe = CountingProbe::new(projects());
        let query = FolderQuery::new(&probe, "/nowhere").cd("src");
        let probes = probe.count();

        let err = query.select().file().by_path("index", ["js"]).unwrap_err();
        assert_eq!(err.path(), Path::new("/nowhere"));
        assert!(query.select().nodes().by_name("index.js").is_err());
        assert_eq!(probe.count(), probes);
    }

    #[test]
    fn test_select_is_bound_to_current_folder() {
        let probe = CountingProbe::new(projects());
        let query = FolderQuery::new(&probe, "/projects/projectA");

        let src = query.select().folder().by_name("src").unwrap();
        assert_eq!(src.path, PathBuf::from("/projects/projectA/src"));

        let nodes = query.select().nodes().by_paths(["docs", "package"], ["", "json"]).unwrap();
        let kinds: Vec<EntryKind> = nodes.iter().map(|n| n.kind()).collect();
        assert_eq!(kinds, vec![EntryKind::Folder, EntryKind::File]);
    }

    #[test]
    fn test_independent_navigators_probe_independently() {
        let probe = CountingProbe::new(projects());
        let _a = FolderQuery::new(&probe, "/projects/projectA");
        let _b = FolderQuery::new(&probe, "/projects/projectA");
        assert_eq!(probe.count(), 2);
    }
}
