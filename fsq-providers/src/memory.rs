//! In-memory probe.
//!
//! Answers from a fixed tree built up front. Used for tests and dry runs;
//! nothing touches the operating system.

use fsq_core::{
    entry::{Entry, EntryKind},
    error::{FsError, FsResult},
    metadata::Metadata,
    path, NodeProbe,
};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Node in the memory tree
#[derive(Debug, Clone)]
enum Node {
    File(Metadata),
    Folder(Metadata),
    /// Probing this path fails with the given OS error kind
    Broken(io::ErrorKind),
}

/// In-memory probe.
///
/// Relative paths resolve against `/`. Adding a path creates any missing
/// parent folders.
#[derive(Debug, Clone)]
pub struct MemoryProbe {
    nodes: BTreeMap<PathBuf, Node>,
}

impl Default for MemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProbe {
    /// Create a tree holding only the root folder.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from("/"), Node::Folder(Metadata::new()));
        Self { nodes }
    }

    fn anchor(target: &Path) -> PathBuf {
        path::resolve(Path::new("/"), target)
    }

    fn insert(mut self, target: impl AsRef<Path>, node: Node) -> Self {
        let target = Self::anchor(target.as_ref());

        let mut current = PathBuf::new();
        if let Some(parent) = target.parent() {
            for component in parent.components() {
                current.push(component.as_os_str());
                self.nodes
                    .entry(current.clone())
                    .or_insert_with(|| Node::Folder(Metadata::new()));
            }
        }

        self.nodes.insert(target, node);
        self
    }

    pub fn with_folder(self, target: impl AsRef<Path>) -> Self {
        self.insert(target, Node::Folder(Metadata::new()))
    }

    pub fn with_file(self, target: impl AsRef<Path>, size: u64) -> Self {
        self.insert(target, Node::File(Metadata::new().with_size(size)))
    }

    pub fn with_entry(self, target: impl AsRef<Path>, kind: EntryKind, metadata: Metadata) -> Self {
        let node = match kind {
            EntryKind::File => Node::File(metadata),
            EntryKind::Folder => Node::Folder(metadata),
        };
        self.insert(target, node)
    }

    /// Make probing `target` fail as the OS would with `kind`.
    pub fn with_failure(self, target: impl AsRef<Path>, kind: io::ErrorKind) -> Self {
        self.insert(target, Node::Broken(kind))
    }
}

impl NodeProbe for MemoryProbe {
    fn probe(&self, target: &Path) -> FsResult<Entry> {
        let resolved = Self::anchor(target);
        let result = match self.nodes.get(&resolved) {
            Some(Node::File(meta)) => Ok(Entry::new(EntryKind::File, resolved, meta.clone())),
            Some(Node::Folder(meta)) => Ok(Entry::new(EntryKind::Folder, resolved, meta.clone())),
            Some(Node::Broken(kind)) => Err(FsError::from_io(
                resolved,
                io::Error::new(*kind, "injected probe failure"),
            )),
            None => Err(FsError::not_found(resolved)),
        };

        match &result {
            Ok(entry) => trace!(path = %entry.path().display(), kind = %entry.kind(), "probed"),
            Err(err) => trace!(kind = %err.kind(), "probe failed: {}", err),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsq_core::ErrorKind;

    fn projects() -> MemoryProbe {
        MemoryProbe::new()
            .with_folder("/projects/projectA/docs")
            .with_file("/projects/projectA/src/index.html", 120)
            .with_file("/projects/projectA/src/index.js", 40)
            .with_file("/projects/projectA/package.json", 300)
    }

    #[test]
    fn test_parents_are_created() {
        let probe = projects();
        assert!(probe.probe(Path::new("/projects")).unwrap().is_folder());
        assert!(probe.probe(Path::new("/projects/projectA/src")).unwrap().is_folder());
        assert!(probe.probe(Path::new("/")).unwrap().is_folder());
    }

    #[test]
    fn test_file_metadata() {
        let probe = projects();
        let entry = probe.probe(Path::new("/projects/projectA/package.json")).unwrap();
        assert!(entry.is_file());
        assert_eq!(entry.metadata().size, 300);
        assert_eq!(entry.parts().stem, "package");
    }

    #[test]
    fn test_relative_and_messy_paths() {
        let probe = projects();
        let entry = probe.probe(Path::new("projects/./projectA/../projectA/src")).unwrap();
        assert_eq!(entry.path(), Path::new("/projects/projectA/src"));
    }

    #[test]
    fn test_missing_is_not_found() {
        let err = projects().probe(Path::new("/projects/projectC")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), Path::new("/projects/projectC"));
    }

    #[test]
    fn test_injected_failure() {
        let probe = projects().with_failure("/projects/locked", io::ErrorKind::PermissionDenied);
        let err = probe.probe(Path::new("/projects/locked")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert_eq!(err.payload().map(|e| e.kind()), Some(io::ErrorKind::PermissionDenied));
    }
}
