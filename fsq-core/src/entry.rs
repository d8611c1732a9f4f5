//! File system entries

use crate::{Metadata, PathParts};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Entry kind, fixed when the entry is probed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Folder => "folder",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A probed file (anything that is not a folder)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub parts: PathParts,
    pub metadata: Metadata,
}

impl FileEntry {
    /// `path` must already be absolute and normalized.
    pub fn new(path: impl Into<PathBuf>, metadata: Metadata) -> Self {
        let path = path.into();
        let parts = PathParts::parse(&path);
        Self { path, parts, metadata }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component, extension included
    pub fn name(&self) -> &str {
        &self.parts.base
    }
}

/// A probed folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    pub path: PathBuf,
    pub parts: PathParts,
    pub metadata: Metadata,
}

impl FolderEntry {
    /// `path` must already be absolute and normalized.
    pub fn new(path: impl Into<PathBuf>, metadata: Metadata) -> Self {
        let path = path.into();
        let parts = PathParts::parse(&path);
        Self { path, parts, metadata }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component, extension included
    pub fn name(&self) -> &str {
        &self.parts.base
    }
}

/// A file system entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    File(FileEntry),
    Folder(FolderEntry),
}

impl Entry {
    pub fn new(kind: EntryKind, path: impl Into<PathBuf>, metadata: Metadata) -> Self {
        match kind {
            EntryKind::File => Entry::File(FileEntry::new(path, metadata)),
            EntryKind::Folder => Entry::Folder(FolderEntry::new(path, metadata)),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::File(_) => EntryKind::File,
            Entry::Folder(_) => EntryKind::Folder,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind() == EntryKind::File
    }

    pub fn is_folder(&self) -> bool {
        self.kind() == EntryKind::Folder
    }

    pub fn path(&self) -> &Path {
        match self {
            Entry::File(f) => &f.path,
            Entry::Folder(f) => &f.path,
        }
    }

    pub fn parts(&self) -> &PathParts {
        match self {
            Entry::File(f) => &f.parts,
            Entry::Folder(f) => &f.parts,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        match self {
            Entry::File(f) => &f.metadata,
            Entry::Folder(f) => &f.metadata,
        }
    }

    pub fn name(&self) -> &str {
        &self.parts().base
    }

    pub fn into_file(self) -> Option<FileEntry> {
        match self {
            Entry::File(f) => Some(f),
            Entry::Folder(_) => None,
        }
    }

    pub fn into_folder(self) -> Option<FolderEntry> {
        match self {
            Entry::Folder(f) => Some(f),
            Entry::File(_) => None,
        }
    }
}

impl From<FileEntry> for Entry {
    fn from(entry: FileEntry) -> Self {
        Entry::File(entry)
    }
}

impl From<FolderEntry> for Entry {
    fn from(entry: FolderEntry) -> Self {
        Entry::Folder(entry)
    }
}

/// Output types a probe result can be narrowed to.
///
/// `REQUIRED` is the kind an entry must have to narrow successfully;
/// `None` accepts any entry.
pub trait Narrow: Sized {
    const REQUIRED: Option<EntryKind>;

    fn narrow(entry: Entry) -> Option<Self>;
}

impl Narrow for Entry {
    const REQUIRED: Option<EntryKind> = None;

    fn narrow(entry: Entry) -> Option<Self> {
        Some(entry)
    }
}

impl Narrow for FileEntry {
    const REQUIRED: Option<EntryKind> = Some(EntryKind::File);

    fn narrow(entry: Entry) -> Option<Self> {
        entry.into_file()
    }
}

impl Narrow for FolderEntry {
    const REQUIRED: Option<EntryKind> = Some(EntryKind::Folder);

    fn narrow(entry: Entry) -> Option<Self> {
        entry.into_folder()
    }
}
