//! Test fixtures

use chrono::{DateTime, TimeZone, Utc};
use fsq_core::{Entry, EntryKind, FsResult, Metadata, NodeProbe};
use fsq_providers::MemoryProbe;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// The sample tree:
///
/// ```text
/// /projects/projectA/{docs/, src/{index.html, index.js, style.css}, package.json}
/// /projects/projectB/
/// ```
pub(crate) fn projects() -> MemoryProbe {
    MemoryProbe::new()
        .with_folder("/projects/projectA/docs")
        .with_file("/projects/projectA/src/index.html", 64)
        .with_file("/projects/projectA/src/index.js", 32)
        .with_file("/projects/projectA/src/style.css", 16)
        .with_entry("/projects/projectA/package.json", EntryKind::File, package_metadata())
        .with_folder("/projects/projectB")
}

pub(crate) fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
}

/// Timestamps recorded for `/projects/projectA/package.json`
pub(crate) fn package_metadata() -> Metadata {
    Metadata::new()
        .with_size(128)
        .with_created(stamp())
        .with_modified(stamp())
        .with_accessed(stamp())
}

/// Records every path handed to the inner probe
pub(crate) struct CountingProbe {
    inner: MemoryProbe,
    probed: RefCell<Vec<PathBuf>>,
}

impl CountingProbe {
    pub(crate) fn new(inner: MemoryProbe) -> Self {
        Self { inner, probed: RefCell::new(Vec::new()) }
    }

    pub(crate) fn count(&self) -> usize {
        self.probed.borrow().len()
    }

    pub(crate) fn probed(&self) -> Vec<PathBuf> {
        self.probed.borrow().clone()
    }

    pub(crate) fn reset(&self) {
        self.probed.borrow_mut().clear();
    }
}

impl NodeProbe for CountingProbe {
    fn probe(&self, path: &Path) -> FsResult<Entry> {
        self.probed.borrow_mut().push(path.to_path_buf());
        self.inner.probe(path)
    }
}
