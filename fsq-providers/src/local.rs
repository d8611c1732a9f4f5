//! Local filesystem probe

use chrono::{DateTime, Utc};
use fsq_core::{
    entry::{Entry, EntryKind},
    error::{FsError, FsResult},
    metadata::Metadata,
    path, NodeProbe,
};
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use tracing::trace;

/// Local probe configuration
#[derive(Debug, Clone, Copy)]
pub struct LocalProbeConfig {
    /// Classify a symlink by its target (`stat`) rather than the link itself (`lstat`)
    pub follow_symlinks: bool,
}

impl Default for LocalProbeConfig {
    fn default() -> Self {
        Self { follow_symlinks: true }
    }
}

/// Probe backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProbe {
    config: LocalProbeConfig,
}

impl LocalProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LocalProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LocalProbeConfig {
        &self.config
    }

    fn stat(&self, path: &Path) -> std::io::Result<fs::Metadata> {
        if self.config.follow_symlinks {
            fs::metadata(path)
        } else {
            fs::symlink_metadata(path)
        }
    }
}

fn to_utc(time: std::io::Result<SystemTime>) -> Option<DateTime<Utc>> {
    time.ok().map(DateTime::<Utc>::from)
}

fn metadata_from(meta: &fs::Metadata) -> Metadata {
    let mut metadata = Metadata::new().with_size(meta.len());
    metadata.accessed = to_utc(meta.accessed());
    metadata.modified = to_utc(meta.modified());
    metadata.created = to_utc(meta.created());

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        metadata.changed = u32::try_from(meta.ctime_nsec())
            .ok()
            .and_then(|nsec| DateTime::from_timestamp(meta.ctime(), nsec));
    }

    metadata
}

impl NodeProbe for LocalProbe {
    fn probe(&self, target: &Path) -> FsResult<Entry> {
        let resolved = path::absolute(target).map_err(|e| FsError::from_io(target, e))?;

        match self.stat(&resolved) {
            Ok(meta) => {
                let kind = if meta.is_dir() { EntryKind::Folder } else { EntryKind::File };
                trace!(path = %resolved.display(), %kind, "probed");
                Ok(Entry::new(kind, resolved, metadata_from(&meta)))
            }
            Err(e) => {
                let err = FsError::from_io(resolved, e);
                trace!(kind = %err.kind(), "probe failed: {}", err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsq_core::ErrorKind;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        let mut f = File::create(dir.path().join("src/index.js")).unwrap();
        f.write_all(b"console.log(1);").unwrap();
        dir
    }

    #[test]
    fn test_probe_folder() {
        let dir = tree();
        let entry = LocalProbe::new().probe(&dir.path().join("src")).unwrap();
        assert_eq!(entry.kind(), EntryKind::Folder);
        assert_eq!(entry.name(), "src");
    }

    #[test]
    fn test_probe_file_metadata() {
        let dir = tree();
        let entry = LocalProbe::new().probe(&dir.path().join("src/index.js")).unwrap();

        assert!(entry.is_file());
        assert_eq!(entry.metadata().size, 15);
        assert_eq!(entry.parts().stem, "index");
        assert_eq!(entry.parts().ext, ".js");
        assert!(entry.metadata().modified.is_some());
    }

    #[test]
    fn test_probe_normalizes_path() {
        let dir = tree();
        let messy = dir.path().join("src/./../src/index.js");
        let entry = LocalProbe::new().probe(&messy).unwrap();
        assert_eq!(entry.path(), dir.path().join("src/index.js"));
    }

    #[test]
    fn test_probe_missing() {
        let dir = tree();
        let err = LocalProbe::new().probe(&dir.path().join("src/index.ts")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), dir.path().join("src/index.ts"));
    }

    #[test]
    fn test_narrowed_probes() {
        let dir = tree();
        let probe = LocalProbe::new();

        let err = probe.probe_folder(&dir.path().join("src/index.js")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFolder);

        let err = probe.probe_file(&dir.path().join("src")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFile);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_handling() {
        let dir = tree();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("src"), &link).unwrap();

        let followed = LocalProbe::new().probe(&link).unwrap();
        assert!(followed.is_folder());

        let probe = LocalProbe::with_config(LocalProbeConfig { follow_symlinks: false });
        let own = probe.probe(&link).unwrap();
        assert!(own.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_through_file_is_unknown() {
        let dir = tree();
        // ENOTDIR is not absence
        let err = LocalProbe::new().probe(&dir.path().join("src/index.js/child")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert!(err.payload().is_some());
    }
}
