//! Point-in-time metadata snapshots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata captured when an entry was probed; never refreshed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub size: u64,
    pub accessed: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    /// Inode change time (Unix only)
    pub changed: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn with_accessed(mut self, accessed: DateTime<Utc>) -> Self {
        self.accessed = Some(accessed);
        self
    }

    pub fn with_changed(mut self, changed: DateTime<Utc>) -> Self {
        self.changed = Some(changed);
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_builder() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let meta = Metadata::new().with_size(42).with_modified(at).with_changed(at);

        assert_eq!(meta.size, 42);
        assert_eq!(meta.modified, Some(at));
        assert_eq!(meta.changed, Some(at));
        assert!(meta.accessed.is_none());
        assert!(meta.created.is_none());
    }
}
