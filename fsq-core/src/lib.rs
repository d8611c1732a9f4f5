//! fsquery Core
//!
//! Entries, metadata, path resolution, the error taxonomy, and the
//! [`NodeProbe`] contract that every query step is built on.

pub mod entry;
pub mod error;
pub mod metadata;
pub mod path;
pub mod probe;

pub use entry::{Entry, EntryKind, FileEntry, FolderEntry, Narrow};
pub use error::{ErrorKind, FsError, FsResult};
pub use metadata::Metadata;
pub use path::PathParts;
pub use probe::NodeProbe;
