//! fsquery
//!
//! Navigate folders with [`FolderQuery::cd`], then select one or many entries
//! by name with extension fallback. Every step carries an [`FsResult`]; a
//! failure short-circuits the rest of the chain without further I/O.
//!
//! ```no_run
//! use fsq_query::navigate_folder;
//!
//! let index = navigate_folder("/projects/projectA")
//!     .cd("src")
//!     .select()
//!     .file()
//!     .by_path("index", ["ts", "js"]);
//!
//! match index {
//!     Ok(file) => println!("{}", file.path.display()),
//!     Err(err) => eprintln!("{} ({})", err, err.kind()),
//! }
//! ```

mod navigator;
mod node;
mod resolve;
mod select;
mod source;

#[cfg(test)]
mod testing;

pub use fsq_core::{
    Entry, EntryKind, ErrorKind, FileEntry, FolderEntry, FsError, FsResult, Metadata, NodeProbe,
    PathParts,
};
pub use fsq_providers::LocalProbe;
pub use navigator::FolderQuery;
pub use node::NodeQuery;
pub use select::{MultiSelect, Select, SingleSelect, NO_EXTENSIONS};
pub use source::Source;

/// Start a folder query on the local filesystem.
///
/// A path is probed immediately; an entry is trusted as-is.
pub fn navigate_folder(source: impl Into<Source<FolderEntry>>) -> FolderQuery<LocalProbe> {
    FolderQuery::new(LocalProbe::default(), source)
}

pub fn navigate_folder_with<P: NodeProbe + Clone>(
    probe: P,
    source: impl Into<Source<FolderEntry>>,
) -> FolderQuery<P> {
    FolderQuery::new(probe, source)
}

/// Start a query on an arbitrary entry of the local filesystem.
pub fn navigate_node(source: impl Into<Source<Entry>>) -> NodeQuery<LocalProbe> {
    NodeQuery::new(LocalProbe::default(), source)
}

pub fn navigate_node_with<P: NodeProbe + Clone>(probe: P, source: impl Into<Source<Entry>>) -> NodeQuery<P> {
    NodeQuery::new(probe, source)
}
