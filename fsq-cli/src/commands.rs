// SPDX-License-Identifier: AGPL-3.0-or-later
//! CLI command implementations

use crate::{ManyKind, SingleKind};
use chrono::{DateTime, Utc};
use console::style;
use fsq_core::{path, Entry, EntryKind, FsError};
use fsq_query::{navigate_folder, navigate_node, FolderQuery, LocalProbe};
use std::path::PathBuf;
use tabled::{Table, Tabled};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Error [{}]: {0}", .0.kind())]
    Query(#[from] FsError),

    #[error("Error: cannot render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;

/// Output settings shared by every command
pub struct Output {
    pub json: bool,
    pub cwd: Option<PathBuf>,
}

impl Output {
    /// Anchor a relative start path at `--cwd` when given.
    fn start(&self, start: &str) -> PathBuf {
        match &self.cwd {
            Some(cwd) => path::resolve(cwd, start),
            None => PathBuf::from(start),
        }
    }

    fn navigate(&self, start: &str, segments: &[String]) -> FolderQuery<LocalProbe> {
        segments
            .iter()
            .fold(navigate_folder(self.start(start)), |query, segment| query.cd(segment))
    }

    fn print_entries(&self, entries: &[Entry], human: bool) -> CliResult<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(entries)?);
            return Ok(());
        }

        if entries.is_empty() {
            println!("(no entries)");
            return Ok(());
        }

        let rows: Vec<EntryRow> = entries.iter().map(|e| EntryRow::new(e, human)).collect();
        println!("{}", Table::new(rows));
        Ok(())
    }

    fn print_entry(&self, entry: &Entry) -> CliResult<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(entry)?);
        } else {
            println!("{}", entry.path().display());
        }
        Ok(())
    }
}

/// Format a timestamp for display
fn format_time(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Format file size
fn format_size(size: u64, human: bool) -> String {
    if human {
        bytesize::ByteSize(size).to_string()
    } else {
        size.to_string()
    }
}

/// Format entry kind
fn format_kind(kind: EntryKind) -> String {
    match kind {
        EntryKind::Folder => style("d").cyan().to_string(),
        EntryKind::File => "-".to_string(),
    }
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Modified")]
    modified: String,
    #[tabled(rename = "Path")]
    path: String,
}

impl EntryRow {
    fn new(entry: &Entry, human: bool) -> Self {
        Self {
            kind: format_kind(entry.kind()),
            size: format_size(entry.metadata().size, human),
            modified: format_time(entry.metadata().modified),
            path: entry.path().display().to_string(),
        }
    }
}

/// Show information about one path
pub fn stat(out: &Output, target: &str) -> CliResult<()> {
    let entry = navigate_node(out.start(target)).into_result()?;

    if out.json {
        return out.print_entry(&entry);
    }

    let meta = entry.metadata();
    println!("  Path: {}", entry.path().display());
    println!("  Type: {}", entry.kind());
    println!("  Size: {} ({})", meta.size, bytesize::ByteSize(meta.size));
    println!("  Accessed: {}", format_time(meta.accessed));
    println!("  Modified: {}", format_time(meta.modified));
    println!("  Changed: {}", format_time(meta.changed));
    println!("  Created: {}", format_time(meta.created));

    Ok(())
}

/// Navigate and print the folder reached
pub fn cd(out: &Output, start: &str, segments: &[String]) -> CliResult<()> {
    let folder = out.navigate(start, segments).into_result()?;
    out.print_entry(&folder.into())
}

/// Select exactly one entry
pub fn find(
    out: &Output,
    start: &str,
    segments: &[String],
    kind: SingleKind,
    name: &str,
    extensions: &[String],
) -> CliResult<()> {
    let select = out.navigate(start, segments).select();

    let entry: Entry = match kind {
        SingleKind::File => select.file().by_path(name, extensions)?.into(),
        SingleKind::Folder => select.folder().by_path(name, extensions)?.into(),
    };

    out.print_entry(&entry)
}

/// Select every listed path that resolves
pub fn select(
    out: &Output,
    start: &str,
    segments: &[String],
    kind: ManyKind,
    paths: &[String],
    extensions: &[String],
    human: bool,
) -> CliResult<()> {
    let select = out.navigate(start, segments).select();

    let entries: Vec<Entry> = match kind {
        ManyKind::Any => select.nodes().by_paths(paths, extensions)?,
        ManyKind::File => select
            .files()
            .by_paths(paths, extensions)?
            .into_iter()
            .map(Entry::from)
            .collect(),
        ManyKind::Folder => select
            .folders()
            .by_paths(paths, extensions)?
            .into_iter()
            .map(Entry::from)
            .collect(),
    };

    out.print_entries(&entries, human)
}

/// Show the folder containing a path
pub fn parent(out: &Output, target: &str) -> CliResult<()> {
    let folder = navigate_node(out.start(target)).parent().into_result()?;
    out.print_entry(&folder.into())
}
