// SPDX-License-Identifier: AGPL-3.0-or-later
//! fsquery CLI
//!
//! Navigate folders and select entries from the shell.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "fsq")]
#[command(author, version, about = "fsquery - declarative filesystem selection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print entries as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Resolve relative start paths against this folder
    #[arg(long, global = true)]
    cwd: Option<PathBuf>,
}

/// Kind a single selection must have
#[derive(Clone, Copy, ValueEnum)]
pub enum SingleKind {
    File,
    Folder,
}

/// Kind a multi selection filters to
#[derive(Clone, Copy, ValueEnum)]
pub enum ManyKind {
    Any,
    File,
    Folder,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about one path
    Stat {
        /// Path to inspect
        path: String,
    },

    /// Navigate from a folder through relative segments
    Cd {
        /// Starting folder
        start: String,

        /// Segments applied in order
        segments: Vec<String>,
    },

    /// Select exactly one entry by name, trying extensions in order
    Find {
        /// Starting folder
        start: String,

        /// Name to resolve (without extension)
        name: String,

        /// Navigate through these segments first
        #[arg(long = "cd")]
        cd: Vec<String>,

        /// Required entry kind
        #[arg(short = 't', long = "type", value_enum, default_value = "file")]
        kind: SingleKind,

        /// Candidate extension, repeatable; tried in the order given
        #[arg(short, long = "ext")]
        ext: Vec<String>,
    },

    /// Select every listed path that resolves, in order
    Select {
        /// Starting folder
        start: String,

        /// Paths relative to the folder
        #[arg(required = true)]
        paths: Vec<String>,

        /// Navigate through these segments first
        #[arg(long = "cd")]
        cd: Vec<String>,

        /// Entry kind to keep
        #[arg(short = 't', long = "type", value_enum, default_value = "any")]
        kind: ManyKind,

        /// Candidate extension, repeatable; tried in the order given
        #[arg(short, long = "ext")]
        ext: Vec<String>,

        /// Human-readable sizes
        #[arg(short = 'H', long)]
        human: bool,
    },

    /// Show the folder containing a path
    Parent {
        /// Path whose parent to resolve
        path: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let out = commands::Output { json: cli.json, cwd: cli.cwd };

    let result = match cli.command {
        Commands::Stat { path } => {
            debug!(%path, "stat");
            commands::stat(&out, &path)
        }
        Commands::Cd { start, segments } => {
            debug!(%start, ?segments, "cd");
            commands::cd(&out, &start, &segments)
        }
        Commands::Find { start, name, cd, kind, ext } => {
            debug!(%start, %name, ?cd, ?ext, "find");
            commands::find(&out, &start, &cd, kind, &name, &ext)
        }
        Commands::Select { start, paths, cd, kind, ext, human } => {
            debug!(%start, ?paths, ?cd, ?ext, "select");
            commands::select(&out, &start, &cd, kind, &paths, &ext, human)
        }
        Commands::Parent { path } => {
            debug!(%path, "parent");
            commands::parent(&out, &path)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
