//! Path resolution and parsed path components

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Parsed components of an absolute path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathParts {
    /// Containing directory
    pub dir: PathBuf,
    /// Final component, extension included
    pub base: String,
    /// Final component without its extension
    pub stem: String,
    /// Extension with its leading dot, or empty
    pub ext: String,
}

impl PathParts {
    pub fn parse(path: &Path) -> Self {
        let dir = parent_dir(path);
        let base = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (stem, ext) = match base.rfind('.') {
            Some(idx) if idx > 0 => (base[..idx].to_string(), base[idx..].to_string()),
            _ => (base.clone(), String::new()),
        };

        Self { dir, base, stem, ext }
    }
}

/// Lexically normalize a path: drop `.`, let `..` pop one component.
///
/// `..` never climbs above the root of an absolute path.
pub fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(p) => result.push(p.as_os_str()),
            Component::RootDir => result.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match result.components().next_back() {
                Some(Component::Normal(_)) => {
                    result.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => result.push(".."),
            },
            Component::Normal(s) => result.push(s),
        }
    }
    result
}

/// Join `relative` onto `base` and normalize.
///
/// An absolute `relative` replaces `base` entirely.
pub fn resolve(base: &Path, relative: impl AsRef<Path>) -> PathBuf {
    normalize(&base.join(relative))
}

/// Append `segment` beneath `base` and normalize.
///
/// Unlike [`resolve`], a leading root in `segment` does not escape `base`:
/// `join("/a", "/b")` is `/a/b`.
pub fn join(base: &Path, segment: impl AsRef<Path>) -> PathBuf {
    let mut joined = base.to_path_buf();
    for component in segment.as_ref().components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            other => joined.push(other.as_os_str()),
        }
    }
    normalize(&joined)
}

/// Absolute, normalized form of `path`, anchored at the working directory if relative.
pub fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(resolve(&std::env::current_dir()?, path))
    }
}

/// Directory component of `path`; the root is its own parent.
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => path.to_path_buf(),
    }
}

/// Append a candidate extension to `name`.
///
/// `"js"` and `".js"` are the same candidate; an empty extension leaves the name bare.
pub fn with_extension(name: &str, ext: &str) -> String {
    if ext.is_empty() {
        name.to_string()
    } else if ext.starts_with('.') {
        format!("{name}{ext}")
    } else {
        format!("{name}.{ext}")
    }
}
