//! First-match resolution of a name against candidate extensions

use fsq_core::{path, probe::narrow_probed, FolderEntry, Narrow, NodeProbe};
use tracing::debug;

/// Candidate extensions in caller order; none means the bare name alone.
pub(crate) fn candidates<I, S>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let exts: Vec<String> = extensions.into_iter().map(|e| e.as_ref().to_string()).collect();
    if exts.is_empty() {
        vec![String::new()]
    } else {
        exts
    }
}

/// Probe `name` + each candidate under `folder`, in order, and return the
/// first entry that exists with the required kind. Probing stops there.
pub(crate) fn first_match<T, P>(probe: &P, folder: &FolderEntry, name: &str, candidates: &[String]) -> Option<T>
where
    T: Narrow,
    P: NodeProbe,
{
    candidates.iter().find_map(|ext| {
        let target = path::resolve(&folder.path, path::with_extension(name, ext));
        match narrow_probed::<T>(probe.probe(&target)) {
            Ok(found) => {
                debug!(path = %target.display(), "candidate matched");
                Some(found)
            }
            Err(err) => {
                debug!(path = %target.display(), kind = %err.kind(), "candidate rejected");
                None
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{projects, CountingProbe};
    use fsq_core::{Entry, FileEntry};
    use std::path::Path;

    fn src(probe: &CountingProbe) -> FolderEntry {
        let folder = probe.probe_folder(Path::new("/projects/projectA/src")).unwrap();
        probe.reset();
        folder
    }

    #[test]
    fn test_candidates() {
        assert_eq!(candidates(Vec::<String>::new()), vec![String::new()]);
        assert_eq!(candidates(["ts", "js"]), vec!["ts".to_string(), "js".to_string()]);
    }

    #[test]
    fn test_stops_at_first_match() {
        let probe = CountingProbe::new(projects().with_file("/projects/projectA/src/index.ts", 1));
        let folder = src(&probe);

        let found: FileEntry = first_match(&probe, &folder, "index", &candidates(["ts", "js", "html"])).unwrap();
        assert_eq!(found.name(), "index.ts");
        assert_eq!(probe.count(), 1);
    }

    #[test]
    fn test_skips_missing_and_wrong_kind() {
        let probe = CountingProbe::new(projects().with_folder("/projects/projectA/src/index.ts"));
        let folder = src(&probe);

        let found: FileEntry = first_match(&probe, &folder, "index", &candidates(["ts", "mjs", "js"])).unwrap();
        assert_eq!(found.name(), "index.js");
        assert_eq!(probe.count(), 3);
    }

    #[test]
    fn test_no_match() {
        let probe = CountingProbe::new(projects());
        let folder = src(&probe);

        let found: Option<Entry> = first_match(&probe, &folder, "main", &candidates(["rs", "go"]));
        assert!(found.is_none());
        assert_eq!(probe.count(), 2);
    }
}
