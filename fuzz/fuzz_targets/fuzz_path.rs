// SPDX-License-Identifier: AGPL-3.0-or-later
//! Fuzz target for lexical path resolution and path parsing

#![no_main]

use fsq_core::path::{self, PathParts};
use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let (base, segment) = input.split_once('|').unwrap_or(("/", input));
        let base = path::normalize(&Path::new("/").join(base));

        let resolved = path::resolve(&base, segment);
        let joined = path::join(&base, segment);

        // Normalization is idempotent and never leaves the root
        assert_eq!(path::normalize(&resolved), resolved);
        assert_eq!(path::normalize(&joined), joined);
        assert!(resolved.is_absolute());
        assert!(joined.is_absolute());

        let parts = PathParts::parse(&joined);
        assert_eq!(path::parent_dir(&joined), parts.dir);
        assert!(parts.base.ends_with(&parts.ext));

        let _ = path::with_extension(segment, segment);
    }
});
