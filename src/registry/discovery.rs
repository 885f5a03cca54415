//! Tool manifest discovery.
//!
//! Tool modules live one directory deep under `<root>/tools/`, each with a
//! `tool.yml` at its top level. Discovery is filesystem-order independent:
//! results are sorted by path so resolution and listing are deterministic.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::registry::manifest::MANIFEST_FILE;

/// Directory under the toolkit root that holds tool modules.
pub const TOOLS_DIR: &str = "tools";

/// Find all tool manifests under `root`, sorted by path.
///
/// A missing `tools/` directory is not an error; it yields an empty list and
/// the caller decides what that means (the readiness check treats it as an
/// import failure, `list` shows an empty table).
pub fn discover_manifests(root: &Path) -> Result<Vec<PathBuf>> {
    let tools_dir = root.join(TOOLS_DIR);
    if !tools_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut manifests = Vec::new();
    for entry in fs::read_dir(&tools_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let manifest = entry.path().join(MANIFEST_FILE);
        if manifest.is_file() {
            manifests.push(manifest);
        }
    }

    manifests.sort();
    Ok(manifests)
}
