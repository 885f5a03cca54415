//! Module search path.
//!
//! Ordered list of filesystem locations consulted when loading tool modules
//! by name. The readiness check front-inserts the toolkit root so project
//! modules shadow anything else; the insert is idempotent, and entries are
//! never removed for the life of the process.

use std::path::{Path, PathBuf};

/// Ordered module search locations.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    /// Create an empty search path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a location at the front, unless it is already present.
    ///
    /// Returns `true` if the path was inserted.
    pub fn insert_front(&mut self, path: &Path) -> bool {
        if self.entries.iter().any(|p| p == path) {
            return false;
        }
        self.entries.insert(0, path.to_path_buf());
        true
    }

    /// Whether a location is on the search path.
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|p| p == path)
    }

    /// The locations in search order.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the search path is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
