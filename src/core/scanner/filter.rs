//! Sidecar/cache file filtering.

use std::collections::HashSet;
use std::path::Path;

/// Matches files that carry no photo data of their own (thumbnail caches,
/// XMP sidecars) and may be deleted during a move.
pub struct RedundantFileFilter {
    /// Lowercase extensions to match
    extensions: HashSet<String>,
}

impl RedundantFileFilter {
    /// `.db` and `.xmp`
    pub fn new() -> Self {
        Self {
            extensions: ["db", "xmp"].iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn is_redundant(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.contains(&e.to_lowercase()))
            .unwrap_or(false)
    }
}

impl Default for RedundantFileFilter {
    fn default() -> Self {
        Self::new()
    }
}
