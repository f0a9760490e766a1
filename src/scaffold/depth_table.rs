use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::diagram::TreeEntry;

/// Remembers the path most recently placed at each depth.
///
/// Slots deeper than the current entry are left stale on purpose: in a
/// pre-order diagram they are always overwritten before being read again.
#[derive(Debug, Clone, Default)]
pub struct DepthPathTable {
    paths: HashMap<usize, PathBuf>,
}

impl DepthPathTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the full path of `entry` and records it at the entry's depth.
    ///
    /// Depth 0 and entries whose parent depth was never seen resolve against `base`.
    pub fn resolve(&mut self, entry: &TreeEntry<'_>, base: &Path) -> PathBuf {
        let parent = entry
            .depth
            .checked_sub(1)
            .and_then(|parent_depth| self.paths.get(&parent_depth))
            .map_or(base, PathBuf::as_path);

        let full_path = parent.join(entry.node_name());
        self.paths.insert(entry.depth, full_path.clone());
        full_path
    }

    pub fn get(&self, depth: usize) -> Option<&Path> {
        self.paths.get(&depth).map(PathBuf::as_path)
    }
}
