//! The merge queue: paths collected from opens and drops.
//!
//! The queue is displayed to the user but is not consumed by the merge
//! action, which asks for its own file selection.

use std::path::{Path, PathBuf};

/// Ordered, duplicate-free list of file paths.
///
/// Paths are compared exactly (case-sensitive, no canonicalization).
/// There is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeQueue {
    entries: Vec<PathBuf>,
}

impl MergeQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` unless it is already queued. Returns whether it was added.
    pub fn add_if_absent(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.entries.push(path);
        true
    }

    /// Whether `path` is queued.
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    /// Number of queued paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queued paths in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }
}
