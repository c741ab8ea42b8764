//! Lazy traversal sequences over a directory tree
//!
//! Every sequence is depth-first, finite, and restartable: each method
//! call constructs a fresh iterator borrowing the (immutable) tree, so
//! walking never consumes or mutates it.

use crate::error::ScanError;
use crate::tree::fingerprint::FingerprintCache;
use crate::tree::node::{DirectoryNode, FileNode};
use crate::tree::path;
use crate::types::Fingerprint;
use std::collections::btree_map;
use std::path::{Path, PathBuf};

/// Depth-first iterator over all files in a subtree.
///
/// Yields a directory's own files before descending into its child
/// directories, children in map order.
pub struct Files<'a> {
    current: btree_map::Values<'a, PathBuf, FileNode>,
    pending: Vec<&'a DirectoryNode>,
}

impl<'a> Iterator for Files<'a> {
    type Item = &'a FileNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(file) = self.current.next() {
                return Some(file);
            }
            let dir = self.pending.pop()?;
            self.current = dir.file_children().values();
            // Reversed so the stack pops children in map order
            for child in dir.dir_children().values().rev() {
                self.pending.push(child);
            }
        }
    }
}

/// Preorder iterator over all descendant directories (self excluded).
pub struct Directories<'a> {
    pending: Vec<&'a DirectoryNode>,
}

impl<'a> Iterator for Directories<'a> {
    type Item = &'a DirectoryNode;

    fn next(&mut self) -> Option<Self::Item> {
        let dir = self.pending.pop()?;
        for child in dir.dir_children().values().rev() {
            self.pending.push(child);
        }
        Some(dir)
    }
}

impl DirectoryNode {
    /// All files in this subtree, depth-first, own files first.
    pub fn files(&self) -> Files<'_> {
        Files {
            current: self.file_children().values(),
            pending: self.dir_children().values().rev().collect(),
        }
    }

    /// All descendant directories, depth-first preorder, self excluded.
    pub fn directories(&self) -> Directories<'_> {
        Directories {
            pending: self.dir_children().values().rev().collect(),
        }
    }

    /// This directory's path followed by every descendant directory's
    /// path.
    ///
    /// When `relative_to` is given, all paths (including this
    /// directory's) are relativized against it; otherwise this
    /// directory's path is yielded absolute and descendants are
    /// relativized against it.
    pub fn directory_paths<'a>(
        &'a self,
        relative_to: Option<&'a Path>,
    ) -> impl Iterator<Item = PathBuf> + 'a {
        let base = relative_to.unwrap_or_else(|| self.path());
        let own = match relative_to {
            Some(root) => path::relativize(self.path(), root),
            None => self.path().to_path_buf(),
        };
        std::iter::once(own)
            .chain(self.directories().map(move |d| path::relativize(d.path(), base)))
    }

    /// The fingerprint of every file in [`files`](Self::files) order,
    /// hashed lazily through `cache`.
    pub fn fingerprints<'a>(
        &'a self,
        cache: &'a FingerprintCache,
    ) -> impl Iterator<Item = Result<Fingerprint, ScanError>> + 'a {
        self.files().map(move |f| f.fingerprint(cache))
    }
}
