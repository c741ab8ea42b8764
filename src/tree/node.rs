//! File and directory node types

use crate::error::ScanError;
use crate::tree::builder::TreeBuilder;
use crate::tree::fingerprint::FingerprintCache;
use crate::types::Fingerprint;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// A file in the tree, identified by its absolute path.
///
/// The fingerprint is computed on first request and then held on the
/// node itself, so repeat calls touch neither the shared cache nor the
/// filesystem. Immutable once the fingerprint is set.
#[derive(Debug, Clone)]
pub struct FileNode {
    path: PathBuf,
    cached: OnceLock<Fingerprint>,
}

impl FileNode {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cached: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Content fingerprint, computed lazily through the shared cache.
    ///
    /// Two file nodes with equal paths yield equal fingerprints: the
    /// cache is keyed by canonical path, so every node referencing the
    /// same underlying file resolves to one cached value.
    pub fn fingerprint(&self, cache: &FingerprintCache) -> Result<Fingerprint, ScanError> {
        if let Some(fp) = self.cached.get() {
            return Ok(*fp);
        }
        let fp = cache.get_or_compute(&self.path)?;
        // A concurrent caller may have set it first; both used the same
        // cache entry, so the values agree.
        let _ = self.cached.set(fp);
        Ok(fp)
    }
}

/// A directory in the tree: a recursive composite of file and directory
/// children keyed by absolute path.
///
/// Built once by eager enumeration at construction time and never
/// mutated afterward. Ownership is strictly tree-shaped.
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    path: PathBuf,
    files: BTreeMap<PathBuf, FileNode>,
    directories: BTreeMap<PathBuf, DirectoryNode>,
}

impl DirectoryNode {
    pub(crate) fn from_parts(
        path: PathBuf,
        files: BTreeMap<PathBuf, FileNode>,
        directories: BTreeMap<PathBuf, DirectoryNode>,
    ) -> Self {
        Self {
            path,
            files,
            directories,
        }
    }

    /// Build the tree rooted at `path` with default options.
    pub fn open(path: &Path) -> Result<Self, ScanError> {
        TreeBuilder::new(path.to_path_buf()).build()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Immediate child files, keyed by absolute path.
    pub fn file_children(&self) -> &BTreeMap<PathBuf, FileNode> {
        &self.files
    }

    /// Immediate child directories, keyed by absolute path.
    pub fn dir_children(&self) -> &BTreeMap<PathBuf, DirectoryNode> {
        &self.directories
    }

    /// Total number of files in the subtree.
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .directories
                .values()
                .map(DirectoryNode::file_count)
                .sum::<usize>()
    }

    /// True when the subtree contains no files at any depth.
    pub fn is_empty(&self) -> bool {
        self.file_count() == 0
    }
}
