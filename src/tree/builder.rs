//! Tree builder: eager construction of directory trees from the filesystem

use crate::error::ScanError;
use crate::tree::node::{DirectoryNode, FileNode};
use crate::tree::path;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Construction options
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// Directory or file names to skip (e.g. ".git", "target")
    pub ignore_patterns: Vec<String>,
    /// Maximum recursion depth below the root (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
            max_depth: None,
        }
    }
}

/// Builds an immutable [`DirectoryNode`] tree from a filesystem path.
///
/// Each directory's immediate entries are enumerated exactly once.
/// Enumeration failure anywhere aborts the build with the offending
/// path; entries are never silently dropped, since silent omission
/// would corrupt the similarity math downstream.
pub struct TreeBuilder {
    root: PathBuf,
    options: BuildOptions,
}

impl TreeBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            options: BuildOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the tree rooted at the configured path.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<DirectoryNode, ScanError> {
        let start = Instant::now();
        let root = path::canonicalize(&self.root)?;

        let tree = self.build_directory(&root, 0)?;

        info!(
            file_count = tree.file_count(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Tree build completed"
        );
        Ok(tree)
    }

    fn build_directory(&self, dir_path: &Path, depth: usize) -> Result<DirectoryNode, ScanError> {
        let mut files = BTreeMap::new();
        let mut directories = BTreeMap::new();

        let entries = std::fs::read_dir(dir_path).map_err(|e| ScanError::Io {
            path: dir_path.to_path_buf(),
            source: e,
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ScanError::Io {
                path: dir_path.to_path_buf(),
                source: e,
            })?;

            if self.is_ignored(&entry.file_name().to_string_lossy()) {
                debug!(entry = %entry.path().display(), "Skipping ignored entry");
                continue;
            }

            let file_type = entry.file_type().map_err(|e| ScanError::Io {
                path: entry.path(),
                source: e,
            })?;

            if file_type.is_symlink() && !self.options.follow_symlinks {
                warn!(entry = %entry.path().display(), "Skipping symlink");
                continue;
            }

            let child_path = path::canonicalize(&entry.path())?;

            if child_path.is_file() {
                files.insert(child_path.clone(), FileNode::new(child_path));
            } else if child_path.is_dir() {
                if self
                    .options
                    .max_depth
                    .is_some_and(|max| depth + 1 > max)
                {
                    debug!(entry = %child_path.display(), "Depth limit reached");
                    continue;
                }
                let child = self.build_directory(&child_path, depth + 1)?;
                directories.insert(child_path, child);
            }
            // Anything else (sockets, devices) has no content to compare.
        }

        Ok(DirectoryNode::from_parts(
            dir_path.to_path_buf(),
            files,
            directories,
        ))
    }

    fn is_ignored(&self, name: &str) -> bool {
        self.options
            .ignore_patterns
            .iter()
            .any(|pattern| pattern == name)
    }
}
