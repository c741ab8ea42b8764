//! Per-tree fingerprint index
//!
//! One depth-tracking walk of a tree collects everything the comparators
//! need: occurrence counts, occurrence depths, and the parent directory
//! of each occurrence, all keyed by fingerprint. Building the index once
//! per tree lets the aggregator run all three comparators without
//! re-walking.

use crate::error::ScanError;
use crate::tree::fingerprint::FingerprintCache;
use crate::tree::node::DirectoryNode;
use crate::types::Fingerprint;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Fingerprint occurrences of one tree.
#[derive(Debug, Default)]
pub struct TreeIndex {
    /// Occurrence count per fingerprint (the tree's content multiset).
    counts: HashMap<Fingerprint, usize>,
    /// Depth of each occurrence: directory links from the comparison
    /// root to the containing directory (root's own files are depth 0).
    depths: HashMap<Fingerprint, Vec<usize>>,
    /// Containing directory of each occurrence.
    parents: HashMap<Fingerprint, Vec<PathBuf>>,
}

impl TreeIndex {
    /// Walk `tree` once, fingerprinting every file through `cache`.
    pub fn build(tree: &DirectoryNode, cache: &FingerprintCache) -> Result<Self, ScanError> {
        let mut index = TreeIndex::default();
        index.visit(tree, cache, 0)?;
        Ok(index)
    }

    fn visit(
        &mut self,
        dir: &DirectoryNode,
        cache: &FingerprintCache,
        depth: usize,
    ) -> Result<(), ScanError> {
        for file in dir.file_children().values() {
            let fp = file.fingerprint(cache)?;
            *self.counts.entry(fp).or_insert(0) += 1;
            self.depths.entry(fp).or_default().push(depth);
            self.parents
                .entry(fp)
                .or_default()
                .push(dir.path().to_path_buf());
        }
        for child in dir.dir_children().values() {
            self.visit(child, cache, depth + 1)?;
        }
        Ok(())
    }

    pub fn counts(&self) -> &HashMap<Fingerprint, usize> {
        &self.counts
    }

    /// Sorted occurrence depths for a fingerprint, empty if absent.
    pub fn depths_of(&self, fp: Fingerprint) -> Vec<usize> {
        let mut depths = self.depths.get(&fp).cloned().unwrap_or_default();
        depths.sort_unstable();
        depths
    }

    /// Total occurrences across all fingerprints.
    pub fn total_files(&self) -> usize {
        self.counts.values().sum()
    }

    /// Fingerprints present in both indexes.
    pub fn common_fingerprints(&self, other: &TreeIndex) -> HashSet<Fingerprint> {
        self.counts
            .keys()
            .filter(|fp| other.counts.contains_key(fp))
            .copied()
            .collect()
    }

    /// Unordered pairs of distinct fingerprints (drawn from `universe`)
    /// that are siblings somewhere in this tree: some directory holds
    /// files with both fingerprints.
    pub fn sibling_pairs(
        &self,
        universe: &HashSet<Fingerprint>,
    ) -> HashSet<(Fingerprint, Fingerprint)> {
        // Group the universe's occurrences by containing directory.
        let mut by_parent: HashMap<&PathBuf, HashSet<Fingerprint>> = HashMap::new();
        for fp in universe {
            if let Some(parents) = self.parents.get(fp) {
                for parent in parents {
                    by_parent.entry(parent).or_default().insert(*fp);
                }
            }
        }

        let mut pairs = HashSet::new();
        for group in by_parent.values() {
            let mut members: Vec<Fingerprint> = group.iter().copied().collect();
            members.sort_unstable();
            for (i, a) in members.iter().enumerate() {
                for b in &members[i + 1..] {
                    pairs.insert((*a, *b));
                }
            }
        }
        pairs
    }
}
