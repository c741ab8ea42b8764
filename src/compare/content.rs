//! Content overlap comparator
//!
//! Treats each tree's file fingerprints as a multiset and scores the
//! multiset Jaccard index: duplicates matter, so a file appearing three
//! times in one tree and once in the other is a partial match.

use crate::compare::index::TreeIndex;
use crate::error::ScanError;
use crate::tree::fingerprint::FingerprintCache;
use crate::tree::node::DirectoryNode;
use crate::types::Fingerprint;
use std::collections::HashMap;

/// Multiset Jaccard index of two trees' fingerprint multisets.
///
/// Two empty trees are vacuously identical (score 1); an empty tree
/// against a non-empty one scores 0. Symmetric and order-independent
/// over siblings.
pub fn content_overlap(
    d1: &DirectoryNode,
    d2: &DirectoryNode,
    cache: &FingerprintCache,
) -> Result<f64, ScanError> {
    let a = TreeIndex::build(d1, cache)?;
    let b = TreeIndex::build(d2, cache)?;
    Ok(content_overlap_indexed(&a, &b))
}

pub(crate) fn content_overlap_indexed(a: &TreeIndex, b: &TreeIndex) -> f64 {
    multiset_jaccard(a.counts(), b.counts())
}

/// Jaccard index over multisets expressed as count maps: sum of
/// per-element minimum counts over sum of maximum counts. Both empty
/// scores 1.
pub fn multiset_jaccard(
    a: &HashMap<Fingerprint, usize>,
    b: &HashMap<Fingerprint, usize>,
) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let mut intersection = 0usize;
    // Start from b's total; adding a's surplus per fingerprint makes
    // this the sum of per-fingerprint maximum counts.
    let mut union: usize = b.values().sum();

    for (fp, &count_a) in a {
        let count_b = b.get(fp).copied().unwrap_or(0);
        intersection += count_a.min(count_b);
        union += count_a.saturating_sub(count_b);
    }

    intersection as f64 / union as f64
}
