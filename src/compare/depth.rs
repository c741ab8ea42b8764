//! Depth correspondence comparator
//!
//! Scores how closely matching content sits at the same structural
//! depth in both trees. Each matched occurrence pair contributes
//! `1 / (1 + |depth difference|)`; the score is the mean over all
//! pairs. Occurrences of a duplicated fingerprint are paired nearest
//! depth first so sibling enumeration order cannot bias the result.

use crate::compare::index::TreeIndex;
use crate::error::ScanError;
use crate::tree::fingerprint::FingerprintCache;
use crate::tree::node::DirectoryNode;

/// Average depth affinity of content occurring in both trees.
///
/// Trees with no common fingerprints score 0. Symmetric.
pub fn depth_correspondence(
    d1: &DirectoryNode,
    d2: &DirectoryNode,
    cache: &FingerprintCache,
) -> Result<f64, ScanError> {
    let a = TreeIndex::build(d1, cache)?;
    let b = TreeIndex::build(d2, cache)?;
    Ok(depth_correspondence_indexed(&a, &b))
}

pub(crate) fn depth_correspondence_indexed(a: &TreeIndex, b: &TreeIndex) -> f64 {
    let mut affinity_sum = 0.0;
    let mut pair_count = 0usize;

    for fp in a.common_fingerprints(b) {
        for diff in nearest_depth_pairing(&a.depths_of(fp), &b.depths_of(fp)) {
            affinity_sum += 1.0 / (1.0 + diff as f64);
            pair_count += 1;
        }
    }

    if pair_count == 0 {
        return 0.0;
    }
    affinity_sum / pair_count as f64
}

/// Pair up occurrence depths from two sorted lists, closest depths
/// first, each occurrence used at most once. Returns the absolute
/// depth difference of each of the `min(a.len(), b.len())` pairs.
pub fn nearest_depth_pairing(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut candidates = Vec::with_capacity(a.len() * b.len());
    for (i, &da) in a.iter().enumerate() {
        for (j, &db) in b.iter().enumerate() {
            candidates.push((da.abs_diff(db), i, j));
        }
    }
    candidates.sort_unstable();

    let mut used_a = vec![false; a.len()];
    let mut used_b = vec![false; b.len()];
    let mut diffs = Vec::with_capacity(a.len().min(b.len()));

    for (diff, i, j) in candidates {
        if used_a[i] || used_b[j] {
            continue;
        }
        used_a[i] = true;
        used_b[j] = true;
        diffs.push(diff);
        if diffs.len() == a.len().min(b.len()) {
            break;
        }
    }
    diffs
}
