//! Grouping correspondence comparator
//!
//! Scores whether files that are siblings (share an immediate parent
//! directory) in one tree remain siblings in the other. Only content
//! present in both trees participates: each tree contributes the set of
//! unordered fingerprint pairs that co-reside in some directory, and
//! the score is the Jaccard index of the two pair-sets.

use crate::compare::index::TreeIndex;
use crate::error::ScanError;
use crate::tree::fingerprint::FingerprintCache;
use crate::tree::node::DirectoryNode;

/// Jaccard index of the two trees' sibling fingerprint-pair sets.
///
/// Scores 0 by convention when fewer than two common fingerprints
/// exist, or when neither tree groups any common content into
/// siblings. Symmetric.
pub fn grouping_correspondence(
    d1: &DirectoryNode,
    d2: &DirectoryNode,
    cache: &FingerprintCache,
) -> Result<f64, ScanError> {
    let a = TreeIndex::build(d1, cache)?;
    let b = TreeIndex::build(d2, cache)?;
    Ok(grouping_correspondence_indexed(&a, &b))
}

pub(crate) fn grouping_correspondence_indexed(a: &TreeIndex, b: &TreeIndex) -> f64 {
    let common = a.common_fingerprints(b);
    if common.len() < 2 {
        return 0.0;
    }

    let pairs_a = a.sibling_pairs(&common);
    let pairs_b = b.sibling_pairs(&common);

    let union = pairs_a.union(&pairs_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = pairs_a.intersection(&pairs_b).count();
    intersection as f64 / union as f64
}
