//! Comparator suite and score aggregation
//!
//! Three independent comparators each score a pair of trees in [0,1]
//! along one dimension (content overlap, depth correspondence, grouping
//! correspondence); [`compare`] combines them into one weighted
//! composite score. All comparators are symmetric and independent of
//! sibling enumeration order.

use crate::error::{CompareError, ScanError};
use crate::tree::fingerprint::FingerprintCache;
use crate::tree::node::DirectoryNode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub mod content;
pub mod depth;
pub mod grouping;
pub mod index;

pub use content::content_overlap;
pub use depth::depth_correspondence;
pub use grouping::grouping_correspondence;

use self::index::TreeIndex;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Comparator weights; must be non-negative and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default = "default_weight")]
    pub content: f64,
    #[serde(default = "default_weight")]
    pub depth: f64,
    #[serde(default = "default_weight")]
    pub grouping: f64,
}

fn default_weight() -> f64 {
    1.0 / 3.0
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            content: default_weight(),
            depth: default_weight(),
            grouping: default_weight(),
        }
    }
}

impl Weights {
    /// Reject negative weights and sums away from 1.
    ///
    /// Called before any traversal begins so a bad configuration never
    /// reads the filesystem.
    pub fn validate(&self) -> Result<(), CompareError> {
        for (name, value) in [
            ("content", self.content),
            ("depth", self.depth),
            ("grouping", self.grouping),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(CompareError::InvalidWeights(format!(
                    "{} weight must be a non-negative finite number, got {}",
                    name, value
                )));
            }
        }

        let sum = self.content + self.depth + self.grouping;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CompareError::InvalidWeights(format!(
                "weights must sum to 1, got {}",
                sum
            )));
        }
        Ok(())
    }
}

/// Component scores and their weighted composite, all in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Similarity {
    pub content: f64,
    pub depth: f64,
    pub grouping: f64,
    pub composite: f64,
}

/// Compare two directory trees and return the composite similarity.
///
/// The single public entry point for "how similar are these two
/// trees". Validates `weights` up front, walks each tree exactly once
/// (fingerprinting lazily through `cache`), runs all three comparators
/// over the resulting indexes, and combines their scores.
#[instrument(skip_all, fields(d1 = %d1.path().display(), d2 = %d2.path().display()))]
pub fn compare(
    d1: &DirectoryNode,
    d2: &DirectoryNode,
    cache: &FingerprintCache,
    weights: &Weights,
) -> Result<Similarity, CompareError> {
    weights.validate()?;

    let similarity = component_scores(d1, d2, cache).map(|(content, depth, grouping)| {
        let composite =
            weights.content * content + weights.depth * depth + weights.grouping * grouping;
        Similarity {
            content,
            depth,
            grouping,
            composite,
        }
    })?;

    debug!(
        content = similarity.content,
        depth = similarity.depth,
        grouping = similarity.grouping,
        composite = similarity.composite,
        "Comparison complete"
    );
    Ok(similarity)
}

fn component_scores(
    d1: &DirectoryNode,
    d2: &DirectoryNode,
    cache: &FingerprintCache,
) -> Result<(f64, f64, f64), ScanError> {
    let a = TreeIndex::build(d1, cache)?;
    let b = TreeIndex::build(d2, cache)?;

    Ok((
        content::content_overlap_indexed(&a, &b),
        depth::depth_correspondence_indexed(&a, &b),
        grouping::grouping_correspondence_indexed(&a, &b),
    ))
}
