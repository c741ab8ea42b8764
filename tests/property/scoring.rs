//! Property-based tests for comparator scoring math

use dirsim::compare::content::multiset_jaccard;
use dirsim::compare::depth::nearest_depth_pairing;
use dirsim::compare::Weights;
use dirsim::types::Fingerprint;
use proptest::prelude::*;
use std::collections::HashMap;

fn count_map(values: &[u8]) -> HashMap<Fingerprint, usize> {
    let mut map = HashMap::new();
    for v in values {
        *map.entry(*v as Fingerprint).or_insert(0) += 1;
    }
    map
}

/// Jaccard over multisets is symmetric, bounded, and reflexive.
#[test]
fn test_multiset_jaccard_properties() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<Vec<u8>>(), any::<Vec<u8>>()),
            |(values_a, values_b)| {
                let a = count_map(&values_a);
                let b = count_map(&values_b);

                let forward = multiset_jaccard(&a, &b);
                let backward = multiset_jaccard(&b, &a);

                assert_eq!(forward, backward);
                assert!((0.0..=1.0).contains(&forward));
                assert_eq!(multiset_jaccard(&a, &a), 1.0);

                if !values_a.is_empty() && values_b.is_empty() {
                    assert_eq!(forward, 0.0);
                }

                Ok(())
            },
        )
        .unwrap();
}

/// Nearest-depth pairing yields min(|a|,|b|) pairs whose diff multiset
/// is direction-independent, and all-zero diffs for identical lists.
#[test]
fn test_nearest_depth_pairing_properties() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                proptest::collection::vec(0usize..12, 0..6),
                proptest::collection::vec(0usize..12, 0..6),
            ),
            |(mut a, mut b)| {
                a.sort_unstable();
                b.sort_unstable();

                let mut forward = nearest_depth_pairing(&a, &b);
                let mut backward = nearest_depth_pairing(&b, &a);
                forward.sort_unstable();
                backward.sort_unstable();

                assert_eq!(forward.len(), a.len().min(b.len()));
                assert_eq!(forward, backward);

                let same = nearest_depth_pairing(&a, &a);
                assert!(same.iter().all(|&diff| diff == 0));

                Ok(())
            },
        )
        .unwrap();
}

/// Any weight triple on the simplex keeps the composite inside the
/// hull of its component scores.
#[test]
fn test_weighted_composite_bounds_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(0.0f64..1.0, 0.0f64..1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0),
            |(w1, w2, content, depth, grouping)| {
                // Project two free parameters onto the weight simplex.
                let (low, high) = if w1 <= w2 { (w1, w2) } else { (w2, w1) };
                let weights = Weights {
                    content: low,
                    depth: high - low,
                    grouping: 1.0 - high,
                };
                prop_assume!(weights.validate().is_ok());

                let composite = weights.content * content
                    + weights.depth * depth
                    + weights.grouping * grouping;

                let min = content.min(depth).min(grouping);
                let max = content.max(depth).max(grouping);
                assert!(composite >= min - 1e-9);
                assert!(composite <= max + 1e-9);

                Ok(())
            },
        )
        .unwrap();
}
