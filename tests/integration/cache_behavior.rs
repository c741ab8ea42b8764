//! Fingerprint cache semantics across nodes and comparisons

use super::test_utils::fixture_tree;
use dirsim::concurrency::prewarm;
use dirsim::tree::fingerprint::{fingerprint_bytes, FingerprintCache, FingerprintEngine};
use dirsim::tree::node::DirectoryNode;
use std::fs;

#[test]
fn test_cache_vs_engine_agree() {
    let fixture = fixture_tree(&[("f.bin", "engine and cache must agree")]);
    let file = fixture.path().join("f.bin");

    let engine = FingerprintEngine::default();
    let direct = engine.fingerprint_file(&file).unwrap();

    let cache = FingerprintCache::default();
    let cached = cache.get_or_compute(&file).unwrap();

    assert_eq!(direct, cached);
}

#[test]
fn test_file_not_reread_within_a_run() {
    let fixture = fixture_tree(&[("f.txt", "first")]);
    let file = fixture.path().join("f.txt");

    let cache = FingerprintCache::default();
    let before = cache.get_or_compute(&file).unwrap();

    // Rewrite the file; a re-read would observe the new bytes.
    fs::write(&file, "second").unwrap();

    assert_eq!(cache.get_or_compute(&file).unwrap(), before);
    assert_ne!(before, fingerprint_bytes(b"second"));
}

#[test]
fn test_cache_shared_across_trees() {
    let fixture = fixture_tree(&[("shared.txt", "common bytes")]);

    let cache = FingerprintCache::default();
    let tree1 = DirectoryNode::open(fixture.path()).unwrap();
    let tree2 = DirectoryNode::open(fixture.path()).unwrap();

    for fp in tree1.fingerprints(&cache) {
        fp.unwrap();
    }
    assert_eq!(cache.len(), 1);

    // The second tree's nodes resolve through the same entries.
    for fp in tree2.fingerprints(&cache) {
        fp.unwrap();
    }
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_prewarm_then_walk_uses_cache() {
    let fixture = fixture_tree(&[
        ("a.txt", "one"),
        ("sub/b.txt", "two"),
        ("sub/deep/c.txt", "three"),
    ]);

    let cache = FingerprintCache::default();
    let warmed = prewarm(fixture.path(), &cache, 4).unwrap();
    assert_eq!(warmed, 3);
    assert_eq!(cache.len(), 3);

    // Mutate one file after prewarm: the walk must still see the
    // prewarmed value, proving it never re-read the file.
    let mutated = fixture.path().join("a.txt");
    let original_fp = cache.get_or_compute(&mutated).unwrap();
    fs::write(&mutated, "changed").unwrap();

    let tree = DirectoryNode::open(fixture.path()).unwrap();
    let fps: Vec<_> = tree
        .fingerprints(&cache)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert!(fps.contains(&original_fp));
    assert!(!fps.contains(&fingerprint_bytes(b"changed")));
}

#[test]
fn test_unreadable_file_surfaces_error() {
    let fixture = fixture_tree(&[("present.txt", "ok")]);
    let gone = fixture.path().join("gone.txt");

    let cache = FingerprintCache::default();
    let err = cache.get_or_compute(&gone).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("gone.txt") || message.contains("Failed to canonicalize"));
}
