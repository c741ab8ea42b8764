//! Tree construction and traversal against real filesystem layouts

use super::test_utils::fixture_tree;
use dirsim::tree::fingerprint::{fingerprint_bytes, FingerprintCache};
use dirsim::tree::node::DirectoryNode;
use std::path::PathBuf;

#[test]
fn test_tree_mirrors_filesystem_layout() {
    let fixture = fixture_tree(&[
        ("top.txt", "t"),
        ("src/lib.rs", "lib"),
        ("src/nested/deep.rs", "deep"),
        ("docs/readme.md", "docs"),
    ]);

    let tree = DirectoryNode::open(fixture.path()).unwrap();
    assert_eq!(tree.file_count(), 4);
    assert_eq!(tree.file_children().len(), 1);
    assert_eq!(tree.dir_children().len(), 2);

    let dir_count = tree.directories().count();
    assert_eq!(dir_count, 3); // src, src/nested, docs
}

#[test]
fn test_empty_directories_are_kept() {
    let fixture = fixture_tree(&[("real.txt", "r"), ("hollow/", "")]);

    let tree = DirectoryNode::open(fixture.path()).unwrap();
    assert_eq!(tree.file_count(), 1);
    assert_eq!(tree.dir_children().len(), 1);
}

#[test]
fn test_walker_sequences_cover_whole_tree() {
    let fixture = fixture_tree(&[
        ("a.txt", "1"),
        ("sub/b.txt", "2"),
        ("sub/inner/c.txt", "3"),
    ]);

    let tree = DirectoryNode::open(fixture.path()).unwrap();

    assert_eq!(tree.files().count(), 3);
    assert_eq!(tree.directories().count(), 2);

    let paths: Vec<PathBuf> = tree.directory_paths(Some(tree.path())).collect();
    assert_eq!(paths.len(), 3); // ".", "sub", "sub/inner"
    assert!(paths.contains(&PathBuf::from("sub/inner")));
}

#[test]
fn test_fingerprints_sequence_matches_contents() {
    let fixture = fixture_tree(&[("x.txt", "alpha"), ("sub/y.txt", "beta")]);

    let tree = DirectoryNode::open(fixture.path()).unwrap();
    let cache = FingerprintCache::default();

    let mut fps: Vec<_> = tree
        .fingerprints(&cache)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    fps.sort_unstable();

    let mut expected = vec![fingerprint_bytes(b"alpha"), fingerprint_bytes(b"beta")];
    expected.sort_unstable();
    assert_eq!(fps, expected);
}

#[test]
fn test_construction_fails_on_missing_root() {
    let fixture = fixture_tree(&[]);
    let missing = fixture.path().join("never-created");
    assert!(DirectoryNode::open(&missing).is_err());
}
