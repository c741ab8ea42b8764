//! Property-based tests for fingerprint determinism

use dirsim::tree::fingerprint::{fingerprint_bytes, FingerprintEngine};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Same bytes always produce the same fingerprint; different bytes
/// (collision-improbably) produce different ones.
#[test]
fn test_fingerprint_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<Vec<u8>>(), any::<Vec<u8>>()),
            |(content1, content2)| {
                let fp1 = fingerprint_bytes(&content1);
                let fp2 = fingerprint_bytes(&content2);

                if content1 == content2 {
                    assert_eq!(fp1, fp2);
                } else {
                    prop_assume!(fp1 != fp2);
                }

                Ok(())
            },
        )
        .unwrap();
}

/// Streaming a file through any chunk size matches the in-memory
/// fingerprint of the same bytes.
#[test]
fn test_fingerprint_chunking_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<Vec<u8>>(), 1usize..4096),
            |(content, chunk_size)| {
                let temp_dir = TempDir::new().unwrap();
                let file = temp_dir.path().join("data.bin");
                fs::write(&file, &content).unwrap();

                let streamed = FingerprintEngine::new(chunk_size)
                    .fingerprint_file(&file)
                    .unwrap();
                assert_eq!(streamed, fingerprint_bytes(&content));

                Ok(())
            },
        )
        .unwrap();
}
