//! Content fingerprinting using BLAKE3
//!
//! A fingerprint is the first 128 bits of the BLAKE3 digest of a file's
//! bytes. Files are read in fixed-size chunks so memory use stays bounded
//! for arbitrarily large inputs.

use crate::error::ScanError;
use crate::tree::path;
use crate::types::{Fingerprint, DEFAULT_CHUNK_SIZE};
use blake3::Hasher;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Streams file bytes into a 128-bit content fingerprint.
#[derive(Debug, Clone)]
pub struct FingerprintEngine {
    chunk_size: usize,
}

impl Default for FingerprintEngine {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl FingerprintEngine {
    /// Create an engine reading `chunk_size` bytes per I/O call.
    pub fn new(chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0, "chunk_size must be positive");
        Self { chunk_size }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Fingerprint the contents of the file at `file_path`.
    ///
    /// Deterministic for a given byte sequence regardless of chunk size.
    /// Fails with the offending path if the file cannot be opened or a
    /// read fails mid-stream; errors are not retried.
    pub fn fingerprint_file(&self, file_path: &Path) -> Result<Fingerprint, ScanError> {
        let mut file = File::open(file_path).map_err(|e| ScanError::Io {
            path: file_path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Hasher::new();
        let mut buffer = vec![0u8; self.chunk_size];

        loop {
            let read = file.read(&mut buffer).map_err(|e| ScanError::Io {
                path: file_path.to_path_buf(),
                source: e,
            })?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
        }

        let digest = hasher.finalize();
        trace!(path = %file_path.display(), "Fingerprinted file");
        Ok(truncate_digest(digest.as_bytes()))
    }
}

/// Fingerprint an in-memory byte slice.
///
/// Produces the same value `fingerprint_file` would for a file holding
/// exactly these bytes.
pub fn fingerprint_bytes(content: &[u8]) -> Fingerprint {
    let mut hasher = Hasher::new();
    hasher.update(content);
    truncate_digest(hasher.finalize().as_bytes())
}

/// First 16 digest bytes as a big-endian u128.
fn truncate_digest(digest: &[u8; 32]) -> Fingerprint {
    let mut head = [0u8; 16];
    head.copy_from_slice(&digest[..16]);
    u128::from_be_bytes(head)
}

/// Process-scoped fingerprint memoization keyed by canonical path.
///
/// Injectable rather than a hidden singleton: one cache may serve a
/// single comparison run or be shared across runs by explicit choice.
/// Entries are purely additive for the cache's lifetime, so sharing it
/// across concurrent comparisons is safe. Correctness depends on the
/// filesystem being stable for the duration of a run.
#[derive(Debug, Default)]
pub struct FingerprintCache {
    engine: FingerprintEngine,
    entries: RwLock<HashMap<PathBuf, Fingerprint>>,
}

impl FingerprintCache {
    pub fn new(engine: FingerprintEngine) -> Self {
        Self {
            engine,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the fingerprint for `file_path`, hashing the file on the
    /// first request and memoizing the result.
    ///
    /// Keys are canonicalized so different relative traversals of the
    /// same file share one entry. On a racing miss the first computed
    /// value wins; both computations observe the same file bytes.
    pub fn get_or_compute(&self, file_path: &Path) -> Result<Fingerprint, ScanError> {
        let key = path::canonicalize(file_path)?;

        if let Some(fp) = self.entries.read().get(&key) {
            return Ok(*fp);
        }

        let computed = self.engine.fingerprint_file(&key)?;
        let mut entries = self.entries.write();
        Ok(*entries.entry(key).or_insert(computed))
    }

    /// Number of cached fingerprints.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
