//! Bounded worker pool for fingerprint cache pre-warming
//!
//! Fingerprinting distinct files is embarrassingly parallel: each file
//! is independent and the cache is the only shared resource. The pool
//! enumerates every file under a root and hashes them through the cache
//! on a fixed number of worker threads, so a subsequent comparison
//! finds all fingerprints already memoized.

use crate::error::ScanError;
use crate::tree::fingerprint::FingerprintCache;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

/// Hash every file under `root` into `cache` using up to `workers`
/// threads.
///
/// Returns the number of files fingerprinted. Enumeration and read
/// errors abort the pool; the first error observed is returned and the
/// remaining queue is dropped. Symlinks are not followed, matching
/// tree construction defaults.
#[instrument(skip(cache), fields(root = %root.display()))]
pub fn prewarm(root: &Path, cache: &FingerprintCache, workers: usize) -> Result<usize, ScanError> {
    let files = collect_files(root)?;
    if files.is_empty() {
        return Ok(0);
    }

    let pool_size = workers.max(1).min(files.len());
    let next = AtomicUsize::new(0);
    let failure: Mutex<Option<ScanError>> = Mutex::new(None);
    let hashed = AtomicUsize::new(0);

    thread::scope(|scope| -> Result<(), ScanError> {
        for id in 0..pool_size {
            let files = &files;
            let next = &next;
            let failure = &failure;
            let hashed = &hashed;
            thread::Builder::new()
                .name(format!("prewarm-{}", id))
                .spawn_scoped(scope, move || loop {
                    if failure.lock().is_some() {
                        break;
                    }
                    let idx = next.fetch_add(1, Ordering::Relaxed);
                    let Some(path) = files.get(idx) else {
                        break;
                    };
                    match cache.get_or_compute(path) {
                        Ok(_) => {
                            hashed.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(e) => {
                            let mut slot = failure.lock();
                            if slot.is_none() {
                                *slot = Some(e);
                            }
                            break;
                        }
                    }
                })
                .map_err(|e| ScanError::Io {
                    path: root.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    })?;

    if let Some(err) = failure.into_inner() {
        return Err(err);
    }

    let count = hashed.into_inner();
    info!(file_count = count, workers = pool_size, "Cache prewarm completed");
    Ok(count)
}

/// All file paths under `root`, enumeration errors surfaced with the
/// offending path.
fn collect_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            match e.into_io_error() {
                Some(io) => ScanError::Io { path, source: io },
                None => ScanError::InvalidPath(format!("Walk failed under {:?}", path)),
            }
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    debug!(file_count = files.len(), "Collected prewarm candidates");
    Ok(files)
}
