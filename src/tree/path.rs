//! Path canonicalization and relativization utilities

use crate::error::ScanError;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a path for use as a cache key or node identity.
///
/// Resolves symlinks, `.` and `..` (via dunce, which avoids Windows UNC
/// prefixes), then normalizes the string form to Unicode NFC so that
/// differently-composed names of the same file map to one key.
pub fn canonicalize(path: &Path) -> Result<PathBuf, ScanError> {
    let resolved = dunce::canonicalize(path).map_err(|e| {
        ScanError::InvalidPath(format!("Failed to canonicalize {:?}: {}", path, e))
    })?;

    let normalized: String = resolved.to_string_lossy().nfc().collect();
    Ok(PathBuf::from(normalized))
}

/// Relativize `path` against `root`, falling back to the absolute path
/// when it is not a descendant of `root`.
pub fn relativize(path: &Path, root: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}
