//! Core type definitions shared across the crate.

/// 128-bit content fingerprint of a file.
///
/// Derived from the BLAKE3 digest of the file's bytes, truncated to
/// 128 bits. Used for content-equality checks, not cryptographic
/// integrity.
pub type Fingerprint = u128;

/// Default number of bytes read per chunk when fingerprinting (1 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Render a fingerprint as 32 lowercase hex digits.
pub fn format_fingerprint(fp: Fingerprint) -> String {
    format!("{:032x}", fp)
}
