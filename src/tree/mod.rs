//! Directory tree model
//!
//! Represents a directory subtree as an immutable recursive node
//! structure, where each file carries a lazily-computed 128-bit content
//! fingerprint. The tree is built once by an eager traversal and is
//! read-only for the lifetime of a comparison.

pub mod builder;
pub mod fingerprint;
pub mod node;
pub mod path;
pub mod walker;
