//! dirsim: Content-Based Directory Tree Similarity
//!
//! Scores how similar two directory trees are by comparing file
//! contents, independent of file names or paths. Trees are modeled as
//! immutable recursive nodes over lazily-fingerprinted files; three
//! symmetric comparators (content overlap, depth correspondence,
//! grouping correspondence) combine into one weighted [0,1] score.

pub mod cli;
pub mod compare;
pub mod concurrency;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;
pub mod types;
