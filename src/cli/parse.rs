//! CLI parse: clap types for dirsim. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dirsim - Content-based directory tree similarity
#[derive(Parser)]
#[command(name = "dirsim")]
#[command(about = "Score the similarity of two directory trees by content")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two directory trees and print similarity scores
    Compare {
        /// First directory
        dir1: PathBuf,
        /// Second directory
        dir2: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Hash all files concurrently before comparing
        #[arg(long)]
        prewarm: bool,
        /// Override fingerprint read chunk size in bytes
        #[arg(long)]
        chunk_size: Option<usize>,
        /// Override comparator weights as content,depth,grouping
        #[arg(long, value_name = "C,D,G")]
        weights: Option<String>,
        /// Override prewarm worker count
        #[arg(long)]
        workers: Option<usize>,
    },
    /// Scan one directory tree and print file fingerprints and
    /// directory paths
    Scan {
        /// Directory to scan
        dir: PathBuf,
        /// Print paths relative to the scanned root
        #[arg(long)]
        relative: bool,
    },
}
