//! CLI route: dispatches parsed commands to the library and presentation.

use crate::cli::output;
use crate::cli::parse::Commands;
use crate::compare::{compare, Weights};
use crate::concurrency;
use crate::config::{ConfigLoader, DirsimConfig};
use crate::error::CompareError;
use crate::tree::builder::{BuildOptions, TreeBuilder};
use crate::tree::fingerprint::{FingerprintCache, FingerprintEngine};
use crate::tree::node::DirectoryNode;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: merged configuration only.
pub struct RunContext {
    config: DirsimConfig,
}

impl RunContext {
    /// Load configuration and validate it before touching the
    /// filesystem.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, CompareError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        Ok(Self { config })
    }

    #[cfg(test)]
    pub fn with_config(config: DirsimConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DirsimConfig {
        &self.config
    }

    /// Execute a parsed command, returning the text to print.
    pub fn execute(&self, command: &Commands) -> Result<String, CompareError> {
        match command {
            Commands::Compare {
                dir1,
                dir2,
                format,
                prewarm,
                chunk_size,
                weights,
                workers,
            } => self.run_compare(
                dir1,
                dir2,
                format,
                *prewarm,
                *chunk_size,
                weights.as_deref(),
                *workers,
            ),
            Commands::Scan { dir, relative } => self.run_scan(dir, *relative),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn run_compare(
        &self,
        dir1: &Path,
        dir2: &Path,
        format: &str,
        prewarm: bool,
        chunk_size: Option<usize>,
        weights_override: Option<&str>,
        workers: Option<usize>,
    ) -> Result<String, CompareError> {
        let mut effective = self.config.clone();
        if let Some(chunk) = chunk_size {
            effective.chunk_size = chunk;
        }
        if let Some(spec) = weights_override {
            effective.weights = parse_weights(spec)?;
        }
        if let Some(count) = workers {
            effective.workers = count;
        }
        effective.validate()?;

        let cache = FingerprintCache::new(FingerprintEngine::new(effective.chunk_size));

        if prewarm {
            let warmed = concurrency::prewarm(dir1, &cache, effective.workers)?
                + concurrency::prewarm(dir2, &cache, effective.workers)?;
            info!(file_count = warmed, "Prewarmed fingerprint cache");
        }

        let d1 = self.build_tree(dir1, &effective)?;
        let d2 = self.build_tree(dir2, &effective)?;

        let similarity = compare(&d1, &d2, &cache, &effective.weights)?;

        match format {
            "json" => output::format_similarity_json(&similarity),
            "text" => Ok(output::format_similarity_table(
                &similarity,
                effective.logging.color,
            )),
            other => Err(CompareError::InvalidConfig(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn run_scan(&self, dir: &Path, relative: bool) -> Result<String, CompareError> {
        self.config.validate()?;
        let cache = FingerprintCache::new(FingerprintEngine::new(self.config.chunk_size));
        let tree = self.build_tree(dir, &self.config)?;
        output::format_scan_text(&tree, &cache, relative)
    }

    fn build_tree(&self, root: &Path, config: &DirsimConfig) -> Result<DirectoryNode, CompareError> {
        let options = BuildOptions {
            ignore_patterns: config.ignore_patterns.clone(),
            ..BuildOptions::default()
        };
        Ok(TreeBuilder::new(root.to_path_buf())
            .with_options(options)
            .build()?)
    }
}

/// Parse a `content,depth,grouping` weight triple.
fn parse_weights(spec: &str) -> Result<Weights, CompareError> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CompareError::InvalidWeights(format!(
            "expected three comma-separated weights, got {:?}",
            spec
        )));
    }
    let parse = |s: &str| {
        s.parse::<f64>().map_err(|_| {
            CompareError::InvalidWeights(format!("'{}' is not a number", s))
        })
    };
    Ok(Weights {
        content: parse(parts[0])?,
        depth: parse(parts[1])?,
        grouping: parse(parts[2])?,
    })
}
