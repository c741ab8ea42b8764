//! CLI output: score rendering and error mapping to a stable surface.

use crate::compare::Similarity;
use crate::error::CompareError;
use crate::tree::fingerprint::FingerprintCache;
use crate::tree::node::DirectoryNode;
use crate::types::format_fingerprint;
use comfy_table::{presets, Cell, Table};
use owo_colors::OwoColorize;
use std::fmt::Write as _;
use std::path::Path;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &CompareError) -> String {
    e.to_string()
}

/// Render component and composite scores as a table.
pub fn format_similarity_table(similarity: &Similarity, color: bool) -> String {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(vec!["Dimension", "Score"]);
    table.add_row(vec![
        Cell::new("Content overlap"),
        Cell::new(format!("{:.4}", similarity.content)),
    ]);
    table.add_row(vec![
        Cell::new("Depth correspondence"),
        Cell::new(format!("{:.4}", similarity.depth)),
    ]);
    table.add_row(vec![
        Cell::new("Grouping correspondence"),
        Cell::new(format!("{:.4}", similarity.grouping)),
    ]);

    let composite = format!("{:.4}", similarity.composite);
    let composite = if color {
        composite.bold().green().to_string()
    } else {
        composite
    };
    table.add_row(vec![Cell::new("Composite"), Cell::new(composite)]);

    table.to_string()
}

/// Render scores as a JSON document.
pub fn format_similarity_json(similarity: &Similarity) -> Result<String, CompareError> {
    serde_json::to_string_pretty(similarity)
        .map_err(|e| CompareError::InvalidConfig(format!("Failed to serialize scores: {}", e)))
}

/// Render a scanned tree: one line per file (`fingerprint  path`)
/// followed by one line per directory path.
pub fn format_scan_text(
    tree: &DirectoryNode,
    cache: &FingerprintCache,
    relative: bool,
) -> Result<String, CompareError> {
    let root: Option<&Path> = relative.then(|| tree.path());
    let mut out = String::new();

    for file in tree.files() {
        let fp = file.fingerprint(cache)?;
        let shown = match root {
            Some(base) => crate::tree::path::relativize(file.path(), base),
            None => file.path().to_path_buf(),
        };
        let _ = writeln!(out, "{}  {}", format_fingerprint(fp), shown.display());
    }

    for dir_path in tree.directory_paths(root) {
        let _ = writeln!(out, "dir  {}", dir_path.display());
    }

    Ok(out)
}
