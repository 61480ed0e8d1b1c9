//! Manifest-driven runs: read files, build the tree, search every pattern

use super::manifest::Manifest;
use crate::output::Triplet;
use crate::tree::{GeneralizedSuffixTree, Symbol, TreeError, symbols_from_bytes};
use crate::utils::{FrontEndConfig, InsertProgress};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a file as symbols, one per byte, ASCII-lowercased when asked to
pub fn read_symbols(path: &Path, lowercase: bool) -> Result<Vec<Symbol>> {
    let mut bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    if lowercase {
        bytes.make_ascii_lowercase();
    }
    Ok(symbols_from_bytes(&bytes))
}

/// Build a tree holding `texts`, text `k` of the slice at index `k`
pub fn build_tree(texts: &[PathBuf], config: &FrontEndConfig, quiet: bool) -> Result<GeneralizedSuffixTree> {
    let mut tree = GeneralizedSuffixTree::new(texts.len())
        .with_context(|| format!("Cannot hold {} texts in one tree", texts.len()))?;
    let progress = InsertProgress::new(texts.len() as u64, quiet);

    for (text_index, path) in texts.iter().enumerate() {
        progress.start_text(&path.display().to_string());
        let symbols = read_symbols(path, config.lowercase)?;
        tree.insert(&symbols, text_index)
            .with_context(|| format!("Failed to index {}", path.display()))?;
        progress.text_done();
    }

    progress.finish();
    Ok(tree)
}

/// Search every pattern and report 1-based `(pattern, text, offset)` triplets,
/// ordered by pattern, then text, then offset.
///
/// Patterns the tree rejects (empty ones) are skipped with a warning.
pub fn search_patterns(
    tree: &GeneralizedSuffixTree,
    patterns: &[Vec<Symbol>],
    config: &FrontEndConfig,
) -> Vec<Triplet> {
    let search_one = |(pattern_index, pattern): (usize, &Vec<Symbol>)| -> Vec<Triplet> {
        match tree.search(pattern) {
            Ok(occurrences) => occurrences
                .into_iter()
                .map(|o| Triplet {
                    pattern: pattern_index + 1,
                    text: o.text_index + 1,
                    offset: o.offset + 1,
                })
                .collect(),
            Err(TreeError::EmptyPattern) => {
                log::warn!("pattern {} is empty, skipping", pattern_index + 1);
                Vec::new()
            }
            Err(e) => {
                log::warn!("pattern {} skipped: {}", pattern_index + 1, e);
                Vec::new()
            }
        }
    };

    // The tree is read-only from here on, so patterns can share it
    if patterns.len() >= config.parallel_search_threshold {
        patterns
            .par_iter()
            .enumerate()
            .flat_map_iter(search_one)
            .collect()
    } else {
        patterns.iter().enumerate().flat_map(search_one).collect()
    }
}

/// Run a whole manifest and return its triplets
pub fn run_manifest(manifest: &Manifest, config: &FrontEndConfig, quiet: bool) -> Result<Vec<Triplet>> {
    log::info!(
        "indexing {} texts, searching {} patterns",
        manifest.texts.len(),
        manifest.patterns.len()
    );

    let tree = build_tree(&manifest.texts, config, quiet)?;

    let patterns = manifest
        .patterns
        .iter()
        .map(|path| read_symbols(path, config.lowercase))
        .collect::<Result<Vec<_>>>()?;

    Ok(search_patterns(&tree, &patterns, config))
}
