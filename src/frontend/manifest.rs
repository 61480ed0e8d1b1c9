//! Manifest parsing
//!
//! A manifest lists the text files and then the pattern files of a run:
//!
//! ```text
//! 2
//! 1 genome_a.txt
//! 2 genome_b.txt
//! 1
//! 1 motif.txt
//! ```
//!
//! Each section starts with its entry count, followed by that many
//! `index filename` lines with 1-based indices in any order. Relative file
//! names resolve against the manifest's directory.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Text files; slot `k` holds the file declared with index `k + 1`
    pub texts: Vec<PathBuf>,
    /// Pattern files, same layout
    pub patterns: Vec<PathBuf>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&content, base_dir)
            .with_context(|| format!("Invalid manifest {}", path.display()))
    }

    pub fn parse(content: &str, base_dir: &Path) -> Result<Self> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end_matches('\r')));

        let texts = parse_section(&mut lines, "text", base_dir)?;
        let patterns = parse_section(&mut lines, "pattern", base_dir)?;

        if let Some((line_no, line)) = lines.find(|(_, line)| !line.trim().is_empty()) {
            bail!("line {}: unexpected trailing content {:?}", line_no, line);
        }

        Ok(Self { texts, patterns })
    }
}

fn parse_section<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    kind: &str,
    base_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let (line_no, count_line) = lines
        .next()
        .with_context(|| format!("missing {} file count", kind))?;
    let count: usize = count_line
        .trim()
        .parse()
        .with_context(|| format!("line {}: invalid {} file count {:?}", line_no, kind, count_line))?;

    let mut slots: Vec<Option<PathBuf>> = vec![None; count];
    for _ in 0..count {
        let (line_no, line) = lines
            .next()
            .with_context(|| format!("expected {} {} entries", count, kind))?;

        let (index, name) = line
            .trim_start()
            .split_once(' ')
            .with_context(|| format!("line {}: expected `index filename`, got {:?}", line_no, line))?;
        let index: usize = index
            .parse()
            .with_context(|| format!("line {}: invalid {} index {:?}", line_no, kind, index))?;
        if index == 0 || index > count {
            bail!("line {}: {} index {} outside 1..={}", line_no, kind, index, count);
        }

        let slot = &mut slots[index - 1];
        if slot.is_some() {
            bail!("line {}: {} index {} listed twice", line_no, kind, index);
        }
        *slot = Some(base_dir.join(name.trim()));
    }

    // `count` distinct in-range indices fill every slot
    Ok(slots.into_iter().flatten().collect())
}
