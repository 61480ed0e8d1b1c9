//! Output formatting for search result triplets

use crate::utils::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One occurrence as reported by the front end; every field is 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triplet {
    pub pattern: usize,
    pub text: usize,
    pub offset: usize,
}

/// Write one triplet per line
pub fn write_triplets<W: Write>(
    writer: &mut W,
    triplets: &[Triplet],
    format: OutputFormat,
) -> io::Result<()> {
    for t in triplets {
        match format {
            OutputFormat::Text => writeln!(writer, "{} {} {}", t.pattern, t.text, t.offset)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, t)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()
}

/// Write triplets to `path`, replacing any existing file
pub fn write_triplets_to_path(path: &Path, triplets: &[Triplet], format: OutputFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_triplets(&mut writer, triplets, format)
        .with_context(|| format!("Failed to write output file {}", path.display()))?;
    log::info!("wrote {} triplets to {}", triplets.len(), path.display());
    Ok(())
}
