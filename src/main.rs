use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gstree::frontend::{self, Manifest};
use gstree::output;
use gstree::utils::{FrontEndConfig, OutputFormat};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gstree")]
#[command(about = "Exact substring search over many texts with a generalized suffix tree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file for the front end
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep original letter case instead of lowercasing texts and patterns
    #[arg(long, global = true)]
    case_sensitive: bool,

    /// Hide the progress bar
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Index the texts of a manifest, search its patterns, write triplets
    Run {
        /// Manifest listing text and pattern files
        manifest: PathBuf,

        /// Output file for `pattern text offset` triplets
        #[arg(short, long, default_value = "output_gst.txt")]
        output: PathBuf,

        /// Output format (overrides the config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Search one pattern in the given files and print `file:offset` matches.
    ///
    /// Offsets are 1-based, the same convention `run` uses for its triplets.
    Search {
        /// Pattern to look for
        pattern: String,

        /// Files to index
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Build the tree for a manifest's texts and print its statistics as JSON
    Stats {
        /// Manifest listing text and pattern files
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = FrontEndConfig::load(cli.config.as_deref())?;
    if cli.case_sensitive {
        config.lowercase = false;
    }

    match cli.command {
        Commands::Run {
            manifest,
            output,
            format,
        } => {
            if let Some(format) = format {
                config.output_format = format;
            }
            let manifest = Manifest::load(&manifest)?;
            let triplets = frontend::run_manifest(&manifest, &config, cli.quiet)?;
            output::write_triplets_to_path(&output, &triplets, config.output_format)?;
        }
        Commands::Search { pattern, files } => {
            search_files(&pattern, &files, &config, cli.quiet)?;
        }
        Commands::Stats { manifest } => {
            let manifest = Manifest::load(&manifest)?;
            let tree = frontend::build_tree(&manifest.texts, &config, cli.quiet)?;
            let stats = serde_json::to_string_pretty(&tree.stats())
                .context("Failed to serialize stats")?;
            println!("{}", stats);
        }
    }

    Ok(())
}

fn search_files(pattern: &str, files: &[PathBuf], config: &FrontEndConfig, quiet: bool) -> Result<()> {
    let tree = frontend::build_tree(files, config, quiet)?;

    let mut pattern = pattern.as_bytes().to_vec();
    if config.lowercase {
        pattern.make_ascii_lowercase();
    }
    let symbols = gstree::tree::symbols_from_bytes(&pattern);

    let occurrences = tree
        .search(&symbols)
        .with_context(|| format!("Invalid pattern {:?}", String::from_utf8_lossy(&pattern)))?;

    for occurrence in occurrences {
        let file: &Path = &files[occurrence.text_index];
        println!("{}:{}", file.display(), occurrence.offset + 1);
    }

    Ok(())
}
