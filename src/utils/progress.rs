//! Progress reporting while texts are inserted
//!
//! Backed by `indicatif` with the `progress` feature; compiles to a no-op
//! reporter without it.

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// Bar over the texts of a manifest
pub struct InsertProgress {
    #[cfg(feature = "progress")]
    bar: ProgressBar,
}

impl InsertProgress {
    #[cfg(feature = "progress")]
    pub fn new(total: u64, quiet: bool) -> Self {
        if quiet {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  ");
        bar.set_style(style);
        Self { bar }
    }

    #[cfg(not(feature = "progress"))]
    pub fn new(_total: u64, _quiet: bool) -> Self {
        Self {}
    }

    /// Announce the text about to be inserted
    pub fn start_text(&self, _name: &str) {
        #[cfg(feature = "progress")]
        self.bar.set_message(_name.to_string());
    }

    pub fn text_done(&self) {
        #[cfg(feature = "progress")]
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        #[cfg(feature = "progress")]
        self.bar.finish_and_clear();
    }
}
