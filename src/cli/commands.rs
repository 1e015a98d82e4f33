//! CLI argument definitions using clap.
//!
//! TextBuddy takes one positional argument, the storage file, and then
//! reads its commands interactively.

use clap::Parser;
use std::path::PathBuf;

/// TextBuddy - store, sort and search lines of text in a file
#[derive(Parser, Debug)]
#[command(name = "textbuddy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Storage file to open (created if missing)
    pub file: Option<PathBuf>,

    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
