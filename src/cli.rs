use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tweaktui - batch system tweaks from the terminal
#[derive(Parser)]
#[command(name = "tweaktui")]
#[command(about = "Select and apply system tweaks as one audited batch")]
#[command(version)]
pub struct Cli {
    /// Dry-run mode: report what would be executed without touching the host.
    ///
    /// Registry writes and commands are skipped and logged as successful
    /// outcomes describing the action, so the run reads like the real thing.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a selection headlessly (no TUI)
    Apply {
        /// Preset to resolve ("standard", "minimal")
        #[arg(short, long)]
        preset: Option<String>,

        /// Explicit tweak ids, comma-separated (unioned with the preset)
        #[arg(short, long, value_delimiter = ',')]
        tweaks: Vec<String>,

        /// Path to a selection plan file (JSON)
        #[arg(long, conflicts_with_all = ["preset", "tweaks"])]
        plan: Option<PathBuf>,
    },
    /// Print the tweak catalog
    List {
        /// Restrict to one category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Validate a selection plan file against the catalog
    Validate {
        /// Path to the plan file
        plan: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
