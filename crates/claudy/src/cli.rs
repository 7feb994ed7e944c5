use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "claudy")]
#[command(version)]
#[command(about = "Animated mascot that reacts to coding assistant activity")]
pub struct Cli {
    /// Configuration file (defaults to ~/.claude/claudy.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Feed JSONL events or state payloads through the mascot and print what it does
    Replay {
        /// Path to a JSONL file (reads stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Pause between input lines
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,

        /// Seed every random source for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Start in idle instead of playing the intro
        #[arg(long)]
        no_intro: bool,
    },

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Status,

    /// Print version information
    Version,

    /// Manage comment categories
    Categories {
        #[command(subcommand)]
        action: Option<CategoryAction>,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List all categories
    List,
    /// Enable a category
    Enable { name: String },
    /// Disable a category
    Disable { name: String },
}
