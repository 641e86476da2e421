//! CLI parse: clap types for the frames tool. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Frames CLI - inspect a stored knowledge base
#[derive(Parser)]
#[command(name = "frames")]
#[command(about = "Inspect frames, slots, and framesets in a frame store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frame store directory (overrides storage.frames_dir)
    #[arg(long)]
    pub frames_dir: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stored frames
    List,
    /// Show a frame's slots, facets, and demons
    Show {
        /// Frame name
        frame: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the reference chain followed for a slot
    Path {
        /// Starting frame
        frame: String,
        /// Slot name
        slot: String,
    },
    /// Show the frame a slot's value and method operations land on
    Resolve {
        /// Starting frame
        frame: String,
        /// Slot name
        slot: String,
    },
    /// List a frameset's members
    Members {
        /// Frameset name
        frame: String,
    },
}
