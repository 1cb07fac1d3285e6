//! CLI argument parsing for em

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// EM - ExamMaker CLI
#[derive(Parser, Debug)]
#[command(name = "em")]
#[command(author, version, about = "EM - ExamMaker CLI: author exam items in LaTeX", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage exam items
    Item {
        #[command(subcommand)]
        command: ItemCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ItemCommand {
    /// Create a new exam item interactively
    Add {
        /// Directory to store item YAML files [default: items]
        #[arg(long)]
        items_dir: Option<PathBuf>,
    },

    /// List stored exam items
    List {
        /// Directory holding item YAML files [default: items]
        #[arg(long)]
        items_dir: Option<PathBuf>,
    },
}
