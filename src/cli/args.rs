//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// debrief - Meeting transcript classification and report generation
#[derive(Parser, Debug)]
#[command(name = "debrief")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a structured meeting report from a transcript
    Report {
        /// Transcript file (plain text or JSON sentence records), '-' for stdin
        input: PathBuf,

        /// Report title (defaults to the input file name)
        #[arg(short, long)]
        title: Option<String>,

        /// Skip classification and force a category (intro, followup, general)
        #[arg(short, long)]
        category: Option<String>,

        /// Output format (md, json)
        #[arg(short, long, default_value = "md")]
        format: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify a transcript without generating a report
    Classify {
        /// Transcript file, '-' for stdin
        input: PathBuf,
    },

    /// Merge raw sentence records into a readable dialogue transcript
    Format {
        /// JSON sentence records file, '-' for stdin
        input: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the section layout for each meeting category
    Templates,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
