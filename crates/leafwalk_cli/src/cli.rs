//! CLI argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// leafwalk - Inspect and test the leaves of JSON documents
#[derive(Parser)]
#[command(name = "leafwalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every leaf with its path
    Leaves {
        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Succeed if any leaf is truthy (or falsey with --falsey)
    Any {
        #[command(flatten)]
        walk: WalkArgs,

        /// Test for falsey leaves instead of truthy ones
        #[arg(long)]
        falsey: bool,
    },

    /// Succeed if all leaves are truthy (or falsey with --falsey)
    All {
        #[command(flatten)]
        walk: WalkArgs,

        /// Test for falsey leaves instead of truthy ones
        #[arg(long)]
        falsey: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Arguments shared by every walking command.
#[derive(Args)]
pub struct WalkArgs {
    /// JSON or JSONC document to read ("-" for stdin)
    pub file: PathBuf,

    /// Only walk paths matching these prefixes
    #[arg(short, long, value_name = "PATH", value_delimiter = ',')]
    pub include: Vec<String>,

    /// Skip these exact paths and everything below them
    #[arg(short, long, value_name = "PATH", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
