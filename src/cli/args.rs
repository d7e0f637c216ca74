// src/cli/args.rs
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "socnet", version, about = "Social graph clustering and friend suggestions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the bounded-depth friendship cluster around a profile
    Cluster {
        /// CSV file holding the profile universe
        #[arg(long, short, value_name = "FILE")]
        file: PathBuf,
        /// Profile id to root the cluster at
        #[arg(long, short)]
        root: String,
        /// Maximum friendship depth to expand
        #[arg(long, short, default_value = "3")]
        depth: usize,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Rank friend-of-friend suggestions for a profile
    Suggest {
        /// CSV file holding the profile universe
        #[arg(long, short, value_name = "FILE")]
        file: PathBuf,
        /// Profile id to suggest connections for
        #[arg(long, short)]
        profile: String,
        /// Maximum number of suggestions to return
        #[arg(long, short)]
        max: Option<usize>,
        /// Only suggest profiles of this gender
        #[arg(long)]
        gender: Option<String>,
        /// Only suggest profiles at least this old
        #[arg(long)]
        min_age: Option<u32>,
        /// Only suggest profiles at most this old
        #[arg(long)]
        max_age: Option<u32>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Load a CSV file and report what survived validation
    Validate {
        /// CSV file holding the profile universe
        #[arg(long, short, value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
