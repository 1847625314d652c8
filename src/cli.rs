use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "videoimport")]
#[command(author, version, about = "Import YouTube videos listed in a CSV file into Contentful")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import every video listed in a CSV file
    Run {
        /// CSV file with one video URL per row
        #[arg(required = true)]
        input: PathBuf,

        /// Fetch metadata and print the records without publishing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the video ids extracted from a CSV file
    Ids {
        /// CSV file with one video URL per row
        #[arg(required = true)]
        input: PathBuf,
    },

    /// Normalize provider durations (e.g. PT1H2M10S)
    Normalize {
        /// Encoded durations
        #[arg(required = true)]
        durations: Vec<String>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
