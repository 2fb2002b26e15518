// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nexus-cleaner")]
#[command(about = "Delete old Docker image versions from Sonatype Nexus")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print deletions and the final result
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the config file (default: search the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a nexus-cleaner.yml template
    Init {
        /// Nexus base URL to put in the template
        #[arg(long)]
        url: Option<String>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Delete image versions outside the retention policy
    Clean(CleanArgs),

    /// List the hosted repositories that would be cleaned
    Repos,
}

#[derive(Args, Debug, Default)]
pub struct CleanArgs {
    /// Number of newest versions to keep per image (minimum 10)
    #[arg(short = 'c', long = "count", value_name = "N")]
    pub count: Option<usize>,

    /// Only delete versions older than this many days
    #[arg(short = 'd', long = "days", value_name = "DAYS")]
    pub days: Option<u32>,

    /// Only clean these images
    #[arg(short = 'n', long = "names", value_name = "NAME", num_args = 1..)]
    pub names: Vec<String>,

    /// Only clean these repositories
    #[arg(short = 'r', long = "repository", value_name = "REPO")]
    pub repositories: Vec<String>,

    /// Report what would be deleted without deleting anything
    #[arg(long = "dry-run", visible_alias = "test")]
    pub dry_run: bool,

    /// Print every version of every image with its keep/delete verdict
    #[arg(long = "full-info", alias = "full_info")]
    pub full_info: bool,
}
