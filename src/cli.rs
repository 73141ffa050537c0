//! Command-line interface definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(author, version, about = "Browse what's playing in cinemas from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive browser (default)
    Browse {
        /// Start at this location, e.g. /items/550 to open a movie directly
        #[arg(long, default_value = "/")]
        path: String,

        /// Read the listing from a JSON file instead of the API
        #[arg(long, value_name = "FILE")]
        offline: Option<PathBuf>,
    },

    /// Print the banner and one page of the row
    List {
        /// Row page to print (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Fetch again even if the cache is fresh
        #[arg(long)]
        refresh: bool,

        /// Read the listing from a JSON file instead of the API
        #[arg(long, value_name = "FILE")]
        offline: Option<PathBuf>,
    },

    /// Show details for one movie
    Show {
        /// Movie id as it appears in /items/<id>
        id: String,

        /// Read the listing from a JSON file instead of the API
        #[arg(long, value_name = "FILE")]
        offline: Option<PathBuf>,
    },

    /// Fetch the listing into the local cache
    Refresh,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
