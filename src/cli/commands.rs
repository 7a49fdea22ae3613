//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Site configuration and content utilities for a markdown blog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Absolute site URL used for feed links
        #[arg(long)]
        site_url: Option<String>,
    },

    /// List posts, newest first
    Posts {
        /// Collection to list (writing, projects)
        #[arg(short, long, default_value = "writing")]
        collection: String,

        /// Only posts with this tag (display name or slug)
        #[arg(short, long)]
        tag: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// List unique tags with post counts
    Tags {
        /// Collection to scan (writing, projects)
        #[arg(short, long, default_value = "writing")]
        collection: String,
    },

    /// Generate the RSS feed for the writing collection
    Feed {
        /// Write the feed to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Absolute site URL (overrides site_url in site.toml)
        #[arg(long)]
        site: Option<String>,
    },

    /// View configuration
    Config {
        /// Config key to show
        key: Option<String>,

        /// Print the whole configuration as TOML
        #[arg(short, long)]
        list: bool,
    },
}
