//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pagination metadata for JSON listings
#[derive(Parser, Debug)]
#[command(name = "pagewise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Paginator config file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// URL template, `__page__` is replaced with the page number
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Page to show (non-numeric values are ignored)
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub page: Option<String>,

    /// Items per page (non-numeric values are ignored)
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub page_size: Option<String>,

    /// Number of page links (non-numeric values are ignored)
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub window: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the items and links of one page
    Page {
        /// JSON or YAML file holding an array, `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },

    /// Show only the page links and navigation targets
    Links {
        /// JSON or YAML file holding an array, `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },

    /// Paginate the numbers 1 through TOTAL
    Count {
        /// Number of items
        total: u64,
    },

    /// Validate the paginator config file
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable output
    Pretty,
}
