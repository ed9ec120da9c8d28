//! CLI module
//!
//! Command-line interface for paginating JSON listings.
//!
//! # Commands
//!
//! - `page` - Show the items and links of one page
//! - `links` - Show only the page links and navigation targets
//! - `count` - Paginate the numbers `1..=N`
//! - `validate` - Check a paginator config file

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
