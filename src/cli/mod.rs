pub mod commands;

use clap::{Parser, Subcommand};

use crate::sort::SortKey;

#[derive(Parser)]
#[command(name = "hnsift")]
#[command(about = "Search Hacker News from the terminal", long_about = None)]
pub struct Cli {
    /// Results per page (overrides the config file)
    #[arg(short, long, global = true)]
    pub page_size: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search and print the results
    Search {
        /// Query to run (defaults to the configured default query)
        query: Option<String>,
        /// Number of pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: u32,
        /// Sort by: none, title, author, comments or points
        #[arg(short, long, default_value = "none")]
        sort: SortKey,
        /// Reverse the sort order
        #[arg(short, long)]
        reverse: bool,
    },
    /// Launch the TUI
    Tui {
        /// Query to show first
        query: Option<String>,
    },
}
