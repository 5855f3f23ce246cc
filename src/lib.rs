//! # hnsift
//!
//! A terminal client for Hacker News search.
//!
//! ## Architecture
//!
//! ```text
//! intent → QueryController → Fetcher → Store (merge) → view → UI
//! ```
//!
//! - [`controller`]: decides when a fetch is needed and applies its outcome
//! - [`fetcher`]: HTTP transport for the Algolia search API
//! - [`store`]: per-query result cache with idempotent page merging
//! - [`view`]: sorted snapshot handed to the front ends
//! - [`tui`]: terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Print the top results for a query
//! hnsift search rust --sort points
//!
//! # Fetch three pages and list them by comment count
//! hnsift search "async runtime" --pages 3 --sort comments
//!
//! # Launch TUI
//! hnsift tui redux
//! ```

/// Application context, sessions and error types.
///
/// [`AppContext`](app::AppContext) wires the configuration to a transport;
/// [`Session`](app::Session) runs a controller against it.
pub mod app;

/// Configuration loaded from `~/.config/hnsift/config.toml`:
/// - Search backend, page size and default query
/// - Custom colors (named or hex)
/// - Custom keybindings
pub mod config;

/// Command-line interface using clap.
///
/// - `search [query]` - Print results
/// - `tui [query]` - Launch the TUI
pub mod cli;

/// Fetch lifecycle: active query, loading/error status, paging.
pub mod controller;

/// Core domain models.
///
/// - [`Item`](domain::Item): a single search hit
/// - [`Page`](domain::Page): one page of hits for one query
pub mod domain;

/// Search transport.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for fetching pages
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Converts Algolia search responses into [`Page`](domain::Page)s.
pub mod normalizer;

pub mod sort;

/// Result cache.
///
/// - [`Store`](store::Store): trait defining cache operations
/// - [`MemoryStore`](store::MemoryStore): in-memory implementation
pub mod store;

/// Terminal user interface.
///
/// Search bar, results table and status bar. `/` edits the query,
/// j/k navigate, m loads more, d dismisses, 0-4 sort, o opens, q quits.
pub mod tui;

pub mod view;
