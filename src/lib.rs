//! # Tidings
//!
//! A terminal reader that merges several RSS/Atom feeds into one list,
//! newest first, and opens the selected entry in the default browser.
//!
//! ## Architecture
//!
//! ```text
//! FeedList → Aggregator (FeedSource → normalizer) → FeedCollection → TUI → Opener
//! ```
//!
//! Feeds are fetched once, in order, before the UI starts. A single failing
//! feed aborts startup.
//!
//! ## Quick Start
//!
//! ```bash
//! RSS_FEEDS_URL="https://blog.rust-lang.org/feed.xml,https://go.dev/blog/feed.atom" tidings
//! ```

/// Application context and error handling.
pub mod app;

/// Sequential, fail-fast merging of every configured feed.
pub mod aggregator;

/// Feed list from the environment, appearance and keybindings from
/// `~/.config/tidings/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`FeedDocument`](domain::FeedDocument) / [`RawEntry`](domain::RawEntry): a parsed feed
/// - [`FeedItem`](domain::FeedItem): one display-ready entry
/// - [`FeedCollection`](domain::FeedCollection): all entries, newest first
pub mod domain;

/// Retrieving feeds.
///
/// - [`FeedSource`](fetcher::FeedSource): async trait turning a URL into a document
/// - [`HttpFeedSource`](fetcher::http_fetcher::HttpFeedSource): reqwest-based implementation
pub mod fetcher;

/// Feed parsing and entry normalization.
pub mod normalizer;

/// Opening links with the platform's default handler.
pub mod opener;

/// Terminal user interface.
///
/// A single titled, paginated, filterable list built with ratatui.
/// Keybindings: j/k navigate, h/l page, / filters, Enter opens, q quits.
pub mod tui;
