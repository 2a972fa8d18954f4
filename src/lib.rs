//! # stig
//!
//! Search GitHub repositories from the terminal and render the results as a
//! compact, color-coded report, or print a repository's README.
//!
//! ## Main Components
//!
//! - [`GitHubSearcher`]: HTTP transport for the search and README endpoints
//! - [`render_search_report`]: turns a [`SearchResponse`] into report text
//! - [`PageWindow`]: result range arithmetic for the summary line
//! - [`fuzzy_time`]: single-unit relative ages such as `3D`
//! - [`Args`]: command line arguments
//!
//! ## Example
//!
//! ```no_run
//! use stig_lib::{render_search_report, ColorMode, GitHubSearcher, RenderOptions, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let searcher = GitHubSearcher::new(None)?;
//!     let query = SearchQuery {
//!         query: "http server language:rust".to_string(),
//!         sort: None,
//!         order: None,
//!         page: 1,
//!         per_page: 10,
//!     };
//!     let response = searcher.search(&query).await?;
//!
//!     let options = RenderOptions {
//!         color: ColorMode::Off,
//!         terminal_width: 0,
//!         is_terminal: false,
//!         now: chrono::Utc::now().timestamp(),
//!     };
//!     print!("{}", render_search_report(&response, 1, 10, &options));
//!     Ok(())
//! }
//! ```

mod args;
mod error;
mod formatter;
mod fuzzy_time;
mod github_searcher;
mod lang;
mod models;
mod pagination;
mod query;
mod report;
mod style;

pub use crate::args::{Args, Order, Sort};
pub use crate::error::{Result, StigError};
pub use crate::formatter::{format_item, ItemContext};
pub use crate::fuzzy_time::{fuzzy_since, fuzzy_time, FuzzyTime, TimeUnit};
pub use crate::github_searcher::{GitHubSearcher, SearchQuery};
pub use crate::lang::{color as language_color, Rgb};
pub use crate::models::{parse_pushed_at, RateLimit, SearchResponse, SearchResultItem};
pub use crate::pagination::{compute_page_window, PageWindow};
pub use crate::query::{build_query, ReadmePath};
pub use crate::report::{render, render_search_report, ColorMode, RenderOptions};
pub use crate::style::{paint, Paint};
