//! galleria - Paginated artwork catalog browser with cross-page selection
//!
//! Browses the Art Institute of Chicago public catalog one page at a time
//! and tracks a "select the first N records" rule across every page, with
//! per-row overrides when the user unchecks a rule-selected row.
//!
//! # Design Principles
//!
//! 1. **Host-owned state** - selection lives in a plain
//!    [`SelectionTracker`] value with a command/query interface
//! 2. **Page-local knowledge** - the tracker never needs records outside
//!    the loaded page
//! 3. **Swappable sources** - any [`fetch::PageFetcher`] can feed a
//!    session, HTTP or in-memory
//!
//! # Quick Start
//!
//! ```no_run
//! use galleria::fetch::HttpFetcher;
//! use galleria::tui::ArtworkGrid;
//! use galleria::{TableConfig, TableSession};
//!
//! let config = TableConfig::default();
//! let fetcher = HttpFetcher::new(&config).unwrap();
//! let mut session = TableSession::with_config(fetcher, &config);
//!
//! session.load_page(1);
//! session.select_across_pages(20);
//! session.toggle_row(3);
//!
//! for line in ArtworkGrid::new(100).render_lines(&session) {
//!     println!("{line}");
//! }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_possible_truncation,
        clippy::too_many_lines
    )
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod artwork;
/// CLI module for command-line interface
#[cfg(feature = "cli")]
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod selection;
pub mod session;
/// TUI table widgets
pub mod tui;

// Re-exports for convenience
pub use artwork::{Artwork, ArtworkId, ArtworkPage};
pub use commands::{CommandParser, TableCommand};
pub use config::TableConfig;
pub use error::{Error, Result};
#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
pub use fetch::{MemoryFetcher, PageFetcher};
pub use selection::{global_position, PageRow, SelectionTracker};
pub use session::{PageRequest, TableSession};
pub use tui::{ArtworkGrid, Pager};
