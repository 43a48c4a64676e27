//! TUI artwork table module
//!
//! Provides terminal-oriented presentation of a [`TableSession`]: the
//! paging cursor, the checkbox grid and the cell formatting it relies on.
//!
//! # Architecture
//!
//! - `Pager` - 1-based page cursor with clamped navigation
//! - `ArtworkGrid` - checkbox table rendered as text lines
//! - `format` - width-aware truncation and padding
//!
//! Nothing here touches the terminal directly; the `cli` module drives
//! crossterm and prints the lines these widgets produce.
//!
//! [`TableSession`]: crate::TableSession

mod format;
mod grid;
mod pager;

// Public exports
pub use format::{display_width, format_text, format_year, pad_to_width, truncate_string};
pub use grid::{ArtworkGrid, ColumnWidths, HEADERS};
pub use pager::Pager;
