//! Artwork grid widget for TUI display
//!
//! Renders the loaded page of a [`TableSession`] as fixed-width text lines
//! with a checkbox column driven by the session's selection tracker.

use super::format::{format_text, format_year, pad_to_width};
use crate::artwork::Artwork;
use crate::fetch::PageFetcher;
use crate::session::TableSession;

/// Column headers, after the checkbox column
pub const HEADERS: [&str; 5] = ["Title", "Origin", "Artist", "Start", "End"];

const MARKER_WIDTH: usize = 1;
const CHECKBOX_WIDTH: usize = 3;
const YEAR_WIDTH: usize = 6;
const MIN_TEXT_WIDTH: usize = 5;
// marker, checkbox, two year columns and the six single-space separators
const FIXED_WIDTH: usize = MARKER_WIDTH + CHECKBOX_WIDTH + 2 * YEAR_WIDTH + 6;

/// Widths of the three text columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Title column
    pub title: usize,
    /// Origin column
    pub origin: usize,
    /// Artist column
    pub artist: usize,
}

impl ColumnWidths {
    /// Split the space left after fixed columns 2:1:2 between title, origin
    /// and artist
    pub fn for_display(width: u16) -> Self {
        let flexible = (width as usize).saturating_sub(FIXED_WIDTH);
        let origin = (flexible / 5).max(MIN_TEXT_WIDTH);
        let title = (flexible.saturating_sub(origin) / 2).max(MIN_TEXT_WIDTH);
        let artist = flexible
            .saturating_sub(origin + title)
            .max(MIN_TEXT_WIDTH);
        Self {
            title,
            origin,
            artist,
        }
    }

    /// Full line width these columns produce
    pub fn line_width(&self) -> usize {
        FIXED_WIDTH + self.title + self.origin + self.artist
    }
}

/// A checkbox table over one page of artworks
///
/// The grid owns only presentation state: the display width and a cursor
/// row that toggles apply to. Selection lives in the session.
///
/// # Example
///
/// ```
/// use galleria::fetch::MemoryFetcher;
/// use galleria::tui::ArtworkGrid;
/// use galleria::{Artwork, TableSession};
///
/// let mut session = TableSession::new(MemoryFetcher::new(vec![Artwork::titled(1, "Nighthawks")]), 12);
/// session.load_page(1);
/// session.select_across_pages(1);
///
/// let grid = ArtworkGrid::new(80);
/// let lines = grid.render_lines(&session);
/// assert!(lines[2].contains("[x] Nighthawks"));
/// ```
#[derive(Debug, Clone)]
pub struct ArtworkGrid {
    /// Total display width
    display_width: u16,
    /// Calculated text column widths
    widths: ColumnWidths,
    /// Row on the page that toggles apply to
    cursor: usize,
}

impl Default for ArtworkGrid {
    fn default() -> Self {
        Self::new(80)
    }
}

impl ArtworkGrid {
    /// Create a grid for a display `width` columns wide
    pub fn new(width: u16) -> Self {
        Self {
            display_width: width,
            widths: ColumnWidths::for_display(width),
            cursor: 0,
        }
    }

    /// Update display width
    pub fn set_width(&mut self, width: u16) {
        self.display_width = width;
        self.widths = ColumnWidths::for_display(width);
    }

    /// Display width
    #[inline]
    pub fn display_width(&self) -> u16 {
        self.display_width
    }

    /// Text column widths
    #[inline]
    pub fn column_widths(&self) -> ColumnWidths {
        self.widths
    }

    /// Cursor row (0-based, page-local)
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor down, stopping at the last of `row_count` rows
    pub fn cursor_down(&mut self, row_count: usize) {
        if self.cursor + 1 < row_count {
            self.cursor += 1;
        }
    }

    /// Move the cursor up, stopping at the first row
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Put the cursor back on the first row
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Keep the cursor inside a page of `row_count` rows
    pub fn clamp_cursor(&mut self, row_count: usize) {
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
    }

    // Rendering

    /// Header line, with a page-level checkbox
    pub fn render_header_line<F: PageFetcher>(&self, session: &TableSession<F>) -> String {
        let selected = session.selected_rows().len();
        let total = session.records().len();
        let checkbox = if total > 0 && selected == total {
            "[x]"
        } else if selected > 0 {
            "[-]"
        } else {
            "[ ]"
        };
        self.compose(' ', checkbox, HEADERS.map(str::to_string))
    }

    /// Separator under the header
    pub fn render_rule_line(&self) -> String {
        "-".repeat(self.widths.line_width())
    }

    /// One record line
    pub fn render_row_line<F: PageFetcher>(
        &self,
        session: &TableSession<F>,
        local_index: usize,
    ) -> Option<String> {
        let art = session.records().get(local_index)?;
        let marker = if local_index == self.cursor { '>' } else { ' ' };
        let checkbox = if session.is_row_selected(local_index) {
            "[x]"
        } else {
            "[ ]"
        };
        Some(self.compose(marker, checkbox, cells(art)))
    }

    /// Header, separator and every record line of the loaded page
    ///
    /// While a fetch is outstanding the grid shows only "Loading...".
    pub fn render_lines<F: PageFetcher>(&self, session: &TableSession<F>) -> Vec<String> {
        if session.is_loading() {
            return vec!["Loading...".to_string()];
        }

        let mut lines = Vec::with_capacity(session.records().len() + 2);
        lines.push(self.render_header_line(session));
        lines.push(self.render_rule_line());
        lines.extend((0..session.records().len()).filter_map(|i| self.render_row_line(session, i)));
        lines
    }

    /// Status summary: page, visible range, selection count and rule
    pub fn render_status<F: PageFetcher>(&self, session: &TableSession<F>) -> String {
        let pager = session.pager();
        let rows = match pager.range() {
            Some((start, end)) => format!("rows {start}-{end} of {}", pager.total_records()),
            None => format!("no rows of {}", pager.total_records()),
        };
        let rule = session
            .tracker()
            .rule_count()
            .map_or_else(|| "none".to_string(), |n| n.to_string());
        format!(
            "Page {}/{} | {} | selected {} | rule: {}",
            pager.page(),
            pager.page_count(),
            rows,
            session.selected_count(),
            rule
        )
    }

    fn compose(&self, marker: char, checkbox: &str, cells: [String; 5]) -> String {
        let [title, origin, artist, start, end] = cells;
        [
            marker.to_string(),
            checkbox.to_string(),
            pad_to_width(&title, self.widths.title),
            pad_to_width(&origin, self.widths.origin),
            pad_to_width(&artist, self.widths.artist),
            pad_to_width(&start, YEAR_WIDTH),
            pad_to_width(&end, YEAR_WIDTH),
        ]
        .join(" ")
    }
}

/// Display text for each data column of a record
fn cells(art: &Artwork) -> [String; 5] {
    [
        format_text(art.title.as_deref()),
        format_text(art.place_of_origin.as_deref()),
        format_text(art.artist_display.as_deref()),
        format_year(art.date_start),
        format_year(art.date_end),
    ]
}
