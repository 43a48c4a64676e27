//! Cell formatting utilities for TUI display
//!
//! Widths are measured in terminal columns, so wide CJK glyphs count
//! twice and combining marks count zero.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Calculate the display width of a string in terminal columns
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to at most `max_width` columns, ending in ".."
///
/// Strings that already fit are returned unchanged. Below three columns
/// there is no room for an ellipsis and the string is simply cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let (budget, ellipsis) = if max_width < 3 {
        (max_width, "")
    } else {
        (max_width - 2, "..")
    };

    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        result.push(c);
    }
    result.push_str(ellipsis);
    result
}

/// Truncate then right-pad with spaces to exactly `width` columns
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut cell = truncate_string(s, width);
    let fill = width.saturating_sub(display_width(&cell));
    cell.extend(std::iter::repeat(' ').take(fill));
    cell
}

/// Flatten an optional text field onto one line
///
/// The API puts line breaks inside `artist_display`; those become " / ".
pub fn format_text(value: Option<&str>) -> String {
    match value {
        Some(text) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" / "),
        None => String::new(),
    }
}

/// Format an optional year
pub fn format_year(value: Option<i64>) -> String {
    value.map(|y| y.to_string()).unwrap_or_default()
}
