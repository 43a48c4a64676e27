//! Line-oriented command mode.

use std::io::{BufRead, Write};

use crate::commands::{CommandParser, TableCommand};
use crate::fetch::PageFetcher;
use crate::session::TableSession;
use crate::tui::ArtworkGrid;

fn write_err(e: std::io::Error) -> crate::Error {
    crate::Error::io_no_path(e)
}

/// Run commands read from `input` until `quit` or end of input.
///
/// Parse errors are reported as `error: ...` lines and do not stop the
/// run.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_script<F: PageFetcher, R: BufRead, W: Write>(
    session: &mut TableSession<F>,
    grid: &mut ArtworkGrid,
    input: R,
    out: &mut W,
) -> crate::Result<()> {
    writeln!(out, "{}", grid.render_status(session)).map_err(write_err)?;

    for line in input.lines() {
        let line = line.map_err(write_err)?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match CommandParser::parse(trimmed) {
            Ok(command) => {
                if !execute(session, grid, &command, out)? {
                    break;
                }
            }
            Err(e) => writeln!(out, "error: {e}").map_err(write_err)?,
        }
    }

    out.flush().map_err(write_err)?;
    Ok(())
}

/// Execute one command, writing its result to `out`.
///
/// Returns `false` when the command ends the session.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn execute<F: PageFetcher, W: Write>(
    session: &mut TableSession<F>,
    grid: &mut ArtworkGrid,
    command: &TableCommand,
    out: &mut W,
) -> crate::Result<bool> {
    match command {
        TableCommand::Select { count } => {
            session.select_across_pages(*count);
            writeln!(out, "Selected first {count} records across all pages")
                .map_err(write_err)?;
        }
        TableCommand::Toggle { row } => {
            let toggled = row.checked_sub(1).filter(|&local| session.toggle_row(local));
            if let Some(local) = toggled {
                let state = if session.is_row_selected(local) {
                    "selected"
                } else {
                    "deselected"
                };
                let id = session.records()[local].id;
                writeln!(out, "Row {row} (id {id}) {state}").map_err(write_err)?;
            } else {
                writeln!(
                    out,
                    "error: row {row} is not on this page ({} rows)",
                    session.records().len()
                )
                .map_err(write_err)?;
            }
        }
        TableCommand::TogglePage => {
            session.toggle_page();
            writeln!(
                out,
                "Page toggled: {} of {} rows selected",
                session.selected_rows().len(),
                session.records().len()
            )
            .map_err(write_err)?;
        }
        TableCommand::Next => navigated(session.next_page(), session, grid, out)?,
        TableCommand::Prev => navigated(session.prev_page(), session, grid, out)?,
        TableCommand::First => navigated(session.first_page(), session, grid, out)?,
        TableCommand::Last => navigated(session.last_page(), session, grid, out)?,
        TableCommand::Page { page } => {
            let changed = session.goto_page(*page);
            navigated(changed, session, grid, out)?;
        }
        TableCommand::Show => {
            for line in grid.render_lines(session) {
                writeln!(out, "{line}").map_err(write_err)?;
            }
            writeln!(out, "{}", grid.render_status(session)).map_err(write_err)?;
        }
        TableCommand::Status => {
            writeln!(out, "{}", grid.render_status(session)).map_err(write_err)?;
        }
        TableCommand::Selected => {
            let ids = session.selected_rows();
            if ids.is_empty() {
                writeln!(out, "Selected on page: none").map_err(write_err)?;
            } else {
                let list: Vec<String> = ids.iter().map(ToString::to_string).collect();
                writeln!(out, "Selected on page: {}", list.join(", ")).map_err(write_err)?;
            }
        }
        TableCommand::Help => {
            writeln!(out, "{}", CommandParser::help_text()).map_err(write_err)?;
        }
        TableCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Report where a navigation command left the session
fn navigated<F: PageFetcher, W: Write>(
    changed: bool,
    session: &TableSession<F>,
    grid: &mut ArtworkGrid,
    out: &mut W,
) -> crate::Result<()> {
    if changed {
        grid.cursor_home();
    }
    writeln!(out, "{}", grid.render_status(session)).map_err(write_err)
}
