//! Interactive terminal viewer for the artwork table.

use std::io::Write;

use crate::commands::CommandParser;
use crate::fetch::PageFetcher;
use crate::session::TableSession;
use crate::tui::ArtworkGrid;

fn term_err(e: std::io::Error) -> crate::Error {
    crate::Error::terminal(e.to_string())
}

/// Page navigation requested by a key
#[derive(Debug, Clone, Copy)]
enum Nav {
    Next,
    Prev,
    First,
    Last,
}

/// Interactive viewer: raw mode, hidden cursor, restored on exit.
pub(crate) fn cmd_view<F: PageFetcher>(
    session: &mut TableSession<F>,
    page: usize,
) -> crate::Result<()> {
    use crossterm::{cursor, execute, terminal};
    use std::io::stdout;

    let (width, _) = terminal::size().unwrap_or((100, 24));
    let mut grid = ArtworkGrid::new(width);

    terminal::enable_raw_mode().map_err(term_err)?;
    let mut stdout = stdout();
    execute!(stdout, cursor::Hide).map_err(term_err)?;

    let result = load_with_indicator(session, &grid, &mut stdout, page.max(1))
        .and_then(|()| run_tui_loop(session, &mut grid, &mut stdout));

    // Cleanup: restore terminal
    let _ = execute!(stdout, cursor::Show);
    let _ = terminal::disable_raw_mode();

    result
}

/// Fetch `page`, showing "Loading..." while the request is outstanding
fn load_with_indicator<F: PageFetcher, W: Write>(
    session: &mut TableSession<F>,
    grid: &ArtworkGrid,
    stdout: &mut W,
    page: usize,
) -> crate::Result<()> {
    let mut target = session.resolve_page(page);
    loop {
        let request = session.begin_load(target);
        draw(session, grid, stdout)?;
        let result = session
            .fetcher()
            .fetch_page(request.page, session.pager().page_size());
        session.finish_load(request, result);
        match session.fallback_page(target) {
            Some(last) => target = last,
            None => return Ok(()),
        }
    }
}

fn navigate<F: PageFetcher, W: Write>(
    session: &mut TableSession<F>,
    grid: &mut ArtworkGrid,
    stdout: &mut W,
    nav: Nav,
) -> crate::Result<()> {
    let mut pager = *session.pager();
    let changed = match nav {
        Nav::Next => pager.next(),
        Nav::Prev => pager.prev(),
        Nav::First => pager.first(),
        Nav::Last => pager.last(),
    };
    if changed {
        load_with_indicator(session, grid, stdout, pager.page())?;
        grid.cursor_home();
    }
    Ok(())
}

/// Draw title, grid and status bar.
fn draw<F: PageFetcher, W: Write>(
    session: &TableSession<F>,
    grid: &ArtworkGrid,
    stdout: &mut W,
) -> crate::Result<()> {
    use crossterm::{
        cursor, execute,
        style::{Attribute, Print, SetAttribute},
        terminal::{Clear, ClearType},
    };

    let width = grid.display_width() as usize;
    execute!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0)).map_err(term_err)?;

    let title = " Art Institute of Chicago | Artworks";
    execute!(
        stdout,
        SetAttribute(Attribute::Reverse),
        Print(format!("{:width$}", title, width = width)),
        SetAttribute(Attribute::Reset),
        Print("\r\n")
    )
    .map_err(term_err)?;

    for line in grid.render_lines(session) {
        execute!(stdout, Print(&line), Print("\r\n")).map_err(term_err)?;
    }

    let status = format!(
        " {} | \u{2190}\u{2192} page | \u{2191}\u{2193} row | space toggle | a all | s select N | q quit ",
        grid.render_status(session)
    );
    execute!(
        stdout,
        SetAttribute(Attribute::Reverse),
        Print(format!("{:width$}", status, width = width)),
        SetAttribute(Attribute::Reset)
    )
    .map_err(term_err)?;

    stdout.flush().map_err(term_err)
}

/// Run the TUI event loop.
fn run_tui_loop<F: PageFetcher, W: Write>(
    session: &mut TableSession<F>,
    grid: &mut ArtworkGrid,
    stdout: &mut W,
) -> crate::Result<()> {
    use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

    loop {
        draw(session, grid, stdout)?;

        if !event::poll(std::time::Duration::from_millis(100)).map_err(term_err)? {
            continue;
        }

        match event::read().map_err(term_err)? {
            Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Right | KeyCode::Char('l') => navigate(session, grid, stdout, Nav::Next)?,
                KeyCode::Left | KeyCode::Char('h') => navigate(session, grid, stdout, Nav::Prev)?,
                KeyCode::Home => navigate(session, grid, stdout, Nav::First)?,
                KeyCode::End => navigate(session, grid, stdout, Nav::Last)?,
                KeyCode::Down | KeyCode::Char('j') => grid.cursor_down(session.records().len()),
                KeyCode::Up | KeyCode::Char('k') => grid.cursor_up(),
                KeyCode::Char(' ') => {
                    session.toggle_row(grid.cursor());
                }
                KeyCode::Char('a') => session.toggle_page(),
                KeyCode::Char('s') => {
                    if let Some(count) = prompt_count(stdout)? {
                        session.select_across_pages(count);
                    }
                }
                _ => {}
            },
            Event::Resize(w, _) => grid.set_width(w),
            _ => {}
        }
    }

    Ok(())
}

/// Prompt for the number of rows to select across all pages.
///
/// Returns `None` on Esc, empty input, or input that is not a
/// non-negative integer.
fn prompt_count<W: Write>(stdout: &mut W) -> crate::Result<Option<usize>> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyCode, KeyEventKind},
        execute,
        style::Print,
        terminal::{self, Clear, ClearType},
    };

    const PROMPT: &str = "Rows to select across all pages: ";
    let (_, height) = terminal::size().unwrap_or((100, 24));
    let row = height.saturating_sub(1);

    execute!(
        stdout,
        cursor::MoveTo(0, row),
        Clear(ClearType::CurrentLine),
        cursor::Show,
        Print(PROMPT)
    )
    .map_err(term_err)?;
    stdout.flush().map_err(term_err)?;

    let mut input = String::new();

    loop {
        let Event::Key(key) = event::read().map_err(term_err)? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match key.code {
            KeyCode::Enter => {
                execute!(stdout, cursor::Hide).map_err(term_err)?;
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                return match CommandParser::parse_count(&[trimmed], "select") {
                    Ok(count) => Ok(Some(count)),
                    Err(e) => {
                        tracing::debug!(error = %e, "rejected select count");
                        Ok(None)
                    }
                };
            }
            KeyCode::Esc => {
                execute!(stdout, cursor::Hide).map_err(term_err)?;
                return Ok(None);
            }
            KeyCode::Backspace => {
                input.pop();
                execute!(
                    stdout,
                    cursor::MoveTo(PROMPT.len() as u16, row),
                    Clear(ClearType::UntilNewLine),
                    Print(&input)
                )
                .map_err(term_err)?;
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                input.push(c);
                execute!(stdout, Print(c)).map_err(term_err)?;
            }
            _ => {}
        }
        stdout.flush().map_err(term_err)?;
    }
}
