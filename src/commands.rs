//! Table command parser
//!
//! Parses user input into structured commands for script mode and the
//! interactive prompt. Numbers are validated here, so negative counts never
//! reach the selection tracker.

use crate::{Error, Result};

/// Commands accepted by the artwork table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    // ─────────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────────
    /// Select the first N records across all pages
    Select {
        /// Number of records
        count: usize,
    },

    /// Toggle one row on the current page
    Toggle {
        /// 1-based row on the page
        row: usize,
    },

    /// Toggle every row on the current page
    TogglePage,

    // ─────────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────────
    /// Next page
    Next,

    /// Previous page
    Prev,

    /// First page
    First,

    /// Last page
    Last,

    /// Jump to a page
    Page {
        /// 1-based page number
        page: usize,
    },

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────
    /// Print the grid
    Show,

    /// Print the status line
    Status,

    /// List selected ids on the current page
    Selected,

    /// Show help
    Help,

    /// Exit
    Quit,
}

/// Parser for table commands
pub struct CommandParser;

impl CommandParser {
    /// Parse a command string into a `TableCommand`
    ///
    /// # Errors
    ///
    /// Returns a parse error if the command is empty, unknown or has a
    /// missing or invalid argument.
    pub fn parse(input: &str) -> Result<TableCommand> {
        let input = input.trim();

        if input.is_empty() {
            return Err(Error::parse("Empty command"));
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "select" => Ok(TableCommand::Select {
                count: Self::parse_count(args, "select")?,
            }),
            "toggle" => {
                let row = Self::parse_count(args, "toggle")?;
                if row == 0 {
                    return Err(Error::parse("toggle rows are numbered from 1"));
                }
                Ok(TableCommand::Toggle { row })
            }
            "all" => Ok(TableCommand::TogglePage),

            "next" | "n" => Ok(TableCommand::Next),
            "prev" | "p" => Ok(TableCommand::Prev),
            "first" => Ok(TableCommand::First),
            "last" => Ok(TableCommand::Last),
            "page" => {
                let page = Self::parse_count(args, "page")?;
                if page == 0 {
                    return Err(Error::parse("pages are numbered from 1"));
                }
                Ok(TableCommand::Page { page })
            }

            "show" => Ok(TableCommand::Show),
            "status" => Ok(TableCommand::Status),
            "selected" => Ok(TableCommand::Selected),
            "help" | "?" => Ok(TableCommand::Help),
            "quit" | "exit" | "q" => Ok(TableCommand::Quit),

            _ => Err(Error::parse(format!("Unknown command: '{}'", cmd))),
        }
    }

    /// Parse the single non-negative integer argument of `cmd`
    pub fn parse_count(args: &[&str], cmd: &str) -> Result<usize> {
        let Some(raw) = args.first() else {
            return Err(Error::parse(format!("{cmd} requires a number")));
        };
        if raw.starts_with('-') {
            return Err(Error::parse(format!(
                "{cmd} requires a non-negative number, got '{raw}'"
            )));
        }
        raw.parse()
            .map_err(|_| Error::parse(format!("Invalid number: '{}'", raw)))
    }

    /// Help text listing every command
    pub fn help_text() -> &'static str {
        "Commands:\n  \
         select <n>   select the first n records across all pages\n  \
         toggle <r>   toggle row r (1-based) on this page\n  \
         all          toggle every row on this page\n  \
         next | n     next page\n  \
         prev | p     previous page\n  \
         first, last  first or last page\n  \
         page <n>     jump to page n\n  \
         show         print the table\n  \
         status       print the status line\n  \
         selected     list selected ids on this page\n  \
         help | ?     this help\n  \
         quit | q     exit"
    }
}
