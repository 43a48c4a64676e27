//! galleria CLI - artwork catalog browser
//!
//! Command-line interface for browsing and selecting catalog pages.

use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};

use crate::config::{TableConfig, DEFAULT_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use crate::fetch::{create_fetcher, PageFetcher};
use crate::session::TableSession;
use crate::tui::ArtworkGrid;

mod script;
mod view;

pub use script::{execute, run_script};

/// galleria - browse the Art Institute of Chicago catalog page by page
#[derive(Parser)]
#[command(name = "galleria")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,
    #[command(subcommand)]
    command: Commands,
}

/// Where pages come from and how they are sized
#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// Catalog API root
    #[arg(long, global = true, env = "GALLERIA_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Rows per page
    #[arg(long, global = true, env = "GALLERIA_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
    /// HTTP timeout in seconds
    #[arg(long, global = true, env = "GALLERIA_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
    /// Serve pages from a JSON fixture instead of the API
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,
}

impl SourceArgs {
    fn config(&self) -> crate::Result<TableConfig> {
        let config = TableConfig::default()
            .with_api_url(self.api_url.clone())
            .with_page_size(self.page_size)
            .with_timeout_secs(self.timeout);
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive table viewer
    View {
        /// Page to open on
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Read table commands from stdin, one per line
    Script {
        /// Page to open on
        #[arg(long, default_value = "1")]
        page: usize,
        /// Table width in columns
        #[arg(long, default_value = "100")]
        width: u16,
    },
    /// Print one page of the table
    Page {
        /// Page number (1-based)
        page: usize,
        /// Table width in columns
        #[arg(long, default_value = "100")]
        width: u16,
    },
}

/// Run the galleria CLI.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> crate::Result<()> {
    let config = cli.source.config()?;
    let fetcher = create_fetcher(&config, cli.source.fixture.as_deref())?;
    let mut session = TableSession::with_config(fetcher, &config);

    match cli.command {
        Commands::View { page } => view::cmd_view(&mut session, page),
        Commands::Script { page, width } => cmd_script(&mut session, page, width),
        Commands::Page { page, width } => cmd_page(&mut session, page, width),
    }
}

fn cmd_script<F: PageFetcher>(
    session: &mut TableSession<F>,
    page: usize,
    width: u16,
) -> crate::Result<()> {
    let mut grid = ArtworkGrid::new(width);
    session.load_page(page.max(1));
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_script(session, &mut grid, stdin.lock(), &mut stdout)
}

fn cmd_page<F: PageFetcher>(
    session: &mut TableSession<F>,
    page: usize,
    width: u16,
) -> crate::Result<()> {
    if page == 0 {
        return Err(crate::Error::InvalidPage { page });
    }
    let grid = ArtworkGrid::new(width);
    session.load_page(page);
    for line in grid.render_lines(session) {
        println!("{line}");
    }
    println!("{}", grid.render_status(session));
    Ok(())
}
