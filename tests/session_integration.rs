//! Integration tests for the table session.

use std::collections::HashSet;
use std::sync::Mutex;

use galleria::fetch::{MemoryFetcher, PageFetcher};
use galleria::tui::ArtworkGrid;
use galleria::artwork::ApiResponse;
use galleria::{Artwork, ArtworkPage, Error, Result, TableSession};

/// Creates `n` sequentially numbered artworks.
fn create_records(n: u64) -> Vec<Artwork> {
    (1..=n)
        .map(|i| Artwork::titled(i, format!("Work {i}")))
        .collect()
}

/// Fetcher whose listed pages fail, serving the rest from memory
struct FlakyFetcher {
    inner: MemoryFetcher,
    failing: Mutex<HashSet<usize>>,
}

impl FlakyFetcher {
    fn new(n: u64, failing: &[usize]) -> Self {
        Self {
            inner: MemoryFetcher::new(create_records(n)),
            failing: Mutex::new(failing.iter().copied().collect()),
        }
    }

    fn heal(&self, page: usize) {
        self.failing.lock().unwrap().remove(&page);
    }
}

impl PageFetcher for FlakyFetcher {
    fn fetch_page(&self, page: usize, page_size: usize) -> Result<ArtworkPage> {
        if self.failing.lock().unwrap().contains(&page) {
            return Err(Error::http(format!("status 502 for page {page}")));
        }
        self.inner.fetch_page(page, page_size)
    }
}

/// Fetcher whose envelopes carry no `pagination.total`
struct TotalLessFetcher(MemoryFetcher);

impl PageFetcher for TotalLessFetcher {
    fn fetch_page(&self, page: usize, page_size: usize) -> Result<ArtworkPage> {
        let data = self.0.fetch_page(page, page_size)?.records;
        Ok(ApiResponse {
            data,
            pagination: Default::default(),
        }
        .into())
    }
}

#[test]
fn test_total_less_response_keeps_global_positions() {
    let fetcher = TotalLessFetcher(MemoryFetcher::new(create_records(30)));
    let mut session = TableSession::new(fetcher, 12);
    session.load_page(2);

    assert_eq!(session.pager().page(), 2);
    assert_eq!(session.records()[0].id, 13);
    let positions: Vec<usize> = session.page_rows().iter().map(|&(_, pos)| pos).collect();
    assert_eq!(positions, (13..=24).collect::<Vec<_>>());

    session.select_across_pages(5);
    assert!(session.selected_rows().is_empty());

    session.select_across_pages(14);
    assert_eq!(session.selected_rows(), vec![13, 14]);

    let status = ArtworkGrid::new(100).render_status(&session);
    assert!(status.starts_with("Page 2/2 | rows 13-24 of 24"), "{status}");
}

#[test]
fn test_load_past_end_shows_last_page() {
    let mut session = TableSession::new(MemoryFetcher::new(create_records(30)), 12);
    session.load_page(9);

    let grid = ArtworkGrid::new(100);
    assert_eq!(grid.render_lines(&session).len(), 2 + 6);
    assert!(grid
        .render_status(&session)
        .starts_with("Page 3/3 | rows 25-30 of 30"));
}

#[test]
fn test_end_to_end_selection_across_pages() {
    let mut session = TableSession::new(MemoryFetcher::new(create_records(40)), 12);
    session.load_page(1);

    session.select_across_pages(15);
    assert_eq!(session.selected_rows().len(), 12);

    // Uncheck row 5 on page 1
    assert!(session.toggle_row(4));

    session.next_page();
    assert_eq!(session.selected_rows(), vec![13, 14, 15]);

    // Uncheck row 14 on page 2
    assert!(session.toggle_row(1));
    assert_eq!(session.selected_rows(), vec![13, 15]);

    session.first_page();
    assert!(!session.is_row_selected(4));
    assert_eq!(session.selected_rows().len(), 11);
    assert_eq!(session.selected_count(), 13);

    // A new rule wipes both overrides
    session.select_across_pages(15);
    assert_eq!(session.selected_rows().len(), 12);
    session.next_page();
    assert_eq!(session.selected_rows(), vec![13, 14, 15]);
}

#[test]
fn test_grid_reflects_session_selection() {
    let mut session = TableSession::new(MemoryFetcher::new(create_records(40)), 12);
    session.load_page(2);
    session.select_across_pages(15);
    let grid = ArtworkGrid::new(100);

    let lines = grid.render_lines(&session);
    // header, rule, 12 rows
    assert_eq!(lines.len(), 14);
    let checked: Vec<bool> = lines[2..].iter().map(|l| l.contains("[x]")).collect();
    assert_eq!(
        checked,
        vec![true, true, true, false, false, false, false, false, false, false, false, false]
    );
}

#[test]
fn test_failed_page_is_swallowed_then_recovers() {
    let mut session = TableSession::new(FlakyFetcher::new(30, &[2]), 12);
    session.load_page(1);

    assert!(session.next_page());
    assert!(!session.is_loading());
    assert_eq!(session.pager().page(), 1, "failed fetch must not move the pager");
    assert_eq!(session.records()[0].id, 1);

    session.fetcher().heal(2);
    assert!(session.next_page());
    assert_eq!(session.pager().page(), 2);
    assert_eq!(session.records()[0].id, 13);
}

#[test]
fn test_first_load_failure_leaves_empty_table() {
    let mut session = TableSession::new(FlakyFetcher::new(30, &[1]), 12);
    session.load_page(1);

    assert!(session.records().is_empty());
    assert!(!session.is_loading());
    let lines = ArtworkGrid::new(80).render_lines(&session);
    assert_eq!(lines.len(), 2, "only header and rule without records");
}

#[test]
fn test_out_of_order_completion_last_issued_wins() {
    let mut session = TableSession::new(MemoryFetcher::new(create_records(40)), 12);
    session.load_page(1);

    let to_page_2 = session.begin_load(2);
    let to_page_3 = session.begin_load(3);

    let page3 = session.fetcher().fetch_page(3, 12);
    let page2 = session.fetcher().fetch_page(2, 12);

    assert!(session.finish_load(to_page_3, page3));
    assert!(!session.finish_load(to_page_2, page2));
    assert_eq!(session.pager().page(), 3);
    assert_eq!(session.records()[0].id, 25);
}

#[test]
fn test_partial_last_page() {
    let mut session = TableSession::new(MemoryFetcher::new(create_records(30)), 12);
    session.load_page(1);
    session.select_across_pages(1_000);
    session.last_page();

    assert_eq!(session.records().len(), 6);
    assert_eq!(session.selected_rows(), vec![25, 26, 27, 28, 29, 30]);
    assert_eq!(session.selected_count(), 30);
}
