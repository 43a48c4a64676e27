//! Table session state
//!
//! Binds one fetcher, the paging cursor, the loaded page and the selection
//! tracker together. Every command runs synchronously on `&mut self`.

use std::collections::HashSet;

use crate::artwork::{Artwork, ArtworkId, ArtworkPage};
use crate::config::TableConfig;
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::selection::{PageRow, SelectionTracker};
use crate::tui::Pager;

/// Handle for one in-flight page load
///
/// Only the most recently issued request may change the session;
/// finishing an older one is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page being requested (1-based)
    pub page: usize,
    generation: u64,
}

/// A paginated, multi-select artwork table
///
/// # Example
///
/// ```
/// use galleria::fetch::MemoryFetcher;
/// use galleria::{Artwork, TableSession};
///
/// let records = (1..=30).map(|i| Artwork::titled(i, format!("Work {i}"))).collect();
/// let mut session = TableSession::new(MemoryFetcher::new(records), 12);
/// session.load_page(1);
///
/// session.select_across_pages(15);
/// session.next_page();
/// assert_eq!(session.selected_rows(), vec![13, 14, 15]);
/// ```
#[derive(Debug)]
pub struct TableSession<F: PageFetcher> {
    fetcher: F,
    pager: Pager,
    records: Vec<Artwork>,
    tracker: SelectionTracker,
    loading: bool,
    generation: u64,
}

impl<F: PageFetcher> TableSession<F> {
    /// Create a session with nothing loaded yet
    pub fn new(fetcher: F, page_size: usize) -> Self {
        Self {
            fetcher,
            pager: Pager::new(page_size),
            records: Vec::new(),
            tracker: SelectionTracker::new(),
            loading: false,
            generation: 0,
        }
    }

    /// Create a session using the page size from `config`
    pub fn with_config(fetcher: F, config: &TableConfig) -> Self {
        Self::new(fetcher, config.page_size)
    }

    /// Records on the loaded page
    #[inline]
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Paging cursor
    #[inline]
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Selection state
    #[inline]
    pub fn tracker(&self) -> &SelectionTracker {
        &self.tracker
    }

    /// Whether a page request is outstanding
    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Total records reported by the last successful fetch
    #[inline]
    pub fn total_records(&self) -> usize {
        self.pager.total_records()
    }

    /// The fetcher backing this session
    #[inline]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    // Loading

    /// Start loading `page`; the returned request supersedes all earlier ones
    pub fn begin_load(&mut self, page: usize) -> PageRequest {
        self.generation += 1;
        self.loading = true;
        PageRequest {
            page,
            generation: self.generation,
        }
    }

    /// Apply the outcome of a page request
    ///
    /// Returns whether the outcome was applied. Stale requests are dropped.
    /// A failed fetch is logged and otherwise ignored: the previous records
    /// stay on screen and no error reaches the user.
    pub fn finish_load(&mut self, request: PageRequest, result: Result<ArtworkPage>) -> bool {
        if request.generation != self.generation {
            tracing::debug!(
                page = request.page,
                generation = request.generation,
                latest = self.generation,
                "dropping stale page response"
            );
            return false;
        }
        self.loading = false;

        match result {
            Ok(page) if page.records.is_empty() && request.page > 1 => {
                // Nothing to show past the end; keep the loaded page but learn the total
                tracing::debug!(page = request.page, total = page.total, "page past the end");
                let shown = self.records_through(self.pager.page(), self.records.len());
                self.pager.set_total_records(page.total.max(shown));
            }
            Ok(page) => {
                tracing::debug!(
                    page = request.page,
                    rows = page.records.len(),
                    total = page.total,
                    "page loaded"
                );
                // The total must cover the rows just received, or the pager
                // would clamp below the page they belong to
                let covered = self.records_through(request.page, page.records.len());
                self.pager.set_total_records(page.total.max(covered));
                self.pager.goto(request.page);
                self.records = page.records;
            }
            Err(e) => {
                tracing::warn!(page = request.page, error = %e, "page fetch failed");
            }
        }
        true
    }

    /// Records up to and including `rows` rows on `page`
    fn records_through(&self, page: usize, rows: usize) -> usize {
        page.saturating_sub(1) * self.pager.page_size() + rows
    }

    /// Page to request for `page`, clamped once the total is known
    pub fn resolve_page(&self, page: usize) -> usize {
        if self.pager.total_records() == 0 {
            page.max(1)
        } else {
            page.clamp(1, self.pager.page_count())
        }
    }

    /// Last page to fall back to after `requested` turned out to lie past
    /// the end of the result set
    pub fn fallback_page(&self, requested: usize) -> Option<usize> {
        let last = self.pager.page_count();
        let on_last = self.pager.page() == last && !self.records.is_empty();
        (self.pager.total_records() > 0 && requested > last && !on_last).then_some(last)
    }

    /// Fetch and show `page`
    ///
    /// A page past the end of the result set lands on the last page instead.
    pub fn load_page(&mut self, page: usize) {
        let page = self.resolve_page(page);
        self.fetch_and_apply(page);
        if let Some(last) = self.fallback_page(page) {
            self.fetch_and_apply(last);
        }
    }

    fn fetch_and_apply(&mut self, page: usize) {
        let request = self.begin_load(page);
        let result = self.fetcher.fetch_page(page, self.pager.page_size());
        self.finish_load(request, result);
    }

    /// Reload whatever page the cursor is on
    pub fn reload(&mut self) {
        self.load_page(self.pager.page());
    }

    // Navigation

    /// Go to the next page, fetching if it changed
    pub fn next_page(&mut self) -> bool {
        let mut pager = self.pager;
        self.navigate(pager.next(), pager.page())
    }

    /// Go to the previous page, fetching if it changed
    pub fn prev_page(&mut self) -> bool {
        let mut pager = self.pager;
        self.navigate(pager.prev(), pager.page())
    }

    /// Go to the first page, fetching if it changed
    pub fn first_page(&mut self) -> bool {
        let mut pager = self.pager;
        self.navigate(pager.first(), pager.page())
    }

    /// Go to the last page, fetching if it changed
    pub fn last_page(&mut self) -> bool {
        let mut pager = self.pager;
        self.navigate(pager.last(), pager.page())
    }

    /// Go to `page` (clamped), fetching if it changed
    pub fn goto_page(&mut self, page: usize) -> bool {
        let mut pager = self.pager;
        self.navigate(pager.goto(page), pager.page())
    }

    /// The pager itself only moves once the fetch succeeds
    fn navigate(&mut self, changed: bool, target: usize) -> bool {
        if changed {
            self.load_page(target);
        }
        changed
    }

    // Selection

    /// Rows of the loaded page with their global positions
    pub fn page_rows(&self) -> Vec<PageRow> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, art)| (art.id, self.pager.global_position(i)))
            .collect()
    }

    /// Ids on the loaded page that render as selected
    pub fn selected_rows(&self) -> Vec<ArtworkId> {
        self.tracker.selected_on_page(&self.page_rows())
    }

    /// Whether the row at `local_index` renders as selected
    pub fn is_row_selected(&self, local_index: usize) -> bool {
        self.records.get(local_index).is_some_and(|art| {
            self.tracker
                .is_selected(art.id, self.pager.global_position(local_index))
        })
    }

    /// Select the first `n` records across all pages
    pub fn select_across_pages(&mut self, n: usize) {
        self.tracker.set_rule(n);
    }

    /// Absorb the grid's full selected set for the loaded page
    pub fn on_selection_change(&mut self, selected_ids: &HashSet<ArtworkId>) {
        let rows = self.page_rows();
        self.tracker.apply_page_selection_edit(&rows, selected_ids);
    }

    /// Flip one row's checkbox, as a click on it would
    ///
    /// Returns false if `local_index` is not on the page.
    pub fn toggle_row(&mut self, local_index: usize) -> bool {
        let Some(id) = self.records.get(local_index).map(|art| art.id) else {
            return false;
        };
        let mut selected: HashSet<ArtworkId> = self.selected_rows().into_iter().collect();
        if !selected.remove(&id) {
            selected.insert(id);
        }
        self.on_selection_change(&selected);
        true
    }

    /// Flip the header checkbox: clear the page if all rows are selected,
    /// otherwise select every row
    pub fn toggle_page(&mut self) {
        let all_selected =
            !self.records.is_empty() && self.selected_rows().len() == self.records.len();
        let selected: HashSet<ArtworkId> = if all_selected {
            HashSet::new()
        } else {
            self.records.iter().map(|art| art.id).collect()
        };
        self.on_selection_change(&selected);
    }

    /// Selected records across the whole result set
    pub fn selected_count(&self) -> usize {
        self.tracker.selected_count(self.total_records())
    }
}
