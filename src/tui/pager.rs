//! Paging cursor for the artwork grid
//!
//! Provides bounded page navigation over a result set whose size is only
//! known once the first page has arrived.

use crate::config::DEFAULT_PAGE_SIZE;
use crate::selection::global_position;

/// Page position within a paginated result set
///
/// Pages are 1-based. Every navigation is clamped to `1..=page_count` and
/// reports whether the page actually changed, so the host knows when to
/// fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Current page (1-based)
    page: usize,
    /// Rows per page
    page_size: usize,
    /// Total number of records across all pages
    total_records: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// Create a pager on page 1 with no known records
    ///
    /// A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_records: 0,
        }
    }

    /// Current page (1-based)
    #[inline]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page
    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total record count
    #[inline]
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Update total record count, re-clamping the current page
    pub fn set_total_records(&mut self, total: usize) {
        self.total_records = total;
        self.page = self.clamp_page(self.page);
    }

    /// Number of pages, at least one
    pub fn page_count(&self) -> usize {
        self.total_records.div_ceil(self.page_size).max(1)
    }

    /// Records preceding the current page
    #[inline]
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// Global 1-based position of a row on the current page
    #[inline]
    pub fn global_position(&self, local_index: usize) -> usize {
        global_position(self.offset(), local_index)
    }

    /// Page holding the record at 0-based offset `first`
    #[inline]
    pub fn page_for_offset(&self, first: usize) -> usize {
        first / self.page_size + 1
    }

    /// 1-based range of record positions shown on the current page
    ///
    /// Returns `None` when the current page holds no records.
    pub fn range(&self) -> Option<(usize, usize)> {
        let start = self.offset() + 1;
        let end = (self.offset() + self.page_size).min(self.total_records);
        (start <= end).then_some((start, end))
    }

    /// Jump to a page, returning whether the page changed
    pub fn goto(&mut self, page: usize) -> bool {
        let target = self.clamp_page(page);
        let changed = target != self.page;
        self.page = target;
        changed
    }

    /// Advance one page
    pub fn next(&mut self) -> bool {
        self.goto(self.page.saturating_add(1))
    }

    /// Go back one page
    pub fn prev(&mut self) -> bool {
        self.goto(self.page.saturating_sub(1))
    }

    /// Jump to the first page
    pub fn first(&mut self) -> bool {
        self.goto(1)
    }

    /// Jump to the last page
    pub fn last(&mut self) -> bool {
        self.goto(self.page_count())
    }

    /// Check if there is a page after the current one
    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Check if there is a page before the current one
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Clamp a page number to valid bounds
    fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.page_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(total: usize) -> Pager {
        let mut p = Pager::new(12);
        p.set_total_records(total);
        p
    }

    #[test]
    fn f_pager_new() {
        let p = Pager::new(12);
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), 12);
        assert_eq!(p.total_records(), 0);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn f_pager_default_page_size() {
        assert_eq!(Pager::default().page_size(), 12);
    }

    #[test]
    fn f_pager_zero_page_size() {
        assert_eq!(Pager::new(0).page_size(), 1);
    }

    #[test]
    fn f_pager_page_count() {
        assert_eq!(pager(0).page_count(), 1);
        assert_eq!(pager(12).page_count(), 1);
        assert_eq!(pager(13).page_count(), 2);
        assert_eq!(pager(129_884).page_count(), 10_824);
    }

    #[test]
    fn f_pager_next() {
        let mut p = pager(100);
        assert!(p.next());
        assert_eq!(p.page(), 2);
        assert_eq!(p.offset(), 12);
    }

    #[test]
    fn f_pager_next_at_end() {
        let mut p = pager(24);
        p.last();
        assert!(!p.next(), "FALSIFIED: Should not pass the last page");
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn f_pager_prev_at_start() {
        let mut p = pager(100);
        assert!(!p.prev(), "FALSIFIED: Should not go below page 1");
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn f_pager_goto_clamps() {
        let mut p = pager(100);
        assert!(p.goto(50));
        assert_eq!(p.page(), 9);
        assert!(p.goto(0));
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn f_pager_goto_same_page() {
        let mut p = pager(100);
        p.goto(3);
        assert!(!p.goto(3));
    }

    #[test]
    fn f_pager_unknown_total_stays_on_first() {
        let mut p = Pager::new(12);
        assert!(!p.next());
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn f_pager_global_position() {
        let mut p = pager(100);
        p.goto(2);
        assert_eq!(p.global_position(0), 13);
        assert_eq!(p.global_position(11), 24);
    }

    #[test]
    fn f_pager_page_for_offset() {
        let p = pager(100);
        assert_eq!(p.page_for_offset(0), 1);
        assert_eq!(p.page_for_offset(12), 2);
        assert_eq!(p.page_for_offset(36), 4);
    }

    #[test]
    fn f_pager_range() {
        let mut p = pager(30);
        assert_eq!(p.range(), Some((1, 12)));
        p.last();
        assert_eq!(p.range(), Some((25, 30)));
        assert_eq!(pager(0).range(), None);
    }

    #[test]
    fn f_pager_shrink_total_reclamps() {
        let mut p = pager(100);
        p.last();
        p.set_total_records(20);
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn f_pager_has_next_prev() {
        let mut p = pager(30);
        assert!(p.has_next());
        assert!(!p.has_prev());
        p.last();
        assert!(!p.has_next());
        assert!(p.has_prev());
    }

    #[test]
    fn f_pager_is_copy() {
        let mut p = pager(100);
        p.next();
        let copied = p;
        assert_eq!(p.page(), copied.page());
    }
}
