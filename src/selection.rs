//! Cross-page selection tracking
//!
//! A "select the first N records" rule plus a set of per-record
//! exceptions. A record's effective state is the rule's verdict XOR its
//! membership in the exception set, so the tracker can answer for any page
//! without having seen the others.

use std::collections::{HashMap, HashSet};

use crate::artwork::ArtworkId;

/// A row of the loaded page: its identifier and 1-based global position.
pub type PageRow = (ArtworkId, usize);

/// Global 1-based position of a row on a page starting at `page_offset`
#[inline]
pub fn global_position(page_offset: usize, local_index: usize) -> usize {
    page_offset + local_index + 1
}

/// Selection rule state for a browsing session
///
/// # Example
///
/// ```
/// use std::collections::{HashMap, HashSet};
/// use galleria::SelectionTracker;
///
/// let mut tracker = SelectionTracker::new();
/// tracker.set_rule(2);
///
/// let rows = [(10, 1), (11, 2), (12, 3)];
/// let still_selected: HashSet<u64> = [11].into_iter().collect();
/// tracker.apply_page_selection_edit(&rows, &still_selected);
///
/// assert!(!tracker.is_selected(10, 1));
/// assert!(tracker.is_selected(11, 2));
/// assert!(!tracker.is_selected(12, 3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    /// First N records in global order are selected when set
    rule_count: Option<usize>,
    /// Records whose state is the inverse of the rule's
    exceptions: HashSet<ArtworkId>,
    /// Global position each exception was recorded at
    exception_positions: HashMap<ArtworkId, usize>,
}

impl SelectionTracker {
    /// Create a tracker with no active rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rule count, if a rule is active
    #[inline]
    pub fn rule_count(&self) -> Option<usize> {
        self.rule_count
    }

    /// Current override set
    #[inline]
    pub fn exceptions(&self) -> &HashSet<ArtworkId> {
        &self.exceptions
    }

    /// Replace the rule and forget every override
    pub fn set_rule(&mut self, n: usize) {
        tracing::info!(count = n, dropped = self.exceptions.len(), "selection rule set");
        self.rule_count = Some(n);
        self.exceptions.clear();
        self.exception_positions.clear();
    }

    /// Whether the active rule covers `position`
    #[inline]
    pub fn rule_active(&self, position: usize) -> bool {
        self.rule_count.is_some_and(|n| position <= n)
    }

    /// Effective selection state of a record
    #[inline]
    pub fn is_selected(&self, id: ArtworkId, position: usize) -> bool {
        self.rule_active(position) ^ self.exceptions.contains(&id)
    }

    /// Absorb the grid's complete selected set for the loaded page
    ///
    /// Only rows under the rule take part: a rule row missing from
    /// `selected_ids` becomes an exception, a rule row present in it stops
    /// being one. Rows outside the rule are left alone, so checking one of
    /// them does not persist.
    pub fn apply_page_selection_edit(
        &mut self,
        page_rows: &[PageRow],
        selected_ids: &HashSet<ArtworkId>,
    ) {
        for &(id, position) in page_rows {
            if !self.rule_active(position) {
                continue;
            }
            if selected_ids.contains(&id) {
                self.exceptions.remove(&id);
                self.exception_positions.remove(&id);
            } else {
                self.exceptions.insert(id);
                self.exception_positions.insert(id, position);
            }
        }
    }

    /// Ids of the page rows that render as selected, in page order
    pub fn selected_on_page(&self, page_rows: &[PageRow]) -> Vec<ArtworkId> {
        page_rows
            .iter()
            .filter(|&&(id, position)| self.is_selected(id, position))
            .map(|&(id, _)| id)
            .collect()
    }

    /// Number of selected records in a result set of `total` records
    ///
    /// Exceptions can only come from rule rows, so each one subtracts one
    /// record from the rule's span. Exceptions recorded beyond `total` (the
    /// result set shrank afterwards) are outside the span and not counted.
    pub fn selected_count(&self, total: usize) -> usize {
        let Some(n) = self.rule_count else {
            return 0;
        };
        let span = n.min(total);
        let in_span = self
            .exception_positions
            .values()
            .filter(|&&position| position <= span)
            .count();
        span.saturating_sub(in_span)
    }
}
