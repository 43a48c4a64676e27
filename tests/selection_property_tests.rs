//! Property tests for the selection tracker.

use std::collections::HashSet;

use galleria::{global_position, ArtworkId, PageRow, SelectionTracker};
use proptest::prelude::*;

fn rows(page: usize, page_size: usize) -> Vec<PageRow> {
    let offset = (page - 1) * page_size;
    (0..page_size)
        .map(|i| {
            let pos = global_position(offset, i);
            (pos as ArtworkId, pos)
        })
        .collect()
}

/// Pick an arbitrary subset of the page as the grid's report
fn subset(rows: &[PageRow], mask: &[bool]) -> HashSet<ArtworkId> {
    rows.iter()
        .zip(mask.iter().cycle())
        .filter(|(_, keep)| **keep)
        .map(|(&(id, _), _)| id)
        .collect()
}

proptest! {
    /// Property: right after set_rule, exactly positions <= n are selected
    #[test]
    fn prop_set_rule_selects_prefix(n in 0usize..200, page in 1usize..10) {
        let mut tracker = SelectionTracker::new();
        tracker.set_rule(n);
        prop_assert!(tracker.exceptions().is_empty());
        for (id, pos) in rows(page, 12) {
            prop_assert_eq!(tracker.is_selected(id, pos), pos <= n);
        }
    }

    /// Property: applying the same edit twice equals applying it once
    #[test]
    fn prop_edit_idempotent(
        n in 0usize..50,
        page in 1usize..5,
        mask in proptest::collection::vec(any::<bool>(), 1..12),
    ) {
        let mut tracker = SelectionTracker::new();
        tracker.set_rule(n);
        let page_rows = rows(page, 12);
        let report = subset(&page_rows, &mask);

        tracker.apply_page_selection_edit(&page_rows, &report);
        let once = tracker.exceptions().clone();
        tracker.apply_page_selection_edit(&page_rows, &report);
        prop_assert_eq!(tracker.exceptions(), &once);
    }

    /// Property: after an edit, rule rows render exactly as the grid reported
    #[test]
    fn prop_edit_matches_report_on_rule_rows(
        n in 0usize..50,
        page in 1usize..5,
        mask in proptest::collection::vec(any::<bool>(), 1..12),
    ) {
        let mut tracker = SelectionTracker::new();
        tracker.set_rule(n);
        let page_rows = rows(page, 12);
        let report = subset(&page_rows, &mask);
        tracker.apply_page_selection_edit(&page_rows, &report);

        for &(id, pos) in &page_rows {
            if pos <= n {
                prop_assert_eq!(tracker.is_selected(id, pos), report.contains(&id));
            } else {
                prop_assert!(!tracker.is_selected(id, pos));
            }
        }
    }

    /// Property: exceptions only ever hold rule-governed ids
    #[test]
    fn prop_exceptions_within_rule(
        n in 0usize..50,
        edits in proptest::collection::vec(
            (1usize..5, proptest::collection::vec(any::<bool>(), 1..12)),
            0..8,
        ),
    ) {
        let mut tracker = SelectionTracker::new();
        tracker.set_rule(n);
        for (page, mask) in edits {
            let page_rows = rows(page, 12);
            tracker.apply_page_selection_edit(&page_rows, &subset(&page_rows, &mask));
        }
        for id in tracker.exceptions() {
            // ids equal positions in this generator
            prop_assert!(*id as usize <= n);
        }
        prop_assert!(tracker.selected_count(48) <= n.min(48));
    }

    /// Property: set_rule always starts fresh
    #[test]
    fn prop_set_rule_clears(
        first in 0usize..50,
        second in 0usize..50,
        mask in proptest::collection::vec(any::<bool>(), 1..12),
    ) {
        let mut tracker = SelectionTracker::new();
        tracker.set_rule(first);
        let page_rows = rows(1, 12);
        tracker.apply_page_selection_edit(&page_rows, &subset(&page_rows, &mask));
        tracker.set_rule(second);
        prop_assert!(tracker.exceptions().is_empty());
        prop_assert_eq!(tracker.rule_count(), Some(second));
    }
}
