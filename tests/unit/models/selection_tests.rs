// Selection state machine and range painting scenarios

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::fixtures::ymd;
use date_picker_engine::models::hover::HoverPreview;
use date_picker_engine::models::month_grid::MonthGrid;
use date_picker_engine::models::selection::{
    RangePhase, ReversedRangePolicy, SelectionChange, SelectionMode, SelectionState,
};

fn anchored(day: u32) -> SelectionState {
    SelectionState::empty(SelectionMode::Range)
        .select_range_candidate(ymd(2024, 3, day), ReversedRangePolicy::ReAnchor)
}

#[test_case(ReversedRangePolicy::ReAnchor, None ; "re-anchor keeps waiting")]
#[test_case(ReversedRangePolicy::Swap, Some(SelectionChange::Range(
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
)) ; "swap completes")]
fn test_picking_before_the_anchor(policy: ReversedRangePolicy, expected: Option<SelectionChange>) {
    let state = anchored(10).select_range_candidate(ymd(2024, 3, 5), policy);
    assert_eq!(state.as_change(), expected);
    assert_eq!(state.endpoints().0, Some(ymd(2024, 3, 5)));
}

#[test]
fn test_full_range_cycle() {
    let mut state = SelectionState::empty(SelectionMode::Range);
    assert_eq!(state.phase(), Some(RangePhase::Empty));

    state = state.select_range_candidate(ymd(2024, 3, 4), ReversedRangePolicy::ReAnchor);
    assert_eq!(state.phase(), Some(RangePhase::Anchored));

    state = state.select_range_candidate(ymd(2024, 3, 8), ReversedRangePolicy::ReAnchor);
    assert_eq!(
        state.as_change(),
        Some(SelectionChange::Range(ymd(2024, 3, 4), ymd(2024, 3, 8)))
    );

    // A third pick starts over.
    state = state.select_range_candidate(ymd(2024, 3, 20), ReversedRangePolicy::ReAnchor);
    assert_eq!(state.phase(), Some(RangePhase::Anchored));
    assert_eq!(state.endpoints(), (Some(ymd(2024, 3, 20)), None));
}

#[test]
fn test_hover_preview_paints_would_be_range() {
    let state = anchored(12);
    let mut preview = HoverPreview::default();
    preview.on_hover(ymd(2024, 3, 15), &state);

    let painted: Vec<u32> = (1..=31)
        .filter(|&day| state.is_in_range(ymd(2024, 3, day), Some(&preview)))
        .collect();
    assert_eq!(painted, vec![12, 13, 14, 15]);
}

#[test]
fn test_hover_before_anchor_paints_nothing_when_reanchoring() {
    let state = anchored(12);
    let mut preview = HoverPreview::default();
    preview.on_hover(ymd(2024, 3, 9), &state);
    assert!(!state.is_in_range(ymd(2024, 3, 10), Some(&preview)));
    assert_eq!(state.display_range(Some(&preview), ReversedRangePolicy::ReAnchor), None);
    assert_eq!(
        state.display_range(Some(&preview), ReversedRangePolicy::Swap),
        Some((ymd(2024, 3, 9), ymd(2024, 3, 12)))
    );
}

#[test]
fn test_range_band_breaks_at_row_edges() {
    // March 2024: Mar 10 is a Sunday (column 6), Mar 11 a Monday (column 0).
    let grid = MonthGrid::build(2024, 2);
    let state = anchored(8).select_range_candidate(ymd(2024, 3, 13), ReversedRangePolicy::ReAnchor);

    let sunday = ymd(2024, 3, 10);
    let monday = ymd(2024, 3, 11);
    let sunday_index = grid.position_of(sunday).unwrap();
    let monday_index = grid.position_of(monday).unwrap();

    assert!(state.merge_left(sunday, sunday_index, None));
    assert!(!state.merge_right(sunday, sunday_index, None));
    assert!(!state.merge_left(monday, monday_index, None));
    assert!(state.merge_right(monday, monday_index, None));
}

#[test]
fn test_range_band_breaks_at_month_boundary() {
    let grid = MonthGrid::build(2024, 2);
    let state = SelectionState::from_change(SelectionChange::Range(
        ymd(2024, 2, 20),
        ymd(2024, 4, 10),
    ));
    let first = ymd(2024, 3, 1);
    let last = ymd(2024, 3, 31);
    assert!(!state.merge_left(first, grid.position_of(first).unwrap(), None));
    assert!(state.merge_right(first, grid.position_of(first).unwrap(), None));
    assert!(!state.merge_right(last, grid.position_of(last).unwrap(), None));
}

#[test]
fn test_single_selection_replaces_previous_value() {
    let first = SelectionState::select_single(ymd(2024, 3, 1));
    let second = SelectionState::select_single(ymd(2024, 3, 2));
    assert!(first.is_selected(ymd(2024, 3, 1)));
    assert!(!second.is_selected(ymd(2024, 3, 1)));
    assert_eq!(second.as_change(), Some(SelectionChange::Single(ymd(2024, 3, 2))));
}
