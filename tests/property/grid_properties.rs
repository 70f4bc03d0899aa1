// Property-based tests for grid layout and range selection
// Checks the layout and selection invariants over random months and dates

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use date_picker_engine::models::month_grid::{MonthGrid, MonthKey};
use date_picker_engine::models::selection::{
    ReversedRangePolicy, SelectionChange, SelectionMode, SelectionState,
};

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..365 * 20).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2015, 1, 1).unwrap() + Duration::days(offset)
    })
}

proptest! {
    /// Property: every grid is whole weeks, 5 or 6 of them
    #[test]
    fn prop_grid_is_five_or_six_full_weeks(year in 1900..2100i32, month in 0..12i32) {
        let grid = MonthGrid::build(year, month);
        prop_assert!(grid.len() == 35 || grid.len() == 42);
        prop_assert_eq!(grid.len() % 7, 0);
        prop_assert_eq!(grid.days[0].weekday(), Weekday::Mon);

        let needs_six = grid.leading_blanks + grid.days_in_month > 35;
        prop_assert_eq!(grid.len() == 42, needs_six);
    }

    /// Property: cells are strictly consecutive days and cover the month
    #[test]
    fn prop_grid_days_are_consecutive(year in 1900..2100i32, month in 0..12i32) {
        let grid = MonthGrid::build(year, month);
        for pair in grid.days.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }

        let key = MonthKey::new(year, month);
        prop_assert_eq!(grid.date_at(grid.leading_blanks), Some(key.first_day()));
        let in_month = (0..grid.len()).filter(|&index| !grid.is_outside(index)).count();
        prop_assert_eq!(in_month, key.days_in_month() as usize);
    }

    /// Property: next and prev are inverse month transitions
    #[test]
    fn prop_next_prev_roundtrip(year in 1900..2100i32, month in -30..30i32) {
        let key = MonthKey::new(year, month);
        prop_assert_eq!(key.next().prev(), key);
        prop_assert_eq!(key.prev().next(), key);
        prop_assert!(key.month < 12);
    }

    /// Property: a completed range contains its endpoints and nothing outside
    #[test]
    fn prop_range_membership(a in date_strategy(), b in date_strategy(), probe in date_strategy()) {
        let state = SelectionState::from_change(SelectionChange::Range(a, b));
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(state.is_in_range(start, None));
        prop_assert!(state.is_in_range(end, None));
        prop_assert_eq!(state.is_in_range(probe, None), start <= probe && probe <= end);
    }

    /// Property: merge flags only appear strictly inside the range
    #[test]
    fn prop_merge_only_strictly_inside(a in date_strategy(), b in date_strategy(), probe in date_strategy()) {
        let state = SelectionState::from_change(SelectionChange::Range(a, b));
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let grid = MonthGrid::build(probe.year(), probe.month0() as i32);
        let index = grid.position_of(probe).unwrap();

        if state.merge_left(probe, index, None) || state.merge_right(probe, index, None) {
            prop_assert!(start < probe && probe < end);
        }
    }

    /// Property: two picks never produce start > end, whatever the policy
    #[test]
    fn prop_two_picks_keep_order(
        a in date_strategy(),
        b in date_strategy(),
        swap in any::<bool>(),
    ) {
        let policy = if swap { ReversedRangePolicy::Swap } else { ReversedRangePolicy::ReAnchor };
        let state = SelectionState::empty(SelectionMode::Range)
            .select_range_candidate(a, policy)
            .select_range_candidate(b, policy);

        match state.as_change() {
            Some(SelectionChange::Range(start, end)) => prop_assert!(start <= end),
            Some(SelectionChange::Single(_)) => prop_assert!(false, "range state produced a single value"),
            None => prop_assert!(b < a && !swap),
        }
    }

    /// Property: a single pick always replaces the previous one
    #[test]
    fn prop_single_replacement(a in date_strategy(), b in date_strategy()) {
        let first = SelectionState::select_single(a);
        prop_assert!(first.is_selected(a));
        let second = SelectionState::select_single(b);
        prop_assert_eq!(second.as_change(), Some(SelectionChange::Single(b)));
        prop_assert_eq!(second.is_selected(a), a == b);
    }
}
