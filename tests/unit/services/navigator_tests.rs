// Keyboard navigation scenarios driven through the public navigator API

use chrono::{Datelike, NaiveDate, Weekday};

use crate::fixtures::ymd;
use date_picker_engine::models::month_grid::MonthKey;
use date_picker_engine::models::selection::SelectionState;
use date_picker_engine::services::calendar::DualCalendarCoordinator;
use date_picker_engine::services::navigator::{
    Direction, FallbackCell, FocusOutcome, FocusSink, FocusState, KeyboardGridNavigator,
    NoopFocus, PendingFocus,
};

/// Records every platform focus request.
#[derive(Default)]
struct RecordingSink {
    focused: Vec<NaiveDate>,
}

impl FocusSink for RecordingSink {
    fn focus(&mut self, _cell: &FocusState, date: NaiveDate) {
        self.focused.push(date);
    }
}

fn never(_: NaiveDate) -> bool {
    false
}

fn focused_on(calendars: &DualCalendarCoordinator, date: NaiveDate) -> KeyboardGridNavigator {
    let mut navigator = KeyboardGridNavigator::default();
    navigator.initialize(
        calendars,
        &SelectionState::select_single(date),
        date,
        &never,
        &mut NoopFocus,
    );
    navigator
}

#[test]
fn test_platform_focus_is_deferred_until_resolution() {
    let mut calendars = DualCalendarCoordinator::new(MonthKey::new(2024, 0), false);
    let mut navigator = focused_on(&calendars, ymd(2024, 1, 31));
    let mut sink = RecordingSink::default();

    let outcome = navigator.move_focus(Direction::Right, &mut calendars, &never, &mut sink);
    assert!(matches!(outcome, FocusOutcome::Pending(_)));
    assert!(sink.focused.is_empty(), "no focus call before the grid exists");

    navigator.resolve_pending(&calendars, &never, &mut sink);
    assert_eq!(sink.focused, vec![ymd(2024, 2, 1)]);
}

#[test]
fn test_walking_right_through_a_year_boundary() {
    let mut calendars = DualCalendarCoordinator::new(MonthKey::new(2024, 11), false);
    let mut navigator = focused_on(&calendars, ymd(2024, 12, 30));

    for _ in 0..3 {
        if let FocusOutcome::Pending(_) =
            navigator.move_focus(Direction::Right, &mut calendars, &never, &mut NoopFocus)
        {
            navigator.resolve_pending(&calendars, &never, &mut NoopFocus);
        }
    }
    assert_eq!(calendars.first().key, MonthKey::new(2025, 0));
    assert_eq!(navigator.focused_date(&calendars), Some(ymd(2025, 1, 2)));
}

#[test]
fn test_up_lands_on_bottom_most_matching_weekday() {
    // Monday 2 Sep 2024 sits in row 1; the previous row is August's tail.
    let mut calendars = DualCalendarCoordinator::new(MonthKey::new(2024, 8), false);
    let mut navigator = focused_on(&calendars, ymd(2024, 9, 2));

    navigator.move_focus(Direction::Up, &mut calendars, &never, &mut NoopFocus);
    navigator.resolve_pending(&calendars, &never, &mut NoopFocus);
    assert_eq!(navigator.focused_date(&calendars), Some(ymd(2024, 8, 26)));
}

#[test]
fn test_resolve_focus_with_explicit_descriptor() {
    let calendars = DualCalendarCoordinator::new(MonthKey::new(2024, 2), false);
    let mut navigator = KeyboardGridNavigator::default();
    let weekends = |date: NaiveDate| matches!(date.weekday(), Weekday::Sat | Weekday::Sun);

    let pending = PendingFocus {
        month: MonthKey::new(2024, 2),
        fallback: FallbackCell::LastEnabled,
    };
    navigator.resolve_focus(pending, &calendars, &weekends, &mut NoopFocus);
    // Mar 30-31 2024 are a weekend.
    assert_eq!(navigator.focused_date(&calendars), Some(ymd(2024, 3, 29)));

    let hidden = PendingFocus {
        month: MonthKey::new(2024, 5),
        fallback: FallbackCell::FirstEnabled,
    };
    assert_eq!(navigator.resolve_focus(hidden, &calendars, &never, &mut NoopFocus), None);
    assert_eq!(navigator.focused_date(&calendars), Some(ymd(2024, 3, 29)));
}

#[test]
fn test_activate_refuses_disabled_focus() {
    let calendars = DualCalendarCoordinator::new(MonthKey::new(2024, 2), false);
    let navigator = focused_on(&calendars, ymd(2024, 3, 12));
    assert_eq!(navigator.activate_focused(&calendars, &never), Some(ymd(2024, 3, 12)));

    let now_disabled = |date: NaiveDate| date == ymd(2024, 3, 12);
    assert_eq!(navigator.activate_focused(&calendars, &now_disabled), None);
}
