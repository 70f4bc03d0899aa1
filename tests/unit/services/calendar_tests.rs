// Visible-month coordination and quick range presets

use test_case::test_case;

use crate::fixtures::{dates, ymd};
use date_picker_engine::models::month_grid::MonthKey;
use date_picker_engine::services::calendar::{DualCalendarCoordinator, QuickRange};

#[test]
fn test_second_calendar_follows_first_across_year_end() {
    let mut calendars = DualCalendarCoordinator::new(MonthKey::new(2024, 11), true);
    assert_eq!(
        calendars.visible_months(),
        vec![MonthKey::new(2024, 11), MonthKey::new(2025, 0)]
    );

    calendars.go_to_next_month();
    assert_eq!(
        calendars.visible_months(),
        vec![MonthKey::new(2025, 0), MonthKey::new(2025, 1)]
    );
}

#[test]
fn test_contains_in_month_ignores_outside_cells() {
    let calendars = DualCalendarCoordinator::new(MonthKey::new(2024, 2), false);
    // Feb 26 is painted in the March grid but belongs to February.
    assert!(!calendars.contains_in_month(ymd(2024, 2, 26)));
    assert!(calendars.contains_in_month(ymd(2024, 3, 31)));
}

#[test]
fn test_toggling_dual_mode_adds_and_drops_second_grid() {
    let mut calendars = DualCalendarCoordinator::for_date(dates::today(), false);
    assert!(calendars.second().is_none());

    calendars.set_dual_mode(true);
    assert!(calendars.is_dual_mode());
    assert_eq!(calendars.second().map(|grid| grid.key), Some(MonthKey::new(2024, 3)));

    calendars.set_dual_mode(false);
    assert_eq!(calendars.visible_months(), vec![MonthKey::new(2024, 2)]);
}

#[test_case(QuickRange::Today, 20, 20 ; "today")]
#[test_case(QuickRange::Yesterday, 19, 19 ; "yesterday")]
#[test_case(QuickRange::Last7Days, 14, 20 ; "last seven days")]
fn test_quick_range_bounds_in_march(range: QuickRange, start: u32, end: u32) {
    assert_eq!(
        range.bounds(dates::today()),
        (ymd(2024, 3, start), ymd(2024, 3, end))
    );
}

#[test]
fn test_last_30_days_crosses_into_february() {
    assert_eq!(
        QuickRange::Last30Days.bounds(dates::today()),
        (ymd(2024, 2, 20), ymd(2024, 3, 20))
    );
}
