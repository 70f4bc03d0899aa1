// Month grid layout scenarios

use chrono::{Datelike, Weekday};
use test_case::test_case;

use crate::fixtures::{dates, ymd};
use date_picker_engine::models::month_grid::{row_col, MonthGrid, MonthKey};

#[test_case(2024, 2, 35 ; "march 2024 exactly fills five rows")]
#[test_case(2024, 11, 42 ; "december 2024 starts sunday")]
#[test_case(2024, 8, 42 ; "september 2024 starts sunday")]
#[test_case(2021, 1, 35 ; "february 2021 starts monday")]
#[test_case(2024, 1, 35 ; "leap february 2024")]
#[test_case(2025, 11, 35 ; "december 2025")]
fn test_grid_cell_count(year: i32, month: i32, expected: usize) {
    let grid = MonthGrid::build(year, month);
    assert_eq!(grid.len(), expected);
    assert_eq!(grid.rows() * 7, expected);
}

#[test]
fn test_grid_always_starts_on_monday() {
    for month in 0..12 {
        let grid = MonthGrid::build(2024, month);
        assert_eq!(grid.days[0].weekday(), Weekday::Mon, "month {}", month);
        assert_eq!(grid.days[grid.len() - 1].weekday(), Weekday::Sun, "month {}", month);
    }
}

#[test]
fn test_sunday_first_has_six_leading_cells() {
    let grid = MonthGrid::for_key(MonthKey::from_date(dates::sunday_first_of_month()));
    assert_eq!(grid.leading_blanks, 6);
    assert!(grid.is_outside(5));
    assert!(!grid.is_outside(6));
    assert_eq!(grid.date_at(6), Some(dates::sunday_first_of_month()));
}

#[test]
fn test_monday_first_has_no_leading_cells() {
    let grid = MonthGrid::for_key(MonthKey::from_date(dates::five_row_february()));
    assert_eq!(grid.leading_blanks, 0);
    assert_eq!(grid.days[0], ymd(2021, 2, 1));
    // Trailing week is March, outside the month.
    assert!(grid.is_outside(28));
    assert_eq!(grid.days[34], ymd(2021, 3, 7));
}

#[test]
fn test_leap_day_position() {
    let grid = MonthGrid::for_key(MonthKey::from_date(dates::leap_day_2024()));
    let index = grid.position_of(dates::leap_day_2024()).unwrap();
    // Feb 1 2024 is a Thursday, so Feb 29 is also a Thursday.
    assert_eq!(row_col(index), (4, 3));
    assert_eq!(grid.days_in_month, 29);
}

#[test]
fn test_month_key_wraps_across_years() {
    assert_eq!(MonthKey::new(2024, 12), MonthKey::new(2025, 0));
    assert_eq!(MonthKey::new(2024, -1), MonthKey::new(2023, 11));
    assert_eq!(MonthKey::new(2024, 11).next(), MonthKey::new(2025, 0));
    assert_eq!(MonthKey::new(2025, 0).prev(), MonthKey::new(2024, 11));
}

#[test]
fn test_in_month_days_reverse_ends_on_last_day() {
    let grid = MonthGrid::build(2024, 2);
    let (index, last) = grid.in_month_days().next_back().unwrap();
    assert_eq!(last, ymd(2024, 3, 31));
    assert_eq!(row_col(index), (4, 6));
}
