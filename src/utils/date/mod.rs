// Date utility functions
// Day-granularity helpers shared by the grid, selection and navigator code

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Column index of a date in a Monday-first week (Monday = 0 .. Sunday = 6).
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Number of days in a month. `month` is 1-based here, matching chrono.
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Split a possibly out-of-range 0-based month into a normalized `(year, month)`.
pub fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    let total = year as i64 * 12 + month as i64;
    let new_year = total.div_euclid(12) as i32;
    let new_month = total.rem_euclid(12) as u32;
    (new_year, new_month)
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// Today's date in the local timezone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
