// Test fixtures - reusable test data
// Provides consistent dates and pickers across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use date_picker_engine::models::settings::PickerSettings;
use date_picker_engine::services::picker::DatePicker;
use date_picker_engine::utils::clock::FixedClock;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday Mar 20, 2024, the pinned "today" for picker tests
    pub fn today() -> NaiveDate {
        ymd(2024, 3, 20)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }

    /// Sep 1, 2024 is a Sunday, so its grid needs six rows
    pub fn sunday_first_of_month() -> NaiveDate {
        ymd(2024, 9, 1)
    }

    /// Feb 2021 starts on Monday; its grid pads a trailing week of March
    pub fn five_row_february() -> NaiveDate {
        ymd(2021, 2, 1)
    }
}

/// Pickers pinned to [`dates::today`]
pub mod pickers {
    use super::*;

    pub fn single() -> DatePicker {
        DatePicker::new(PickerSettings::single())
            .unwrap()
            .with_clock(FixedClock(dates::today()))
    }

    pub fn range() -> DatePicker {
        DatePicker::new(PickerSettings::range())
            .unwrap()
            .with_clock(FixedClock(dates::today()))
    }

    pub fn dual_range() -> DatePicker {
        DatePicker::new(PickerSettings::dual_range())
            .unwrap()
            .with_clock(FixedClock(dates::today()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::today().weekday(), Weekday::Wed);
        assert_eq!(dates::leap_day_2024().day(), 29);
        assert_eq!(dates::sunday_first_of_month().weekday(), Weekday::Sun);
        assert_eq!(dates::five_row_february().weekday(), Weekday::Mon);
    }
}
