// Month grid model
// Week-aligned day grid for one month, Monday in column 0

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::utils::date::{add_days, last_day_of_month, normalize_month, weekday_index};

/// Days per grid row.
pub const WEEK_LEN: usize = 7;
/// Cell count of a five-row grid.
pub const FIVE_ROWS: usize = 35;
/// Cell count of a six-row grid.
pub const SIX_ROWS: usize = 42;

/// A calendar month identified by year and 0-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    /// 0 = January .. 11 = December
    pub month: u32,
}

impl MonthKey {
    /// Build a key, carrying out-of-range months into the year.
    ///
    /// # Examples
    /// ```
    /// use date_picker_engine::models::month_grid::MonthKey;
    ///
    /// assert_eq!(MonthKey::new(2024, 12), MonthKey::new(2025, 0));
    /// assert_eq!(MonthKey::new(2024, -1), MonthKey::new(2023, 11));
    /// ```
    pub fn new(year: i32, month: i32) -> Self {
        let (year, month) = normalize_month(year, month);
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        let last = last_day_of_month(self.year, self.month + 1);
        NaiveDate::from_ymd_opt(self.year, self.month + 1, last).unwrap_or(NaiveDate::MAX)
    }

    pub fn days_in_month(&self) -> u32 {
        last_day_of_month(self.year, self.month + 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }

    pub fn offset(&self, months: i32) -> Self {
        Self::new(self.year, self.month as i32 + months)
    }

    pub fn next(&self) -> Self {
        self.offset(1)
    }

    pub fn prev(&self) -> Self {
        self.offset(-1)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day().format("%B %Y"))
    }
}

/// Month after `(year, month)`, 0-based month, wrapping into the next year.
pub fn next_month(year: i32, month: i32) -> (i32, u32) {
    let key = MonthKey::new(year, month).next();
    (key.year, key.month)
}

/// Month before `(year, month)`, 0-based month, wrapping into the previous year.
pub fn prev_month(year: i32, month: i32) -> (i32, u32) {
    let key = MonthKey::new(year, month).prev();
    (key.year, key.month)
}

/// The flattened grid of days rendered for one month.
///
/// `days` starts on the Monday on or before the 1st and runs to the end of the
/// week containing the last day, padded to 35 or 42 cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub key: MonthKey,
    pub days: Vec<NaiveDate>,
    pub leading_blanks: usize,
    pub days_in_month: usize,
}

impl MonthGrid {
    /// Compute the grid for `(year, month)` with a 0-based month.
    ///
    /// # Examples
    /// ```
    /// use date_picker_engine::models::month_grid::MonthGrid;
    ///
    /// // September 2024 starts on a Sunday and needs six rows.
    /// let grid = MonthGrid::build(2024, 8);
    /// assert_eq!(grid.days.len(), 42);
    /// ```
    pub fn build(year: i32, month: i32) -> Self {
        Self::for_key(MonthKey::new(year, month))
    }

    pub fn for_key(key: MonthKey) -> Self {
        let first = key.first_day();
        let leading_blanks = weekday_index(first);
        let days_in_month = key.days_in_month() as usize;

        let needs_six_rows = leading_blanks + days_in_month > FIVE_ROWS;
        let total = if needs_six_rows { SIX_ROWS } else { FIVE_ROWS };

        let grid_start = add_days(first, -(leading_blanks as i64));
        let days = (0..total as i64).map(|offset| add_days(grid_start, offset)).collect();

        Self {
            key,
            days,
            leading_blanks,
            days_in_month,
        }
    }

    pub fn year(&self) -> i32 {
        self.key.year
    }

    pub fn month(&self) -> u32 {
        self.key.month
    }

    pub fn rows(&self) -> usize {
        self.days.len() / WEEK_LEN
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Split the flat list into rows of seven.
    pub fn chunk_into_weeks(&self) -> Vec<&[NaiveDate]> {
        self.days.chunks(WEEK_LEN).collect()
    }

    /// Whether the cell at `index` belongs to a neighbouring month.
    pub fn is_outside(&self, index: usize) -> bool {
        index < self.leading_blanks || index >= self.leading_blanks + self.days_in_month
    }

    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        self.days.get(index).copied()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<NaiveDate> {
        if col >= WEEK_LEN {
            return None;
        }
        self.date_at(row * WEEK_LEN + col)
    }

    /// Grid index of an in-month date.
    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        if !self.key.contains(date) {
            return None;
        }
        Some(self.leading_blanks + date.day0() as usize)
    }

    /// In-month cells as `(index, date)` pairs, in chronological order.
    pub fn in_month_days(&self) -> impl DoubleEndedIterator<Item = (usize, NaiveDate)> + '_ {
        let start = self.leading_blanks;
        let end = start + self.days_in_month;
        self.days[start..end]
            .iter()
            .enumerate()
            .map(move |(offset, date)| (start + offset, *date))
    }
}

/// Row/column of a flat grid index.
pub fn row_col(index: usize) -> (usize, usize) {
    (index / WEEK_LEN, index % WEEK_LEN)
}
