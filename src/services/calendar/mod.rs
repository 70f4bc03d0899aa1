//! Visible-month coordination.
//!
//! A picker shows one month, or in dual mode two adjacent months. The second
//! grid is always derived from the first and never navigated on its own.

use chrono::NaiveDate;

use crate::models::month_grid::{MonthGrid, MonthKey};
use crate::utils::date::add_days;

pub struct DualCalendarCoordinator {
    dual_mode: bool,
    first: MonthGrid,
    second: Option<MonthGrid>,
}

impl DualCalendarCoordinator {
    pub fn new(month: MonthKey, dual_mode: bool) -> Self {
        let mut coordinator = Self {
            dual_mode,
            first: MonthGrid::for_key(month),
            second: None,
        };
        coordinator.derive_second();
        coordinator
    }

    pub fn for_date(date: NaiveDate, dual_mode: bool) -> Self {
        Self::new(MonthKey::from_date(date), dual_mode)
    }

    fn derive_second(&mut self) {
        self.second = self
            .dual_mode
            .then(|| MonthGrid::for_key(self.first.key.next()));
    }

    pub fn is_dual_mode(&self) -> bool {
        self.dual_mode
    }

    pub fn set_dual_mode(&mut self, dual_mode: bool) {
        self.dual_mode = dual_mode;
        self.derive_second();
    }

    pub fn first(&self) -> &MonthGrid {
        &self.first
    }

    pub fn second(&self) -> Option<&MonthGrid> {
        self.second.as_ref()
    }

    /// Visible grids, left to right.
    pub fn grids(&self) -> impl Iterator<Item = &MonthGrid> {
        std::iter::once(&self.first).chain(self.second.as_ref())
    }

    pub fn visible_months(&self) -> Vec<MonthKey> {
        self.grids().map(|grid| grid.key).collect()
    }

    pub fn grid_for(&self, month: MonthKey) -> Option<&MonthGrid> {
        self.grids().find(|grid| grid.key == month)
    }

    pub fn is_visible_month(&self, month: MonthKey) -> bool {
        self.grid_for(month).is_some()
    }

    /// Whether `date` is an in-month (interactive) day of a visible grid.
    pub fn contains_in_month(&self, date: NaiveDate) -> bool {
        self.is_visible_month(MonthKey::from_date(date))
    }

    pub fn go_to_month(&mut self, month: MonthKey) {
        if self.first.key == month {
            return;
        }
        log::debug!("Calendar moving from {} to {}", self.first.key, month);
        self.first = MonthGrid::for_key(month);
        self.derive_second();
    }

    pub fn go_to_next_month(&mut self) {
        self.go_to_month(self.first.key.next());
    }

    pub fn go_to_prev_month(&mut self) {
        self.go_to_month(self.first.key.prev());
    }

    pub fn go_to_date(&mut self, date: NaiveDate) {
        self.go_to_month(MonthKey::from_date(date));
    }
}

/// Preset ranges offered next to a range picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickRange {
    Today,
    Yesterday,
    Last7Days,
    Last30Days,
}

impl QuickRange {
    pub const ALL: [QuickRange; 4] = [
        QuickRange::Today,
        QuickRange::Yesterday,
        QuickRange::Last7Days,
        QuickRange::Last30Days,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickRange::Today => "Today",
            QuickRange::Yesterday => "Yesterday",
            QuickRange::Last7Days => "Last 7 days",
            QuickRange::Last30Days => "Last 30 days",
        }
    }

    /// `(anchor, end)` relative to `today`; both ends inclusive.
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            QuickRange::Today => (today, today),
            QuickRange::Yesterday => {
                let yesterday = add_days(today, -1);
                (yesterday, yesterday)
            }
            QuickRange::Last7Days => (add_days(today, -6), today),
            QuickRange::Last30Days => (add_days(today, -29), today),
        }
    }
}
