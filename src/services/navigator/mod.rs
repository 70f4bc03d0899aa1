//! Keyboard navigation over the visible month grids.
//!
//! Moves are resolved against grid coordinates. A move that leaves the focused
//! month either lands directly in the neighbouring grid (dual mode) or triggers
//! a month transition and returns a [`PendingFocus`]. The host resolves that
//! descriptor with [`KeyboardGridNavigator::resolve_focus`] once the new grid
//! has been rendered.

use chrono::NaiveDate;

use crate::models::month_grid::{row_col, MonthGrid, MonthKey, WEEK_LEN};
use crate::models::selection::SelectionState;
use crate::models::settings::VerticalFallback;
use crate::services::calendar::DualCalendarCoordinator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Up => -(WEEK_LEN as isize),
            Direction::Down => WEEK_LEN as isize,
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    fn is_forward(self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

/// The grid cell holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusState {
    pub row: usize,
    pub col: usize,
    pub month: MonthKey,
}

impl FocusState {
    pub fn at(month: MonthKey, index: usize) -> Self {
        let (row, col) = row_col(index);
        Self { row, col, month }
    }

    pub fn index(&self) -> usize {
        self.row * WEEK_LEN + self.col
    }
}

/// Platform focus primitive. Hosts without focus semantics use [`NoopFocus`].
#[cfg_attr(test, mockall::automock)]
pub trait FocusSink {
    fn focus(&mut self, cell: &FocusState, date: NaiveDate);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFocus;

impl FocusSink for NoopFocus {
    fn focus(&mut self, _cell: &FocusState, _date: NaiveDate) {}
}

/// Which cell of the destination month receives focus after a month exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackCell {
    FirstEnabled,
    LastEnabled,
    /// Enabled day in weekday column `col`, closest to `preferred_row`
    /// (clamped to the grid's last row).
    SameWeekday { col: usize, preferred_row: usize },
}

/// Focus target that can only be resolved once a month grid is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFocus {
    pub month: MonthKey,
    pub fallback: FallbackCell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOutcome {
    Moved(FocusState),
    Unchanged,
    Pending(PendingFocus),
}

impl FocusOutcome {
    fn from_resolved(resolved: Option<FocusState>) -> Self {
        resolved.map_or(FocusOutcome::Unchanged, FocusOutcome::Moved)
    }
}

#[derive(Debug, Default)]
pub struct KeyboardGridNavigator {
    focus: Option<FocusState>,
    pending: Option<PendingFocus>,
    vertical_fallback: VerticalFallback,
}

impl KeyboardGridNavigator {
    pub fn new(vertical_fallback: VerticalFallback) -> Self {
        Self {
            focus: None,
            pending: None,
            vertical_fallback,
        }
    }

    pub fn focus(&self) -> Option<FocusState> {
        self.focus
    }

    pub fn pending(&self) -> Option<PendingFocus> {
        self.pending
    }

    pub fn reset(&mut self) {
        self.focus = None;
        self.pending = None;
    }

    pub fn focused_date(&self, calendars: &DualCalendarCoordinator) -> Option<NaiveDate> {
        let focus = self.focus?;
        calendars.grid_for(focus.month)?.date_at(focus.index())
    }

    /// Whether the focused cell is on one of the visible grids.
    pub fn has_visible_focus(&self, calendars: &DualCalendarCoordinator) -> bool {
        self.focus
            .is_some_and(|focus| calendars.is_visible_month(focus.month))
    }

    /// Choose the initial focus cell: the committed selection if visible, else
    /// today if visible and enabled, else the first enabled visible day.
    pub fn initialize(
        &mut self,
        calendars: &DualCalendarCoordinator,
        selection: &SelectionState,
        today: NaiveDate,
        is_disabled: &dyn Fn(NaiveDate) -> bool,
        sink: &mut dyn FocusSink,
    ) -> Option<FocusState> {
        self.pending = None;

        let (first, second) = selection.endpoints();
        let selected = [first, second]
            .into_iter()
            .flatten()
            .find(|date| calendars.contains_in_month(*date));
        let today = Some(today)
            .filter(|date| calendars.contains_in_month(*date) && !is_disabled(*date));

        let target = selected.or(today).or_else(|| {
            calendars.grids().find_map(|grid| {
                first_enabled(grid, is_disabled).and_then(|index| grid.date_at(index))
            })
        });

        let Some(date) = target else {
            log::debug!("No enabled day visible; keyboard focus left unset");
            self.focus = None;
            return None;
        };

        let month = MonthKey::from_date(date);
        let grid = calendars.grid_for(month)?;
        let focus = FocusState::at(month, grid.position_of(date)?);
        self.commit(focus, date, sink);
        Some(focus)
    }

    /// Focus a specific in-month, enabled date of a visible grid (pointer
    /// click or tab traversal). Cancels any pending focus.
    pub fn focus_date(
        &mut self,
        date: NaiveDate,
        calendars: &DualCalendarCoordinator,
        is_disabled: &dyn Fn(NaiveDate) -> bool,
        sink: &mut dyn FocusSink,
    ) -> Option<FocusState> {
        if is_disabled(date) {
            return None;
        }
        let month = MonthKey::from_date(date);
        let grid = calendars.grid_for(month)?;
        let focus = FocusState::at(month, grid.position_of(date)?);
        self.pending = None;
        self.commit(focus, date, sink);
        Some(focus)
    }

    /// Move focus one cell in `direction`.
    ///
    /// A disabled neighbour inside the month stops the move. Leaving the month
    /// hands over to the fallback search in the destination month.
    pub fn move_focus(
        &mut self,
        direction: Direction,
        calendars: &mut DualCalendarCoordinator,
        is_disabled: &dyn Fn(NaiveDate) -> bool,
        sink: &mut dyn FocusSink,
    ) -> FocusOutcome {
        let Some(current) = self.focus else {
            return FocusOutcome::Unchanged;
        };
        let Some(grid) = calendars.grid_for(current.month) else {
            return FocusOutcome::Unchanged;
        };

        let target = current.index() as isize + direction.step();
        let leaves_month =
            target < 0 || target >= grid.len() as isize || grid.is_outside(target as usize);
        if leaves_month {
            return self.exit_month(direction, current, calendars, is_disabled, sink);
        }

        let target = target as usize;
        let date = grid.days[target];
        if is_disabled(date) {
            return FocusOutcome::Unchanged;
        }

        let next = FocusState::at(current.month, target);
        self.commit(next, date, sink);
        FocusOutcome::Moved(next)
    }

    fn exit_month(
        &mut self,
        direction: Direction,
        current: FocusState,
        calendars: &mut DualCalendarCoordinator,
        is_disabled: &dyn Fn(NaiveDate) -> bool,
        sink: &mut dyn FocusSink,
    ) -> FocusOutcome {
        let forward = direction.is_forward();
        let destination = if forward {
            current.month.next()
        } else {
            current.month.prev()
        };
        let fallback = match direction {
            Direction::Right => FallbackCell::FirstEnabled,
            Direction::Left => FallbackCell::LastEnabled,
            Direction::Down => FallbackCell::SameWeekday {
                col: current.col,
                preferred_row: 0,
            },
            Direction::Up => FallbackCell::SameWeekday {
                col: current.col,
                preferred_row: usize::MAX,
            },
        };
        let pending = PendingFocus {
            month: destination,
            fallback,
        };

        // The neighbouring grid is already on screen in dual mode.
        if calendars.is_visible_month(destination) {
            return FocusOutcome::from_resolved(self.resolve_focus(pending, calendars, is_disabled, sink));
        }

        if forward {
            calendars.go_to_next_month();
        } else {
            calendars.go_to_prev_month();
        }
        log::debug!("Focus leaving {} for {}; resolution deferred", current.month, destination);
        self.pending = Some(pending);
        FocusOutcome::Pending(pending)
    }

    /// Focus the first enabled day of the focused month.
    pub fn jump_to_home(
        &mut self,
        calendars: &DualCalendarCoordinator,
        is_disabled: &dyn Fn(NaiveDate) -> bool,
        sink: &mut dyn FocusSink,
    ) -> FocusOutcome {
        self.jump_within_month(FallbackCell::FirstEnabled, calendars, is_disabled, sink)
    }

    /// Focus the last enabled day of the focused month.
    pub fn jump_to_end(
        &mut self,
        calendars: &DualCalendarCoordinator,
        is_disabled: &dyn Fn(NaiveDate) -> bool,
        sink: &mut dyn FocusSink,
    ) -> FocusOutcome {
        self.jump_within_month(FallbackCell::LastEnabled, calendars, is_disabled, sink)
    }

    fn jump_within_month(
        &mut self,
        fallback: FallbackCell,
        calendars: &DualCalendarCoordinator,
        is_disabled: &dyn Fn(NaiveDate) -> bool,
        sink: &mut dyn FocusSink,
    ) -> FocusOutcome {
        let month = match self.focus {
            Some(focus) if calendars.is_visible_month(focus.month) => focus.month,
            _ => calendars.first().key,
        };
        let pending = PendingFocus { month, fallback };
        FocusOutcome::from_resolved(self.resolve_focus(pending, calendars, is_disabled, sink))
    }

    pub fn page_up(&mut self, calendars: &mut DualCalendarCoordinator) -> FocusOutcome {
        self.page(false, calendars)
    }

    pub fn page_down(&mut self, calendars: &mut DualCalendarCoordinator) -> FocusOutcome {
        self.page(true, calendars)
    }

    /// Shift the visible months by one and defer focus to the same weekday
    /// (and, where possible, the same row) in the destination month.
    fn page(&mut self, forward: bool, calendars: &mut DualCalendarCoordinator) -> FocusOutcome {
        let pending = match self.focus {
            Some(focus) if calendars.is_visible_month(focus.month) => PendingFocus {
                month: if forward {
                    focus.month.next()
                } else {
                    focus.month.prev()
                },
                fallback: FallbackCell::SameWeekday {
                    col: focus.col,
                    preferred_row: focus.row,
                },
            },
            _ => PendingFocus {
                month: if forward {
                    calendars.first().key.next()
                } else {
                    calendars.first().key.prev()
                },
                fallback: FallbackCell::FirstEnabled,
            },
        };

        if forward {
            calendars.go_to_next_month();
        } else {
            calendars.go_to_prev_month();
        }
        self.pending = Some(pending);
        FocusOutcome::Pending(pending)
    }

    /// Second phase of a month transition: place focus in the materialized grid.
    ///
    /// Leaves focus unchanged when the month is not visible or has no
    /// candidate cell.
    pub fn resolve_focus(
        &mut self,
        pending: PendingFocus,
        calendars: &DualCalendarCoordinator,
        is_disabled: &dyn Fn(NaiveDate) -> bool,
        sink: &mut dyn FocusSink,
    ) -> Option<FocusState> {
        if self.pending == Some(pending) {
            self.pending = None;
        }

        let grid = calendars.grid_for(pending.month)?;
        let Some(index) = find_fallback(grid, pending.fallback, is_disabled, self.vertical_fallback)
        else {
            log::debug!("No fallback cell in {} for {:?}", pending.month, pending.fallback);
            return None;
        };

        let focus = FocusState::at(pending.month, index);
        self.commit(focus, grid.days[index], sink);
        Some(focus)
    }

    /// Resolve the stored pending focus, if any.
    pub fn resolve_pending(
        &mut self,
        calendars: &DualCalendarCoordinator,
        is_disabled: &dyn Fn(NaiveDate) -> bool,
        sink: &mut dyn FocusSink,
    ) -> Option<FocusState> {
        let pending = self.pending.take()?;
        self.resolve_focus(pending, calendars, is_disabled, sink)
    }

    /// The focused date, if it may be committed as a selection.
    pub fn activate_focused(
        &self,
        calendars: &DualCalendarCoordinator,
        is_disabled: &dyn Fn(NaiveDate) -> bool,
    ) -> Option<NaiveDate> {
        self.focused_date(calendars).filter(|date| !is_disabled(*date))
    }

    fn commit(&mut self, focus: FocusState, date: NaiveDate, sink: &mut dyn FocusSink) {
        log::trace!("Focus -> {} (row {}, col {})", date, focus.row, focus.col);
        self.focus = Some(focus);
        sink.focus(&focus, date);
    }
}

fn first_enabled(grid: &MonthGrid, is_disabled: &dyn Fn(NaiveDate) -> bool) -> Option<usize> {
    grid.in_month_days()
        .find(|(_, date)| !is_disabled(*date))
        .map(|(index, _)| index)
}

fn last_enabled(grid: &MonthGrid, is_disabled: &dyn Fn(NaiveDate) -> bool) -> Option<usize> {
    grid.in_month_days()
        .rev()
        .find(|(_, date)| !is_disabled(*date))
        .map(|(index, _)| index)
}

fn find_fallback(
    grid: &MonthGrid,
    fallback: FallbackCell,
    is_disabled: &dyn Fn(NaiveDate) -> bool,
    vertical: VerticalFallback,
) -> Option<usize> {
    match fallback {
        FallbackCell::FirstEnabled => first_enabled(grid, is_disabled),
        FallbackCell::LastEnabled => last_enabled(grid, is_disabled),
        FallbackCell::SameWeekday { col, preferred_row } => {
            let preferred_row = preferred_row.min(grid.rows().saturating_sub(1));
            let enabled = || {
                grid.in_month_days()
                    .filter(|(_, date)| !is_disabled(*date))
                    .map(|(index, _)| index)
            };

            let same_column = enabled()
                .filter(|index| index % WEEK_LEN == col)
                .min_by_key(|index| (index / WEEK_LEN).abs_diff(preferred_row));

            match (same_column, vertical) {
                (Some(index), _) => Some(index),
                (None, VerticalFallback::SameColumn) => None,
                (None, VerticalFallback::Nearest) => {
                    let anchor = preferred_row * WEEK_LEN + col;
                    enabled().min_by_key(|index| index.abs_diff(anchor))
                }
            }
        }
    }
}
