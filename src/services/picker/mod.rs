//! Date picker facade.
//!
//! Owns one instance of every picker component and is the only place where
//! selection is committed. Renderers read [`DayCell`] annotations and forward
//! pointer and key input back here.

use chrono::NaiveDate;

use crate::models::hover::HoverPreview;
use crate::models::month_grid::{MonthGrid, MonthKey, WEEK_LEN};
use crate::models::selection::{RangePhase, SelectionChange, SelectionMode, SelectionState};
use crate::models::settings::{PickerSettings, SettingsError};
use crate::services::calendar::{DualCalendarCoordinator, QuickRange};
use crate::services::navigator::{
    Direction, FocusOutcome, FocusSink, FocusState, KeyboardGridNavigator, NoopFocus,
};
use crate::utils::clock::{Clock, SystemClock};

pub type DisabledFilter = Box<dyn Fn(NaiveDate) -> bool>;
pub type ChangeListener = Box<dyn FnMut(&SelectionChange)>;

/// Keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Home,
    End,
    PageUp,
    PageDown,
    Escape,
}

/// Display predicates for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub index: usize,
    /// Belongs to a neighbouring month; never interactive.
    pub outside: bool,
    /// Outside cell that should not be painted at all.
    pub hidden: bool,
    pub today: bool,
    pub disabled: bool,
    pub focused: bool,
    pub selected: bool,
    pub in_range: bool,
    pub range_start: bool,
    pub range_end: bool,
    pub merge_left: bool,
    pub merge_right: bool,
}

impl DayCell {
    pub fn is_interactive(&self) -> bool {
        !self.outside && !self.disabled
    }
}

/// Single source of truth for "may this date be picked".
struct SelectableGuard {
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    filter: Option<DisabledFilter>,
}

impl SelectableGuard {
    fn is_selectable(&self, date: NaiveDate) -> bool {
        let within_bounds = self.min_date.map_or(true, |min| date >= min)
            && self.max_date.map_or(true, |max| date <= max);
        within_bounds && !self.filter.as_ref().is_some_and(|disabled| disabled(date))
    }
}

pub struct DatePicker {
    settings: PickerSettings,
    guard: SelectableGuard,
    /// Working selection; in dual mode it may be ahead of `committed`.
    selection: SelectionState,
    /// Last value reported to the listener (or pushed in via `set_value`).
    committed: SelectionState,
    hover: HoverPreview,
    calendars: DualCalendarCoordinator,
    navigator: KeyboardGridNavigator,
    clock: Box<dyn Clock>,
    on_change: Option<ChangeListener>,
    is_open: bool,
}

impl Default for DatePicker {
    /// Single-date picker with default settings.
    fn default() -> Self {
        Self::from_valid_settings(PickerSettings::default())
    }
}

impl DatePicker {
    /// Create a picker showing the current month.
    ///
    /// # Examples
    /// ```
    /// use date_picker_engine::models::settings::PickerSettings;
    /// use date_picker_engine::services::picker::DatePicker;
    ///
    /// let picker = DatePicker::new(PickerSettings::range()).unwrap();
    /// assert!(picker.selection().phase().is_some());
    /// ```
    pub fn new(settings: PickerSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::from_valid_settings(settings))
    }

    fn from_valid_settings(settings: PickerSettings) -> Self {
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        let today = clock.today();
        let empty = SelectionState::empty(settings.mode);

        Self {
            guard: SelectableGuard {
                min_date: settings.min_date,
                max_date: settings.max_date,
                filter: None,
            },
            selection: empty,
            committed: empty,
            hover: HoverPreview::default(),
            calendars: DualCalendarCoordinator::for_date(today, settings.dual_mode),
            navigator: KeyboardGridNavigator::new(settings.vertical_fallback),
            clock,
            on_change: None,
            is_open: false,
            settings,
        }
    }

    /// Replace the clock and move the calendars to its "today".
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        let anchor = self.display_anchor();
        self.calendars.go_to_date(anchor);
        self
    }

    pub fn with_disabled_filter(mut self, filter: impl Fn(NaiveDate) -> bool + 'static) -> Self {
        self.guard.filter = Some(Box::new(filter));
        self
    }

    pub fn on_change(mut self, listener: impl FnMut(&SelectionChange) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    /// Initial (uncontrolled) value. Does not notify the listener.
    pub fn with_default_value(mut self, value: SelectionChange) -> Self {
        self.set_value(value);
        let anchor = self.display_anchor();
        self.calendars.go_to_date(anchor);
        self
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn committed(&self) -> &SelectionState {
        &self.committed
    }

    pub fn hover_preview(&self) -> &HoverPreview {
        &self.hover
    }

    pub fn calendars(&self) -> &DualCalendarCoordinator {
        &self.calendars
    }

    pub fn focus(&self) -> Option<FocusState> {
        self.navigator.focus()
    }

    pub fn focused_date(&self) -> Option<NaiveDate> {
        self.navigator.focused_date(&self.calendars)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Whether `date` passes the disabled filter and the configured bounds.
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        self.guard.is_selectable(date)
    }

    /// Whether the working selection differs from what was last reported.
    pub fn has_unsaved_changes(&self) -> bool {
        self.selection != self.committed
    }

    fn display_anchor(&self) -> NaiveDate {
        self.selection.endpoints().0.unwrap_or_else(|| self.clock.today())
    }

    /// Controlled value pushed in by the host. Does not notify the listener.
    pub fn set_value(&mut self, value: SelectionChange) {
        let state = SelectionState::from_change(value);
        if state.mode() != self.settings.mode {
            log::warn!(
                "Ignoring {:?} value for a {:?} picker",
                state.mode(),
                self.settings.mode
            );
            return;
        }
        self.selection = state;
        self.committed = state;
        self.hover.on_leave();
    }

    /// Commit a picked date through the path for the current mode.
    ///
    /// Returns `false` without changing anything when the date is not selectable.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if !self.is_selectable(date) {
            log::debug!("Rejected selection of unavailable date {}", date);
            return false;
        }

        self.hover.on_leave();
        match self.settings.mode {
            SelectionMode::Single => {
                self.selection = SelectionState::select_single(date);
                self.commit();
            }
            SelectionMode::Range => {
                self.selection = self
                    .selection
                    .select_range_candidate(date, self.settings.reversed_range);
                let complete = self.selection.phase() == Some(RangePhase::Complete);
                if complete && !self.settings.dual_mode {
                    self.commit();
                }
            }
        }
        true
    }

    /// Report the working selection upstream (dual mode "save").
    ///
    /// Returns `true` when the listener was notified.
    pub fn save(&mut self) -> bool {
        if !self.has_unsaved_changes() || self.selection.as_change().is_none() {
            return false;
        }
        self.commit();
        true
    }

    fn commit(&mut self) {
        self.committed = self.selection;
        let Some(change) = self.selection.as_change() else {
            return;
        };
        log::info!("Selection changed: {:?}", change);
        if let Some(listener) = self.on_change.as_mut() {
            listener(&change);
        }
    }

    pub fn clear(&mut self) {
        self.selection = SelectionState::empty(self.settings.mode);
        self.hover.on_leave();
    }

    /// Drop an anchored range; a complete range is left alone.
    pub fn cancel_range(&mut self) {
        if self.selection.is_anchored() {
            self.selection = SelectionState::empty(SelectionMode::Range);
        }
        self.hover.on_leave();
    }

    pub fn hover(&mut self, date: NaiveDate) {
        if self.is_selectable(date) && self.calendars.contains_in_month(date) {
            self.hover.on_hover(date, &self.selection);
        }
    }

    pub fn leave(&mut self) {
        self.hover.on_leave();
    }

    /// Fresh interaction session: hover and focus reset, focus seeded.
    pub fn open(&mut self) {
        self.is_open = true;
        self.hover.on_leave();
        self.navigator.reset();
        let anchor = self.display_anchor();
        self.calendars.go_to_date(anchor);
        self.initialize_focus(&mut NoopFocus);
    }

    /// End the session; unsaved dual-mode changes are discarded silently.
    pub fn close(&mut self) {
        if self.settings.dual_mode && self.has_unsaved_changes() {
            log::debug!("Discarding unsaved range selection");
            self.selection = self.committed;
        }
        self.is_open = false;
        self.hover.on_leave();
        self.navigator.reset();
    }

    pub fn initialize_focus(&mut self, sink: &mut dyn FocusSink) -> Option<FocusState> {
        let today = self.clock.today();
        let guard = &self.guard;
        let is_disabled = |date: NaiveDate| !guard.is_selectable(date);
        self.navigator
            .initialize(&self.calendars, &self.selection, today, &is_disabled, sink)
    }

    /// Move keyboard focus to `date` (e.g. after a pointer click).
    pub fn focus_date(&mut self, date: NaiveDate, sink: &mut dyn FocusSink) -> Option<FocusState> {
        let guard = &self.guard;
        let is_disabled = |date: NaiveDate| !guard.is_selectable(date);
        self.navigator
            .focus_date(date, &self.calendars, &is_disabled, sink)
    }

    pub fn go_to_next_month(&mut self) {
        self.calendars.go_to_next_month();
        self.forget_hidden_focus();
    }

    pub fn go_to_prev_month(&mut self) {
        self.calendars.go_to_prev_month();
        self.forget_hidden_focus();
    }

    pub fn go_to_date(&mut self, date: NaiveDate) {
        self.calendars.go_to_date(date);
        self.forget_hidden_focus();
    }

    fn forget_hidden_focus(&mut self) {
        if self.navigator.pending().is_none() && !self.navigator.has_visible_focus(&self.calendars) {
            self.navigator.reset();
        }
    }

    /// Select a preset range: anchor, then end, then show the anchor's month.
    pub fn apply_quick_range(&mut self, range: QuickRange) -> bool {
        if self.settings.mode != SelectionMode::Range {
            return false;
        }
        let (anchor, end) = range.bounds(self.clock.today());
        if !self.is_selectable(anchor) || !self.is_selectable(end) {
            log::debug!("Quick range {:?} touches unavailable dates", range);
            return false;
        }

        self.selection = SelectionState::empty(SelectionMode::Range);
        self.select_date(anchor);
        self.select_date(end);
        self.go_to_date(anchor);
        true
    }

    /// Dispatch a key press.
    ///
    /// Without a visible focus cell the first key only seeds focus.
    pub fn handle_key(&mut self, key: PickerKey, sink: &mut dyn FocusSink) -> FocusOutcome {
        if self.navigator.pending().is_some() {
            self.resolve_pending_focus(sink);
        }

        if key == PickerKey::Escape {
            self.cancel_range();
            return FocusOutcome::Unchanged;
        }

        if !self.navigator.has_visible_focus(&self.calendars) {
            return match self.initialize_focus(sink) {
                Some(focus) => FocusOutcome::Moved(focus),
                None => FocusOutcome::Unchanged,
            };
        }

        let guard = &self.guard;
        let is_disabled = |date: NaiveDate| !guard.is_selectable(date);
        let outcome = match key {
            PickerKey::ArrowUp
            | PickerKey::ArrowDown
            | PickerKey::ArrowLeft
            | PickerKey::ArrowRight => {
                let direction = match key {
                    PickerKey::ArrowUp => Direction::Up,
                    PickerKey::ArrowDown => Direction::Down,
                    PickerKey::ArrowLeft => Direction::Left,
                    _ => Direction::Right,
                };
                self.navigator
                    .move_focus(direction, &mut self.calendars, &is_disabled, sink)
            }
            PickerKey::Home => self.navigator.jump_to_home(&self.calendars, &is_disabled, sink),
            PickerKey::End => self.navigator.jump_to_end(&self.calendars, &is_disabled, sink),
            PickerKey::PageUp => self.navigator.page_up(&mut self.calendars),
            PickerKey::PageDown => self.navigator.page_down(&mut self.calendars),
            PickerKey::Enter | PickerKey::Space => {
                if let Some(date) = self.navigator.activate_focused(&self.calendars, &is_disabled) {
                    self.select_date(date);
                }
                FocusOutcome::Unchanged
            }
            PickerKey::Escape => FocusOutcome::Unchanged,
        };

        if let FocusOutcome::Moved(_) = outcome {
            self.preview_focused();
        }
        outcome
    }

    /// Second phase of a keyboard month transition; call after the new grid
    /// has been rendered.
    pub fn resolve_pending_focus(&mut self, sink: &mut dyn FocusSink) -> Option<FocusState> {
        let guard = &self.guard;
        let is_disabled = |date: NaiveDate| !guard.is_selectable(date);
        let resolved = self
            .navigator
            .resolve_pending(&self.calendars, &is_disabled, sink);
        if resolved.is_some() {
            self.preview_focused();
        }
        resolved
    }

    fn preview_focused(&mut self) {
        if let Some(date) = self.navigator.focused_date(&self.calendars) {
            self.hover.on_hover(date, &self.selection);
        }
    }

    /// Annotate every cell of `grid`, row by row.
    pub fn day_cells(&self, grid: &MonthGrid) -> Vec<Vec<DayCell>> {
        let today = self.clock.today();
        let focused = self
            .navigator
            .focus()
            .filter(|focus| focus.month == grid.key)
            .map(|focus| focus.index());
        let policy = self.settings.reversed_range;
        let preview = Some(&self.hover);
        let band = self.selection.display_range(preview, policy);

        let cells: Vec<DayCell> = grid
            .days
            .iter()
            .enumerate()
            .map(|(index, &date)| {
                let outside = grid.is_outside(index);
                let in_range = !outside && self.selection.is_in_range_with(date, preview, policy);
                DayCell {
                    date,
                    index,
                    outside,
                    hidden: outside && !self.settings.show_outside_days,
                    today: date == today,
                    disabled: !self.is_selectable(date),
                    focused: focused == Some(index),
                    selected: !outside && self.selection.is_selected(date),
                    in_range,
                    range_start: !outside && band.is_some_and(|(start, _)| start == date),
                    range_end: !outside && band.is_some_and(|(_, end)| end == date),
                    merge_left: in_range
                        && self.selection.merge_left_with(date, index, preview, policy),
                    merge_right: in_range
                        && self.selection.merge_right_with(date, index, preview, policy),
                }
            })
            .collect();

        cells.chunks(WEEK_LEN).map(|row| row.to_vec()).collect()
    }

    /// Annotated rows for a visible month, if it is on screen.
    pub fn month_cells(&self, month: MonthKey) -> Option<Vec<Vec<DayCell>>> {
        self.calendars.grid_for(month).map(|grid| self.day_cells(grid))
    }
}
