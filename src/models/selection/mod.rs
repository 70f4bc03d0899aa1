// Selection model
// Single-date and two-endpoint range selection with display predicates

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::hover::HoverPreview;
use super::month_grid::WEEK_LEN;

/// Which kind of value the picker produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
}

/// What happens when the second pick of a range precedes the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReversedRangePolicy {
    /// Drop the old anchor and start over from the earlier date.
    #[default]
    ReAnchor,
    /// Keep the anchor and complete the range with the endpoints swapped.
    Swap,
}

/// Progress of a range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePhase {
    Empty,
    Anchored,
    Complete,
}

/// Value reported to the selection listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Single(NaiveDate),
    Range(NaiveDate, NaiveDate),
}

/// Committed selection, stored as absolute dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Single {
        selected: Option<NaiveDate>,
    },
    Range {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl SelectionState {
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single { selected: None },
            SelectionMode::Range => Self::Range {
                start: None,
                end: None,
            },
        }
    }

    /// Selection state holding a previously reported value.
    ///
    /// A reversed range value is normalized so that `start <= end`.
    pub fn from_change(change: SelectionChange) -> Self {
        match change {
            SelectionChange::Single(date) => Self::Single {
                selected: Some(date),
            },
            SelectionChange::Range(a, b) => Self::Range {
                start: Some(a.min(b)),
                end: Some(a.max(b)),
            },
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single { .. } => SelectionMode::Single,
            Self::Range { .. } => SelectionMode::Range,
        }
    }

    /// Range progress; `None` in single mode.
    pub fn phase(&self) -> Option<RangePhase> {
        match *self {
            Self::Single { .. } => None,
            Self::Range { start: None, .. } => Some(RangePhase::Empty),
            Self::Range {
                start: Some(_),
                end: None,
            } => Some(RangePhase::Anchored),
            Self::Range {
                start: Some(_),
                end: Some(_),
            } => Some(RangePhase::Complete),
        }
    }

    pub fn is_anchored(&self) -> bool {
        self.phase() == Some(RangePhase::Anchored)
    }

    /// Replace the single selection unconditionally.
    pub fn select_single(date: NaiveDate) -> Self {
        Self::Single {
            selected: Some(date),
        }
    }

    /// Advance the range state machine with a newly picked date.
    ///
    /// ```text
    /// Empty    --d-->            Anchored{d}
    /// Anchored --d > start-->    Complete{start, d}
    /// Anchored --d == start-->   Complete{d, d}
    /// Anchored --d < start-->    Anchored{d}         (ReAnchor)
    ///                            Complete{d, start}  (Swap)
    /// Complete --d-->            Anchored{d}
    /// ```
    ///
    /// A single-mode state is treated as `Empty`.
    pub fn select_range_candidate(&self, date: NaiveDate, policy: ReversedRangePolicy) -> Self {
        let anchored = |start| Self::Range {
            start: Some(start),
            end: None,
        };
        let complete = |start, end| Self::Range {
            start: Some(start),
            end: Some(end),
        };

        match *self {
            Self::Range {
                start: Some(start),
                end: None,
            } => {
                if date >= start {
                    complete(start, date)
                } else {
                    match policy {
                        ReversedRangePolicy::ReAnchor => anchored(date),
                        ReversedRangePolicy::Swap => complete(date, start),
                    }
                }
            }
            _ => anchored(date),
        }
    }

    pub fn endpoints(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match *self {
            Self::Single { selected } => (selected, None),
            Self::Range { start, end } => (start, end),
        }
    }

    /// The value a listener should receive for this state, if it is complete.
    pub fn as_change(&self) -> Option<SelectionChange> {
        match *self {
            Self::Single { selected } => selected.map(SelectionChange::Single),
            Self::Range {
                start: Some(start),
                end: Some(end),
            } => Some(SelectionChange::Range(start, end)),
            Self::Range { .. } => None,
        }
    }

    /// True iff `date` equals the single selection or either range endpoint.
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        let (a, b) = self.endpoints();
        a == Some(date) || b == Some(date)
    }

    /// The range to paint: the committed range, or while anchored the range the
    /// hover candidate would produce if it were picked.
    pub fn display_range(
        &self,
        preview: Option<&HoverPreview>,
        policy: ReversedRangePolicy,
    ) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            Self::Range {
                start: Some(start),
                end: Some(end),
            } => Some((start, end)),
            Self::Range {
                start: Some(_),
                end: None,
            } => {
                let candidate = preview.and_then(HoverPreview::candidate)?;
                match self.select_range_candidate(candidate, policy) {
                    Self::Range {
                        start: Some(start),
                        end: Some(end),
                    } => Some((start, end)),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// True iff `date` lies within the committed or previewed range, inclusive.
    pub fn is_in_range(&self, date: NaiveDate, preview: Option<&HoverPreview>) -> bool {
        self.is_in_range_with(date, preview, ReversedRangePolicy::default())
    }

    pub fn is_in_range_with(
        &self,
        date: NaiveDate,
        preview: Option<&HoverPreview>,
        policy: ReversedRangePolicy,
    ) -> bool {
        self.display_range(preview, policy)
            .is_some_and(|(start, end)| start <= date && date <= end)
    }

    /// Whether the cell at grid `index` sits strictly inside the range and
    /// should join its left neighbour visually.
    pub fn merge_left(&self, date: NaiveDate, index: usize, preview: Option<&HoverPreview>) -> bool {
        self.merge_left_with(date, index, preview, ReversedRangePolicy::default())
    }

    /// Whether the cell at grid `index` should join its right neighbour visually.
    pub fn merge_right(&self, date: NaiveDate, index: usize, preview: Option<&HoverPreview>) -> bool {
        self.merge_right_with(date, index, preview, ReversedRangePolicy::default())
    }

    pub fn merge_left_with(
        &self,
        date: NaiveDate,
        index: usize,
        preview: Option<&HoverPreview>,
        policy: ReversedRangePolicy,
    ) -> bool {
        let Some((start, end)) = self.display_range(preview, policy) else {
            return false;
        };
        start < date && date < end && !opens_row_segment(date, index)
    }

    pub fn merge_right_with(
        &self,
        date: NaiveDate,
        index: usize,
        preview: Option<&HoverPreview>,
        policy: ReversedRangePolicy,
    ) -> bool {
        let Some((start, end)) = self.display_range(preview, policy) else {
            return false;
        };
        start < date && date < end && !closes_row_segment(date, index)
    }
}

/// First cell of a grid row or first day of its month; nothing joins on its left.
pub fn opens_row_segment(date: NaiveDate, index: usize) -> bool {
    index % WEEK_LEN == 0 || date.day() == 1
}

/// Last cell of a grid row or last day of its month; nothing joins on its right.
pub fn closes_row_segment(date: NaiveDate, index: usize) -> bool {
    let last_of_month = date.succ_opt().map_or(true, |next| next.month() != date.month());
    index % WEEK_LEN == WEEK_LEN - 1 || last_of_month
}
