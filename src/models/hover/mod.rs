// Hover preview model
// Provisional second endpoint while a range is anchored

use chrono::NaiveDate;

use super::selection::SelectionState;

/// Candidate end date under the pointer (or keyboard focus) while a range is
/// anchored but not yet complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverPreview {
    candidate: Option<NaiveDate>,
}

impl HoverPreview {
    /// Record `date` as the candidate, but only while `state` is anchored.
    pub fn on_hover(&mut self, date: NaiveDate, state: &SelectionState) {
        if state.is_anchored() {
            self.candidate = Some(date);
        }
    }

    pub fn on_leave(&mut self) {
        self.candidate = None;
    }

    pub fn candidate(&self) -> Option<NaiveDate> {
        self.candidate
    }
}
