// Settings module
// Picker configuration persisted as TOML

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::selection::{ReversedRangePolicy, SelectionMode};

/// How ArrowUp/ArrowDown resolve focus when they leave the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalFallback {
    /// Only land on the same weekday column; otherwise focus stays put.
    #[default]
    SameColumn,
    /// Fall back to the enabled day closest in date when the column is empty.
    Nearest,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("min_date {min} is after max_date {max}")]
    InvertedBounds { min: NaiveDate, max: NaiveDate },
    #[error("dual_mode requires range selection mode")]
    DualModeRequiresRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub mode: SelectionMode,
    /// Show two adjacent months and require an explicit save.
    pub dual_mode: bool,
    pub reversed_range: ReversedRangePolicy,
    pub vertical_fallback: VerticalFallback,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    /// Paint neighbouring-month days (always non-interactive).
    pub show_outside_days: bool,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Single,
            dual_mode: false,
            reversed_range: ReversedRangePolicy::ReAnchor,
            vertical_fallback: VerticalFallback::SameColumn,
            min_date: None,
            max_date: None,
            show_outside_days: true,
        }
    }
}

impl PickerSettings {
    pub fn single() -> Self {
        Self::default()
    }

    pub fn range() -> Self {
        Self {
            mode: SelectionMode::Range,
            ..Self::default()
        }
    }

    pub fn dual_range() -> Self {
        Self {
            mode: SelectionMode::Range,
            dual_mode: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                return Err(SettingsError::InvertedBounds { min, max });
            }
        }

        if self.dual_mode && self.mode != SelectionMode::Range {
            return Err(SettingsError::DualModeRequiresRange);
        }

        Ok(())
    }
}
