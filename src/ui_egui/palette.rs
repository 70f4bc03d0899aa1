use crate::models::selection::{closes_row_segment, opens_row_segment};
use crate::services::picker::DayCell;
use crate::ui_egui::theme::PickerTheme;
use egui::{Color32, Rounding};

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

const CELL_ROUNDING: f32 = 6.0;

/// Resolved colors and corner shape for one day cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CellStyle {
    pub fill: Color32,
    pub text: Color32,
    pub rounding: Rounding,
    pub today_border: Option<Color32>,
    pub focus_ring: Option<Color32>,
}

#[derive(Clone, Copy)]
pub(crate) struct DayCellPalette {
    pub regular_bg: Color32,
    pub selected_bg: Color32,
    pub selected_text: Color32,
    pub range_bg: Color32,
    pub hover_bg: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    pub today_border: Color32,
    pub focus_ring: Color32,
}

impl DayCellPalette {
    pub fn from_theme(theme: &PickerTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            selected_bg: theme.selected_background,
            selected_text: theme.selected_text,
            range_bg: theme.range_background,
            hover_bg: with_alpha(theme.selected_background, if theme.is_dark { 70 } else { 45 }),
            text: theme.text_primary,
            muted_text: theme.text_muted,
            today_border: theme.today_border,
            focus_ring: theme.focus_ring,
        }
    }

    pub fn style_for(&self, cell: &DayCell, hovered: bool) -> CellStyle {
        let fill = if cell.outside {
            Color32::TRANSPARENT
        } else if cell.selected {
            self.selected_bg
        } else if cell.in_range {
            self.range_bg
        } else if hovered && cell.is_interactive() {
            self.hover_bg
        } else {
            self.regular_bg
        };

        let text = if cell.outside || cell.disabled {
            self.muted_text
        } else if cell.selected {
            self.selected_text
        } else {
            self.text
        };

        // Merged sides lose their rounded corners so a range reads as one band.
        // Endpoints square off only the side facing the rest of the band.
        let join_left = cell.merge_left
            || (cell.range_end && !cell.range_start && !opens_row_segment(cell.date, cell.index));
        let join_right = cell.merge_right
            || (cell.range_start && !cell.range_end && !closes_row_segment(cell.date, cell.index));
        let left = if join_left { 0.0 } else { CELL_ROUNDING };
        let right = if join_right { 0.0 } else { CELL_ROUNDING };
        let rounding = Rounding {
            nw: left,
            sw: left,
            ne: right,
            se: right,
        };

        CellStyle {
            fill,
            text,
            rounding,
            today_border: (cell.today && !cell.outside).then_some(self.today_border),
            focus_ring: cell.focused.then_some(self.focus_ring),
        }
    }
}
