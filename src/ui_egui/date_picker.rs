//! egui renderer for [`DatePicker`].
//!
//! Draws the header, one or two month grids and the footer actions. Pointer
//! and key input is collected while drawing and applied to the picker after
//! the grids are laid out, so every frame paints a consistent state.

use chrono::{Datelike, NaiveDate};
use egui::{Align2, FontId, Id, Sense, Stroke, Vec2};

use super::palette::DayCellPalette;
use super::shortcuts::consume_picker_keys;
use super::theme::PickerTheme;
use crate::models::month_grid::MonthKey;
use crate::models::selection::SelectionMode;
use crate::services::calendar::QuickRange;
use crate::services::navigator::{FocusOutcome, FocusSink, FocusState};
use crate::services::picker::{DatePicker, DayCell};

const CELL_SIZE: Vec2 = Vec2::new(32.0, 28.0);
const DAY_NAMES: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

fn cell_id(salt: Id, month: MonthKey, date: NaiveDate) -> Id {
    salt.with(("date_picker_cell", month.year, month.month, date))
}

/// Focus primitive backed by egui's memory.
pub struct EguiFocus {
    ctx: egui::Context,
    salt: Id,
}

impl EguiFocus {
    pub fn new(ctx: egui::Context, salt: Id) -> Self {
        Self { ctx, salt }
    }
}

impl FocusSink for EguiFocus {
    fn focus(&mut self, cell: &FocusState, date: NaiveDate) {
        let id = cell_id(self.salt, cell.month, date);
        self.ctx.memory_mut(|memory| {
            memory.request_focus(id);
            // Arrow keys belong to the picker while one of its cells has focus.
            memory.set_focus_lock_filter(
                id,
                egui::EventFilter {
                    horizontal_arrows: true,
                    vertical_arrows: true,
                    ..Default::default()
                },
            );
        });
    }
}

enum CellEvent {
    Hovered(NaiveDate),
    Clicked(NaiveDate),
    /// Cell holds egui focus (tab traversal) but is not the picker's focus.
    FocusedByTab(NaiveDate),
}

/// What happened during one frame of the picker.
#[derive(Debug, Default)]
pub struct DatePickerViewResult {
    pub clicked: Option<NaiveDate>,
    pub saved: bool,
    pub keyboard_active: bool,
}

pub struct DatePickerView;

impl DatePickerView {
    /// Seed keyboard focus and hand egui focus to that cell, e.g. right after `open`.
    pub fn focus_picker(ctx: &egui::Context, id_salt: impl std::hash::Hash, picker: &mut DatePicker) {
        let mut focus_sink = EguiFocus::new(ctx.clone(), Id::new(id_salt));
        if picker.initialize_focus(&mut focus_sink).is_none() {
            log::debug!("No enabled day to focus in the visible months");
        }
    }

    pub fn show(
        ui: &mut egui::Ui,
        id_salt: impl std::hash::Hash,
        picker: &mut DatePicker,
        theme: &PickerTheme,
    ) -> DatePickerViewResult {
        let salt = Id::new(id_salt);
        let mut focus_sink = EguiFocus::new(ui.ctx().clone(), salt);
        let mut result = DatePickerViewResult::default();

        // A month transition from the previous frame now has its grid.
        picker.resolve_pending_focus(&mut focus_sink);

        Self::render_header(ui, picker);
        ui.add_space(4.0);

        let palette = DayCellPalette::from_theme(theme);
        let mut events = Vec::new();
        ui.horizontal_top(|ui| {
            for month in picker.calendars().visible_months() {
                let Some(rows) = picker.month_cells(month) else {
                    continue;
                };
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(month.to_string()).strong());
                    Self::render_grid(ui, salt, month, &rows, &palette, &mut events);
                });
                ui.add_space(12.0);
            }
        });

        let pointer_moving = ui.input(|input| input.pointer.is_moving());
        let mut hovered_any = false;
        for event in events {
            match event {
                CellEvent::Hovered(date) => {
                    hovered_any = true;
                    picker.hover(date);
                }
                CellEvent::Clicked(date) => {
                    if picker.select_date(date) {
                        result.clicked = Some(date);
                    }
                    picker.focus_date(date, &mut focus_sink);
                }
                CellEvent::FocusedByTab(date) => {
                    result.keyboard_active = true;
                    picker.focus_date(date, &mut focus_sink);
                }
            }
        }
        if pointer_moving && !hovered_any {
            picker.leave();
        }

        let focused_id = ui.ctx().memory(|memory| memory.focused());
        let picker_focused_id = picker
            .focus()
            .zip(picker.focused_date())
            .map(|(focus, date)| cell_id(salt, focus.month, date));
        if focused_id.is_some() && focused_id == picker_focused_id {
            result.keyboard_active = true;
            for key in consume_picker_keys(ui.ctx()) {
                if let FocusOutcome::Pending(pending) = picker.handle_key(key, &mut focus_sink) {
                    log::debug!("Waiting for {} to render before focusing", pending.month);
                    ui.ctx().request_repaint();
                }
            }
        }

        ui.add_space(4.0);
        result.saved = Self::render_footer(ui, picker);
        result
    }

    fn render_header(ui: &mut egui::Ui, picker: &mut DatePicker) {
        ui.horizontal(|ui| {
            if ui
                .small_button("◀")
                .on_hover_text("Previous month")
                .clicked()
            {
                picker.go_to_prev_month();
            }
            if ui
                .small_button("Today")
                .on_hover_text("Show the current month")
                .clicked()
            {
                let today = picker.today();
                picker.go_to_date(today);
            }
            if ui
                .small_button("▶")
                .on_hover_text("Next month")
                .clicked()
            {
                picker.go_to_next_month();
            }
        });
    }

    fn render_grid(
        ui: &mut egui::Ui,
        salt: Id,
        month: MonthKey,
        rows: &[Vec<DayCell>],
        palette: &DayCellPalette,
        events: &mut Vec<CellEvent>,
    ) {
        ui.spacing_mut().item_spacing = Vec2::new(0.0, 2.0);

        ui.horizontal(|ui| {
            for name in DAY_NAMES {
                let (rect, _) = ui.allocate_exact_size(CELL_SIZE, Sense::hover());
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    name,
                    FontId::proportional(11.0),
                    palette.muted_text,
                );
            }
        });

        for row in rows {
            ui.horizontal(|ui| {
                for cell in row {
                    if let Some(event) = Self::render_cell(ui, salt, month, cell, palette) {
                        events.push(event);
                    }
                }
            });
        }
    }

    fn render_cell(
        ui: &mut egui::Ui,
        salt: Id,
        month: MonthKey,
        cell: &DayCell,
        palette: &DayCellPalette,
    ) -> Option<CellEvent> {
        let (rect, _) = ui.allocate_exact_size(CELL_SIZE, Sense::hover());
        if cell.hidden {
            return None;
        }

        let response = cell.is_interactive().then(|| {
            ui.interact(rect, cell_id(salt, month, cell.date), Sense::click())
        });
        let hovered = response.as_ref().is_some_and(|r| r.hovered());
        let style = palette.style_for(cell, hovered);

        // Only shrink vertically so merged range cells touch horizontally.
        let fill_rect = rect.shrink2(Vec2::new(0.0, 1.0));
        let painter = ui.painter();
        painter.rect_filled(fill_rect, style.rounding, style.fill);
        if let Some(color) = style.today_border {
            painter.rect_stroke(fill_rect.shrink(1.0), style.rounding, Stroke::new(1.0, color));
        }
        if let Some(color) = style.focus_ring {
            painter.rect_stroke(fill_rect.shrink(2.0), style.rounding, Stroke::new(2.0, color));
        }
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            cell.date.day().to_string(),
            FontId::proportional(13.0),
            style.text,
        );

        let response = response?;
        if response.clicked() {
            Some(CellEvent::Clicked(cell.date))
        } else if response.has_focus() && !cell.focused {
            Some(CellEvent::FocusedByTab(cell.date))
        } else if hovered {
            Some(CellEvent::Hovered(cell.date))
        } else {
            None
        }
    }

    /// Quick ranges, clear and (dual mode) save. Returns whether save fired.
    fn render_footer(ui: &mut egui::Ui, picker: &mut DatePicker) -> bool {
        let mut saved = false;

        if picker.settings().mode == SelectionMode::Range {
            ui.horizontal_wrapped(|ui| {
                for range in QuickRange::ALL {
                    if ui.small_button(range.label()).clicked() {
                        picker.apply_quick_range(range);
                    }
                }
            });
        }

        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                picker.clear();
            }
            if picker.settings().dual_mode {
                let can_save = picker.has_unsaved_changes() && picker.selection().as_change().is_some();
                if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
                    saved = picker.save();
                }
            }
        });

        saved
    }
}
