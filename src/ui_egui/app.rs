use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Datelike, NaiveDate, Weekday};

use super::date_picker::DatePickerView;
use super::theme::PickerTheme;
use crate::models::selection::{SelectionChange, SelectionMode};
use crate::models::settings::PickerSettings;
use crate::services::picker::DatePicker;
use crate::services::settings::SettingsService;

const PICKER_ID: &str = "demo_picker";

/// Demo host: a button that opens the picker in a window and echoes the value.
pub struct PickerDemoApp {
    settings: PickerSettings,
    settings_service: Option<SettingsService>,
    picker: DatePicker,
    /// Last value the picker reported through its change listener
    last_change: Rc<RefCell<Option<SelectionChange>>>,
    theme: PickerTheme,
    weekends_disabled: bool,
    picker_window_open: bool,
}

impl PickerDemoApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: PickerSettings,
        settings_service: Option<SettingsService>,
    ) -> Self {
        let theme = if cc.egui_ctx.style().visuals.dark_mode {
            PickerTheme::dark()
        } else {
            PickerTheme::light()
        };
        theme.apply_to_context(&cc.egui_ctx);

        let last_change = Rc::new(RefCell::new(None));
        let picker = build_picker(&settings, false, Rc::clone(&last_change));

        Self {
            settings,
            settings_service,
            picker,
            last_change,
            theme,
            weekends_disabled: false,
            picker_window_open: false,
        }
    }

    fn rebuild_picker(&mut self) {
        let previous = *self.last_change.borrow();
        self.picker = build_picker(
            &self.settings,
            self.weekends_disabled,
            Rc::clone(&self.last_change),
        );
        // Keep the value only if it still fits the selection mode.
        if let Some(value) = previous {
            let fits = matches!(
                (value, self.settings.mode),
                (SelectionChange::Single(_), SelectionMode::Single)
                    | (SelectionChange::Range(..), SelectionMode::Range)
            );
            if fits {
                self.picker.set_value(value);
            } else {
                *self.last_change.borrow_mut() = None;
            }
        }
        self.picker_window_open = false;
    }

    fn persist_settings(&self) {
        let Some(service) = &self.settings_service else {
            return;
        };
        if let Err(err) = service.save(&self.settings) {
            log::error!("Failed to save picker settings: {:#}", err);
        }
    }

    fn render_options(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label("Mode:");
            changed |= ui
                .radio_value(&mut self.settings.mode, SelectionMode::Single, "Single")
                .changed();
            changed |= ui
                .radio_value(&mut self.settings.mode, SelectionMode::Range, "Range")
                .changed();
        });

        ui.add_enabled_ui(self.settings.mode == SelectionMode::Range, |ui| {
            changed |= ui
                .checkbox(&mut self.settings.dual_mode, "Two months with Save")
                .changed();
        });
        changed |= ui
            .checkbox(&mut self.weekends_disabled, "Disable weekends")
            .changed();
        changed |= ui
            .checkbox(&mut self.settings.show_outside_days, "Show outside days")
            .changed();

        ui.horizontal(|ui| {
            let mut dark = self.theme.is_dark;
            if ui.checkbox(&mut dark, "Dark theme").changed() {
                self.theme = if dark {
                    PickerTheme::dark()
                } else {
                    PickerTheme::light()
                };
                self.theme.apply_to_context(ui.ctx());
                log::debug!(
                    "Picker theme switched (accent {})",
                    PickerTheme::color_to_hex(self.theme.selected_background)
                );
            }
        });

        if changed {
            if self.settings.mode == SelectionMode::Single {
                self.settings.dual_mode = false;
            }
            self.persist_settings();
            self.rebuild_picker();
        }
    }

    fn render_value(&self, ui: &mut egui::Ui) {
        let text = match *self.last_change.borrow() {
            Some(SelectionChange::Single(date)) => date.format("%A %-d %B %Y").to_string(),
            Some(SelectionChange::Range(start, end)) => format!(
                "{} → {} ({} days)",
                start.format("%-d %b %Y"),
                end.format("%-d %b %Y"),
                (end - start).num_days() + 1
            ),
            None => "No date chosen".to_string(),
        };
        ui.label(egui::RichText::new(text).size(16.0));
    }
}

impl eframe::App for PickerDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Date picker");
            ui.add_space(8.0);
            self.render_options(ui);
            ui.separator();
            self.render_value(ui);
            ui.add_space(8.0);

            let label = if self.picker_window_open {
                "Close picker"
            } else {
                "Choose date…"
            };
            if ui.button(label).clicked() {
                if self.picker_window_open {
                    self.picker.close();
                } else {
                    self.picker.open();
                    DatePickerView::focus_picker(ui.ctx(), PICKER_ID, &mut self.picker);
                }
                self.picker_window_open = !self.picker_window_open;
            }
        });

        if !self.picker_window_open {
            return;
        }

        let mut window_open = true;
        let mut close_after_pick = false;
        egui::Window::new("Pick a date")
            .collapsible(false)
            .resizable(false)
            .open(&mut window_open)
            .show(ctx, |ui| {
                let result = DatePickerView::show(ui, PICKER_ID, &mut self.picker, &self.theme);
                // Single mode and single-calendar ranges close once a value lands.
                close_after_pick = result.saved
                    || (result.clicked.is_some()
                        && !self.settings.dual_mode
                        && self.picker.selection().as_change().is_some());
            });

        if !window_open || close_after_pick {
            self.picker.close();
            self.picker_window_open = false;
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Closing date picker demo");
    }
}

fn build_picker(
    settings: &PickerSettings,
    weekends_disabled: bool,
    last_change: Rc<RefCell<Option<SelectionChange>>>,
) -> DatePicker {
    let picker = DatePicker::new(settings.clone()).unwrap_or_else(|err| {
        log::warn!("Invalid picker settings ({}), using defaults", err);
        DatePicker::default()
    });

    let picker = if weekends_disabled {
        picker.with_disabled_filter(is_weekend)
    } else {
        picker
    };

    picker.on_change(move |change| {
        log::info!("Picker value changed: {:?}", change);
        *last_change.borrow_mut() = Some(*change);
    })
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
