//! Theme module for the egui date picker
//!
//! Defines the PickerTheme structure holding every color the picker paints.

use egui::Color32;

/// Colors used by the picker renderer
#[derive(Debug, Clone, PartialEq)]
pub struct PickerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window / panel background
    pub app_background: Color32,

    /// Regular day cell background
    pub day_background: Color32,

    /// Selected endpoint fill
    pub selected_background: Color32,

    /// Text on a selected endpoint
    pub selected_text: Color32,

    /// Fill for days inside a committed or previewed range
    pub range_background: Color32,

    /// Today's date border color
    pub today_border: Color32,

    /// Keyboard focus ring
    pub focus_ring: Color32,

    /// Primary text color
    pub text_primary: Color32,

    /// Days from neighbouring months and disabled days
    pub text_muted: Color32,
}

impl PickerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            day_background: Color32::from_rgb(255, 255, 255),
            selected_background: Color32::from_rgb(100, 150, 255),
            selected_text: Color32::from_rgb(255, 255, 255),
            range_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            focus_ring: Color32::from_rgb(40, 90, 200),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_muted: Color32::from_rgb(170, 170, 170),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            day_background: Color32::from_rgb(40, 40, 40),
            selected_background: Color32::from_rgb(100, 150, 255),
            selected_text: Color32::from_rgb(20, 20, 20),
            range_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            focus_ring: Color32::from_rgb(170, 200, 255),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_muted: Color32::from_rgb(110, 110, 110),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.widgets.inactive.bg_fill = self.day_background;
        visuals.widgets.hovered.bg_fill = self.range_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Convert Color32 to hex string for display
    pub fn color_to_hex(color: Color32) -> String {
        format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
    }
}
