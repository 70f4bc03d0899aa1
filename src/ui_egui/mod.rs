mod app;
pub mod date_picker;
mod palette;
pub mod shortcuts;
pub mod theme;

pub use app::PickerDemoApp;
pub use date_picker::{DatePickerView, DatePickerViewResult, EguiFocus};
