// Module exports for models
// Pure picker data: grids, selection, hover preview, settings

pub mod hover;
pub mod month_grid;
pub mod selection;
pub mod settings;
