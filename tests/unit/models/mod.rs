mod month_grid_tests;
mod selection_tests;
