// Unit test suite
// Scenario tests for the grid, selection and navigation building blocks

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod models;
mod services;
