// Service module exports
// Stateful picker components and settings persistence

pub mod calendar;
pub mod navigator;
pub mod picker;
pub mod settings;
