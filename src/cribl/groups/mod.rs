//! Worker group module

mod api;
mod commands;
mod models;

pub use commands::run_groups_command;
pub use models::{Product, WorkerGroup};
