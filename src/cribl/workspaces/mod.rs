//! Workspace module (Cribl.Cloud management plane)

mod api;
mod commands;
mod models;

pub use commands::run_workspaces_command;
pub use models::{Timestamp, Workspace};
