//! CLI argument parsing

mod get;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::defaults;

pub use get::{GetResource, GroupsArgs, WorkspacesArgs};

/// Cribl resource lister CLI
#[derive(Parser, Debug)]
#[command(name = "criblctl")]
#[command(version)]
#[command(
    about = "List Cribl worker groups and workspaces",
    long_about = "List Cribl worker groups and workspaces.\n\n\
                  Credentials are read from CRIBL_* environment variables, \
                  optionally loaded from a .env file."
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Load environment variables from this file instead of ./.env
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Hide the progress spinner
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },
}
