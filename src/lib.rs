//! criblctl - List Cribl worker groups and workspaces
//!
//! A small CLI for the Cribl control plane (Cribl.Cloud or an on-prem
//! leader) and the Cribl.Cloud management plane.
//!
//! # Features
//!
//! - OAuth client-credentials authentication for Cribl.Cloud
//! - Username/password login for on-prem leaders, with optional
//!   acceptance of self-signed certificates
//! - Credentials from `CRIBL_*` environment variables or a `.env` file
//! - Placeholder detection before any network call is made
//!
//! # Example
//!
//! ```bash
//! # Worker groups in a Cribl.Cloud workspace
//! criblctl get groups
//!
//! # Edge fleets on an on-prem leader
//! CRIBL_SERVER_URL=https://leader:9000 criblctl get groups --on-prem -p edge
//!
//! # Workspaces of the organization
//! criblctl get workspaces --env-file ./cribl.env
//! ```

pub mod cli;
pub mod config;
pub mod cribl;
pub mod error;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, GetResource, GroupsArgs, WorkspacesArgs};
pub use cribl::{
    connect, load_env_files, run_groups_command, run_workspaces_command, AuthFlow, CriblClient,
    ProcessEnv, Product, WorkerGroup, Workspace,
};
pub use error::{CriblError, Result};
pub use output::render_report;
