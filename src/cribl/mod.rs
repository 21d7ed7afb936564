//! Cribl API client and resource modules

pub mod auth;
mod client;
pub mod groups;
pub mod settings;
pub mod traits;
pub mod workspaces;

pub use auth::{connect, AuthFlow, AuthToken, ClientOauth};
pub use client::{CriblClient, TransportOptions};
pub use groups::{run_groups_command, Product, WorkerGroup};
pub use settings::{
    load_env_files, resolve_cloud, resolve_on_prem, CloudSettings, EnvSource, MissingCredentials,
    OnPremSettings, ProcessEnv, Resolution,
};
pub use traits::{CriblResource, ListResponse};
pub use workspaces::{run_workspaces_command, Timestamp, Workspace};
