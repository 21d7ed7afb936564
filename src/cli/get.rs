//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use crate::cribl::Product;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get worker groups (Cribl.Cloud by default, or an on-prem leader)
    #[command(
        visible_alias = "group",
        visible_alias = "worker-groups",
        visible_alias = "wg"
    )]
    Groups(GroupsArgs),

    /// Get workspaces of the organization (Cribl.Cloud management plane)
    #[command(visible_alias = "workspace", visible_alias = "ws")]
    Workspaces(WorkspacesArgs),
}

/// Arguments for 'get groups' subcommand
#[derive(Parser, Debug)]
pub struct GroupsArgs {
    /// Query an on-prem leader (CRIBL_SERVER_URL, CRIBL_USERNAME, CRIBL_PASSWORD)
    #[arg(long, default_value_t = false)]
    pub on_prem: bool,

    /// Product whose worker groups are listed
    #[arg(short, long, value_enum, default_value_t = Product::Stream)]
    pub product: Product,
}

/// Arguments for 'get workspaces' subcommand
#[derive(Parser, Debug)]
pub struct WorkspacesArgs {}
