//! Workspace command handlers

use std::io::Write;

use crate::cli::WorkspacesArgs;
use crate::cribl::auth::connect;
use crate::cribl::settings::{resolve_cloud, EnvSource, Resolution};
use crate::error::Result;
use crate::output::{render_report, render_title};
use crate::ui::{create_spinner, finish_spinner};

/// Run the workspace list command
pub async fn run_workspaces_command<W: Write>(
    _args: &WorkspacesArgs,
    env: &impl EnvSource,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    write!(out, "{}", render_title("Listing Cribl Workspaces", 40))?;

    let settings = match resolve_cloud(env) {
        Resolution::Ready(settings) => settings,
        Resolution::Incomplete(missing) => {
            write!(out, "{}", missing.instructions())?;
            return Ok(());
        }
    };

    let client = connect(&settings.management_plane_flow(), out).await?;

    let spinner = create_spinner("Fetching workspaces...", quiet);
    let result = client.list_workspaces(&settings.org_id).await;
    finish_spinner(spinner);

    write!(out, "{}", render_report(&result?))?;
    Ok(())
}
