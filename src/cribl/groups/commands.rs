//! Worker group command handlers

use log::debug;
use std::io::Write;

use crate::cli::GroupsArgs;
use crate::cribl::auth::connect;
use crate::cribl::settings::{resolve_cloud, resolve_on_prem, EnvSource, Resolution};
use crate::cribl::CriblClient;
use crate::error::Result;
use crate::output::{render_report, render_title};
use crate::ui::{create_spinner, finish_spinner};

use super::Product;

/// Run the worker group list command
pub async fn run_groups_command<W: Write>(
    args: &GroupsArgs,
    env: &impl EnvSource,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    if args.on_prem {
        list_on_prem_worker_groups(args.product, env, quiet, out).await
    } else {
        list_cloud_worker_groups(args.product, env, quiet, out).await
    }
}

async fn list_cloud_worker_groups<W: Write>(
    product: Product,
    env: &impl EnvSource,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    write!(out, "{}", render_title("Listing Cribl Worker Groups", 40))?;

    let settings = match resolve_cloud(env) {
        Resolution::Ready(settings) => settings,
        Resolution::Incomplete(missing) => {
            write!(out, "{}", missing.instructions())?;
            return Ok(());
        }
    };

    let client = connect(&settings.control_plane_flow(), out).await?;
    report_worker_groups(&client, product, quiet, out).await
}

async fn list_on_prem_worker_groups<W: Write>(
    product: Product,
    env: &impl EnvSource,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    write!(
        out,
        "{}",
        render_title("Listing On-Premise Cribl Worker Groups", 45)
    )?;

    let settings = match resolve_on_prem(env) {
        Resolution::Ready(settings) => settings,
        Resolution::Incomplete(missing) => {
            write!(out, "{}", missing.instructions())?;
            return Ok(());
        }
    };

    let client = connect(&settings.flow(), out).await?;
    writeln!(out, "API client created for on-prem server")?;
    report_worker_groups(&client, product, quiet, out).await
}

async fn report_worker_groups<W: Write>(
    client: &CriblClient,
    product: Product,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    debug!("Listing {} worker groups from {}", product, client.base_url());

    let spinner = create_spinner("Fetching worker groups...", quiet);
    let result = client.list_worker_groups(product).await;
    finish_spinner(spinner);

    write!(out, "{}", render_report(&result?))?;
    Ok(())
}
