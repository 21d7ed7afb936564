//! criblctl - Main entry point

use clap::Parser;
use log::{debug, error, info};
use std::io;

use criblctl::{
    load_env_files, run_groups_command, run_workspaces_command, Cli, Command, GetResource,
    ProcessEnv, Result,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting criblctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: command={:?}, env_file={:?}, quiet={}",
        cli.command, cli.env_file, cli.quiet
    );

    if let Err(e) = run(&cli).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("Completed successfully");
}

async fn run(cli: &Cli) -> Result<()> {
    load_env_files(cli.env_file.as_deref())?;

    let env = ProcessEnv;
    let mut out = io::stdout();

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Groups(args) => {
                run_groups_command(args, &env, cli.quiet, &mut out).await
            }
            GetResource::Workspaces(args) => {
                run_workspaces_command(args, &env, cli.quiet, &mut out).await
            }
        },
    }
}
