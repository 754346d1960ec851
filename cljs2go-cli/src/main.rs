//! cljs2go entry point
//!
//! Wires the bootstrap operation into the launcher. Logging is silent unless
//! `CLJS2GO_LOG` is set, so stderr only carries a fatal diagnostic.

use anyhow::{Context, Result};
use clap::Parser;
use cljs2go_cli::{Cli, Launcher, bootstrap};
use env_logger::Env;
use std::process::ExitCode;

fn init_logging() -> Result<()> {
    env_logger::Builder::from_env(Env::new().filter_or("CLJS2GO_LOG", "warn"))
        .try_init()
        .context("Failed to initialise logger")
}

fn main() -> Result<ExitCode> {
    init_logging()?;

    let cli = Cli::parse();
    let launcher = Launcher::new(bootstrap::run);

    Ok(launcher.launch(&cli.args))
}
