mod args;
mod commands;
mod config;

use crate::args::{Cli, Command};
use crate::config::load_config;
use anyhow::Context;
use clap::Parser;
use csc_logger::Logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _logger = Logger::from_settings("csc", cfg.log.clone()).init()?;

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Models {} => commands::list_models(&mut out)?,
        Command::Decode { model, file, pretty } => {
            commands::decode(&model, file.as_deref(), pretty || cfg.output.pretty, &mut out)?;
        },
    }

    Ok(())
}
