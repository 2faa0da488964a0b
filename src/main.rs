//! shotsync command-line entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shotsync::cli::{Cli, Commands, ConfigCommands};
use shotsync::Config;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("SHOTSYNC_LOG")
                .unwrap_or_else(|_| "shotsync=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_override = cli.config;
    let load_config = || -> Result<Config> {
        let config = match &config_override {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(config)
    };

    match cli.command {
        Commands::Shots { file } => commands::inspect::handle_shots(&file),
        Commands::Phases { file, shot } => commands::inspect::handle_phases(&file, shot),
        Commands::Replay {
            file,
            duration,
            fps,
            shot,
        } => commands::replay::handle_replay(&file, duration, fps, shot, &load_config()?),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(&load_config()?),
            ConfigCommands::Path => commands::config::handle_path(),
        },
    }
}
