//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Review annotated basketball shot recordings frame by frame.
#[derive(Debug, Parser)]
#[command(name = "shotsync", version, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the shots found in an annotation file
    Shots {
        /// Frame annotation JSON (bare array or analysis response)
        file: PathBuf,
    },

    /// List the phase intervals of one shot
    Phases {
        /// Frame annotation JSON (bare array or analysis response)
        file: PathBuf,
        /// Shot index (position in the shot list, not the shot id)
        #[arg(long, default_value_t = 0)]
        shot: usize,
    },

    /// Replay a shot against a simulated player and print phase changes
    Replay {
        /// Frame annotation JSON (bare array or analysis response)
        file: PathBuf,
        /// Clip length in seconds
        #[arg(long)]
        duration: f64,
        /// Frame rate reported by the player (defaults to the analyzer rate)
        #[arg(long)]
        fps: Option<f64>,
        /// Shot index to replay
        #[arg(long, default_value_t = 0)]
        shot: usize,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the default config file path
    Path,
}
