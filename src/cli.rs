//! Command-line interface for the referee.

use clap::{Parser, Subcommand};

/// Lasker Morris referee for external player programs
#[derive(Parser, Debug)]
#[command(name = "lasker_referee")]
#[command(about = "Referees Lasker Morris between two player programs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game between two player programs
    Match {
        /// Shell command for the first player (e.g. "python3 player.py")
        player1: String,

        /// Shell command for the second player
        player2: String,

        /// Path to a referee config file (TOML)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
