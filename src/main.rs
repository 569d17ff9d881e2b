//! Lasker Morris referee - CLI entrypoint.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use lasker_referee::{Color, ProcessChannel, Referee, RefereeConfig, assign_colors};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Match {
            player1,
            player2,
            config,
        } => run_match(player1, player2, config).await,
    }
}

/// Plays one game between the two player commands and prints the result.
async fn run_match(player1: String, player2: String, config: Option<PathBuf>) -> Result<()> {
    let config = match config {
        Some(path) => RefereeConfig::from_file(path)?,
        None => RefereeConfig::default(),
    };

    // Coin flip decides which command plays blue (and moves first).
    let (first_color, _) = assign_colors();
    let (blue_cmd, orange_cmd) = if first_color == Color::Blue {
        (&player1, &player2)
    } else {
        (&player2, &player1)
    };
    info!(blue = %blue_cmd, orange = %orange_cmd, "colors assigned");

    let blue = ProcessChannel::spawn(blue_cmd, config.stop_grace())?;
    let orange = ProcessChannel::spawn(orange_cmd, config.stop_grace())?;

    let mut referee = Referee::new(Box::new(blue), Box::new(orange), config);
    let outcome = referee.run().await?;

    println!("{outcome}");
    Ok(())
}
