//! Player channel abstraction.
//!
//! The referee talks to each player through the [`Channel`] trait so
//! that tests can substitute scripted players for real subprocesses.

mod process;

pub use process::ProcessChannel;

use anyhow::Result;
use std::time::Duration;

/// Result of a bounded-wait read from a player channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A complete line, already trimmed.
    Line(String),
    /// The channel is dead: output drained and the process gone.
    Closed,
    /// No line arrived within the wait budget.
    TimedOut,
}

/// One side of a game, able to receive and produce protocol lines.
#[async_trait::async_trait]
pub trait Channel: Send {
    /// Sends one newline-terminated line to the player.
    async fn write_line(&mut self, line: &str) -> Result<()>;

    /// Waits up to `budget` for the player's next output line.
    async fn read_line(&mut self, budget: Duration) -> ReadOutcome;

    /// Shuts the player down. Idempotent and best-effort: safe to call
    /// repeatedly or after the player has already died.
    async fn stop(&mut self);

    /// Display name for logs and results.
    fn name(&self) -> &str;
}
