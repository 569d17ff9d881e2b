//! Lasker Morris referee library.
//!
//! Referees a game of Lasker Morris between two external player
//! programs speaking a line-oriented protocol over stdin/stdout.
//!
//! # Architecture
//!
//! - **Games**: board geometry, move validation, and game state
//!   (`games::lasker`)
//! - **Players**: the channel abstraction over child processes
//!   (`players`)
//! - **Referee**: the turn loop, forfeit policy, and termination
//!   detection (`referee`)
//!
//! # Example
//!
//! ```no_run
//! use lasker_referee::{ProcessChannel, Referee, RefereeConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = RefereeConfig::default();
//! let blue = ProcessChannel::spawn("python3 player.py", config.stop_grace())?;
//! let orange = ProcessChannel::spawn("./other_player", config.stop_grace())?;
//!
//! let mut referee = Referee::new(Box::new(blue), Box::new(orange), config);
//! let outcome = referee.run().await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
pub mod games;
mod players;
mod referee;

// Crate-level exports - Configuration
pub use config::{ConfigError, RefereeConfig};

// Crate-level exports - Player channels
pub use players::{Channel, ProcessChannel, ReadOutcome};

// Crate-level exports - Referee
pub use referee::{DrawReason, END_PREFIX, GameOutcome, Referee, WinReason, assign_colors};

// Crate-level exports - Game types
pub use games::lasker::{
    Board, Color, GameState, HistoryEntry, Move, MoveError, MoveParseError, Position,
};
