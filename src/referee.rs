//! Referee state machine.
//!
//! Runs the turn loop between two player channels: reads the current
//! player's move under the time budget, validates and executes it,
//! relays the accepted line verbatim to the opponent, and checks the
//! termination conditions. Any protocol or rule violation is an
//! immediate forfeit; nothing is retried.

use crate::config::RefereeConfig;
use crate::games::lasker::{Color, GameState, MIN_PIECES, Move};
use crate::players::{Channel, ReadOutcome};
use anyhow::Result;
use tracing::{info, instrument, warn};

/// Prefix of the shutdown line sent to both players at game end.
pub const END_PREFIX: &str = "END:";

/// Why a color won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// Opponent's total stone count dropped below the minimum.
    PieceCount,
    /// Opponent proposed a move that failed validation.
    IllegalMove,
    /// Opponent sent a line that does not lex as a move.
    MalformedMove,
    /// Opponent produced no move within the time budget.
    Timeout,
    /// Opponent's process died or closed its output.
    Disconnected,
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WinReason::PieceCount => "opponent below minimum pieces",
            WinReason::IllegalMove => "opponent played an illegal move",
            WinReason::MalformedMove => "opponent sent a malformed move",
            WinReason::Timeout => "opponent timed out",
            WinReason::Disconnected => "opponent disconnected",
        };
        write!(f, "{s}")
    }
}

/// Why the game was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// Move history ended in a repeating cycle.
    Repetition,
    /// Too many consecutive moves without a capture.
    CaptureDrought,
}

impl std::fmt::Display for DrawReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DrawReason::Repetition => "move repetition",
            DrawReason::CaptureDrought => "no captures for too long",
        };
        write!(f, "{s}")
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The given color won.
    WonBy {
        /// Winning color.
        color: Color,
        /// What ended the game.
        reason: WinReason,
    },
    /// Neither color won.
    Draw {
        /// What ended the game.
        reason: DrawReason,
    },
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::WonBy { color, reason } => write!(f, "{color} wins: {reason}"),
            GameOutcome::Draw { reason } => write!(f, "draw: {reason}"),
        }
    }
}

/// Referee for one game between two player channels.
///
/// Owns the authoritative [`GameState`]; each channel is bound to its
/// color for the whole game.
pub struct Referee {
    state: GameState,
    blue: Box<dyn Channel>,
    orange: Box<dyn Channel>,
    config: RefereeConfig,
}

impl Referee {
    /// Creates a referee over the two player channels.
    pub fn new(blue: Box<dyn Channel>, orange: Box<dyn Channel>, config: RefereeConfig) -> Self {
        Self {
            state: GameState::new(),
            blue,
            orange,
            config,
        }
    }

    /// The game state (board, hands, history).
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn channel_mut(&mut self, color: Color) -> &mut Box<dyn Channel> {
        match color {
            Color::Blue => &mut self.blue,
            Color::Orange => &mut self.orange,
        }
    }

    /// Plays the game to completion and returns the result.
    ///
    /// Both channels are stopped before this returns, on every
    /// termination path.
    #[instrument(skip(self), fields(blue = %self.blue.name(), orange = %self.orange.name()))]
    pub async fn run(&mut self) -> Result<GameOutcome> {
        info!("starting game");

        // Each player learns its color as the first protocol line.
        for color in [Color::Blue, Color::Orange] {
            if let Err(e) = self.channel_mut(color).write_line(color.wire_name()).await {
                warn!(%color, error = %e, "failed to send color assignment");
                let outcome = GameOutcome::WonBy {
                    color: color.opponent(),
                    reason: WinReason::Disconnected,
                };
                self.finish(outcome).await;
                return Ok(outcome);
            }
        }

        let budget = self.config.move_timeout();
        let mut current = Color::Blue;

        let outcome = loop {
            let line = match self.channel_mut(current).read_line(budget).await {
                ReadOutcome::Line(line) => line,
                ReadOutcome::TimedOut => {
                    break GameOutcome::WonBy {
                        color: current.opponent(),
                        reason: WinReason::Timeout,
                    };
                }
                ReadOutcome::Closed => {
                    break GameOutcome::WonBy {
                        color: current.opponent(),
                        reason: WinReason::Disconnected,
                    };
                }
            };

            let mv = match Move::parse(&line) {
                Ok(mv) => mv,
                Err(e) => {
                    warn!(mover = %current, line = %line, error = %e, "malformed move");
                    break GameOutcome::WonBy {
                        color: current.opponent(),
                        reason: WinReason::MalformedMove,
                    };
                }
            };

            if let Err(e) = self.state.validate(current, &mv) {
                warn!(mover = %current, line = %line, reason = e.reason_code(), "illegal move");
                break GameOutcome::WonBy {
                    color: current.opponent(),
                    reason: WinReason::IllegalMove,
                };
            }

            self.state.apply(current, &mv, &line);
            info!(mover = %current, mv = %line, ply = self.state.history().len(), "move accepted");

            // Relay happens only after local execution, so the
            // opponent never sees a rejected move. A failed relay
            // surfaces as a dead channel on the opponent's turn.
            let relay = self.channel_mut(current.opponent()).write_line(&line).await;
            if let Err(e) = relay {
                warn!(to = %current.opponent(), error = %e, "relay failed");
            }

            if let Some(outcome) = self.check_termination() {
                break outcome;
            }

            current = current.opponent();
        };

        self.finish(outcome).await;
        Ok(outcome)
    }

    /// Post-move termination checks. A win takes precedence over any
    /// draw condition triggered by the same move.
    fn check_termination(&self) -> Option<GameOutcome> {
        for color in [Color::Blue, Color::Orange] {
            if self.state.total_pieces(color) < MIN_PIECES {
                return Some(GameOutcome::WonBy {
                    color: color.opponent(),
                    reason: WinReason::PieceCount,
                });
            }
        }

        if self.state.history_repeats(*self.config.repetition_cycle()) {
            return Some(GameOutcome::Draw {
                reason: DrawReason::Repetition,
            });
        }

        if self.state.moves_since_capture() >= *self.config.capture_drought_limit() {
            return Some(GameOutcome::Draw {
                reason: DrawReason::CaptureDrought,
            });
        }

        None
    }

    /// Announces the result to both players and stops both channels.
    async fn finish(&mut self, outcome: GameOutcome) {
        info!(%outcome, plies = self.state.history().len(), "game over");
        let farewell = format!("{END_PREFIX} {outcome}");
        for color in [Color::Blue, Color::Orange] {
            if let Err(e) = self.channel_mut(color).write_line(&farewell).await {
                warn!(%color, error = %e, "failed to send end-of-game line");
            }
            self.channel_mut(color).stop().await;
        }
    }
}

/// Randomly orders the two colors for pre-game assignment.
pub fn assign_colors() -> (Color, Color) {
    if rand::random() {
        (Color::Blue, Color::Orange)
    } else {
        (Color::Orange, Color::Blue)
    }
}
