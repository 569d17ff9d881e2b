//! Core domain types for Lasker Morris: colors, board occupancy, and
//! the per-color hand supplies.

use super::geometry::{POSITION_COUNT, Position};
use serde::{Deserialize, Serialize};

/// Stones each color starts with in hand.
pub const HAND_SIZE: u8 = 10;

/// A color's total stone count below which it loses the game.
pub const MIN_PIECES: u8 = 3;

/// One of the two players in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Blue moves first.
    Blue,
    /// Orange moves second.
    Orange,
}

impl Color {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Blue => Color::Orange,
            Color::Orange => Color::Blue,
        }
    }

    /// Protocol name sent to a player as its color assignment.
    pub fn wire_name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Orange => "orange",
        }
    }

    /// Hand-source token this color uses in move strings.
    pub fn hand_marker(self) -> &'static str {
        match self {
            Color::Blue => "h1",
            Color::Orange => "h2",
        }
    }

    /// Parses a hand-source token back into its owning color.
    pub fn from_hand_marker(s: &str) -> Option<Color> {
        match s {
            "h1" => Some(Color::Blue),
            "h2" => Some(Color::Orange),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Occupancy of the 24 board positions.
///
/// Mutated only through [`crate::games::lasker::GameState::apply`];
/// rule checks receive it by shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    stones: [Option<Color>; POSITION_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            stones: [None; POSITION_COUNT],
        }
    }

    /// Occupant of a position, if any.
    pub fn get(&self, pos: Position) -> Option<Color> {
        self.stones[pos.index()]
    }

    /// Places a stone. Overwrites whatever was there; the validator
    /// guarantees the target is empty before execution.
    pub fn set(&mut self, pos: Position, color: Color) {
        self.stones[pos.index()] = Some(color);
    }

    /// Removes the stone at a position.
    pub fn clear(&mut self, pos: Position) {
        self.stones[pos.index()] = None;
    }

    /// Checks whether a position is unoccupied.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Counts stones of the given color currently on the board.
    pub fn count(&self, color: Color) -> u8 {
        self.stones.iter().filter(|s| **s == Some(color)).count() as u8
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-color supply of unplaced stones. Decrement-only: captured
/// stones leave the game, they never return to hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hands {
    blue: u8,
    orange: u8,
}

impl Hands {
    /// Full starting supplies for both colors.
    pub fn new() -> Self {
        Self {
            blue: HAND_SIZE,
            orange: HAND_SIZE,
        }
    }

    /// Stones the given color still holds in hand.
    pub fn get(&self, color: Color) -> u8 {
        match color {
            Color::Blue => self.blue,
            Color::Orange => self.orange,
        }
    }

    /// Takes one stone from the given color's hand.
    ///
    /// Callers must have checked the hand is non-empty; placement from
    /// an empty hand is rejected by the validator.
    pub fn take(&mut self, color: Color) {
        let hand = match color {
            Color::Blue => &mut self.blue,
            Color::Orange => &mut self.orange,
        };
        debug_assert!(*hand > 0, "executor called with an empty hand");
        *hand = hand.saturating_sub(1);
    }
}

impl Default for Hands {
    fn default() -> Self {
        Self::new()
    }
}
