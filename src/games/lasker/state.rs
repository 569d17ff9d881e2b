//! Authoritative game state: board, hands, and move history.
//!
//! The state is owned by the referee and mutated only through
//! [`GameState::apply`]; the validator and termination checks read it
//! by shared reference.

use super::moves::{Move, Source};
use super::rules::{self, MoveError};
use super::types::{Board, Color, Hands};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One executed move in the append-only history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The accepted move line, verbatim as the player sent it.
    pub raw: String,
    /// Color that made the move.
    pub mover: Color,
    /// Board occupancy after the move.
    pub board: Board,
}

/// Complete referee-owned game state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    hands: Hands,
    history: Vec<HistoryEntry>,
    moves_since_capture: u32,
}

impl GameState {
    /// Creates the starting state: empty board, full hands.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            hands: Hands::new(),
            history: Vec::new(),
            moves_since_capture: 0,
        }
    }

    /// The board occupancy.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The hand supplies.
    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    /// Executed moves, oldest first. Never truncated during a game.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Executed moves since the last capture.
    pub fn moves_since_capture(&self) -> u32 {
        self.moves_since_capture
    }

    /// A color's total stone count, on the board plus in hand.
    pub fn total_pieces(&self, color: Color) -> u8 {
        self.board.count(color) + self.hands.get(color)
    }

    /// Validates a proposed move for `color` without mutating anything.
    pub fn validate(&self, color: Color, mv: &Move) -> Result<(), MoveError> {
        rules::validate(&self.board, &self.hands, color, mv)
    }

    /// Applies a move that already passed [`GameState::validate`].
    ///
    /// Performs no rule checks; calling this with an unvalidated move
    /// corrupts the game. `raw` is the wire line recorded in history
    /// and compared by the repetition detector.
    #[instrument(skip(self, mv, raw), fields(mover = %color, mv = %mv))]
    pub fn apply(&mut self, color: Color, mv: &Move, raw: &str) {
        match mv.source {
            Source::Hand(_) => self.hands.take(color),
            Source::Board(source) => self.board.clear(source),
        }
        self.board.set(mv.target, color);

        match mv.removal {
            Some(capture) => {
                self.board.clear(capture);
                self.moves_since_capture = 0;
            }
            None => self.moves_since_capture += 1,
        }

        self.history.push(HistoryEntry {
            raw: raw.trim().to_string(),
            mover: color,
            board: self.board.clone(),
        });
        debug!(
            ply = self.history.len(),
            since_capture = self.moves_since_capture,
            "move executed"
        );
    }

    /// Checks whether the last `2 * cycle` move lines repeat with
    /// period `cycle`.
    ///
    /// Comparison is over the literal move strings, not board states:
    /// two encodings that reach the same position do not count as a
    /// repeat.
    pub fn history_repeats(&self, cycle: usize) -> bool {
        if cycle == 0 || self.history.len() < 2 * cycle {
            return false;
        }
        let tail = &self.history[self.history.len() - 2 * cycle..];
        tail[..cycle]
            .iter()
            .zip(&tail[cycle..])
            .all(|(a, b)| a.raw == b.raw)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::lasker::geometry::Position;
    use crate::games::lasker::types::HAND_SIZE;

    fn apply_line(state: &mut GameState, color: Color, line: &str) {
        let mv = Move::parse(line).unwrap();
        state.validate(color, &mv).unwrap();
        state.apply(color, &mv, line);
    }

    #[test]
    fn test_hand_placement_decrements_hand() {
        let mut state = GameState::new();
        apply_line(&mut state, Color::Blue, "h1 d2 r0");

        assert_eq!(state.board().get(Position::D2), Some(Color::Blue));
        assert_eq!(state.hands().get(Color::Blue), HAND_SIZE - 1);
        assert_eq!(state.hands().get(Color::Orange), HAND_SIZE);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_capture_clears_stone_and_resets_drought() {
        let mut state = GameState::new();
        apply_line(&mut state, Color::Blue, "h1 d1 r0");
        apply_line(&mut state, Color::Orange, "h2 a4 r0");
        apply_line(&mut state, Color::Blue, "h1 d2 r0");
        apply_line(&mut state, Color::Orange, "h2 a7 r0");
        assert_eq!(state.moves_since_capture(), 4);

        apply_line(&mut state, Color::Blue, "h1 d3 a4");
        assert_eq!(state.board().get(Position::A4), None);
        assert_eq!(state.moves_since_capture(), 0);
        // Captured stone is gone for good: not back in hand.
        assert_eq!(state.total_pieces(Color::Orange), HAND_SIZE - 1);
    }

    #[test]
    fn test_history_repetition_period_four() {
        let mut state = GameState::new();
        let oscillation = [
            "d1 d2 r0", "e4 e3 r0", "d2 d1 r0", "e3 e4 r0", "d1 d2 r0", "e4 e3 r0", "d2 d1 r0",
            "e3 e4 r0",
        ];
        for (i, line) in oscillation.iter().enumerate() {
            let mover = if i % 2 == 0 { Color::Blue } else { Color::Orange };
            // Bypass validation: only the literal strings matter here.
            state.history.push(HistoryEntry {
                raw: line.to_string(),
                mover,
                board: Board::new(),
            });
        }
        assert!(state.history_repeats(4));
        assert!(!state.history_repeats(3));
    }

    #[test]
    fn test_history_no_repetition_for_fresh_moves() {
        let mut state = GameState::new();
        for line in ["d1 d2 r0", "e4 e3 r0", "d2 d3 r0", "e3 e4 r0"] {
            state.history.push(HistoryEntry {
                raw: line.to_string(),
                mover: Color::Blue,
                board: Board::new(),
            });
        }
        assert!(!state.history_repeats(2));
        assert!(!state.history_repeats(4));
    }
}
