//! Move validation for Lasker Morris.
//!
//! [`validate`] is a pure function over the current board, hands, and
//! a proposed move: it never mutates state, evaluating mill formation
//! against a hypothetical application of the move. Checks run in a
//! fixed order and the first violation wins, so replaying the same
//! move against the same state always yields the same rejection.

use super::geometry::Position;
use super::moves::{Move, Source};
use super::types::{Board, Color, Hands};
use derive_more::{Display, Error};
use tracing::instrument;

/// Rejection reasons for a proposed move.
///
/// The referee forfeits the mover identically for every variant; the
/// distinction exists for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Target position is occupied (existence is checked at parse time).
    #[display("target position is not a legal empty point")]
    BadTarget,
    /// Hand source is empty or the opponent's marker, or the board
    /// source holds no stone.
    #[display("source is not a usable hand or board stone")]
    BadSource,
    /// Board source is not occupied by the mover's own color.
    #[display("source stone is not owned by the mover")]
    WrongOwner,
    /// Board move to a non-adjacent point while holding more than 3
    /// stones on the board.
    #[display("target is not adjacent to source")]
    AdjacencyViolation,
    /// Move completes a mill but names no capture.
    #[display("mill formed but no capture named")]
    MissingRequiredCapture,
    /// Named capture is empty, the mover's own stone, or a protected
    /// mill stone while unprotected stones remain.
    #[display("named capture target is not removable")]
    IllegalCaptureTarget,
    /// Capture named without completing a mill.
    #[display("capture named without forming a mill")]
    CaptureWithoutMill,
}

impl MoveError {
    /// Stable machine-readable reason code.
    pub fn reason_code(self) -> &'static str {
        match self {
            MoveError::BadTarget => "bad-target",
            MoveError::BadSource => "bad-source",
            MoveError::WrongOwner => "wrong-owner",
            MoveError::AdjacencyViolation => "adjacency-violation",
            MoveError::MissingRequiredCapture => "missing-required-capture",
            MoveError::IllegalCaptureTarget => "illegal-capture-target",
            MoveError::CaptureWithoutMill => "capture-without-mill",
        }
    }
}

/// Validates a proposed move for `color` against the current state.
///
/// Checks run in rule order with short-circuit: target, source,
/// adjacency/flying, mill formation, capture legality.
#[instrument(skip(board, hands), fields(mover = %color))]
pub fn validate(board: &Board, hands: &Hands, color: Color, mv: &Move) -> Result<(), MoveError> {
    // 1. Target must be empty.
    if !board.is_empty(mv.target) {
        return Err(MoveError::BadTarget);
    }

    match mv.source {
        // 2a. Hand source: must be the mover's own marker with stones left.
        Source::Hand(hand_color) => {
            if hand_color != color || hands.get(color) == 0 {
                return Err(MoveError::BadSource);
            }
        }
        // 2b. Board source: must hold the mover's own stone.
        Source::Board(source) => {
            match board.get(source) {
                Some(owner) if owner == color => {}
                Some(_) => return Err(MoveError::WrongOwner),
                None => return Err(MoveError::BadSource),
            }
            // 3. Adjacency applies until the mover is down to exactly
            // 3 board stones, at which point it may fly anywhere.
            if board.count(color) > 3 && !mv.target.is_adjacent_to(source) {
                return Err(MoveError::AdjacencyViolation);
            }
        }
    }

    // 4/5/6. Mill formation decides whether a capture is required,
    // forbidden, and whether the named capture target is legal.
    let vacated = match mv.source {
        Source::Board(source) => Some(source),
        Source::Hand(_) => None,
    };
    let mill_formed = forms_mill(board, color, mv.target, vacated);

    match (mill_formed, mv.removal) {
        (true, None) => Err(MoveError::MissingRequiredCapture),
        (false, Some(_)) => Err(MoveError::CaptureWithoutMill),
        (false, None) => Ok(()),
        (true, Some(capture)) => {
            if is_capturable(board, color.opponent(), capture) {
                Ok(())
            } else {
                Err(MoveError::IllegalCaptureTarget)
            }
        }
    }
}

/// Checks whether placing `color` at `target` completes a mill,
/// hypothetically: the target counts as occupied by `color` and the
/// vacated source of an on-board move counts as empty.
pub fn forms_mill(
    board: &Board,
    color: Color,
    target: Position,
    vacated: Option<Position>,
) -> bool {
    target.mills().any(|mill| {
        mill.iter().all(|&pos| {
            if pos == target {
                true
            } else if Some(pos) == vacated {
                false
            } else {
                board.get(pos) == Some(color)
            }
        })
    })
}

/// Checks whether the stone at `pos` is part of a completed mill of
/// its own color.
pub fn in_mill(board: &Board, pos: Position) -> bool {
    let Some(owner) = board.get(pos) else {
        return false;
    };
    pos.mills()
        .any(|mill| mill.iter().all(|&p| board.get(p) == Some(owner)))
}

/// Checks whether every stone of `color` on the board sits inside a
/// completed mill.
pub fn all_in_mills(board: &Board, color: Color) -> bool {
    Position::ALL
        .iter()
        .filter(|&&pos| board.get(pos) == Some(color))
        .all(|&pos| in_mill(board, pos))
}

/// Capture legality: the named stone must belong to `victim`, and mill
/// stones are protected while the victim still has stones outside
/// mills.
fn is_capturable(board: &Board, victim: Color, capture: Position) -> bool {
    if board.get(capture) != Some(victim) {
        return false;
    }
    !in_mill(board, capture) || all_in_mills(board, victim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::lasker::moves::Move;

    fn parse(line: &str) -> Move {
        Move::parse(line).unwrap()
    }

    #[test]
    fn test_mill_detection_hypothetical() {
        let mut board = Board::new();
        board.set(Position::D1, Color::Blue);
        board.set(Position::D2, Color::Blue);

        assert!(forms_mill(&board, Color::Blue, Position::D3, None));
        assert!(!forms_mill(&board, Color::Orange, Position::D3, None));
        // Sliding d2 -> d3 vacates d2, so the d1-d2-d3 line stays open.
        assert!(!forms_mill(
            &board,
            Color::Blue,
            Position::D3,
            Some(Position::D2)
        ));
    }

    #[test]
    fn test_mill_invariant_holds_for_all_lines() {
        for mill in crate::games::lasker::geometry::MILLS {
            let mut board = Board::new();
            board.set(mill[0], Color::Blue);
            board.set(mill[1], Color::Blue);
            assert!(
                forms_mill(&board, Color::Blue, mill[2], None),
                "mill {mill:?} not detected"
            );
        }
    }

    #[test]
    fn test_capture_prefers_unprotected_stones() {
        let mut board = Board::new();
        // Blue about to complete d1-d2-d3.
        board.set(Position::D1, Color::Blue);
        board.set(Position::D2, Color::Blue);
        // Orange has a completed mill plus one loose stone.
        board.set(Position::A1, Color::Orange);
        board.set(Position::A4, Color::Orange);
        board.set(Position::A7, Color::Orange);
        board.set(Position::G7, Color::Orange);
        let hands = Hands::new();

        // Loose stone is removable, mill stone is not.
        assert!(validate(&board, &hands, Color::Blue, &parse("h1 d3 g7")).is_ok());
        assert_eq!(
            validate(&board, &hands, Color::Blue, &parse("h1 d3 a4")),
            Err(MoveError::IllegalCaptureTarget)
        );

        // Once every orange stone is in a mill, any stone goes.
        board.clear(Position::G7);
        assert!(validate(&board, &hands, Color::Blue, &parse("h1 d3 a4")).is_ok());
    }

    #[test]
    fn test_cannot_capture_own_or_empty() {
        let mut board = Board::new();
        board.set(Position::D1, Color::Blue);
        board.set(Position::D2, Color::Blue);
        board.set(Position::G7, Color::Blue);
        let hands = Hands::new();

        assert_eq!(
            validate(&board, &hands, Color::Blue, &parse("h1 d3 g7")),
            Err(MoveError::IllegalCaptureTarget)
        );
        assert_eq!(
            validate(&board, &hands, Color::Blue, &parse("h1 d3 a1")),
            Err(MoveError::IllegalCaptureTarget)
        );
    }
}
