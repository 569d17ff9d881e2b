//! Move representation and the three-token wire encoding.
//!
//! A move line is `"<source> <target> <removal>"`: source is a hand
//! marker (`h1`/`h2`) or a position label, target is a position label,
//! removal is a position label or the no-op token `r0`.

use super::geometry::Position;
use super::types::Color;
use derive_more::{Display, Error};

/// The no-capture token in the removal slot.
pub const NO_CAPTURE: &str = "r0";

/// Where the placed stone comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Drawn from the given color's hand supply.
    Hand(Color),
    /// Lifted from an occupied board position.
    Board(Position),
}

/// A proposed move, already lexed into typed parts but not yet
/// checked against the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Origin of the stone being placed.
    pub source: Source,
    /// Destination position.
    pub target: Position,
    /// Opponent stone to capture, or `None` for the `r0` no-op.
    pub removal: Option<Position>,
}

/// A move line that does not lex into the three-token wire form.
#[derive(Debug, Clone, Display, Error)]
pub enum MoveParseError {
    /// Line did not split into exactly three tokens.
    #[display("expected 3 tokens, got {found}")]
    WrongTokenCount {
        /// Number of tokens found.
        found: usize,
    },
    /// A token is neither a position label nor a known marker.
    #[display("unknown token '{token}'")]
    UnknownToken {
        /// The offending token.
        token: String,
    },
}

impl Move {
    /// Parses one protocol line into a move.
    ///
    /// Only the shape of the line is checked here; ownership,
    /// adjacency, and capture legality belong to the validator.
    pub fn parse(line: &str) -> Result<Move, MoveParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [source, target, removal] = tokens.as_slice() else {
            return Err(MoveParseError::WrongTokenCount {
                found: tokens.len(),
            });
        };

        let source = match Color::from_hand_marker(source) {
            Some(color) => Source::Hand(color),
            None => Source::Board(Position::from_label(source).ok_or_else(|| {
                MoveParseError::UnknownToken {
                    token: source.to_string(),
                }
            })?),
        };

        let target =
            Position::from_label(target).ok_or_else(|| MoveParseError::UnknownToken {
                token: target.to_string(),
            })?;

        let removal = if *removal == NO_CAPTURE {
            None
        } else {
            Some(Position::from_label(removal).ok_or_else(|| {
                MoveParseError::UnknownToken {
                    token: removal.to_string(),
                }
            })?)
        };

        Ok(Move {
            source,
            target,
            removal,
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.source {
            Source::Hand(color) => write!(f, "{}", color.hand_marker())?,
            Source::Board(pos) => write!(f, "{pos}")?,
        }
        write!(f, " {}", self.target)?;
        match self.removal {
            Some(pos) => write!(f, " {pos}"),
            None => write!(f, " {NO_CAPTURE}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hand_placement() {
        let mv = Move::parse("h1 d2 r0").unwrap();
        assert_eq!(mv.source, Source::Hand(Color::Blue));
        assert_eq!(mv.target, Position::D2);
        assert_eq!(mv.removal, None);
    }

    #[test]
    fn test_parse_board_move_with_capture() {
        let mv = Move::parse("d1 d2 a4").unwrap();
        assert_eq!(mv.source, Source::Board(Position::D1));
        assert_eq!(mv.target, Position::D2);
        assert_eq!(mv.removal, Some(Position::A4));
    }

    #[test]
    fn test_parse_rejects_wrong_token_count() {
        assert!(matches!(
            Move::parse("d1 d2"),
            Err(MoveParseError::WrongTokenCount { found: 2 })
        ));
        assert!(matches!(
            Move::parse("d1 d2 r0 extra"),
            Err(MoveParseError::WrongTokenCount { found: 4 })
        ));
        assert!(matches!(
            Move::parse(""),
            Err(MoveParseError::WrongTokenCount { found: 0 })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        for line in ["h3 d1 r0", "h1 x9 r0", "h1 d1 x9", "h1 d4 r0", "H1 D1 R0"] {
            assert!(
                matches!(Move::parse(line), Err(MoveParseError::UnknownToken { .. })),
                "line should be rejected: {line}"
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        for line in ["h1 d2 r0", "h2 a1 r0", "d1 d2 a4"] {
            let mv = Move::parse(line).unwrap();
            assert_eq!(mv.to_string(), line);
        }
    }
}
