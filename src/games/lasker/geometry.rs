//! Fixed board graph for Lasker Morris: the 24 valid intersections,
//! their adjacency lists, and the 16 mill lines.
//!
//! Everything in this module is a constant of the game variant. There
//! are no failure modes here; unknown labels are rejected at parse
//! time by [`Position::from_label`].

use serde::{Deserialize, Serialize};

/// A valid intersection on the Lasker Morris board.
///
/// Labels follow the `<column><row>` convention of the wire protocol
/// (`a1` through `g7`); only the 24 points that lie on board lines
/// exist as variants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// a1 (outer ring corner)
    A1,
    /// a4 (outer ring midpoint)
    A4,
    /// a7 (outer ring corner)
    A7,
    /// b2 (middle ring corner)
    B2,
    /// b4 (middle ring midpoint)
    B4,
    /// b6 (middle ring corner)
    B6,
    /// c3 (inner ring corner)
    C3,
    /// c4 (inner ring midpoint)
    C4,
    /// c5 (inner ring corner)
    C5,
    /// d1 (outer ring midpoint)
    D1,
    /// d2 (middle ring midpoint)
    D2,
    /// d3 (inner ring midpoint)
    D3,
    /// d5 (inner ring midpoint)
    D5,
    /// d6 (middle ring midpoint)
    D6,
    /// d7 (outer ring midpoint)
    D7,
    /// e3 (inner ring corner)
    E3,
    /// e4 (inner ring midpoint)
    E4,
    /// e5 (inner ring corner)
    E5,
    /// f2 (middle ring corner)
    F2,
    /// f4 (middle ring midpoint)
    F4,
    /// f6 (middle ring corner)
    F6,
    /// g1 (outer ring corner)
    G1,
    /// g4 (outer ring midpoint)
    G4,
    /// g7 (outer ring corner)
    G7,
}

use Position::*;

/// Number of valid board positions.
pub const POSITION_COUNT: usize = 24;

/// All 16 mill lines: 8 along the rings and spokes of each axis.
pub static MILLS: [[Position; 3]; 16] = [
    // Horizontal mills
    [A1, A4, A7],
    [B2, B4, B6],
    [C3, C4, C5],
    [D1, D2, D3],
    [D5, D6, D7],
    [E3, E4, E5],
    [F2, F4, F6],
    [G1, G4, G7],
    // Vertical mills
    [A1, D1, G1],
    [B2, D2, F2],
    [C3, D3, E3],
    [A4, B4, C4],
    [E4, F4, G4],
    [C5, D5, E5],
    [B6, D6, F6],
    [A7, D7, G7],
];

impl Position {
    /// All 24 positions in label order.
    pub const ALL: [Position; POSITION_COUNT] = [
        A1, A4, A7, B2, B4, B6, C3, C4, C5, D1, D2, D3, D5, D6, D7, E3, E4, E5, F2, F4, F6, G1,
        G4, G7,
    ];

    /// Dense index for array-backed board storage.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire label for this position.
    pub fn label(self) -> &'static str {
        match self {
            A1 => "a1",
            A4 => "a4",
            A7 => "a7",
            B2 => "b2",
            B4 => "b4",
            B6 => "b6",
            C3 => "c3",
            C4 => "c4",
            C5 => "c5",
            D1 => "d1",
            D2 => "d2",
            D3 => "d3",
            D5 => "d5",
            D6 => "d6",
            D7 => "d7",
            E3 => "e3",
            E4 => "e4",
            E5 => "e5",
            F2 => "f2",
            F4 => "f4",
            F6 => "f6",
            G1 => "g1",
            G4 => "g4",
            G7 => "g7",
        }
    }

    /// Parses a wire label. Returns `None` for anything outside the
    /// fixed position set, including the 25 grid points that are not
    /// on board lines (`a2`, `d4`, ...).
    pub fn from_label(s: &str) -> Option<Position> {
        Position::ALL.iter().copied().find(|p| p.label() == s)
    }

    /// Positions reachable from this one in a single (non-flying)
    /// board move.
    pub fn adjacent(self) -> &'static [Position] {
        match self {
            A1 => &[A4, D1],
            A4 => &[A1, A7, B4],
            A7 => &[A4, D7],
            B2 => &[B4, D2],
            B4 => &[A4, B2, B6, C4],
            B6 => &[B4, D6],
            C3 => &[C4, D3],
            C4 => &[B4, C3, C5],
            C5 => &[C4, D5],
            D1 => &[A1, D2, G1],
            D2 => &[B2, D1, D3, F2],
            D3 => &[C3, D2, E3],
            D5 => &[C5, D6, E5],
            D6 => &[B6, D5, D7, F6],
            D7 => &[A7, D6, G7],
            E3 => &[D3, E4],
            E4 => &[E3, E5, F4],
            E5 => &[D5, E4],
            F2 => &[D2, F4],
            F4 => &[E4, F2, F6, G4],
            F6 => &[D6, F4],
            G1 => &[D1, G4],
            G4 => &[F4, G1, G7],
            G7 => &[D7, G4],
        }
    }

    /// Checks whether `other` is one step away on a board line.
    pub fn is_adjacent_to(self, other: Position) -> bool {
        self.adjacent().contains(&other)
    }

    /// The mill lines that run through this position.
    pub fn mills(self) -> impl Iterator<Item = &'static [Position; 3]> {
        MILLS.iter().filter(move |mill| mill.contains(&self))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Position {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_label(s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_is_symmetric() {
        for pos in Position::ALL {
            for neighbor in pos.adjacent() {
                assert!(
                    neighbor.is_adjacent_to(pos),
                    "{pos} -> {neighbor} is not symmetric"
                );
            }
        }
    }

    #[test]
    fn test_every_position_lies_on_two_mills() {
        for pos in Position::ALL {
            assert_eq!(pos.mills().count(), 2, "{pos}");
        }
    }

    #[test]
    fn test_label_round_trip() {
        for pos in Position::ALL {
            assert_eq!(Position::from_label(pos.label()), Some(pos));
        }
        assert_eq!(Position::from_label("d4"), None);
        assert_eq!(Position::from_label("a2"), None);
        assert_eq!(Position::from_label("x9"), None);
    }
}
