//! Board graph sanity checks.

use lasker_referee::games::lasker::{MILLS, POSITION_COUNT, Position};

#[test]
fn test_position_set_is_fixed() {
    assert_eq!(Position::ALL.len(), POSITION_COUNT);
    // The 7x7 grid has 49 points; 25 of them are off the board lines.
    let mut valid = 0;
    for row in 1..=7 {
        for col in 'a'..='g' {
            if Position::from_label(&format!("{col}{row}")).is_some() {
                valid += 1;
            }
        }
    }
    assert_eq!(valid, POSITION_COUNT);
}

#[test]
fn test_sixteen_mills() {
    assert_eq!(MILLS.len(), 16);
    for mill in MILLS {
        // Every mill is three distinct positions.
        assert_ne!(mill[0], mill[1]);
        assert_ne!(mill[1], mill[2]);
        assert_ne!(mill[0], mill[2]);
    }
}

#[test]
fn test_mills_containing_matches_global_table() {
    for pos in Position::ALL {
        for mill in pos.mills() {
            assert!(mill.contains(&pos));
            assert!(MILLS.contains(mill));
        }
    }
}

#[test]
fn test_cross_points_have_four_neighbors() {
    for pos in [Position::B4, Position::D2, Position::D6, Position::F4] {
        assert_eq!(pos.adjacent().len(), 4, "{pos}");
    }
    for pos in [Position::A1, Position::C3, Position::G7, Position::E5] {
        assert_eq!(pos.adjacent().len(), 2, "{pos}");
    }
}

#[test]
fn test_adjacency_never_reflexive() {
    for pos in Position::ALL {
        assert!(!pos.is_adjacent_to(pos));
    }
}
