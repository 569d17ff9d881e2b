//! Lasker Morris rules: board geometry, move validation, and the
//! referee-owned game state.

pub mod geometry;
pub mod moves;
pub mod rules;
pub mod state;
pub mod types;

pub use geometry::{MILLS, POSITION_COUNT, Position};
pub use moves::{Move, MoveParseError, NO_CAPTURE, Source};
pub use rules::{MoveError, forms_mill, validate};
pub use state::{GameState, HistoryEntry};
pub use types::{Board, Color, HAND_SIZE, Hands, MIN_PIECES};
