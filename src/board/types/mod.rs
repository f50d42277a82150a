//! Core chess types.
//!
//! - `Square` - a board coordinate, plus the file/rank index mapping
//! - `Color`, `PieceKind` and `Piece` - the pieces and their owners
//! - `Move` - an origin/destination pair and its geometry

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use square::{file_to_index, rank_to_index, Square};
