//! Board representation and the rules of chess.
//!
//! A [`Board`] is a flat 64-square value. A [`Move`] is a plain coordinate
//! pair; binding it to a board with [`Board::contextualize`] gives a
//! [`BoardMove`], which knows about captures, en passant, promotion and
//! castling, and can be judged by the rule engine.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Move};
//!
//! let board = Board::standard();
//! let blocked: Move = "c1f4".parse().unwrap();
//! assert!(!board.contextualize(blocked).legal());
//! ```

mod board_move;
mod builder;
mod check;
mod display;
mod error;
mod make_move;
mod pattern;
pub mod prelude;
mod rules;
mod setup;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use board_move::{BoardMove, CastleSide};
pub use builder::BoardBuilder;
pub use check::CheckStatus;
pub use error::{MoveError, PromotionError, SetupError, SquareError};
pub use pattern::{create_pawns, create_pieces};
pub use rules::IllegalReason;
pub use state::Board;
pub use types::{file_to_index, rank_to_index, Color, Move, Piece, PieceKind, Square};
