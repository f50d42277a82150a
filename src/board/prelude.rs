//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, BoardMove, CastleSide, CheckStatus, Color, IllegalReason, Move,
    MoveError, Piece, PieceKind, Square,
};
