//! A chess rules engine.
//!
//! Decides whether a move is legal for a given position and produces the
//! resulting position when it is. Boards are plain values: every
//! hypothetical move is simulated on an independent copy, so rejecting a
//! move never disturbs the authoritative game state.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Move};
//!
//! let board = Board::standard();
//! let mv: Move = "e2e4".parse().unwrap();
//! let next = board.contextualize(mv).process().expect("legal opening move");
//! assert_eq!(next.is_check(), None);
//! assert!(next.occupant_at("e4".parse().unwrap()).is_some());
//! ```

// Logging goes through the `log` facade only when the `logging` feature is on.
macro_rules! log_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::trace!($($arg)+);
    };
}

macro_rules! log_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::debug!($($arg)+);
    };
}

pub mod board;
pub mod game;

pub use board::{Board, BoardMove, Color, Move, Piece, PieceKind, Square};
pub use game::{Game, GameConfig};
