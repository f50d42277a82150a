//! Error types for board, move and setup operations.

use std::fmt;

use super::{Color, PieceKind, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move construction failures.
///
/// Both variants mean the move does not describe two squares of the board;
/// neither ever reaches the rule engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move text is not `[a-h][1-8][a-h][1-8]`
    InvalidMoveFormat { notation: String },
    /// An offset from `origin` leaves the board
    OutOfGrid {
        origin: Square,
        horizontal: isize,
        vertical: isize,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidMoveFormat { notation } => {
                write!(f, "Invalid move format '{notation}', expected e.g. 'e2e4'")
            }
            MoveError::OutOfGrid {
                origin,
                horizontal,
                vertical,
            } => {
                write!(
                    f,
                    "Offset ({horizontal}, {vertical}) from {origin} leaves the board"
                )
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for standard setup failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// All home squares of the piece are already taken
    NoFreeHomeSquare { kind: PieceKind, color: Color },
    /// The piece set does not have the expected size
    WrongPieceCount { expected: usize, found: usize },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoFreeHomeSquare { kind, color } => {
                write!(f, "No free home square for {color} {kind:?}")
            }
            SetupError::WrongPieceCount { expected, found } => {
                write!(f, "Expected {expected} pieces, found {found}")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Error type for an impossible promotion choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionError {
    pub kind: PieceKind,
}

impl fmt::Display for PromotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A pawn cannot promote to {:?}", self.kind)
    }
}

impl std::error::Error for PromotionError {}
