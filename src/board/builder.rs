//! Fluent builder for constructing positions.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, PieceKind::King)
//!     .piece("e8".parse().unwrap(), Color::Black, PieceKind::King)
//!     .piece("a2".parse().unwrap(), Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.all_pieces().count(), 3);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    /// Start from an empty board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Start from an existing board, history included.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        BoardBuilder { board }
    }

    /// Start from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                for square in kind.home_squares(color) {
                    builder.board.place(Piece::new(kind, color), square);
                }
            }
        }
        builder
    }

    /// Place a piece, replacing any piece already on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.place(Piece::new(kind, color), square);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.remove(square);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let board = BoardBuilder::starting_position().build();
        assert_eq!(board.all_pieces().count(), 32);
        assert!(board.occupant_at(sq("d1")).unwrap().is(PieceKind::Queen));
        assert!(board.occupant_at(sq("e8")).unwrap().is(PieceKind::King));
        assert!(board.occupant_at(sq("g8")).unwrap().is(PieceKind::Knight));
        assert_eq!(board.occupant_at(sq("h7")).unwrap().color(), Color::Black);
    }

    #[test]
    fn test_two_kings() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .build();

        assert!(board.occupant_at(sq("e1")).is_some());
        assert!(board.occupant_at(sq("e8")).is_some());
        assert!(board.occupant_at(sq("a1")).is_none());
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position().clear(sq("a1")).build();

        assert!(board.occupant_at(sq("a1")).is_none());
        assert!(board.occupant_at(sq("b1")).is_some());
    }

    #[test]
    fn test_from_board_keeps_history() {
        let start = Board::standard();
        let played = start.apply(&start.contextualize("e2e4".parse().unwrap()));
        let board = BoardBuilder::from_board(played.clone())
            .piece(sq("a5"), Color::Black, PieceKind::Knight)
            .build();
        assert_eq!(board.last_move(), played.last_move());
        assert!(board.occupant_at(sq("e4")).unwrap().has_moved());
    }
}
