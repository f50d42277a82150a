//! Producing new boards from moves.
//!
//! Both entry points return a fresh board and leave `self` untouched. They
//! do not check legality; run the move through the rule engine first.

use super::board_move::KING_FILE;
use super::{Board, BoardMove, CastleSide, Color, Move, Square};

impl Board {
    /// The board after `mv`: the piece relocated, any captured piece
    /// removed (the pawn beside the origin for en passant), and a
    /// promoting pawn replaced by its chosen piece.
    ///
    /// `mv` must have been contextualized against this board.
    #[must_use]
    pub fn apply(&self, mv: &BoardMove<'_>) -> Board {
        debug_assert!(std::ptr::eq(self, mv.board()));
        let m = mv.as_move();
        let mut next = self.clone();

        if mv.is_en_passant() {
            if let Some(beside) = mv.en_passant_square() {
                next.capture_at(beside);
            }
        }

        next.relocate(m.origin(), m.destination());

        if let Some(kind) = mv.promotion() {
            if let Some(pawn) = next.squares[m.destination().as_index()].as_mut() {
                pawn.promote(kind);
            }
        }

        next.last_move = Some(m);
        next
    }

    /// The board after `color` castles on `side`: king and rook both on
    /// their castled squares.
    #[must_use]
    pub fn apply_castle(&self, side: CastleSide, color: Color) -> Board {
        let rank = color.back_rank();
        let (king_to, rook_to) = side.castled_files();
        let squares = (
            Square::new(rank, KING_FILE),
            Square::new(rank, king_to),
            Square::new(rank, side.rook_file()),
            Square::new(rank, rook_to),
        );

        let mut next = self.clone();
        if let (Some(king_from), Some(king_to), Some(rook_from), Some(rook_to)) = squares {
            next.relocate(king_from, king_to);
            next.relocate(rook_from, rook_to);
            next.last_move = Some(Move::new(king_from, king_to));
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, PieceKind};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn test_apply_moves_piece_and_leaves_original() {
        let board = Board::standard();
        let next = board.apply(&board.contextualize(mv("g1f3")));

        assert!(board.is_occupied(sq("g1")));
        assert!(!board.is_occupied(sq("f3")));

        assert!(!next.is_occupied(sq("g1")));
        let knight = next.occupant_at(sq("f3")).unwrap();
        assert!(knight.is(PieceKind::Knight));
        assert_eq!(knight.position(), Some(sq("f3")));
        assert_eq!(next.last_move(), Some(mv("g1f3")));
    }

    #[test]
    fn test_apply_capture_records_captured_piece() {
        let board = BoardBuilder::new()
            .piece(sq("e4"), Color::White, PieceKind::Pawn)
            .piece(sq("f5"), Color::Black, PieceKind::Rook)
            .build();
        let next = board.apply(&board.contextualize(mv("e4f5")));
        assert!(next.occupant_at(sq("f5")).unwrap().is(PieceKind::Pawn));
        assert_eq!(next.captured_pieces().len(), 1);
        assert!(next.captured_pieces()[0].is(PieceKind::Rook));
        assert_eq!(next.all_pieces().count(), 1);
    }

    #[test]
    fn test_apply_en_passant_removes_victim() {
        let board = BoardBuilder::new()
            .piece(sq("c2"), Color::White, PieceKind::Pawn)
            .piece(sq("d4"), Color::Black, PieceKind::Pawn)
            .build();
        let board = board.apply(&board.contextualize(mv("d4d2")));
        let next = board.apply(&board.contextualize(mv("c2d3")));

        assert!(next.occupant_at(sq("d3")).unwrap().is(PieceKind::Pawn));
        assert!(!next.is_occupied(sq("d2")));
        assert!(!next.is_occupied(sq("c2")));
        assert_eq!(next.captured_pieces()[0].color(), Color::Black);
    }

    #[test]
    fn test_apply_promotes() {
        let board = BoardBuilder::new()
            .piece(sq("g7"), Color::White, PieceKind::Pawn)
            .build();
        let queen = board.apply(&board.contextualize(mv("g7g8")));
        assert!(queen.occupant_at(sq("g8")).unwrap().is(PieceKind::Queen));

        let rook_move = board
            .contextualize(mv("g7g8"))
            .promote_to(PieceKind::Rook)
            .unwrap();
        let rook = board.apply(&rook_move);
        assert!(rook.occupant_at(sq("g8")).unwrap().is(PieceKind::Rook));
    }

    #[test]
    fn test_apply_castle_kingside() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("h1"), Color::White, PieceKind::Rook)
            .build();
        let next = board.apply_castle(CastleSide::King, Color::White);
        assert!(next.occupant_at(sq("g1")).unwrap().is(PieceKind::King));
        assert!(next.occupant_at(sq("f1")).unwrap().is(PieceKind::Rook));
        assert!(!next.is_occupied(sq("e1")));
        assert!(!next.is_occupied(sq("h1")));
        assert_eq!(next.last_move(), Some(mv("e1g1")));
    }

    #[test]
    fn test_apply_castle_queenside_black() {
        let board = BoardBuilder::new()
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .piece(sq("a8"), Color::Black, PieceKind::Rook)
            .build();
        let next = board.apply_castle(CastleSide::Queen, Color::Black);
        assert_eq!(
            next.occupant_at(sq("c8")).unwrap().position(),
            Some(sq("c8"))
        );
        assert!(next.occupant_at(sq("d8")).unwrap().is(PieceKind::Rook));
        assert!(next.occupant_at(sq("d8")).unwrap().has_moved());
    }
}
