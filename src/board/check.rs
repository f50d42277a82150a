//! Check detection.
//!
//! Recomputed from a full piece scan on every call. Reachability here is
//! pattern plus path blocking (pawns only attack diagonally); it never goes
//! through the rule engine.

use super::{Board, Color, Piece, PieceKind, Square};

/// Whether each side's king is attacked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckStatus {
    pub white: bool,
    pub black: bool,
}

impl CheckStatus {
    #[must_use]
    pub const fn is_checked(self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

impl Board {
    /// True if `attacker` could capture on `square`.
    fn reaches(&self, attacker: &Piece, square: Square) -> bool {
        attacker
            .attacking_moves()
            .into_iter()
            .any(|mv| mv.destination() == square && self.path_blocker(attacker, mv).is_none())
    }

    /// True if any piece of color `by` attacks `square`.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces_of(by).any(|p| self.reaches(p, square))
    }

    /// The color of an attacked king, if any.
    ///
    /// Pieces are scanned in [`all_pieces`](Self::all_pieces) order and the
    /// first attacked king found is reported. A board where both kings are
    /// attacked (only reachable through direct placement) therefore reports
    /// whichever is found first; use [`check_status`](Self::check_status)
    /// when both matter.
    #[must_use]
    pub fn is_check(&self) -> Option<Color> {
        self.all_pieces().find_map(|attacker| {
            attacker.attacking_moves().into_iter().find_map(|mv| {
                let target = self.occupant_at(mv.destination())?;
                let hit = target.is(PieceKind::King)
                    && target.color() != attacker.color()
                    && self.path_blocker(attacker, mv).is_none();
                hit.then(|| target.color())
            })
        })
    }

    /// True if any king of `color` is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.pieces_of(color)
            .filter(|p| p.is(PieceKind::King))
            .filter_map(Piece::position)
            .any(|sq| self.is_attacked(sq, color.opponent()))
    }

    /// Check state of both kings.
    #[must_use]
    pub fn check_status(&self) -> CheckStatus {
        CheckStatus {
            white: self.is_in_check(Color::White),
            black: self.is_in_check(Color::Black),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_queen_gives_check() {
        let board = BoardBuilder::new()
            .piece(sq("e4"), Color::White, PieceKind::Queen)
            .piece(sq("e5"), Color::Black, PieceKind::King)
            .build();
        assert_eq!(board.is_check(), Some(Color::Black));
    }

    #[test]
    fn test_queen_misses_knight_distance() {
        let board = BoardBuilder::new()
            .piece(sq("e4"), Color::White, PieceKind::Queen)
            .piece(sq("f6"), Color::Black, PieceKind::King)
            .build();
        assert_eq!(board.is_check(), None);
    }

    #[test]
    fn test_blocked_attack_is_not_check() {
        let board = BoardBuilder::new()
            .piece(sq("a1"), Color::White, PieceKind::Rook)
            .piece(sq("a4"), Color::White, PieceKind::Pawn)
            .piece(sq("a8"), Color::Black, PieceKind::King)
            .build();
        assert_eq!(board.is_check(), None);
        assert!(!board.is_attacked(sq("a8"), Color::White));
        assert!(board.is_attacked(sq("a3"), Color::White));
    }

    #[test]
    fn test_knight_jumps_into_check() {
        let board = Board::standard();
        let board = BoardBuilder::from_board(board)
            .piece(sq("d3"), Color::Black, PieceKind::Knight)
            .build();
        assert_eq!(board.is_check(), Some(Color::White));
    }

    #[test]
    fn test_pawn_push_does_not_attack() {
        let board = BoardBuilder::new()
            .piece(sq("e6"), Color::White, PieceKind::Pawn)
            .piece(sq("e7"), Color::Black, PieceKind::King)
            .build();
        assert_eq!(board.is_check(), None);

        let board = BoardBuilder::new()
            .piece(sq("d6"), Color::White, PieceKind::Pawn)
            .piece(sq("e7"), Color::Black, PieceKind::King)
            .build();
        assert_eq!(board.is_check(), Some(Color::Black));
    }

    #[test]
    fn test_own_pieces_never_check() {
        let board = BoardBuilder::new()
            .piece(sq("e4"), Color::White, PieceKind::Queen)
            .piece(sq("e5"), Color::White, PieceKind::King)
            .build();
        assert_eq!(board.is_check(), None);
    }

    #[test]
    fn test_standard_position_is_quiet() {
        let board = Board::standard();
        assert_eq!(board.is_check(), None);
        assert_eq!(board.check_status(), CheckStatus::default());
    }

    #[test]
    fn test_both_kings_attacked() {
        let board = BoardBuilder::new()
            .piece(sq("a1"), Color::White, PieceKind::Rook)
            .piece(sq("a8"), Color::Black, PieceKind::King)
            .piece(sq("h8"), Color::Black, PieceKind::Rook)
            .piece(sq("h1"), Color::White, PieceKind::King)
            .build();
        // a1 is scanned first, so Black's king is reported.
        assert_eq!(board.is_check(), Some(Color::Black));
        let status = board.check_status();
        assert!(status.is_checked(Color::White));
        assert!(status.is_checked(Color::Black));
    }
}
