//! A move bound to the board it is played on.
//!
//! `BoardMove` resolves the squares of a [`Move`] to actual pieces and
//! classifies the move: capture, en passant, promotion or castling.

use std::fmt;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::PromotionError;
use super::{Board, Color, Move, Piece, PieceKind, Square};

/// Which rook the king castles with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    /// File of the rook before castling.
    #[must_use]
    pub const fn rook_file(self) -> usize {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// Files of the king and the rook after castling.
    #[must_use]
    pub const fn castled_files(self) -> (usize, usize) {
        match self {
            CastleSide::King => (6, 5),
            CastleSide::Queen => (2, 3),
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::King => write!(f, "kingside"),
            CastleSide::Queen => write!(f, "queenside"),
        }
    }
}

/// File the king starts on.
pub(crate) const KING_FILE: usize = 4;

// King-to-target and rook-to-king spellings are both accepted.
const CASTLING_TEXT: [(Color, &str); 14] = [
    (Color::White, "e1g1"),
    (Color::White, "e1h1"),
    (Color::White, "e1c1"),
    (Color::White, "e1b1"),
    (Color::White, "e1a1"),
    (Color::White, "h1e1"),
    (Color::White, "a1e1"),
    (Color::Black, "e8g8"),
    (Color::Black, "e8h8"),
    (Color::Black, "e8c8"),
    (Color::Black, "e8b8"),
    (Color::Black, "e8a8"),
    (Color::Black, "h8e8"),
    (Color::Black, "a8e8"),
];

static CASTLING_MOVES: Lazy<Vec<(Color, Move)>> = Lazy::new(|| {
    CASTLING_TEXT
        .iter()
        .filter_map(|&(color, text)| text.parse().ok().map(|mv| (color, mv)))
        .collect()
});

/// A [`Move`] evaluated against a specific [`Board`].
#[derive(Clone, Copy, Debug)]
pub struct BoardMove<'a> {
    board: &'a Board,
    mv: Move,
    promotion: PieceKind,
}

impl Board {
    /// Bind `mv` to this board.
    #[must_use]
    pub fn contextualize(&self, mv: Move) -> BoardMove<'_> {
        BoardMove::new(self, mv)
    }
}

impl<'a> BoardMove<'a> {
    #[must_use]
    pub fn new(board: &'a Board, mv: Move) -> Self {
        BoardMove {
            board,
            mv,
            promotion: PieceKind::Queen,
        }
    }

    /// Choose what a promoting pawn becomes (Queen unless told otherwise).
    pub fn promote_to(mut self, kind: PieceKind) -> Result<Self, PromotionError> {
        if !kind.is_promotion_target() {
            return Err(PromotionError { kind });
        }
        self.promotion = kind;
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    #[inline]
    #[must_use]
    pub fn as_move(&self) -> Move {
        self.mv
    }

    /// The piece on the origin square.
    #[inline]
    #[must_use]
    pub fn piece(&self) -> Option<&'a Piece> {
        self.board.occupant_at(self.mv.origin())
    }

    /// The piece on the destination square.
    #[inline]
    #[must_use]
    pub fn target(&self) -> Option<&'a Piece> {
        self.board.occupant_at(self.mv.destination())
    }

    /// True if the move takes a piece, en passant included.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.target().is_some() || self.is_en_passant()
    }

    /// The square beside the origin on the destination's file: where a
    /// pawn taken en passant stands.
    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        Square::new(self.mv.origin().rank(), self.mv.destination().file())
    }

    /// A pawn's single diagonal step onto an empty square, taking the enemy
    /// pawn beside it that has just advanced two squares.
    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        let Some(pawn) = self.piece().filter(|p| p.is(PieceKind::Pawn)) else {
            return false;
        };
        if !self.mv.is_diagonal() || self.mv.horizontal().abs() != 1 || self.target().is_some() {
            return false;
        }
        let Some(beside) = self.en_passant_square() else {
            return false;
        };
        let Some(victim) = self.board.occupant_at(beside) else {
            return false;
        };

        victim.is(PieceKind::Pawn)
            && victim.color() != pawn.color()
            && victim.last_vertical().is_some_and(|v| v.abs() == 2)
            && self
                .board
                .last_move()
                .is_some_and(|last| last.destination() == beside)
    }

    /// True if a pawn reaches the far rank.
    #[must_use]
    pub fn promotes(&self) -> bool {
        self.piece().is_some_and(|p| {
            p.is(PieceKind::Pawn)
                && self.mv.destination().rank() == p.color().pawn_promotion_rank()
        })
    }

    /// The kind the pawn turns into, if the move promotes.
    #[must_use]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotes().then_some(self.promotion)
    }

    /// True if the move is one of the canonical castling moves, made by the
    /// king or a rook while that side's king is still on its home square.
    ///
    /// Whether castling is actually allowed is decided by the rule engine.
    #[must_use]
    pub fn is_castling(&self) -> bool {
        let Some(piece) = self.piece() else {
            return false;
        };
        if !piece.is(PieceKind::King) && !piece.is(PieceKind::Rook) {
            return false;
        }
        let color = piece.color();
        let king_home = Square::new(color.back_rank(), KING_FILE);
        let king_at_home = king_home
            .and_then(|sq| self.board.occupant_at(sq))
            .is_some_and(|k| k.is(PieceKind::King) && k.color() == color);
        if !king_at_home {
            return false;
        }

        CASTLING_MOVES
            .iter()
            .any(|&(c, mv)| c == color && mv == self.mv)
    }

    /// Side of a castling move, `None` for any other move.
    ///
    /// A king castles kingside when it moves towards the h-file; a rook
    /// castles on the side of the corner it starts from.
    #[must_use]
    pub fn castling_side(&self) -> Option<CastleSide> {
        if !self.is_castling() {
            return None;
        }
        let towards_h = match self.piece() {
            Some(p) if p.is(PieceKind::Rook) => self.mv.origin().file() > KING_FILE,
            _ => self.mv.horizontal() > 0,
        };
        Some(if towards_h {
            CastleSide::King
        } else {
            CastleSide::Queen
        })
    }

    /// Side of a castling move.
    ///
    /// # Panics
    ///
    /// Panics if the move is not a castling move; check
    /// [`is_castling`](Self::is_castling) first.
    #[must_use]
    pub fn castle_side(&self) -> CastleSide {
        match self.castling_side() {
            Some(side) => side,
            None => panic!("castle_side queried for non-castling move {}", self.mv),
        }
    }

    /// The board after this move, legal or not.
    #[must_use]
    pub fn resulting_board(&self) -> Board {
        match (self.castling_side(), self.piece()) {
            (Some(side), Some(piece)) => self.board.apply_castle(side, piece.color()),
            _ => self.board.apply(self),
        }
    }
}

impl fmt::Display for BoardMove<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mv)
    }
}
