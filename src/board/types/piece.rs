//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns true if a pawn may promote to this kind
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors (White first)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_promotion_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A single chess piece.
///
/// `position` mirrors the square the piece occupies on its board. It is
/// only ever changed by the board's placement routine, which updates the
/// square and the piece together.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Option<Square>,
    captured: bool,
    last_vertical: Option<isize>,
}

impl Piece {
    /// A fresh, unplaced piece.
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            position: None,
            captured: false,
            last_vertical: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The square this piece stands on, `None` before it is placed.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Option<Square> {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn is_captured(&self) -> bool {
        self.captured
    }

    /// Rank displacement of this piece's most recent move, `None` if it
    /// has never moved.
    #[inline]
    #[must_use]
    pub const fn last_vertical(&self) -> Option<isize> {
        self.last_vertical
    }

    #[inline]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.last_vertical.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is(&self, kind: PieceKind) -> bool {
        self.kind == kind
    }

    /// Unicode glyph for display. Filled glyphs are White's, matching a
    /// dark terminal background.
    #[must_use]
    pub const fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '\u{265A}',
            (Color::White, PieceKind::Queen) => '\u{265B}',
            (Color::White, PieceKind::Rook) => '\u{265C}',
            (Color::White, PieceKind::Bishop) => '\u{265D}',
            (Color::White, PieceKind::Knight) => '\u{265E}',
            (Color::White, PieceKind::Pawn) => '\u{265F}',
            (Color::Black, PieceKind::King) => '\u{2654}',
            (Color::Black, PieceKind::Queen) => '\u{2655}',
            (Color::Black, PieceKind::Rook) => '\u{2656}',
            (Color::Black, PieceKind::Bishop) => '\u{2657}',
            (Color::Black, PieceKind::Knight) => '\u{2658}',
            (Color::Black, PieceKind::Pawn) => '\u{2659}',
        }
    }

    pub(crate) fn set_position(&mut self, square: Option<Square>) {
        self.position = square;
    }

    pub(crate) fn record_move(&mut self, vertical: isize) {
        self.last_vertical = Some(vertical);
    }

    /// The position is kept: it records where the piece was taken.
    pub(crate) fn mark_captured(&mut self) {
        self.captured = true;
    }

    pub(crate) fn promote(&mut self, kind: PieceKind) {
        self.kind = kind;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
