use super::{Color, Move, Piece, PieceKind, Square};

/// An 8x8 board. Each square holds at most one piece.
///
/// `Board` is a plain value: cloning it yields a fully independent board,
/// which is how moves are simulated before being committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) captured: Vec<Piece>,
    pub(crate) last_move: Option<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with all 64 squares empty.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            captured: Vec::new(),
            last_move: None,
        }
    }

    /// Put `piece` on `square`, replacing whatever stood there.
    ///
    /// No legality checking at all; meant for setup and fixtures.
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.put(piece, square);
    }

    /// Take the piece off `square`, if any.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let mut piece = self.squares[square.as_index()].take()?;
        piece.set_position(None);
        Some(piece)
    }

    #[inline]
    #[must_use]
    pub fn occupant_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.as_index()].as_ref()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.squares[square.as_index()].is_some()
    }

    /// Every piece on the board, scanning a1, b1, ..., h8.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten()
    }

    /// Every piece of one color, in the same order as [`all_pieces`](Self::all_pieces).
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.all_pieces().filter(move |p| p.color() == color)
    }

    /// Square of `color`'s king. With several kings on a fixture board the
    /// first one in scan order wins.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.is(PieceKind::King))
            .and_then(Piece::position)
    }

    /// Pieces captured so far, oldest first. Each has its captured flag set.
    #[must_use]
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    /// The most recent move applied to this board.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// The one place where a piece's position and its square are set.
    pub(crate) fn put(&mut self, mut piece: Piece, square: Square) {
        piece.set_position(Some(square));
        self.squares[square.as_index()] = Some(piece);
    }

    /// Clear `square`, moving its occupant to the captured list.
    pub(crate) fn capture_at(&mut self, square: Square) {
        if let Some(mut piece) = self.squares[square.as_index()].take() {
            piece.mark_captured();
            self.captured.push(piece);
        }
    }

    /// Move the occupant of `from` to `to`, capturing whatever stood on
    /// `to`. Does nothing if `from` is empty.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let Some(mut piece) = self.squares[from.as_index()].take() else {
            return;
        };
        piece.record_move(to.rank() as isize - from.rank() as isize);
        self.capture_at(to);
        self.put(piece, to);
    }
}
