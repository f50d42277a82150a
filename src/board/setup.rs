//! Standard game setup from piece sets handed over by the session layer.

use super::error::SetupError;
use super::pattern::{create_pawns, create_pieces};
use super::{Board, BoardBuilder, Piece, PieceKind, Square};

const SET_SIZE: usize = 16;

impl Board {
    /// The standard initial position.
    #[must_use]
    pub fn standard() -> Self {
        BoardBuilder::starting_position().build()
    }

    /// Build the initial position from a standard set of pieces.
    ///
    /// Convenience over [`setup_standard`](Self::setup_standard) with the
    /// sets from [`create_pieces`] and [`create_pawns`].
    pub fn from_standard_sets() -> Result<Self, SetupError> {
        let mut board = Board::empty();
        board.setup_standard(create_pieces(), create_pawns())?;
        Ok(board)
    }

    /// Place 16 back-rank pieces and 16 pawns on their starting squares.
    ///
    /// Each piece takes the first free home square scanning files a to h;
    /// each pawn takes the first free file of its starting rank.
    pub fn setup_standard(
        &mut self,
        pieces: Vec<Piece>,
        pawns: Vec<Piece>,
    ) -> Result<(), SetupError> {
        for set in [&pieces, &pawns] {
            if set.len() != SET_SIZE {
                return Err(SetupError::WrongPieceCount {
                    expected: SET_SIZE,
                    found: set.len(),
                });
            }
        }

        for piece in pieces.into_iter().chain(pawns) {
            let square = self.free_home_square(&piece).ok_or(SetupError::NoFreeHomeSquare {
                kind: piece.kind(),
                color: piece.color(),
            })?;
            self.place(piece, square);
        }

        log_debug!("standard setup placed {} pieces", self.all_pieces().count());
        Ok(())
    }

    fn free_home_square(&self, piece: &Piece) -> Option<Square> {
        let rank = if piece.is(PieceKind::Pawn) {
            piece.color().pawn_start_rank()
        } else {
            piece.color().back_rank()
        };
        (0..8)
            .filter_map(|file| Square::new(rank, file))
            .find(|&sq| piece.is_home_square(sq) && !self.is_occupied(sq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use std::collections::HashSet;

    #[test]
    fn test_setup_places_every_piece_once() {
        let board = Board::from_standard_sets().unwrap();
        assert_eq!(board.all_pieces().count(), 32);

        let squares: HashSet<Square> = board.all_pieces().filter_map(Piece::position).collect();
        assert_eq!(squares.len(), 32);

        let pawns = board.all_pieces().filter(|p| p.is(PieceKind::Pawn)).count();
        assert_eq!(pawns, 16);
    }

    #[test]
    fn test_setup_matches_standard() {
        assert_eq!(Board::from_standard_sets().unwrap(), Board::standard());
    }

    #[test]
    fn test_setup_rejects_short_sets() {
        let mut board = Board::empty();
        let mut pawns = create_pawns();
        pawns.pop();
        assert_eq!(
            board.setup_standard(create_pieces(), pawns),
            Err(SetupError::WrongPieceCount {
                expected: 16,
                found: 15
            })
        );
    }

    #[test]
    fn test_setup_rejects_third_rook() {
        let mut board = Board::empty();
        let mut pieces = create_pieces();
        // Swap White's queen for a third rook.
        pieces[6] = Piece::new(PieceKind::Rook, Color::White);
        assert_eq!(
            board.setup_standard(pieces, create_pawns()),
            Err(SetupError::NoFreeHomeSquare {
                kind: PieceKind::Rook,
                color: Color::White
            })
        );
    }
}
