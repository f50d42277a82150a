//! The piece catalog: move patterns and home squares for each piece kind.
//!
//! A pattern is a list of relative `(file, rank)` offsets the piece could
//! reach on an empty board. Sliding pieces get position-dependent patterns
//! that stop at the board edge; the others use fixed offset tables, and
//! `allowed_moves` drops whatever falls off the board.

use super::{Color, Move, Piece, PieceKind, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

const KING_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (1, 0),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Project each direction from `position` out to the board edge.
fn rays(position: Square, directions: &[(isize, isize)]) -> Vec<(isize, isize)> {
    directions
        .iter()
        .flat_map(|&(df, dr)| {
            (1..8)
                .map(move |k| (df * k, dr * k))
                .take_while(move |&(h, v)| position.offset(h, v).is_some())
        })
        .collect()
}

impl PieceKind {
    /// Offsets reachable by this kind of piece from `position`, ignoring
    /// every other piece on the board.
    ///
    /// Pawns get their forward step, the double step from their starting
    /// rank, and both forward diagonals. Castling is not part of any
    /// pattern.
    #[must_use]
    pub fn move_pattern(self, position: Square, color: Color) -> Vec<(isize, isize)> {
        match self {
            PieceKind::Pawn => {
                let dir = color.pawn_direction();
                let mut pattern = vec![(0, dir), (-1, dir), (1, dir)];
                if position.rank() == color.pawn_start_rank() {
                    pattern.push((0, 2 * dir));
                }
                pattern
            }
            PieceKind::Knight => KNIGHT_OFFSETS.to_vec(),
            PieceKind::King => KING_OFFSETS.to_vec(),
            PieceKind::Rook => rays(position, &ORTHOGONAL),
            PieceKind::Bishop => rays(position, &DIAGONAL),
            PieceKind::Queen => {
                let mut pattern = rays(position, &ORTHOGONAL);
                pattern.extend(rays(position, &DIAGONAL));
                pattern
            }
        }
    }

    /// Squares a piece of this kind may start the game on.
    #[must_use]
    pub fn home_squares(self, color: Color) -> Vec<Square> {
        let (rank, files): (usize, &[usize]) = match self {
            PieceKind::Pawn => (color.pawn_start_rank(), &[0, 1, 2, 3, 4, 5, 6, 7]),
            PieceKind::Rook => (color.back_rank(), &[0, 7]),
            PieceKind::Knight => (color.back_rank(), &[1, 6]),
            PieceKind::Bishop => (color.back_rank(), &[2, 5]),
            PieceKind::Queen => (color.back_rank(), &[3]),
            PieceKind::King => (color.back_rank(), &[4]),
        };
        files
            .iter()
            .filter_map(|&file| Square::new(rank, file))
            .collect()
    }
}

impl Piece {
    /// This piece's pattern at its current position; empty while unplaced.
    #[must_use]
    pub fn move_pattern(&self) -> Vec<(isize, isize)> {
        match self.position() {
            Some(position) => self.kind().move_pattern(position, self.color()),
            None => Vec::new(),
        }
    }

    /// The pattern turned into concrete moves from the piece's position.
    ///
    /// Offsets that would leave the board are skipped, not reported.
    #[must_use]
    pub fn allowed_moves(&self) -> Vec<Move> {
        let Some(position) = self.position() else {
            return Vec::new();
        };
        self.move_pattern()
            .into_iter()
            .filter_map(|offset| Move::from_position(position, offset).ok())
            .collect()
    }

    /// Moves along which this piece would capture. Same as
    /// [`allowed_moves`](Self::allowed_moves) except that pawns only take
    /// diagonally.
    #[must_use]
    pub fn attacking_moves(&self) -> Vec<Move> {
        let mut moves = self.allowed_moves();
        if self.is(PieceKind::Pawn) {
            moves.retain(|mv| mv.is_diagonal());
        }
        moves
    }

    /// True if `square` is one of this piece's home squares.
    #[must_use]
    pub fn is_home_square(&self, square: Square) -> bool {
        self.kind().home_squares(self.color()).contains(&square)
    }
}

/// The sixteen non-pawn pieces of a standard set, eight per color.
#[must_use]
pub fn create_pieces() -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(16);
    for color in Color::BOTH {
        for kind in [
            PieceKind::Rook,
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
        ] {
            pieces.push(Piece::new(kind, color));
        }
    }
    pieces
}

/// The sixteen pawns of a standard set, eight per color.
#[must_use]
pub fn create_pawns() -> Vec<Piece> {
    Color::BOTH
        .iter()
        .flat_map(|&color| std::iter::repeat(Piece::new(PieceKind::Pawn, color)).take(8))
        .collect()
}
