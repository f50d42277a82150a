//! The rule engine.
//!
//! A move is legal when it passes, in order:
//!
//! 1. the origin holds a piece,
//! 2. the move is in the piece's pattern,
//! 3. capture rules (never onto a friendly piece; pawns take diagonally,
//!    possibly en passant, and never straight ahead),
//! 4. no piece stands between origin and destination (knights excepted),
//! 5. the mover's king is not attacked on the resulting board.
//!
//! Castling replaces steps 2-4 with its own preconditions and then goes
//! through step 5 like any other move.
//!
//! The check detector only uses patterns and path blocking, never this
//! pipeline, so step 5 cannot recurse.

use std::fmt;

use super::board_move::KING_FILE;
use super::{Board, BoardMove, CastleSide, Color, Move, Piece, PieceKind, Square};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    /// Nothing stands on the origin square
    EmptyOrigin,
    /// The piece cannot move that way
    NotInPattern,
    /// The destination holds a piece of the mover's color
    OwnPieceCapture,
    /// A pawn moved diagonally without taking anything
    PawnMustCapture,
    /// A pawn moved straight onto an occupied square
    PawnCannotCapture,
    /// A piece stands in the way
    Blocked { square: Square },
    /// King or rook missing from its home square, or already moved
    CastlingUnavailable,
    /// The castling king starts on, crosses or lands on an attacked square
    CastlingThroughCheck { square: Square },
    /// The move leaves the mover's own king attacked
    SelfCheck,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalReason::EmptyOrigin => write!(f, "no piece on the origin square"),
            IllegalReason::NotInPattern => write!(f, "the piece cannot move that way"),
            IllegalReason::OwnPieceCapture => write!(f, "cannot capture an own piece"),
            IllegalReason::PawnMustCapture => {
                write!(f, "a pawn only moves diagonally when capturing")
            }
            IllegalReason::PawnCannotCapture => write!(f, "a pawn cannot capture straight ahead"),
            IllegalReason::Blocked { square } => write!(f, "path blocked at {square}"),
            IllegalReason::CastlingUnavailable => write!(f, "castling is not available"),
            IllegalReason::CastlingThroughCheck { square } => {
                write!(f, "king would castle through attacked square {square}")
            }
            IllegalReason::SelfCheck => write!(f, "move leaves own king in check"),
        }
    }
}

impl std::error::Error for IllegalReason {}

impl Board {
    /// First occupied square strictly between origin and destination.
    /// Knights jump, so they are never blocked.
    #[must_use]
    pub fn path_blocker(&self, piece: &Piece, mv: Move) -> Option<Square> {
        if piece.is(PieceKind::Knight) {
            return None;
        }
        mv.squares_between().find(|&sq| self.is_occupied(sq))
    }

    /// Every legal move for `color`. Castling appears once per side, in
    /// its king-to-target form (`e1g1`, `e1c1`).
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves: Vec<Move> = self
            .pieces_of(color)
            .flat_map(Piece::allowed_moves)
            .filter(|&mv| {
                let bm = self.contextualize(mv);
                !bm.is_castling() && bm.legal()
            })
            .collect();

        let rank = color.back_rank();
        for side in [CastleSide::King, CastleSide::Queen] {
            let (king_to, _) = side.castled_files();
            let from = Square::new(rank, KING_FILE);
            let to = Square::new(rank, king_to);
            let (Some(from), Some(to)) = (from, to) else {
                continue;
            };
            let castle = Move::new(from, to);
            let bm = self.contextualize(castle);
            if bm.is_castling() && bm.legal() {
                moves.push(castle);
            }
        }
        moves
    }
}

impl<'a> BoardMove<'a> {
    /// Legality verdict.
    #[must_use]
    pub fn legal(&self) -> bool {
        self.check().is_ok()
    }

    /// Legality verdict with the reason for a rejection.
    pub fn check(&self) -> Result<(), IllegalReason> {
        let verdict = self.run_rules();
        if let Err(reason) = &verdict {
            log_trace!("{} rejected: {}", self.as_move(), reason);
        }
        verdict
    }

    /// The resulting board if the move is legal, `None` otherwise.
    #[must_use]
    pub fn process(&self) -> Option<Board> {
        self.legal().then(|| self.resulting_board())
    }

    fn run_rules(&self) -> Result<(), IllegalReason> {
        let piece = self.piece().ok_or(IllegalReason::EmptyOrigin)?;

        if self.is_castling() {
            self.castling_rules(piece)?;
        } else {
            self.pattern_rule(piece)?;
            self.capture_rules(piece)?;
            self.path_rule(piece)?;
        }

        self.self_check_rule(piece)
    }

    fn pattern_rule(&self, piece: &Piece) -> Result<(), IllegalReason> {
        if piece.allowed_moves().contains(&self.as_move()) {
            Ok(())
        } else {
            Err(IllegalReason::NotInPattern)
        }
    }

    fn capture_rules(&self, piece: &Piece) -> Result<(), IllegalReason> {
        let target = self.target();
        if target.is_some_and(|t| t.color() == piece.color()) {
            return Err(IllegalReason::OwnPieceCapture);
        }
        if !piece.is(PieceKind::Pawn) {
            return Ok(());
        }

        if self.as_move().is_diagonal() {
            if target.is_none() && !self.is_en_passant() {
                return Err(IllegalReason::PawnMustCapture);
            }
        } else if target.is_some() {
            return Err(IllegalReason::PawnCannotCapture);
        }
        Ok(())
    }

    fn path_rule(&self, piece: &Piece) -> Result<(), IllegalReason> {
        match self.board().path_blocker(piece, self.as_move()) {
            Some(square) => Err(IllegalReason::Blocked { square }),
            None => Ok(()),
        }
    }

    fn castling_rules(&self, piece: &Piece) -> Result<(), IllegalReason> {
        let board = self.board();
        let color = piece.color();
        let side = self.castle_side();
        let rank = color.back_rank();
        let (king_to, _) = side.castled_files();

        let (Some(king_sq), Some(rook_sq), Some(king_dest)) = (
            Square::new(rank, KING_FILE),
            Square::new(rank, side.rook_file()),
            Square::new(rank, king_to),
        ) else {
            return Err(IllegalReason::CastlingUnavailable);
        };

        let unmoved = |sq: Square, kind: PieceKind| {
            board
                .occupant_at(sq)
                .is_some_and(|p| p.is(kind) && p.color() == color && !p.has_moved())
        };
        if !unmoved(king_sq, PieceKind::King) || !unmoved(rook_sq, PieceKind::Rook) {
            return Err(IllegalReason::CastlingUnavailable);
        }

        if let Some(square) = Move::new(king_sq, rook_sq)
            .squares_between()
            .find(|&sq| board.is_occupied(sq))
        {
            return Err(IllegalReason::Blocked { square });
        }

        let king_walk = std::iter::once(king_sq)
            .chain(Move::new(king_sq, king_dest).squares_between())
            .chain(std::iter::once(king_dest));
        for square in king_walk {
            if board.is_attacked(square, color.opponent()) {
                return Err(IllegalReason::CastlingThroughCheck { square });
            }
        }
        Ok(())
    }

    fn self_check_rule(&self, piece: &Piece) -> Result<(), IllegalReason> {
        if self.resulting_board().is_in_check(piece.color()) {
            Err(IllegalReason::SelfCheck)
        } else {
            Ok(())
        }
    }
}
