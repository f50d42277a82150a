//! Move type and move geometry.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::{file_to_index, rank_to_index, Square};
use crate::board::error::MoveError;

/// A move from one square to another.
///
/// Encodes nothing but the coordinate pair; what the move means (capture,
/// castling, en passant, promotion) depends on the board it is played on,
/// see [`BoardMove`](crate::board::BoardMove).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Move {
    origin: Square,
    destination: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(origin: Square, destination: Square) -> Self {
        Move {
            origin,
            destination,
        }
    }

    /// The move from `origin` by the given file and rank steps.
    ///
    /// Fails with [`MoveError::OutOfGrid`] when the destination would leave
    /// the board.
    pub fn from_position(
        origin: Square,
        (horizontal, vertical): (isize, isize),
    ) -> Result<Self, MoveError> {
        origin
            .offset(horizontal, vertical)
            .map(|destination| Move::new(origin, destination))
            .ok_or(MoveError::OutOfGrid {
                origin,
                horizontal,
                vertical,
            })
    }

    #[inline]
    #[must_use]
    pub const fn origin(self) -> Square {
        self.origin
    }

    #[inline]
    #[must_use]
    pub const fn destination(self) -> Square {
        self.destination
    }

    /// File steps, positive towards the h-file.
    #[inline]
    #[must_use]
    pub const fn horizontal(self) -> isize {
        self.destination.file() as isize - self.origin.file() as isize
    }

    /// Rank steps, positive towards rank 8.
    #[inline]
    #[must_use]
    pub const fn vertical(self) -> isize {
        self.destination.rank() as isize - self.origin.rank() as isize
    }

    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        let (h, v) = (self.horizontal(), self.vertical());
        h != 0 && v != 0 && h.abs() == v.abs()
    }

    #[inline]
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        self.vertical() == 0 && self.horizontal() != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        self.horizontal() == 0 && self.vertical() != 0
    }

    /// Squares strictly between origin and destination, walking from the
    /// origin. Empty unless the move runs along a single line.
    pub fn squares_between(self) -> impl Iterator<Item = Square> {
        let (h, v) = (self.horizontal(), self.vertical());
        let steps = if self.is_diagonal() || self.is_horizontal() || self.is_vertical() {
            h.abs().max(v.abs())
        } else {
            0
        };
        let origin = self.origin;
        (1..steps).filter_map(move |k| origin.offset(k * h.signum(), k * v.signum()))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)
    }
}

impl FromStr for Move {
    type Err = MoveError;

    /// Parse `[a-h][1-8][a-h][1-8]`, e.g. `e2e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoveError::InvalidMoveFormat {
            notation: s.to_string(),
        };

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 {
            return Err(invalid());
        }

        let square = |f: char, r: char| {
            let file = file_to_index(f)?;
            let rank = rank_to_index(r)?;
            Square::new(rank, file)
        };

        let origin = square(chars[0], chars[1]).ok_or_else(invalid)?;
        let destination = square(chars[2], chars[3]).ok_or_else(invalid)?;

        Ok(Move::new(origin, destination))
    }
}

impl TryFrom<String> for Move {
    type Error = MoveError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}

impl PartialEq<str> for Move {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Move {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
