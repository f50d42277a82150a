//! A thin game session on top of the rules engine.
//!
//! Tracks players and whose turn it is, and turns move text into
//! committed boards. Rejected moves never change the session.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    create_pawns, create_pieces, Board, CheckStatus, Color, IllegalReason, Move, MoveError,
    SetupError, Square,
};

/// How the first player's color is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorChoice {
    White,
    Black,
    Random,
}

impl FromStr for ColorChoice {
    type Err = ConfigError;

    /// `w`, `b` or `r`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "w" => Ok(ColorChoice::White),
            "b" => Ok(ColorChoice::Black),
            "r" => Ok(ColorChoice::Random),
            other => Err(ConfigError::InvalidColorChoice {
                input: other.to_string(),
            }),
        }
    }
}

/// Error type for malformed session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Color choice is not `w`, `b` or `r`
    InvalidColorChoice { input: String },
    /// The standard sets could not be placed
    Setup(SetupError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidColorChoice { input } => {
                write!(f, "Invalid color choice '{input}', expected 'w', 'b' or 'r'")
            }
            ConfigError::Setup(err) => write!(f, "Board setup failed: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Setup(err) => Some(err),
            ConfigError::InvalidColorChoice { .. } => None,
        }
    }
}

impl From<SetupError> for ConfigError {
    fn from(err: SetupError) -> Self {
        ConfigError::Setup(err)
    }
}

/// Session settings supplied by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub player_one: String,
    pub player_two: String,
    pub color_choice: ColorChoice,
}

impl GameConfig {
    #[must_use]
    pub fn new(player_one: &str, player_two: &str, color_choice: ColorChoice) -> Self {
        GameConfig {
            player_one: player_one.to_string(),
            player_two: player_two.to_string(),
            color_choice,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: Color,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, playing {}", self.name, self.color)
    }
}

/// Why a submitted move was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    /// The text is not a move
    InvalidFormat(MoveError),
    /// It is the other color's turn
    NotYourTurn { to_move: Color },
    /// The origin square is empty
    NoPiece { square: Square },
    /// The origin holds an opponent's piece
    NotYourPiece { square: Square },
    /// The rule engine said no
    Illegal(IllegalReason),
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::InvalidFormat(err) => write!(f, "{err}"),
            MoveRejection::NotYourTurn { to_move } => write!(f, "It is {to_move}'s turn"),
            MoveRejection::NoPiece { square } => write!(f, "No piece on {square}"),
            MoveRejection::NotYourPiece { square } => {
                write!(f, "The piece on {square} belongs to the opponent")
            }
            MoveRejection::Illegal(reason) => write!(f, "Illegal move: {reason}"),
        }
    }
}

impl std::error::Error for MoveRejection {}

/// Result of a committed move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub check: CheckStatus,
}

/// Two players, one board, and the turn.
#[derive(Clone, Debug)]
pub struct Game {
    players: [Player; 2],
    board: Board,
    to_move: Color,
    history: Vec<Move>,
}

impl Game {
    /// Start a game in the initial position with White to move.
    ///
    /// `rng` is only consulted for [`ColorChoice::Random`].
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        let first_color = match config.color_choice {
            ColorChoice::White => Color::White,
            ColorChoice::Black => Color::Black,
            ColorChoice::Random => {
                if rng.gen::<bool>() {
                    Color::White
                } else {
                    Color::Black
                }
            }
        };

        let mut board = Board::empty();
        board.setup_standard(create_pieces(), create_pawns())?;

        let players = [
            Player {
                name: config.player_one,
                color: first_color,
            },
            Player {
                name: config.player_two,
                color: first_color.opponent(),
            },
        ];
        log_debug!("new game: {} vs {}", players[0], players[1]);

        Ok(Game {
            players,
            board,
            to_move: Color::White,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player holding `color`.
    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        if self.players[0].color == color {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Committed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Play `text` for `color`. On success the board is replaced and the
    /// turn passes; on rejection nothing changes.
    pub fn submit(&mut self, color: Color, text: &str) -> Result<MoveOutcome, MoveRejection> {
        let mv: Move = text.parse().map_err(MoveRejection::InvalidFormat)?;

        if color != self.to_move {
            return Err(MoveRejection::NotYourTurn {
                to_move: self.to_move,
            });
        }

        let origin = mv.origin();
        match self.board.occupant_at(origin) {
            None => return Err(MoveRejection::NoPiece { square: origin }),
            Some(piece) if piece.color() != color => {
                return Err(MoveRejection::NotYourPiece { square: origin })
            }
            Some(_) => {}
        }

        let bm = self.board.contextualize(mv);
        if let Err(reason) = bm.check() {
            log_debug!("{color} {mv} rejected: {reason}");
            return Err(MoveRejection::Illegal(reason));
        }
        let next = bm.resulting_board();

        log_debug!("{color} plays {mv}");
        self.board = next;
        self.history.push(mv);
        self.to_move = color.opponent();

        Ok(MoveOutcome {
            board: self.board.clone(),
            check: self.board.check_status(),
        })
    }
}
