//! Implements game-level Othello logic.
//!
//! [`GameState`] is the safe, high-level interface: it knows whose turn it is
//! and checks move legality. Search code that has already validated its moves
//! may use [`GameState::make_move`] or work on [`Board`] directly.

use crate::board::Board;
use crate::location::{Location, LocationList};
use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        self.opponent()
    }
}

impl Player {
    /// Gets the other player.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The numeric player code: `0` for black, `1` for white.
    pub fn code(self) -> u8 {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }

    /// Decode a numeric player code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Player::Black),
            1 => Some(Player::White),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("black"),
            Player::White => f.write_str("white"),
        }
    }
}

/// Returned when a move is attempted that the rules do not allow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "{} cannot play {}", player, location)]
pub struct IllegalMoveError {
    pub player: Player,
    pub location: Location,
}

/// The complete state of an Othello game: the board and the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub turn: Player,
}

impl Default for GameState {
    /// Gets the starting position with black to move.
    fn default() -> Self {
        Self::new(Board::starting(), Player::default())
    }
}

impl GameState {
    pub const fn new(board: Board, turn: Player) -> Self {
        Self { board, turn }
    }

    /// Disc differential from the perspective of the side to move.
    #[inline]
    pub fn score(self) -> i32 {
        self.board.score(self.turn)
    }

    /// Get the list of legal moves for the side to move.
    #[inline]
    pub fn legal_moves(self) -> LocationList {
        self.board.legal_moves(self.turn)
    }

    #[inline]
    pub fn is_legal_move(self, loc: Location) -> bool {
        self.board.is_legal_move(self.turn, loc)
    }

    /// Whether the game has ended: the side to move has no legal move.
    #[inline]
    pub fn is_game_over(self) -> bool {
        self.board.is_game_over(self.turn)
    }

    /// Make a move for the side to move and hand the turn to the opponent.
    /// The move must be legal; this is only checked in debug builds.
    #[inline]
    pub fn make_move(self, loc: Location) -> Self {
        Self {
            board: self.board.apply_move(self.turn, loc),
            turn: !self.turn,
        }
    }

    /// Make a move for the side to move, or fail if it is not legal.
    pub fn apply_move(self, loc: Location) -> Result<Self, IllegalMoveError> {
        if self.is_legal_move(loc) {
            Ok(self.make_move(loc))
        } else {
            Err(IllegalMoveError {
                player: self.turn,
                location: loc,
            })
        }
    }

    /// The player with more discs, or `None` on a tie.
    /// Only meaningful once the game is over.
    pub fn winner(self) -> Option<Player> {
        self.board.winner()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.turn)
    }
}
