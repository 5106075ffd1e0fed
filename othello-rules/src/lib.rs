//! `othello-rules` implements the board and rules of Othello for a minimax engine.
//!
//! The package is organized as follows:
//!
//!  - [`Bitboard`] and [`LocationList`] are compact sets of board locations,
//!    used for move lists and flip sets.
//!  - [`Board`] owns the 8x8 grid of [`Cell`]s and answers the rule questions:
//!    is a move legal, what does the board look like after it, what is the score.
//!    Boards are `Copy` values; applying a move never mutates the original.
//!  - [`GameState`] pairs a board with the side to move and is the unit that
//!    the search engine and the loader exchange.
//!  - [`load_game_file`] and `GameState`'s `FromStr` read the plain-text
//!    integer format, rejecting malformed input with a [`LoadGameError`].
//!
//! Games end as soon as the side to move has no legal move. There is no pass rule.

pub mod test_utils;

mod bitboard;
mod board;
mod game;
mod load;
mod location;
mod utils;

pub use bitboard::*;
pub use board::*;
pub use game::*;
pub use load::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
