//! Loading game states from their plain-text integer encoding.
//!
//! The format is a whitespace-separated list of 65 integers: the side to move
//! (`0` black, `1` white) followed by the 64 cells in row-major order
//! (`-1` empty, `0` black, `1` white). Anything else is rejected; a partially
//! read board is never returned.

use crate::board::{Board, Cell};
use crate::game::{GameState, Player};
use crate::location::Location;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Display, Error)]
pub enum LoadGameError {
    #[display(fmt = "input is empty: expected a turn indicator")]
    MissingTurn,
    #[display(fmt = "expected 64 cell values, found {}", found)]
    MissingCells { found: usize },
    #[display(fmt = "value {:?} at position {} is not an integer", token, position)]
    InvalidToken { position: usize, token: String },
    #[display(fmt = "turn indicator must be 0 (black) or 1 (white), got {}", value)]
    InvalidTurn { value: i64 },
    #[display(fmt = "cell {} has value {}, expected -1, 0 or 1", cell, value)]
    InvalidCell { cell: usize, value: i64 },
    #[display(fmt = "unexpected extra value at position {}", position)]
    TrailingInput { position: usize },
    #[display(fmt = "cannot read {}: {}", path, source)]
    CannotReadFile { path: String, source: io::Error },
}

/// Load a [`GameState`] from the file at `path`.
pub fn load_game_file<P: AsRef<Path>>(path: P) -> Result<GameState, LoadGameError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadGameError::CannotReadFile {
        path: path.display().to_string(),
        source,
    })?;
    contents.parse()
}

impl std::str::FromStr for GameState {
    type Err = LoadGameError;

    fn from_str(game_str: &str) -> Result<Self, Self::Err> {
        // Positions count every value in the stream: 0 is the turn, 1..=64 the cells.
        let mut values = game_str
            .split_whitespace()
            .enumerate()
            .map(|(position, token)| {
                token.parse::<i64>().map_err(|_| LoadGameError::InvalidToken {
                    position,
                    token: token.to_string(),
                })
            });

        let turn_code = values.next().ok_or(LoadGameError::MissingTurn)??;
        let turn =
            Player::from_code(turn_code).ok_or(LoadGameError::InvalidTurn { value: turn_code })?;

        let mut board = Board::empty();
        for (cell, loc) in Location::all().enumerate() {
            let value = values
                .next()
                .ok_or(LoadGameError::MissingCells { found: cell })??;
            let contents = Cell::from_code(value).ok_or(LoadGameError::InvalidCell { cell, value })?;
            board = board.with_cell(loc, contents);
        }

        if values.next().is_some() {
            return Err(LoadGameError::TrailingInput {
                position: NUM_SPACES + 1,
            });
        }

        Ok(GameState::new(board, turn))
    }
}

impl GameState {
    /// Encode this state in the integer format that parsing reads back,
    /// one board row per line.
    pub fn to_load_string(&self) -> String {
        let mut out = format!("{}\n", self.turn.code());
        let cells: Vec<String> = self.board.cells().map(|cell| cell.code().to_string()).collect();
        for row in cells.chunks(EDGE_LENGTH) {
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out
    }
}
