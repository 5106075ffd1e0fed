//! Full-game simulation: both sides play the search's best move until the game ends.

use crate::best_move;
use log::{debug, info};
use othello_rules::{GameState, Location, Player};

/// The outcome of a simulated game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    /// The side to move in the initial position.
    pub initial_turn: Player,
    /// Every move played, in order.
    pub moves: Vec<Location>,
    /// The terminal position.
    pub final_state: GameState,
    /// The player with more discs at the end, or `None` for a tie.
    pub winner: Option<Player>,
}

impl GameRecord {
    /// The game as a flat log: the initial turn code (`0` black, `1` white)
    /// followed by the row-major index (`row * 8 + col`) of each move.
    pub fn move_log(&self) -> Vec<i32> {
        std::iter::once(self.initial_turn.code() as i32)
            .chain(self.moves.iter().map(|mv| mv.to_index() as i32))
            .collect()
    }
}

/// Play from `initial` until the side to move has no legal move, each side
/// choosing [`best_move`] at `depth` plies. Fully deterministic.
pub fn simulate_full_game(initial: GameState, depth: u32) -> GameRecord {
    let mut state = initial;
    let mut moves = Vec::new();

    while let Some(mv) = best_move(state, depth) {
        debug!("move {}: {} plays {}", moves.len() + 1, state.turn, mv);
        state = state.make_move(mv);
        moves.push(mv);
    }

    let winner = state.winner();
    info!(
        "game over after {} moves: black {}, white {}, winner {}",
        moves.len(),
        state.board.count(Player::Black),
        state.board.count(Player::White),
        winner.map_or_else(|| "tie".to_string(), |p| p.to_string())
    );

    GameRecord {
        initial_turn: initial.turn,
        moves,
        final_state: state,
        winner,
    }
}
