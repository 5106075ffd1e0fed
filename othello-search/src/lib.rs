//! `othello-search` picks Othello moves with depth-limited minimax search and
//! alpha-beta pruning, and plays whole games by letting both sides follow it.
//!
//! Evaluation is the disc differential only. Search depth is counted in plies
//! and is the only resource limit.

pub mod search;

mod simulate;

pub use search::{ScoredMove, SearchStats};
pub use simulate::{simulate_full_game, GameRecord};

use log::debug;
use othello_rules::{GameState, Location};

/// Find the best move for the side to move, looking `depth` plies ahead.
/// Returns `None` when the side to move has no legal move.
pub fn best_move(state: GameState, depth: u32) -> Option<Location> {
    best_move_with_score(state, depth).map(|best| best.location)
}

/// Like [`best_move`], also returning the move's minimax score from the
/// mover's perspective.
pub fn best_move_with_score(state: GameState, depth: u32) -> Option<ScoredMove> {
    let (best, stats) = search::best_move_with_stats(state, depth);
    debug!(
        "depth {} search for {}: {} nodes, {} cutoffs, best {:?}",
        depth, state.turn, stats.nodes, stats.cutoffs, best
    );
    best
}
