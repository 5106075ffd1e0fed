//! Internal search functions.
//!
//! Every score is a disc differential from the perspective of the player whose
//! root search started the tree. That perspective is fixed for the whole tree,
//! whichever side is to move at a leaf.

use log::trace;
use othello_rules::{Board, GameState, Location, Player};

/// Sentinel starting value for maximizing nodes. Never returned as a score.
const NEG_INFINITY: i32 = i32::MIN;

/// Sentinel starting value for minimizing nodes. Never returned as a score.
const POS_INFINITY: i32 = i32::MAX;

/// A root move together with its minimax value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub location: Location,
    pub score: i32,
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Moves applied, one per call into the tree.
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped because `beta <= alpha`.
    pub cutoffs: u64,
}

/// One tree search, rooted at a move made by `perspective`.
struct Searcher {
    perspective: Player,
    stats: SearchStats,
}

impl Searcher {
    fn new(perspective: Player) -> Self {
        Self {
            perspective,
            stats: SearchStats::default(),
        }
    }

    /// Play `loc` for `current` and score the result `depth` further plies down.
    /// `maximizing` tells whether the node after the move picks its best child
    /// (a move by `perspective`) or its worst (a move by the opponent).
    fn minimax(
        &mut self,
        board: Board,
        loc: Location,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        current: Player,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;
        let successor = board.apply_move(current, loc);
        if depth == 0 {
            return successor.score(self.perspective);
        }

        let next = current.opponent();
        let moves = successor.legal_moves(next);

        // Terminal: the next player has no move, so there is nothing to choose between.
        if moves.is_empty() {
            return successor.score(self.perspective);
        }

        if maximizing {
            let mut max_score = NEG_INFINITY;
            for mv in moves {
                let score = self.minimax(successor, mv, depth - 1, alpha, beta, next, false);
                max_score = max_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = POS_INFINITY;
            for mv in moves {
                let score = self.minimax(successor, mv, depth - 1, alpha, beta, next, true);
                min_score = min_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            min_score
        }
    }
}

/// Score the move `loc` by `current_player` with minimax and alpha-beta pruning.
///
/// The move is applied to a copy of `board`. If `depth` is zero, or the other
/// player has no legal reply, the resulting board is scored for `perspective`.
/// Otherwise the other player's replies are searched `depth - 1` plies deeper,
/// taking the maximum when `maximizing` and the minimum otherwise.
#[allow(clippy::too_many_arguments)]
pub fn minimax(
    board: Board,
    loc: Location,
    depth: u32,
    alpha: i32,
    beta: i32,
    current_player: Player,
    maximizing: bool,
    perspective: Player,
) -> i32 {
    Searcher::new(perspective).minimax(board, loc, depth, alpha, beta, current_player, maximizing)
}

/// Plain minimax without pruning. Same value as [`minimax`] with a full window, but
/// visits every node. Useful to check that pruning never changes a result.
pub fn minimax_unpruned(
    board: Board,
    loc: Location,
    depth: u32,
    current_player: Player,
    maximizing: bool,
    perspective: Player,
) -> i32 {
    let successor = board.apply_move(current_player, loc);
    if depth == 0 {
        return successor.score(perspective);
    }

    let next = current_player.opponent();
    let scores = successor
        .legal_moves(next)
        .map(|mv| minimax_unpruned(successor, mv, depth - 1, next, !maximizing, perspective));

    let best = if maximizing { scores.max() } else { scores.min() };
    best.unwrap_or_else(|| successor.score(perspective))
}

/// Pick the root move with the strictly highest score. Candidates are visited in
/// row-major order, so the first of several equal scores is kept.
fn select_best<F>(state: GameState, mut score_move: F) -> Option<ScoredMove>
where
    F: FnMut(Location) -> i32,
{
    let mut best: Option<ScoredMove> = None;

    for location in state.legal_moves() {
        let score = score_move(location);
        trace!("{} considers {}: {}", state.turn, location, score);

        if best.map_or(true, |b| score > b.score) {
            best = Some(ScoredMove { location, score });
        }
    }

    best
}

/// The ply budget left after the root move. A depth of zero searches one ply.
#[inline]
fn depth_below_root(depth: u32) -> u32 {
    depth.max(1) - 1
}

/// Find the best move for the side to move, searching `depth` plies, and count
/// the work done.
pub fn best_move_with_stats(state: GameState, depth: u32) -> (Option<ScoredMove>, SearchStats) {
    let mut searcher = Searcher::new(state.turn);
    let remaining = depth_below_root(depth);

    // Each root move gets a fresh window so that its score is exact.
    let best = select_best(state, |location| {
        searcher.minimax(
            state.board,
            location,
            remaining,
            NEG_INFINITY,
            POS_INFINITY,
            state.turn,
            false,
        )
    });

    (best, searcher.stats)
}

/// [`best_move_with_stats`] built on [`minimax_unpruned`].
pub fn best_move_unpruned(state: GameState, depth: u32) -> Option<ScoredMove> {
    let remaining = depth_below_root(depth);
    select_best(state, |location| {
        minimax_unpruned(state.board, location, remaining, state.turn, false, state.turn)
    })
}
