//! "Perft" move-generation test: count the number of leaves at a given depth.
//! See: http://www.aartbik.com/MISC/reversi.html
//!
//! Leaves are counted under the pass-free termination rule: a position where the
//! side to move has no legal move is a leaf. The counts match the published
//! numbers up to depth 8.

use crate::GameState;

/// Count the leaves `depth` plies below the opening position.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(GameState::default(), depth)
}

/// Count the leaves `depth` plies below `state`.
pub fn leaves_below(state: GameState, depth: u64) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.legal_moves();
    if moves.is_empty() {
        return 1;
    }

    moves
        .map(|mv| leaves_below(state.make_move(mv), depth - 1))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}

#[test]
fn perft_08() {
    assert_eq!(run_perft(8), 390216);
}
