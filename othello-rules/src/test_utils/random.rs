//! Reproducible random games, used to sample reachable positions for property tests.

use crate::GameState;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

/// Play uniformly random legal moves from the opening until the game ends.
/// Returns every position visited, starting with the opening and ending with
/// the terminal position. The same `seed` always yields the same game.
pub fn random_game(seed: u64) -> Vec<GameState> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::default();
    let mut states = vec![state];

    while let Some(mv) = state.legal_moves().choose(&mut rng) {
        state = state.make_move(mv);
        states.push(state);
    }

    states
}

/// Sample `count` reachable positions by taking every `stride`-th position of
/// successive random games.
pub fn random_states(seed: u64, count: usize, stride: usize) -> Vec<GameState> {
    assert!(stride > 0);
    (seed..)
        .flat_map(|game_seed| random_game(game_seed).into_iter().step_by(stride))
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_game_is_reproducible() {
        assert_eq!(random_game(7), random_game(7));
    }

    #[test]
    fn random_game_ends_in_terminal_position() {
        let states = random_game(3);
        assert_eq!(states[0], GameState::default());
        assert!(states.last().unwrap().is_game_over());
        assert!(states[..states.len() - 1]
            .iter()
            .all(|state| !state.is_game_over()));
        assert!(states.len() <= 61);
    }

    #[test]
    fn random_states_has_requested_count() {
        assert_eq!(random_states(11, 25, 3).len(), 25);
    }

    #[test]
    fn random_states_takes_every_stride_th_position() {
        let game = random_game(11);
        let states = random_states(11, 3, 4);
        assert_eq!(states, vec![game[0], game[4], game[8]]);
    }
}
