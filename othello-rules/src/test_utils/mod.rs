//! Utilities used for testing and benchmarking.

mod perft;
pub use perft::{leaves_below, run_perft};

mod random;
pub use random::{random_game, random_states};
