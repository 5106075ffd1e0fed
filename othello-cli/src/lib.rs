//! Command-line front end: load a game file, then score it, pick a move, or
//! play it out.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::info;
use othello_rules::{load_game_file, GameState};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Search depth used when `--depth` is not given.
pub const DEFAULT_DEPTH: u32 = 4;

#[derive(Debug, Parser)]
#[command(name = "othello")]
#[command(version, about = "Minimax Othello engine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the disc differential from the side to move's perspective
    Score {
        /// Game file: turn (0 black, 1 white) then 64 cells (-1 empty, 0 black, 1 white)
        game: PathBuf,
    },

    /// Print the best move for the side to move as `row col index`, or `none`
    BestMove {
        game: PathBuf,

        /// Search depth in plies
        #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,
    },

    /// Play the game out with both sides using the search, then print the move log and winner
    Simulate {
        game: PathBuf,

        /// Search depth in plies
        #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,
    },
}

fn load(path: &Path) -> Result<GameState> {
    let state = load_game_file(path)
        .with_context(|| format!("failed to load game from {}", path.display()))?;
    info!("loaded {}: {} to move", path.display(), state.turn);
    Ok(state)
}

/// Run one command, writing its report to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Score { game } => {
            let state = load(&game)?;
            writeln!(out, "{}", state.score())?;
        }
        Commands::BestMove { game, depth } => {
            let state = load(&game)?;
            match othello_search::best_move(state, depth) {
                Some(mv) => {
                    let (row, col) = mv.to_coords();
                    writeln!(out, "{} {} {}", row, col, mv.to_index())?;
                }
                None => writeln!(out, "none")?,
            }
        }
        Commands::Simulate { game, depth } => {
            let state = load(&game)?;
            let record = othello_search::simulate_full_game(state, depth);
            writeln!(out, "{}", record.move_log().iter().join(" "))?;
            writeln!(out, "{}", record.final_state.board)?;
            match record.winner {
                Some(player) => writeln!(out, "winner: {}", player)?,
                None => writeln!(out, "winner: tie")?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn depth_defaults() {
        let cli = Cli::try_parse_from(["othello", "simulate", "game.txt"]).unwrap();
        match cli.command {
            Commands::Simulate { depth, game } => {
                assert_eq!(depth, DEFAULT_DEPTH);
                assert_eq!(game, PathBuf::from("game.txt"));
            }
            other => panic!("parsed the wrong command: {:?}", other),
        }
    }

    #[test]
    fn depth_flag() {
        let cli = Cli::try_parse_from(["othello", "best-move", "-d", "2", "game.txt"]).unwrap();
        assert!(matches!(cli.command, Commands::BestMove { depth: 2, .. }));
    }
}
