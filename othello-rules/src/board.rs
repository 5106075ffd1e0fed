//! The Othello board and the rules that act on it.
//!
//! A [`Board`] is a plain 8x8 grid of [`Cell`]s. It is `Copy`, and every
//! operation that changes the position returns a new board, so search
//! branches can each own their copy without observing each other's moves.

use crate::bitboard::Bitboard;
use crate::game::Player;
use crate::location::{Location, LocationList};
use crate::{utils, EDGE_LENGTH};
use std::fmt;

/// The eight compass directions as `(d_row, d_col)` steps.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The contents of one space on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl Cell {
    /// The player owning the disc in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    /// Decode the external cell encoding: `-1` empty, `0` black, `1` white.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Cell::Empty),
            0 => Some(Cell::Black),
            1 => Some(Cell::White),
            _ => None,
        }
    }

    /// Encode as `-1` empty, `0` black, `1` white.
    pub fn code(self) -> i8 {
        match self {
            Cell::Empty => -1,
            Cell::Black => 0,
            Cell::White => 1,
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => '#',
            Cell::White => 'O',
        }
    }
}

/// An 8x8 Othello board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the standard starting position.
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    /// A board with every cell empty.
    pub const fn empty() -> Self {
        Self::filled(Cell::Empty)
    }

    /// A board with every cell set to `cell`.
    pub const fn filled(cell: Cell) -> Self {
        Self {
            cells: [[cell; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// The standard opening: white on D4 and E5, black on E4 and D5.
    pub fn starting() -> Self {
        Self::empty()
            .with_cell(Location::from_coords(3, 3), Cell::White)
            .with_cell(Location::from_coords(3, 4), Cell::Black)
            .with_cell(Location::from_coords(4, 3), Cell::Black)
            .with_cell(Location::from_coords(4, 4), Cell::White)
    }

    /// The contents of `loc`.
    #[inline]
    pub fn cell(&self, loc: Location) -> Cell {
        let (row, col) = loc.to_coords();
        self.cells[row][col]
    }

    /// A copy of this board with `loc` set to `cell`. No rules are applied.
    #[inline]
    pub fn with_cell(mut self, loc: Location, cell: Cell) -> Self {
        let (row, col) = loc.to_coords();
        self.cells[row][col] = cell;
        self
    }

    /// Iterate over the cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// A mask of every location holding `cell`.
    pub fn mask(&self, cell: Cell) -> Bitboard {
        Location::all()
            .filter(|&loc| self.cell(loc) == cell)
            .fold(Bitboard::EMPTY, |mask, loc| mask | loc.to_bitboard())
    }

    /// Number of discs `player` has on the board.
    pub fn count(&self, player: Player) -> u8 {
        self.mask(Cell::from(player)).count_occupied()
    }

    /// Number of empty cells.
    pub fn count_empty(&self) -> u8 {
        self.mask(Cell::Empty).count_occupied()
    }

    /// Score the board as: # `perspective` discs - # opponent discs.
    pub fn score(&self, perspective: Player) -> i32 {
        let black = self.count(Player::Black) as i32;
        let white = self.count(Player::White) as i32;
        match perspective {
            Player::Black => black - white,
            Player::White => white - black,
        }
    }

    /// The opponent discs `mover` would capture along one direction by playing at `loc`:
    /// a non-empty run of opponent discs immediately closed by a `mover` disc.
    /// Empty when the direction captures nothing.
    fn run_in_direction(
        &self,
        mover: Player,
        loc: Location,
        direction: (isize, isize),
    ) -> Bitboard {
        let ally = Cell::from(mover);
        let enemy = Cell::from(mover.opponent());
        let mut run = Bitboard::EMPTY;
        let mut cursor = loc.step(direction);

        while let Some(next) = cursor {
            match self.cell(next) {
                cell if cell == enemy => run |= next.to_bitboard(),
                cell if cell == ally && !run.is_empty() => return run,
                _ => return Bitboard::EMPTY,
            }
            cursor = next.step(direction);
        }

        // Ran off the board without closing the run.
        Bitboard::EMPTY
    }

    /// Whether `mover` may play at `loc`: the cell is empty and at least one
    /// direction captures an opponent run.
    pub fn is_legal_move(&self, mover: Player, loc: Location) -> bool {
        self.cell(loc) == Cell::Empty
            && DIRECTIONS
                .iter()
                .any(|&direction| !self.run_in_direction(mover, loc, direction).is_empty())
    }

    /// Every opponent disc that playing at `loc` would flip.
    /// Empty if the move is not legal.
    pub fn flips(&self, mover: Player, loc: Location) -> LocationList {
        if self.cell(loc) != Cell::Empty {
            return LocationList::EMPTY;
        }

        DIRECTIONS
            .iter()
            .fold(Bitboard::EMPTY, |flips, &direction| {
                flips | self.run_in_direction(mover, loc, direction)
            })
            .into()
    }

    /// Every legal move for `mover`, in row-major order.
    pub fn legal_moves(&self, mover: Player) -> LocationList {
        Location::all()
            .filter(|&loc| self.is_legal_move(mover, loc))
            .collect()
    }

    /// Whether `mover` has any legal move. Stops at the first one found.
    pub fn has_legal_move(&self, mover: Player) -> bool {
        Location::all().any(|loc| self.is_legal_move(mover, loc))
    }

    /// The game ends when the side to move has no legal move.
    /// The opponent is not given a chance to continue.
    pub fn is_game_over(&self, turn: Player) -> bool {
        !self.has_legal_move(turn)
    }

    /// Play `loc` for `mover`, flipping every captured run, and return the new board.
    ///
    /// The move must be legal; this is only checked in debug builds.
    pub fn apply_move(self, mover: Player, loc: Location) -> Self {
        debug_assert!(
            self.is_legal_move(mover, loc),
            "{} cannot play {}",
            mover,
            loc
        );

        let disc = Cell::from(mover);
        self.flips(mover, loc)
            .fold(self.with_cell(loc, disc), |board, flipped| {
                board.with_cell(flipped, disc)
            })
    }

    /// The player with more discs, or `None` on a tie.
    pub fn winner(&self) -> Option<Player> {
        match self.score(Player::Black) {
            s if s > 0 => Some(Player::Black),
            s if s < 0 => Some(Player::White),
            _ => None,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(Cell::to_char), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> Location {
        Location::from_coords(row, col)
    }

    #[test]
    fn starting_position() {
        let board = Board::starting();
        assert_eq!(board.cell(loc(3, 3)), Cell::White);
        assert_eq!(board.cell(loc(3, 4)), Cell::Black);
        assert_eq!(board.cell(loc(4, 3)), Cell::Black);
        assert_eq!(board.cell(loc(4, 4)), Cell::White);
        assert_eq!(board.count_empty(), 60);
        assert_eq!(board.score(Player::Black), 0);
    }

    #[test]
    fn opening_moves_for_black() {
        let moves: Vec<_> = Board::starting()
            .legal_moves(Player::Black)
            .map(Location::to_coords)
            .collect();
        assert_eq!(moves, vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
    }

    #[test]
    fn opening_moves_for_white() {
        let moves: Vec<_> = Board::starting()
            .legal_moves(Player::White)
            .map(Location::to_coords)
            .collect();
        assert_eq!(moves, vec![(2, 4), (3, 5), (4, 2), (5, 3)]);
    }

    #[test]
    fn occupied_cell_is_never_legal() {
        let board = Board::starting();
        assert!(!board.is_legal_move(Player::Black, loc(3, 3)));
        assert!(board.flips(Player::Black, loc(3, 3)).is_empty());
    }

    #[test]
    fn adjacent_ally_without_run_is_not_a_capture() {
        // B B . : playing next to your own disc captures nothing.
        let board = Board::empty()
            .with_cell(loc(0, 0), Cell::Black)
            .with_cell(loc(0, 1), Cell::Black);
        assert!(!board.is_legal_move(Player::Black, loc(0, 2)));
    }

    #[test]
    fn run_must_be_closed_before_the_edge() {
        // . W W W W W W W : nothing closes the run.
        let board = (1..8).fold(Board::empty(), |board, col| {
            board.with_cell(loc(0, col), Cell::White)
        });
        assert!(!board.is_legal_move(Player::Black, loc(0, 0)));
    }

    #[test]
    fn run_broken_by_empty_is_not_a_capture() {
        // . W . B
        let board = Board::empty()
            .with_cell(loc(0, 1), Cell::White)
            .with_cell(loc(0, 3), Cell::Black);
        assert!(!board.is_legal_move(Player::Black, loc(0, 0)));
    }

    #[test]
    fn apply_opening_move_flips_one_disc() {
        let before = Board::starting();
        let after = before.apply_move(Player::Black, loc(2, 3));

        assert_eq!(after.cell(loc(2, 3)), Cell::Black);
        assert_eq!(after.cell(loc(3, 3)), Cell::Black);
        assert_eq!(after.count(Player::Black), 4);
        assert_eq!(after.count(Player::White), 1);

        // The original board is untouched.
        assert_eq!(before, Board::starting());
    }

    #[test]
    fn apply_move_flips_several_directions_but_not_unbounded_runs() {
        // Row 3: B W W . W W .   (west run closed by B, east run open)
        // Col 3: above the move a closed run W then B.
        let board = Board::empty()
            .with_cell(loc(3, 0), Cell::Black)
            .with_cell(loc(3, 1), Cell::White)
            .with_cell(loc(3, 2), Cell::White)
            .with_cell(loc(3, 4), Cell::White)
            .with_cell(loc(3, 5), Cell::White)
            .with_cell(loc(2, 3), Cell::White)
            .with_cell(loc(1, 3), Cell::Black);

        let flips: Vec<_> = board
            .flips(Player::Black, loc(3, 3))
            .map(Location::to_coords)
            .collect();
        assert_eq!(flips, vec![(2, 3), (3, 1), (3, 2)]);

        let after = board.apply_move(Player::Black, loc(3, 3));
        assert_eq!(after.cell(loc(3, 4)), Cell::White);
        assert_eq!(after.cell(loc(3, 5)), Cell::White);
        assert_eq!(after.count(Player::Black), 6);
        assert_eq!(after.count(Player::White), 2);
    }

    #[test]
    fn score_is_symmetric() {
        let board = Board::starting().apply_move(Player::Black, loc(2, 3));
        assert_eq!(board.score(Player::Black), 3);
        assert_eq!(board.score(Player::Black), -board.score(Player::White));
    }

    #[test]
    fn winner_by_disc_count() {
        assert_eq!(Board::filled(Cell::Black).winner(), Some(Player::Black));
        assert_eq!(Board::filled(Cell::White).winner(), Some(Player::White));
        assert_eq!(Board::starting().winner(), None);
    }

    #[test]
    fn full_board_is_game_over() {
        let board = Board::filled(Cell::Black).with_cell(loc(0, 0), Cell::Empty);
        assert!(board.is_game_over(Player::Black));
        assert!(board.is_game_over(Player::White));
    }

    #[test]
    fn mask_matches_counts() {
        let board = Board::starting();
        assert_eq!(board.mask(Cell::Black).count_occupied(), 2);
        assert_eq!(board.mask(Cell::Empty).count_occupied(), 60);
        assert!(board.mask(Cell::White).contains_index(27));
    }

    #[test]
    #[should_panic]
    fn apply_illegal_move_panics() {
        Board::starting().apply_move(Player::Black, loc(0, 0));
    }

    #[test]
    #[should_panic]
    fn apply_move_onto_occupied_cell_panics() {
        Board::starting().apply_move(Player::White, loc(3, 3));
    }

    #[test]
    fn display_shows_grid() {
        let rendered = Board::starting().to_string();
        let lines: Vec<&str> = rendered.lines().map(str::trim_end).collect();
        assert_eq!(lines[0], "   A B C D E F G H");
        assert_eq!(lines[4], " 4 . . . O # . . .");
        assert_eq!(lines[5], " 5 . . . # O . . .");
    }
}
