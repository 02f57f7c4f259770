//! Core model of the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Direction`: The four ways the blank can slide.
//! - `Board`: An immutable 3x3 configuration of tiles, with blank lookup,
//!   successor generation and solvability checks.
//! - `EightPuzzle`: A search problem, i.e. an initial board, a goal board and the
//!   precomputed goal positions used by the heuristics.
//! - `Game`: An interactive session with move history for undo.
use crate::error::PuzzleError;
use crate::heuristics::{GoalPositions, Heuristic};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, blank included.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The value that marks the blank cell.
pub const BLANK: u8 = 0;

/// A direction in which the blank slides.
///
/// Moving the blank `Up` swaps it with the tile above it, so that tile
/// visually moves down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the fixed order used for successor generation.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the direction that undoes this one.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Direction;
    /// assert_eq!(Direction::Up.reverse(), Direction::Down);
    /// assert_eq!(Direction::Left.reverse(), Direction::Right);
    /// ```
    pub const fn reverse(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", name)
    }
}

/// An 8-puzzle configuration.
///
/// A `Board` always holds each of the values `0..=8` exactly once, `0` being the
/// blank. The invariant is checked by every public constructor, and boards are
/// never mutated afterwards: a move produces a new `Board` and leaves the old one
/// untouched. The blank position is cached so that lookups are O(1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[u8; BOARD_SIZE]; BOARD_SIZE],
    blank: (usize, usize),
}

impl Board {
    /// Creates a board from a grid, validating that it is a permutation of `0..=8`.
    ///
    /// # Arguments
    /// * `grid`: The tiles in row-major order, `0` for the blank.
    ///
    /// # Returns
    /// * `Ok(Board)` if the grid holds every value `0..=8` exactly once.
    /// * `Err(PuzzleError)` if a value is out of range, the number of blanks is not
    ///   exactly one, or a tile is duplicated.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let board = Board::from_grid([[1, 2, 3], [4, 0, 5], [7, 8, 6]]).unwrap();
    /// assert_eq!(board.blank_position(), (1, 1));
    ///
    /// assert!(Board::from_grid([[1, 2, 3], [4, 0, 5], [7, 8, 8]]).is_err());
    /// ```
    pub fn from_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, PuzzleError> {
        let mut seen = [false; CELL_COUNT];
        let mut blanks = Vec::new();

        for (r, row) in grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value as usize >= CELL_COUNT {
                    return Err(PuzzleError::TileOutOfRange {
                        value,
                        row: r,
                        col: c,
                    });
                }
                if value == BLANK {
                    blanks.push((r, c));
                }
            }
        }

        if blanks.len() != 1 {
            return Err(PuzzleError::BlankCount(blanks.len()));
        }

        for &value in grid.iter().flatten() {
            if seen[value as usize] {
                return Err(PuzzleError::DuplicateTile(value));
            }
            seen[value as usize] = true;
        }

        Ok(Board {
            grid,
            blank: blanks[0],
        })
    }

    /// Creates a board from a slice of rows, checking the shape before the tiles.
    ///
    /// # Returns
    /// * `Err(PuzzleError::InvalidRowCount)` or `Err(PuzzleError::InvalidRowLength)` if
    ///   the input is not 3x3, otherwise the result of [`Board::from_grid`].
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, PuzzleError> {
        if rows.len() != BOARD_SIZE {
            return Err(PuzzleError::InvalidRowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut grid = [[BLANK; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != BOARD_SIZE {
                return Err(PuzzleError::InvalidRowLength {
                    row: r,
                    expected: BOARD_SIZE,
                    found: row.len(),
                });
            }
            grid[r].copy_from_slice(row);
        }

        Board::from_grid(grid)
    }

    /// Returns the default goal configuration: `1 2 3 / 4 5 6 / 7 8 0`.
    pub fn goal() -> Self {
        Board {
            grid: [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
            blank: (BOARD_SIZE - 1, BOARD_SIZE - 1),
        }
    }

    /// Creates a uniformly random board from a seed.
    ///
    /// Roughly half of all permutations cannot reach a given goal; use
    /// [`Board::new_scrambled_with_seed`] when a solvable board is required.
    ///
    /// # Arguments
    /// * `seed`: Seed for the random number generator. The same seed always
    ///   produces the same board.
    pub fn new_random_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut cells: Vec<u8> = (0..CELL_COUNT as u8).collect();
        cells.shuffle(&mut rng);

        let mut grid = [[BLANK; BOARD_SIZE]; BOARD_SIZE];
        let mut blank = (0, 0);
        for (i, &value) in cells.iter().enumerate() {
            let (r, c) = (i / BOARD_SIZE, i % BOARD_SIZE);
            grid[r][c] = value;
            if value == BLANK {
                blank = (r, c);
            }
        }
        Board { grid, blank }
    }

    /// Creates a board by sliding the blank `moves` times at random, starting from `goal`.
    ///
    /// The walk never immediately undoes its previous move. Because every step is a
    /// legal move, the result is always solvable towards `goal`, and its optimal
    /// solution length is at most `moves`.
    ///
    /// # Arguments
    /// * `goal`: The board the walk starts from.
    /// * `moves`: Number of random slides.
    /// * `seed`: Seed for the random number generator.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let goal = Board::goal();
    /// let board = Board::new_scrambled_with_seed(&goal, 20, 7);
    /// assert!(board.is_solvable_towards(&goal));
    /// assert_eq!(board, Board::new_scrambled_with_seed(&goal, 20, 7));
    /// ```
    pub fn new_scrambled_with_seed(goal: &Board, moves: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut current = *goal;
        let mut previous: Option<Board> = None;

        for _ in 0..moves {
            let candidates: Vec<Board> = current
                .neighbors()
                .into_iter()
                .filter(|next| Some(*next) != previous)
                .collect();
            // Every cell has at least two neighbors, so one survives the filter.
            let next = candidates[rng.gen_range(0..candidates.len())];
            previous = Some(current);
            current = next;
        }

        current
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Returns the underlying grid.
    pub fn grid(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Returns the (row, column) of the blank cell.
    pub fn blank_position(&self) -> (usize, usize) {
        self.blank
    }

    /// Slides the blank one cell in `direction`.
    ///
    /// # Returns
    /// * `Some(Board)` with the blank and the adjacent tile swapped.
    /// * `None` if the blank would leave the board.
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let (r, c) = self.blank;
        let (new_r, new_c) = match direction {
            Direction::Up => (r.checked_sub(1)?, c),
            Direction::Down => (r + 1, c),
            Direction::Left => (r, c.checked_sub(1)?),
            Direction::Right => (r, c + 1),
        };
        if new_r >= BOARD_SIZE || new_c >= BOARD_SIZE {
            return None;
        }

        let mut grid = self.grid;
        grid[r][c] = grid[new_r][new_c];
        grid[new_r][new_c] = BLANK;
        Some(Board {
            grid,
            blank: (new_r, new_c),
        })
    }

    /// Returns every board reachable with one slide, in `Direction::ALL` order.
    ///
    /// A blank in a corner has 2 neighbors, on an edge 3, in the center 4.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let goal = Board::goal(); // blank in the bottom-right corner
    /// assert_eq!(goal.neighbors().len(), 2);
    /// ```
    pub fn neighbors(&self) -> Vec<Board> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.slide(direction))
            .collect()
    }

    /// Returns the direction that turns `self` into `next`, if they are one slide apart.
    pub fn direction_to(&self, next: &Board) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.slide(direction).as_ref() == Some(next))
    }

    /// Counts the pairs of tiles that appear in reverse order when the board is read
    /// row by row, ignoring the blank.
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self
            .grid
            .iter()
            .flatten()
            .copied()
            .filter(|&value| value != BLANK)
            .collect();

        let mut count = 0;
        for i in 0..tiles.len() {
            for j in (i + 1)..tiles.len() {
                if tiles[i] > tiles[j] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Checks whether `goal` can be reached from this board.
    ///
    /// On an odd-width board a slide never changes the parity of the inversion
    /// count, and any two boards with equal parity are mutually reachable.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let goal = Board::goal();
    /// let swapped = Board::from_grid([[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
    /// assert!(!swapped.is_solvable_towards(&goal));
    /// ```
    pub fn is_solvable_towards(&self, goal: &Board) -> bool {
        self.inversions() % 2 == goal.inversions() % 2
    }

    /// Formats the board with the tile at `pos` wrapped in brackets.
    ///
    /// The blank is shown as `.`. Rows are separated by newlines and there is no
    /// trailing newline.
    ///
    /// # Arguments
    /// * `pos`: The (row, column) to highlight, or `None`.
    pub fn to_string_with_highlight(&self, pos: Option<(usize, usize)>) -> String {
        let mut lines = Vec::with_capacity(BOARD_SIZE);

        for (r, row) in self.grid.iter().enumerate() {
            let mut line = String::new();
            for (c, &value) in row.iter().enumerate() {
                let symbol = if value == BLANK {
                    '.'
                } else {
                    char::from(b'0' + value)
                };
                if pos == Some((r, c)) {
                    line.push_str(&format!("[{}]", symbol));
                } else {
                    line.push_str(&format!(" {} ", symbol));
                }
            }
            lines.push(line.trim_end().to_string());
        }

        lines.join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::goal()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_highlight(None))
    }
}

/// A search problem: where to start, where to go, and how to estimate the distance.
///
/// The goal positions are computed once on construction so that heuristic
/// evaluation is a table lookup per tile.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{Board, EightPuzzle};
/// let puzzle = EightPuzzle::from_grids([[1, 2, 3], [4, 0, 5], [7, 8, 6]], None).unwrap();
/// assert_eq!(puzzle.goal(), &Board::goal());
/// assert_eq!(puzzle.heuristic(puzzle.initial()), 2);
/// assert!(puzzle.is_goal(&Board::goal()));
/// ```
#[derive(Clone, Debug)]
pub struct EightPuzzle {
    initial: Board,
    goal: Board,
    goal_positions: GoalPositions,
    heuristic: Heuristic,
}

impl EightPuzzle {
    /// Creates a problem from validated boards.
    ///
    /// # Arguments
    /// * `initial`: The starting configuration.
    /// * `goal`: The target configuration, or `None` for [`Board::goal`].
    pub fn new(initial: Board, goal: Option<Board>) -> Self {
        let goal = goal.unwrap_or_default();
        EightPuzzle {
            initial,
            goal,
            goal_positions: GoalPositions::new(&goal),
            heuristic: Heuristic::default(),
        }
    }

    /// Creates a problem from raw grids, validating both.
    pub fn from_grids(
        initial: [[u8; BOARD_SIZE]; BOARD_SIZE],
        goal: Option<[[u8; BOARD_SIZE]; BOARD_SIZE]>,
    ) -> Result<Self, PuzzleError> {
        let initial = Board::from_grid(initial)?;
        let goal = goal.map(Board::from_grid).transpose()?;
        Ok(EightPuzzle::new(initial, goal))
    }

    /// Replaces the heuristic used by the informed searches.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    pub fn goal_positions(&self) -> &GoalPositions {
        &self.goal_positions
    }

    pub fn heuristic_kind(&self) -> Heuristic {
        self.heuristic
    }

    /// Returns the (row, column) of the blank in `state`.
    pub fn blank_position(&self, state: &Board) -> (usize, usize) {
        state.blank_position()
    }

    /// Returns the successors of `state` in `Direction::ALL` order.
    pub fn neighbors(&self, state: &Board) -> Vec<Board> {
        state.neighbors()
    }

    pub fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }

    /// Estimates the number of moves left from `state` to the goal.
    pub fn heuristic(&self, state: &Board) -> u32 {
        self.heuristic.estimate(state, &self.goal_positions)
    }

    /// Checks the inversion parity of the initial board against the goal.
    pub fn is_solvable(&self) -> bool {
        self.initial.is_solvable_towards(&self.goal)
    }
}

/// Manages an interactive 8-puzzle session.
///
/// The game tracks the current board, the goal, and every board visited so far so
/// that moves can be undone.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{Board, Direction, Game};
/// let start = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
/// let mut game = Game::new_with_board(start, Board::goal());
///
/// assert!(!game.process_move(Direction::Down)); // blank is on the bottom row
/// assert!(game.process_move(Direction::Right));
/// assert!(game.is_solved());
/// assert_eq!(game.steps(), 1);
///
/// assert!(game.undo_last_move());
/// assert_eq!(game.board(), &start);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    goal: Board,
    history: Vec<Board>,
}

impl Game {
    /// Creates a game starting at `initial` and aiming for `goal`.
    pub fn new_with_board(initial: Board, goal: Board) -> Self {
        Game {
            board: initial,
            goal,
            history: vec![initial],
        }
    }

    /// Creates a game on a solvable board scrambled from the default goal.
    pub fn new_scrambled(moves: usize, seed: u64) -> Self {
        let goal = Board::goal();
        Game::new_with_board(Board::new_scrambled_with_seed(&goal, moves, seed), goal)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Returns the number of moves made and not undone.
    pub fn steps(&self) -> usize {
        self.history.len() - 1
    }

    /// Slides the blank in `direction`.
    ///
    /// # Returns
    /// * `true` if the move was legal and applied.
    /// * `false` if the blank would leave the board; the game is unchanged.
    pub fn process_move(&mut self, direction: Direction) -> bool {
        match self.board.slide(direction) {
            Some(next) => {
                self.board = next;
                self.history.push(next);
                true
            }
            None => false,
        }
    }

    /// Reverts the last move.
    ///
    /// # Returns
    /// `false` if no moves have been made yet.
    pub fn undo_last_move(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            if let Some(&previous) = self.history.last() {
                self.board = previous;
            }
            true
        } else {
            false
        }
    }

    pub fn is_solved(&self) -> bool {
        self.board == self.goal
    }
}
