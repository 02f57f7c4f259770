//! Distance estimates used by the informed searches.
//!
//! Both heuristics here are admissible (they never overestimate the number of
//! moves left) and consistent (one slide changes them by at most one), which is
//! what A* needs to return shortest paths.
use crate::engine::{Board, BLANK, BOARD_SIZE, CELL_COUNT};

/// The goal cell of every tile, indexed by tile value.
///
/// Built once per problem so that heuristics can look up each tile in O(1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalPositions {
    positions: [(usize, usize); CELL_COUNT],
}

impl GoalPositions {
    /// Indexes the tiles of `goal`.
    pub fn new(goal: &Board) -> Self {
        let mut positions = [(0, 0); CELL_COUNT];
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                positions[goal.tile(r, c) as usize] = (r, c);
            }
        }
        GoalPositions { positions }
    }

    /// Returns the (row, column) where `tile` belongs.
    ///
    /// # Panics
    /// Panics if `tile` is not in `0..=8`.
    pub fn position(&self, tile: u8) -> (usize, usize) {
        self.positions[tile as usize]
    }
}

/// Sums, over all non-blank tiles, the Manhattan (L1) distance between the tile's
/// current cell and its goal cell.
///
/// # Arguments
/// * `board`: The board to evaluate.
/// * `goal_positions`: Goal cells of the target configuration.
///
/// # Returns
/// `0` exactly when `board` is the goal.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::{manhattan_distance, GoalPositions};
///
/// let goal = GoalPositions::new(&Board::goal());
/// let board = Board::from_grid([[1, 2, 3], [4, 0, 5], [7, 8, 6]]).unwrap();
/// assert_eq!(manhattan_distance(&board, &goal), 2);
/// assert_eq!(manhattan_distance(&Board::goal(), &goal), 0);
/// ```
pub fn manhattan_distance(board: &Board, goal_positions: &GoalPositions) -> u32 {
    let mut distance = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let tile = board.tile(r, c);
            if tile != BLANK {
                let (goal_r, goal_c) = goal_positions.position(tile);
                distance += (r.abs_diff(goal_r) + c.abs_diff(goal_c)) as u32;
            }
        }
    }
    distance
}

/// Counts the non-blank tiles that are not on their goal cell.
///
/// Weaker than [`manhattan_distance`] but cheaper, and still admissible since
/// each misplaced tile needs at least one move.
pub fn misplaced_tiles(board: &Board, goal_positions: &GoalPositions) -> u32 {
    let mut count = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let tile = board.tile(r, c);
            if tile != BLANK && goal_positions.position(tile) != (r, c) {
                count += 1;
            }
        }
    }
    count
}

/// Selects the heuristic an [`EightPuzzle`](crate::engine::EightPuzzle) uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Heuristic {
    /// Sum of Manhattan distances of all tiles.
    #[default]
    Manhattan,
    /// Number of tiles out of place.
    MisplacedTiles,
}

impl Heuristic {
    /// Both heuristics, in display order.
    pub const ALL: [Heuristic; 2] = [Heuristic::Manhattan, Heuristic::MisplacedTiles];

    /// Estimates the moves left from `board` to the goal described by `goal_positions`.
    pub fn estimate(&self, board: &Board, goal_positions: &GoalPositions) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan_distance(board, goal_positions),
            Heuristic::MisplacedTiles => misplaced_tiles(board, goal_positions),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "Manhattan",
            Heuristic::MisplacedTiles => "Misplaced Tiles",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(grid: [[u8; 3]; 3]) -> Board {
        Board::from_grid(grid).unwrap()
    }

    #[test]
    fn test_goal_positions_default_goal() {
        let index = GoalPositions::new(&Board::goal());
        assert_eq!(index.position(1), (0, 0));
        assert_eq!(index.position(5), (1, 1));
        assert_eq!(index.position(8), (2, 1));
        assert_eq!(index.position(0), (2, 2));
    }

    #[test]
    fn test_goal_positions_custom_goal() {
        let goal = board([[1, 2, 3], [8, 0, 4], [7, 6, 5]]);
        let index = GoalPositions::new(&goal);
        assert_eq!(index.position(8), (1, 0));
        assert_eq!(index.position(4), (1, 2));
        assert_eq!(index.position(0), (1, 1));
    }

    #[test]
    fn test_manhattan_zero_at_goal() {
        for grid in [
            [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
            [[1, 2, 3], [8, 0, 4], [7, 6, 5]],
            [[0, 1, 2], [3, 4, 5], [6, 7, 8]],
        ] {
            let goal = board(grid);
            let index = GoalPositions::new(&goal);
            assert_eq!(manhattan_distance(&goal, &index), 0);
            assert_eq!(misplaced_tiles(&goal, &index), 0);
        }
    }

    #[test]
    fn test_manhattan_ignores_blank() {
        let index = GoalPositions::new(&Board::goal());
        // Only the blank and 8 are swapped: one tile one step away.
        let b = board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        assert_eq!(manhattan_distance(&b, &index), 1);
        assert_eq!(misplaced_tiles(&b, &index), 1);
    }

    #[test]
    fn test_manhattan_known_values() {
        let index = GoalPositions::new(&Board::goal());
        let reversed = board([[8, 7, 6], [5, 4, 3], [2, 1, 0]]);
        // 8:3 7:3 6:1 5:1 4:1 3:1 2:3 1:3
        assert_eq!(manhattan_distance(&reversed, &index), 16);
        assert_eq!(misplaced_tiles(&reversed, &index), 8);
    }

    #[test]
    fn test_misplaced_never_exceeds_manhattan() {
        let index = GoalPositions::new(&Board::goal());
        for seed in 0..100 {
            let b = Board::new_random_with_seed(seed);
            assert!(misplaced_tiles(&b, &index) <= manhattan_distance(&b, &index));
        }
    }

    #[test]
    fn test_heuristics_are_consistent_across_one_move() {
        let index = GoalPositions::new(&Board::goal());
        for seed in 0..50 {
            let b = Board::new_random_with_seed(seed);
            for heuristic in Heuristic::ALL {
                let h = heuristic.estimate(&b, &index) as i64;
                for next in b.neighbors() {
                    let h_next = heuristic.estimate(&next, &index) as i64;
                    assert!((h - h_next).abs() <= 1);
                }
            }
        }
    }

    #[test]
    fn test_heuristic_dispatch() {
        let index = GoalPositions::new(&Board::goal());
        let b = board([[1, 2, 3], [4, 0, 5], [7, 8, 6]]);
        assert_eq!(Heuristic::default(), Heuristic::Manhattan);
        assert_eq!(Heuristic::Manhattan.estimate(&b, &index), 2);
        assert_eq!(Heuristic::MisplacedTiles.estimate(&b, &index), 2);
        assert_eq!(Heuristic::MisplacedTiles.name(), "Misplaced Tiles");
    }
}
