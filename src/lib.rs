//! # 8-Puzzle Solver Library
//!
//! This library models the 8-puzzle sliding-tile game and solves it with three
//! classic graph searches: breadth-first search, greedy best-first search and A*
//! with the Manhattan-distance heuristic. It also carries a small backtracking
//! solver for the N-Queens puzzle.
//!
//! It is used by four binaries:
//! - `puzzle_solver`: Reads a board (file or command line) and reports the
//!   solution found by each algorithm, with step count, explored nodes and time.
//! - `puzzle_player`: Lets a human slide the tiles, with undo and A* hints.
//! - `search_evaluator`: Compares the algorithms on a batch of seeded boards.
//! - `n_queens`: Prints the solutions of the N-Queens puzzle.
//!
//! ## Modules
//! - `engine`: Board representation (`Board`), moves (`Direction`), the search
//!   problem (`EightPuzzle`) and interactive sessions (`Game`).
//! - `heuristics`: Goal position index and the distance estimates.
//! - `solver`: The three searches, their common `SearchStrategy` interface,
//!   results and optional limits.
//! - `utils`: Parsing boards and puzzle files from text.
//! - `error`: The `PuzzleError` type returned for malformed input.
//! - `queens`: N-Queens backtracking.
//! - `logging`: `tracing` subscriber setup for the binaries.
//!
//! ## Example
//! ```
//! use eight_puzzle_solver::engine::EightPuzzle;
//! use eight_puzzle_solver::solver::Algorithm;
//!
//! let puzzle = EightPuzzle::from_grids([[1, 2, 3], [4, 0, 5], [7, 8, 6]], None)?;
//! for algorithm in Algorithm::ALL {
//!     let result = algorithm.solve(&puzzle).expect("solvable");
//!     assert_eq!(result.steps, 2);
//! }
//! # Ok::<(), eight_puzzle_solver::error::PuzzleError>(())
//! ```

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod logging;
pub mod queens;
pub mod solver;
pub mod utils;

// Items live in their modules, e.g. `eight_puzzle_solver::solver::AStarSearch`.
// Only the handful used by every caller are re-exported here.
pub use engine::{Board, EightPuzzle};
pub use error::PuzzleError;
pub use solver::{Algorithm, SearchResult, SearchStrategy};
