use anyhow::{Context, Result};
use clap::Parser;
use eight_puzzle_solver::engine::{Board, EightPuzzle};
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::logging;
use eight_puzzle_solver::solver::{Algorithm, SearchLimits, SearchOutcome};
use eight_puzzle_solver::utils::parse_puzzle;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Board solved when no input is given.
const DEFAULT_INITIAL: [[u8; 3]; 3] = [[1, 2, 3], [4, 0, 5], [7, 8, 6]];

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Puzzle file: three rows for the initial board, optionally followed by three rows for the goal
    board_file: Option<PathBuf>,

    /// Initial board on one line, e.g. 123405786 (0, '.' or '_' is the blank)
    #[clap(short, long, conflicts_with = "board_file")]
    initial: Option<String>,

    /// Goal board on one line; defaults to 123456780
    #[clap(short, long)]
    goal: Option<String>,

    /// Run a single algorithm instead of all three
    #[clap(short, long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Heuristic for the greedy and A* searches
    #[clap(long, value_enum, default_value_t = Heuristic::Manhattan)]
    heuristic: Heuristic,

    /// Stop a search after exploring this many states
    #[clap(long)]
    max_nodes: Option<usize>,

    /// Stop a search after this many milliseconds
    #[clap(long)]
    time_limit_ms: Option<u64>,

    /// Print every board along the solution
    #[clap(long)]
    show_path: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_puzzle(args: &Args) -> Result<EightPuzzle> {
    let (initial, file_goal) = match (&args.board_file, &args.initial) {
        (Some(path), _) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            parse_puzzle(&content)
                .with_context(|| format!("Invalid puzzle file: {}", path.display()))?
        }
        (None, Some(cells)) => {
            let initial = cells
                .parse::<Board>()
                .with_context(|| format!("Invalid --initial board '{}'", cells))?;
            (initial, None)
        }
        (None, None) => (Board::from_grid(DEFAULT_INITIAL)?, None),
    };

    let goal = match &args.goal {
        Some(cells) => Some(
            cells
                .parse::<Board>()
                .with_context(|| format!("Invalid --goal board '{}'", cells))?,
        ),
        None => file_goal,
    };

    Ok(EightPuzzle::new(initial, goal).with_heuristic(args.heuristic))
}

fn limits_from(args: &Args) -> SearchLimits {
    let mut limits = SearchLimits::unlimited();
    if let Some(max_nodes) = args.max_nodes {
        limits = limits.with_max_nodes(max_nodes);
    }
    if let Some(ms) = args.time_limit_ms {
        limits = limits.with_time_limit(Duration::from_millis(ms));
    }
    limits
}

fn report(puzzle: &EightPuzzle, outcome: &SearchOutcome, show_path: bool) {
    match outcome {
        SearchOutcome::Solved(result) => {
            println!("Solution found in {} steps.", result.steps);
            println!("Nodes explored: {}", result.nodes_explored);
            println!("Time taken: {:.4} seconds", result.time_taken.as_secs_f64());
            if show_path {
                let moves = result.moves_from(puzzle.initial());
                for (i, (direction, board)) in moves.iter().zip(&result.path).enumerate() {
                    println!("\nMove {}: blank {}\n{}", i + 1, direction, board);
                }
            }
            println!();
        }
        SearchOutcome::NoSolution {
            nodes_explored,
            time_taken,
        } => {
            println!("No solution found.");
            println!("Nodes explored: {}", nodes_explored);
            println!("Time taken: {:.4} seconds\n", time_taken.as_secs_f64());
        }
        SearchOutcome::Aborted {
            reason,
            nodes_explored,
            time_taken,
        } => {
            println!("Search stopped: {}.", reason);
            println!("Nodes explored: {}", nodes_explored);
            println!("Time taken: {:.4} seconds\n", time_taken.as_secs_f64());
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let puzzle = load_puzzle(&args)?;
    let limits = limits_from(&args);

    println!("Initial board:\n{}\n", puzzle.initial());
    println!("Goal board:\n{}\n", puzzle.goal());
    if !puzzle.is_solvable() {
        warn!("the initial board has the wrong inversion parity for this goal");
        println!("Note: this board cannot reach the goal; the searches will exhaust every reachable state.\n");
    }

    let algorithms = match args.algorithm {
        Some(algorithm) => vec![algorithm],
        None => Algorithm::ALL.to_vec(),
    };

    for algorithm in algorithms {
        println!("--- Solving with {} ---", algorithm.name());
        let outcome = algorithm.solve_with_limits(&puzzle, &limits);
        report(&puzzle, &outcome, args.show_path);
    }

    Ok(())
}
