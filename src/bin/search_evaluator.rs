use clap::Parser;
use eight_puzzle_solver::engine::{Board, EightPuzzle};
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::logging;
use eight_puzzle_solver::solver::Algorithm;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare the search algorithms on seeded random boards", long_about = None)]
struct Args {
    /// Number of boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Seed of the first board; board i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Random slides applied to the goal to produce each board
    #[clap(short = 'm', long, default_value_t = 30)]
    scramble_moves: usize,

    /// Heuristic for the greedy and A* searches
    #[clap(long, value_enum, default_value_t = Heuristic::Manhattan)]
    heuristic: Heuristic,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Totals collected for one algorithm over all boards.
#[derive(Default, Debug)]
struct Totals {
    solved: usize,
    steps: usize,
    nodes_explored: usize,
    time_taken: Duration,
}

impl Totals {
    fn average(&self, value: usize) -> f64 {
        value as f64 / self.solved as f64
    }
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let goal = Board::goal();
    let mut totals: HashMap<Algorithm, Totals> = HashMap::new();

    println!(
        "Starting search evaluation for {} boards ({} scramble moves, {} heuristic)...",
        args.boards,
        args.scramble_moves,
        args.heuristic.name()
    );

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx as u64;
        let initial = Board::new_scrambled_with_seed(&goal, args.scramble_moves, current_seed);
        let puzzle = EightPuzzle::new(initial, Some(goal)).with_heuristic(args.heuristic);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);
        info!(board = board_idx, seed = current_seed, "evaluating board");

        for algorithm in Algorithm::ALL {
            match algorithm.solve(&puzzle) {
                Some(result) => {
                    println!(
                        "  {:<30} Steps: {:<4} Nodes: {:<8} Time: {:.4}s",
                        algorithm.name(),
                        result.steps,
                        result.nodes_explored,
                        result.time_taken.as_secs_f64()
                    );
                    let entry = totals.entry(algorithm).or_default();
                    entry.solved += 1;
                    entry.steps += result.steps;
                    entry.nodes_explored += result.nodes_explored;
                    entry.time_taken += result.time_taken;
                }
                None => {
                    // Scrambled boards are reachable from the goal by construction.
                    error!(
                        algorithm = algorithm.name(),
                        seed = current_seed,
                        "no solution found for a scrambled board"
                    );
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!(
        "Algorithms evaluated: {}",
        Algorithm::ALL
            .iter()
            .map(|a| a.name())
            .collect::<Vec<&str>>()
            .join(", ")
    );
    println!("\n--- Averages ---");

    for algorithm in Algorithm::ALL {
        match totals.get(&algorithm) {
            Some(t) if t.solved > 0 => println!(
                "{:<30}: Steps = {:.2}, Nodes = {:.1}, Time = {:.4}s",
                algorithm.name(),
                t.average(t.steps),
                t.average(t.nodes_explored),
                t.time_taken.as_secs_f64() / t.solved as f64
            ),
            _ => println!("{}: No results recorded.", algorithm.name()),
        }
    }
}
