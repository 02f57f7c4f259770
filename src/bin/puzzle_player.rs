use clap::Parser;
use eight_puzzle_solver::engine::{Direction, EightPuzzle, Game};
use eight_puzzle_solver::logging;
use eight_puzzle_solver::solver::{AStarSearch, SearchStrategy};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play the 8-puzzle in the terminal", long_about = None)]
struct Args {
    /// Seed for the starting board
    #[clap(short, long, default_value_t = 514514)]
    seed: u64,

    /// Number of random slides applied to the solved board
    #[clap(short = 'm', long, default_value_t = 30)]
    scramble_moves: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "w" => Some(Direction::Up),
        "s" => Some(Direction::Down),
        "a" => Some(Direction::Left),
        "d" => Some(Direction::Right),
        _ => None,
    }
}

/// Suggests the first move of an optimal solution and the cell of the tile it moves.
fn hint(game: &Game) -> Option<(Direction, (usize, usize))> {
    let puzzle = EightPuzzle::new(*game.board(), Some(*game.goal()));
    let result = AStarSearch::new(&puzzle).solve()?;
    let next = result.path.first()?;
    let direction = game.board().direction_to(next)?;
    // The tile that moves sits where the blank ends up.
    Some((direction, next.blank_position()))
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut game = Game::new_scrambled(args.scramble_moves, args.seed);
    println!("Welcome to the 8-puzzle!");
    println!("Slide the blank with w/a/s/d, 'u' to undo, 'h' for a hint, 'q' to quit.");

    loop {
        println!("---------------------");
        println!("Steps: {}", game.steps());
        println!("{}", game.board());

        if game.is_solved() {
            println!();
            println!("---------------------");
            println!("🎉 SOLVED! 🎉");
            println!("Total Steps: {}", game.steps());
            println!("---------------------");
            break;
        }

        print!("Enter your move (w/a/s/d), 'u' to undo, 'h' for a hint, 'q' to quit: ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(_) => {
                println!("Error reading input. Please try again.");
                continue;
            }
        }

        let trimmed_input = input.trim().to_lowercase();

        match trimmed_input.as_str() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "u" => {
                if game.undo_last_move() {
                    println!("Move undone.");
                } else {
                    println!("Cannot undo further (already at the initial board).");
                }
            }
            "h" => match hint(&game) {
                Some((direction, tile_pos)) => {
                    println!("Hint: move the blank {}.", direction);
                    println!("{}", game.board().to_string_with_highlight(Some(tile_pos)));
                }
                None => println!("No hint available: the goal cannot be reached from here."),
            },
            key => match direction_for_key(key) {
                Some(direction) => {
                    if !game.process_move(direction) {
                        println!("Invalid move: the blank cannot move {}.", direction);
                    }
                }
                None => println!("Invalid input. Use w/a/s/d, 'u', 'h' or 'q'."),
            },
        }
    }
}
