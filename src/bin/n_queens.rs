use clap::Parser;
use eight_puzzle_solver::logging;
use eight_puzzle_solver::queens::solve_n_queens;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve the N-Queens puzzle by backtracking", long_about = None)]
struct Args {
    /// Size of the chessboard (N)
    n: usize,

    /// Number of solutions to print
    #[clap(long, default_value_t = 3)]
    show: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let solutions = solve_n_queens(args.n);

    println!(
        "Total number of solutions for {}-Queens: {}",
        args.n,
        solutions.len()
    );
    println!();

    if !solutions.is_empty() && args.show > 0 {
        println!("First few solutions:");
        for (i, solution) in solutions.iter().take(args.show).enumerate() {
            println!("Solution {}:", i + 1);
            for row in solution {
                println!("{}", row);
            }
            println!();
        }
    }
}
