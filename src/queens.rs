//! Backtracking solver for the N-Queens puzzle.
//!
//! Queens are placed one row at a time. A placement is rejected when its
//! column, its main diagonal (`row + col`) or its anti-diagonal
//! (`row - col`) is already taken, which is tracked with one flag per line so
//! each check is O(1).

/// Occupancy of columns and diagonals during the search.
struct QueensBoard {
    size: usize,
    /// Column of the queen placed on each row so far.
    placement: Vec<usize>,
    columns: Vec<bool>,
    diagonals: Vec<bool>,
    anti_diagonals: Vec<bool>,
}

impl QueensBoard {
    fn new(size: usize) -> Self {
        QueensBoard {
            size,
            placement: Vec::with_capacity(size),
            columns: vec![false; size],
            diagonals: vec![false; 2 * size],
            anti_diagonals: vec![false; 2 * size],
        }
    }

    fn anti_diagonal(&self, row: usize, col: usize) -> usize {
        row + self.size - col
    }

    fn is_safe(&self, row: usize, col: usize) -> bool {
        !self.columns[col]
            && !self.diagonals[row + col]
            && !self.anti_diagonals[self.anti_diagonal(row, col)]
    }

    fn set(&mut self, row: usize, col: usize, occupied: bool) {
        let anti = self.anti_diagonal(row, col);
        self.columns[col] = occupied;
        self.diagonals[row + col] = occupied;
        self.anti_diagonals[anti] = occupied;
    }

    /// Fills rows `row..size`, calling `on_solution` for every complete placement.
    fn place(&mut self, row: usize, on_solution: &mut dyn FnMut(&[usize])) {
        if row == self.size {
            on_solution(&self.placement);
            return;
        }

        for col in 0..self.size {
            if self.is_safe(row, col) {
                self.set(row, col, true);
                self.placement.push(col);
                self.place(row + 1, on_solution);
                self.placement.pop();
                self.set(row, col, false);
            }
        }
    }
}

/// Renders a placement as rows of `.` with a `Q` in each queen's column.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::queens::render_placement;
/// assert_eq!(render_placement(&[1, 3, 0, 2]), vec![".Q..", "...Q", "Q...", "..Q."]);
/// ```
pub fn render_placement(placement: &[usize]) -> Vec<String> {
    let size = placement.len();
    placement
        .iter()
        .map(|&col| {
            (0..size)
                .map(|c| if c == col { 'Q' } else { '.' })
                .collect()
        })
        .collect()
}

/// Finds every way to place `n` non-attacking queens on an `n` x `n` board.
///
/// Solutions are listed in lexicographic order of their column placements,
/// row 0 first. For `n == 0` the single empty board is returned.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::queens::solve_n_queens;
/// let solutions = solve_n_queens(4);
/// assert_eq!(solutions.len(), 2);
/// assert_eq!(solutions[0], vec![".Q..", "...Q", "Q...", "..Q."]);
/// ```
pub fn solve_n_queens(n: usize) -> Vec<Vec<String>> {
    let mut solutions = Vec::new();
    QueensBoard::new(n).place(0, &mut |placement| {
        solutions.push(render_placement(placement));
    });
    tracing::debug!(n, solutions = solutions.len(), "n-queens search finished");
    solutions
}

/// Counts the solutions of the `n`-queens puzzle without rendering them.
pub fn count_n_queens(n: usize) -> usize {
    let mut count = 0;
    QueensBoard::new(n).place(0, &mut |_| count += 1);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_solution_counts() {
        let expected = [1, 1, 0, 0, 2, 10, 4, 40, 92];
        for (n, &count) in expected.iter().enumerate() {
            assert_eq!(count_n_queens(n), count, "n = {}", n);
        }
    }

    #[test]
    fn test_four_queens_boards() {
        let solutions = solve_n_queens(4);
        assert_eq!(
            solutions,
            vec![
                vec![".Q..", "...Q", "Q...", "..Q."],
                vec!["..Q.", "Q...", "...Q", ".Q.."],
            ]
        );
    }

    #[test]
    fn test_trivial_sizes() {
        assert_eq!(solve_n_queens(0), vec![Vec::<String>::new()]);
        assert_eq!(solve_n_queens(1), vec![vec!["Q".to_string()]]);
        assert!(solve_n_queens(2).is_empty());
        assert!(solve_n_queens(3).is_empty());
    }

    #[test]
    fn test_solutions_are_non_attacking() {
        for solution in solve_n_queens(6) {
            let cols: Vec<usize> = solution
                .iter()
                .map(|row| row.find('Q').unwrap())
                .collect();
            for i in 0..cols.len() {
                for j in (i + 1)..cols.len() {
                    assert_ne!(cols[i], cols[j]);
                    assert_ne!(cols[i].abs_diff(cols[j]), j - i);
                }
            }
        }
    }

    #[test]
    fn test_render_placement() {
        assert_eq!(render_placement(&[0]), vec!["Q"]);
        assert_eq!(render_placement(&[2, 0, 1]), vec!["..Q", "Q..", ".Q."]);
    }
}
