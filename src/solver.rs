//! Graph searches over 8-puzzle boards.
//!
//! Three strategies share the [`EightPuzzle`] problem and the [`SearchStrategy`]
//! interface:
//! - [`BreadthFirstSearch`]: uninformed, returns a shortest path.
//! - [`GreedySearch`]: expands whatever looks closest to the goal; fast, not optimal.
//! - [`AStarSearch`]: orders by `g + h`, returns a shortest path while expanding far
//!   fewer states than BFS.
//!
//! Each search keeps its own frontier, visited record and parent links, so
//! searches never interact. A search either reaches the goal, exhausts the
//! reachable states ("no solution"), or stops early on a [`SearchLimits`] bound.
use crate::engine::{Board, Direction, EightPuzzle};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// The clock is read on dequeues where `nodes_explored & CLOCK_CHECK_MASK == 0`,
/// i.e. on the first dequeue and then every 1024.
const CLOCK_CHECK_MASK: usize = 0x3FF;

/// A path found by a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Boards from the first move to the goal. The initial board is not included.
    pub path: Vec<Board>,
    /// Number of moves, i.e. `path.len()`.
    pub steps: usize,
    /// Number of frontier entries dequeued, the final goal dequeue included.
    pub nodes_explored: usize,
    /// Wall-clock time spent in the search call.
    pub time_taken: Duration,
}

impl SearchResult {
    /// Recovers the blank's moves along the path, starting from `start`.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Direction, EightPuzzle};
    /// use eight_puzzle_solver::solver::{AStarSearch, SearchStrategy};
    ///
    /// let puzzle = EightPuzzle::from_grids([[1, 2, 3], [4, 0, 5], [7, 8, 6]], None).unwrap();
    /// let result = AStarSearch::new(&puzzle).solve().unwrap();
    /// assert_eq!(result.moves_from(puzzle.initial()), vec![Direction::Right, Direction::Down]);
    /// ```
    pub fn moves_from(&self, start: &Board) -> Vec<Direction> {
        let mut moves = Vec::with_capacity(self.path.len());
        let mut current = start;
        for next in &self.path {
            if let Some(direction) = current.direction_to(next) {
                moves.push(direction);
            }
            current = next;
        }
        moves
    }
}

/// Optional bounds on a single search call. The default is unlimited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop once this many states have been dequeued.
    pub max_nodes: Option<usize>,
    /// Stop once this much wall-clock time has passed.
    pub time_limit: Option<Duration>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        SearchLimits::default()
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_nodes.is_none() && self.time_limit.is_none()
    }
}

/// Why a search stopped before reaching a conclusion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminationReason {
    /// The node budget (the contained value) was used up.
    NodeLimitReached(usize),
    /// The time budget (the contained value) was used up.
    TimeLimitReached(Duration),
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::NodeLimitReached(max) => {
                write!(f, "node limit of {} reached", max)
            }
            TerminationReason::TimeLimitReached(limit) => {
                write!(f, "time limit of {:?} reached", limit)
            }
        }
    }
}

/// The full outcome of a search call.
///
/// Unlimited searches only ever produce `Solved` or `NoSolution`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached.
    Solved(SearchResult),
    /// Every state reachable from the initial board was explored without meeting the goal.
    NoSolution {
        nodes_explored: usize,
        time_taken: Duration,
    },
    /// A limit stopped the search; the goal may or may not be reachable.
    Aborted {
        reason: TerminationReason,
        nodes_explored: usize,
        time_taken: Duration,
    },
}

impl SearchOutcome {
    /// Returns the result if the goal was reached, `None` otherwise.
    pub fn into_result(self) -> Option<SearchResult> {
        match self {
            SearchOutcome::Solved(result) => Some(result),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            SearchOutcome::Solved(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    pub fn nodes_explored(&self) -> usize {
        match self {
            SearchOutcome::Solved(result) => result.nodes_explored,
            SearchOutcome::NoSolution { nodes_explored, .. }
            | SearchOutcome::Aborted { nodes_explored, .. } => *nodes_explored,
        }
    }

    pub fn time_taken(&self) -> Duration {
        match self {
            SearchOutcome::Solved(result) => result.time_taken,
            SearchOutcome::NoSolution { time_taken, .. }
            | SearchOutcome::Aborted { time_taken, .. } => *time_taken,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Solved(result) => write!(f, "Solved(steps={})", result.steps),
            SearchOutcome::NoSolution { .. } => write!(f, "NoSolution"),
            SearchOutcome::Aborted { reason, .. } => write!(f, "Aborted: {}", reason),
        }
    }
}

/// A search algorithm bound to a problem.
pub trait SearchStrategy {
    /// Human-readable name of the algorithm.
    fn name(&self) -> &'static str;

    /// Runs the search under `limits`.
    fn solve_with_limits(&self, limits: &SearchLimits) -> SearchOutcome;

    /// Runs the search to completion.
    ///
    /// # Returns
    /// * `Some(SearchResult)` if the goal is reachable.
    /// * `None` if every reachable state was explored without meeting the goal.
    fn solve(&self) -> Option<SearchResult> {
        self.solve_with_limits(&SearchLimits::unlimited())
            .into_result()
    }
}

/// Counts dequeues, enforces limits and builds the outcome of one search call.
struct SearchClock {
    algorithm: &'static str,
    limits: SearchLimits,
    start: Instant,
    nodes_explored: usize,
}

impl SearchClock {
    fn start(algorithm: &'static str, limits: SearchLimits) -> Self {
        debug!(algorithm, ?limits, "starting search");
        SearchClock {
            algorithm,
            limits,
            start: Instant::now(),
            nodes_explored: 0,
        }
    }

    /// Checked on every dequeue, before the entry is counted.
    fn check(&self) -> Option<TerminationReason> {
        if let Some(max_nodes) = self.limits.max_nodes {
            if self.nodes_explored >= max_nodes {
                return Some(TerminationReason::NodeLimitReached(max_nodes));
            }
        }
        if let Some(time_limit) = self.limits.time_limit {
            if (self.nodes_explored & CLOCK_CHECK_MASK) == 0 && self.start.elapsed() >= time_limit
            {
                return Some(TerminationReason::TimeLimitReached(time_limit));
            }
        }
        None
    }

    #[inline]
    fn count(&mut self) {
        self.nodes_explored += 1;
    }

    fn solved(&self, path: Vec<Board>) -> SearchOutcome {
        let time_taken = self.start.elapsed();
        debug!(
            algorithm = self.algorithm,
            steps = path.len(),
            nodes_explored = self.nodes_explored,
            ?time_taken,
            "solution found"
        );
        SearchOutcome::Solved(SearchResult {
            steps: path.len(),
            path,
            nodes_explored: self.nodes_explored,
            time_taken,
        })
    }

    fn exhausted(&self) -> SearchOutcome {
        let time_taken = self.start.elapsed();
        debug!(
            algorithm = self.algorithm,
            nodes_explored = self.nodes_explored,
            ?time_taken,
            "frontier exhausted without reaching the goal"
        );
        SearchOutcome::NoSolution {
            nodes_explored: self.nodes_explored,
            time_taken,
        }
    }

    fn aborted(&self, reason: TerminationReason) -> SearchOutcome {
        let time_taken = self.start.elapsed();
        info!(
            algorithm = self.algorithm,
            nodes_explored = self.nodes_explored,
            %reason,
            "search aborted"
        );
        SearchOutcome::Aborted {
            reason,
            nodes_explored: self.nodes_explored,
            time_taken,
        }
    }
}

/// Parent links from each discovered board back to the initial board.
struct SearchTree {
    root: Board,
    parents: HashMap<Board, Board>,
}

impl SearchTree {
    fn new(root: Board) -> Self {
        SearchTree {
            root,
            parents: HashMap::new(),
        }
    }

    /// Records (or replaces) the parent of `child`.
    fn link(&mut self, child: Board, parent: Board) {
        self.parents.insert(child, parent);
    }

    /// Walks the parent links from `target` back to the root.
    ///
    /// The returned path excludes the root and ends with `target`.
    fn path_to(&self, target: Board) -> Vec<Board> {
        let mut path = Vec::new();
        let mut current = target;
        while current != self.root {
            path.push(current);
            match self.parents.get(&current) {
                Some(&parent) => current = parent,
                None => break,
            }
        }
        path.reverse();
        path
    }
}

/// Uninformed breadth-first search.
///
/// Every move costs one, so the first time the goal is dequeued its path is a
/// shortest one.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::EightPuzzle;
/// use eight_puzzle_solver::solver::{BreadthFirstSearch, SearchStrategy};
///
/// let puzzle = EightPuzzle::from_grids([[1, 2, 3], [4, 0, 5], [7, 8, 6]], None).unwrap();
/// let result = BreadthFirstSearch::new(&puzzle).solve().unwrap();
/// assert_eq!(result.steps, 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BreadthFirstSearch<'a> {
    puzzle: &'a EightPuzzle,
}

impl<'a> BreadthFirstSearch<'a> {
    pub fn new(puzzle: &'a EightPuzzle) -> Self {
        BreadthFirstSearch { puzzle }
    }
}

impl SearchStrategy for BreadthFirstSearch<'_> {
    fn name(&self) -> &'static str {
        Algorithm::Bfs.name()
    }

    fn solve_with_limits(&self, limits: &SearchLimits) -> SearchOutcome {
        let puzzle = self.puzzle;
        let initial = *puzzle.initial();
        let mut clock = SearchClock::start(self.name(), *limits);
        let mut tree = SearchTree::new(initial);

        let mut queue = VecDeque::from([initial]);
        let mut visited = HashSet::from([initial]);

        while let Some(current) = queue.pop_front() {
            if let Some(reason) = clock.check() {
                return clock.aborted(reason);
            }
            clock.count();

            if puzzle.is_goal(&current) {
                return clock.solved(tree.path_to(current));
            }

            for neighbor in puzzle.neighbors(&current) {
                if visited.insert(neighbor) {
                    tree.link(neighbor, current);
                    queue.push_back(neighbor);
                }
            }
        }

        clock.exhausted()
    }
}

/// Frontier entry of [`GreedySearch`]. Ordered so that `BinaryHeap` pops the
/// lowest heuristic first, then the earliest pushed.
#[derive(Clone, Debug, PartialEq, Eq)]
struct GreedyNode {
    h: u32,
    seq: u64,
    board: Board,
}

impl Ord for GreedyNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .h
            .cmp(&self.h)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for GreedyNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Greedy best-first search, ordered by the heuristic alone.
///
/// A board is marked visited when first pushed and never expanded again, even if
/// a shorter path to it turns up later, so the returned path need not be optimal.
#[derive(Clone, Copy, Debug)]
pub struct GreedySearch<'a> {
    puzzle: &'a EightPuzzle,
}

impl<'a> GreedySearch<'a> {
    pub fn new(puzzle: &'a EightPuzzle) -> Self {
        GreedySearch { puzzle }
    }
}

impl SearchStrategy for GreedySearch<'_> {
    fn name(&self) -> &'static str {
        Algorithm::Greedy.name()
    }

    fn solve_with_limits(&self, limits: &SearchLimits) -> SearchOutcome {
        let puzzle = self.puzzle;
        let initial = *puzzle.initial();
        let mut clock = SearchClock::start(self.name(), *limits);
        let mut tree = SearchTree::new(initial);

        let mut seq: u64 = 0;
        let mut open = BinaryHeap::new();
        open.push(GreedyNode {
            h: puzzle.heuristic(&initial),
            seq,
            board: initial,
        });
        let mut visited = HashSet::from([initial]);

        while let Some(GreedyNode { board: current, .. }) = open.pop() {
            if let Some(reason) = clock.check() {
                return clock.aborted(reason);
            }
            clock.count();

            if puzzle.is_goal(&current) {
                return clock.solved(tree.path_to(current));
            }

            for neighbor in puzzle.neighbors(&current) {
                if visited.insert(neighbor) {
                    tree.link(neighbor, current);
                    seq += 1;
                    open.push(GreedyNode {
                        h: puzzle.heuristic(&neighbor),
                        seq,
                        board: neighbor,
                    });
                }
            }
        }

        clock.exhausted()
    }
}

/// Frontier entry of [`AStarSearch`]. `BinaryHeap` pops the lowest `f`, then the
/// lowest `g`, then the earliest pushed.
#[derive(Clone, Debug, PartialEq, Eq)]
struct AStarNode {
    f: u32,
    g: u32,
    seq: u64,
    board: Board,
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search with `f = g + h`.
///
/// The best known `g` of each board may be lowered when a cheaper path shows
/// up; the board is then pushed again and the older, costlier entry is skipped
/// when it is eventually dequeued. Skipped entries still count as explored.
#[derive(Clone, Copy, Debug)]
pub struct AStarSearch<'a> {
    puzzle: &'a EightPuzzle,
}

impl<'a> AStarSearch<'a> {
    pub fn new(puzzle: &'a EightPuzzle) -> Self {
        AStarSearch { puzzle }
    }
}

impl SearchStrategy for AStarSearch<'_> {
    fn name(&self) -> &'static str {
        Algorithm::AStar.name()
    }

    fn solve_with_limits(&self, limits: &SearchLimits) -> SearchOutcome {
        let puzzle = self.puzzle;
        let initial = *puzzle.initial();
        let mut clock = SearchClock::start(self.name(), *limits);
        let mut tree = SearchTree::new(initial);

        let mut seq: u64 = 0;
        let mut open = BinaryHeap::new();
        open.push(AStarNode {
            f: puzzle.heuristic(&initial),
            g: 0,
            seq,
            board: initial,
        });
        let mut best_g: HashMap<Board, u32> = HashMap::from([(initial, 0)]);

        while let Some(AStarNode {
            g, board: current, ..
        }) = open.pop()
        {
            if let Some(reason) = clock.check() {
                return clock.aborted(reason);
            }
            clock.count();

            if best_g.get(&current).is_some_and(|&best| g > best) {
                trace!(g, "skipping stale frontier entry");
                continue;
            }

            if puzzle.is_goal(&current) {
                return clock.solved(tree.path_to(current));
            }

            let new_g = g + 1;
            for neighbor in puzzle.neighbors(&current) {
                let improved = best_g
                    .get(&neighbor)
                    .map_or(true, |&known| new_g < known);
                if improved {
                    best_g.insert(neighbor, new_g);
                    tree.link(neighbor, current);
                    seq += 1;
                    open.push(AStarNode {
                        f: new_g + puzzle.heuristic(&neighbor),
                        g: new_g,
                        seq,
                        board: neighbor,
                    });
                }
            }
        }

        clock.exhausted()
    }
}

/// Selects a search strategy at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Breadth-first search.
    Bfs,
    /// Greedy best-first search.
    Greedy,
    /// A* search.
    #[value(alias = "astar")]
    AStar,
}

impl Algorithm {
    /// All algorithms, in the order they are usually reported.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Greedy, Algorithm::AStar];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "Brute-Force Search (BFS)",
            Algorithm::Greedy => "Heuristic Search (Best-First)",
            Algorithm::AStar => "A* Search",
        }
    }

    /// Binds the algorithm to `puzzle`.
    pub fn strategy<'a>(&self, puzzle: &'a EightPuzzle) -> Box<dyn SearchStrategy + 'a> {
        match self {
            Algorithm::Bfs => Box::new(BreadthFirstSearch::new(puzzle)),
            Algorithm::Greedy => Box::new(GreedySearch::new(puzzle)),
            Algorithm::AStar => Box::new(AStarSearch::new(puzzle)),
        }
    }

    pub fn solve(&self, puzzle: &EightPuzzle) -> Option<SearchResult> {
        self.strategy(puzzle).solve()
    }

    pub fn solve_with_limits(&self, puzzle: &EightPuzzle, limits: &SearchLimits) -> SearchOutcome {
        self.strategy(puzzle).solve_with_limits(limits)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::Heuristic;

    /// Number of boards reachable from any given board (half of 9!).
    const REACHABLE_STATES: usize = 181_440;

    fn reference_puzzle() -> EightPuzzle {
        EightPuzzle::from_grids([[1, 2, 3], [4, 0, 5], [7, 8, 6]], None).unwrap()
    }

    fn assert_valid_path(puzzle: &EightPuzzle, result: &SearchResult) {
        assert_eq!(result.steps, result.path.len());
        let mut current = *puzzle.initial();
        for next in &result.path {
            assert!(
                puzzle.neighbors(&current).contains(next),
                "path contains a jump:\n{}\n->\n{}",
                current,
                next
            );
            current = *next;
        }
        assert!(puzzle.is_goal(&current));
    }

    #[test]
    fn test_reference_board_all_algorithms() {
        let puzzle = reference_puzzle();
        let expected_path = vec![
            Board::from_grid([[1, 2, 3], [4, 5, 0], [7, 8, 6]]).unwrap(),
            Board::goal(),
        ];

        let bfs = BreadthFirstSearch::new(&puzzle).solve().unwrap();
        assert_eq!(bfs.steps, 2);
        assert_eq!(bfs.path, expected_path);
        // Initial, its four neighbors, six other depth-2 boards, then two children of the
        // last depth-1 board.
        assert_eq!(bfs.nodes_explored, 13);

        let greedy = GreedySearch::new(&puzzle).solve().unwrap();
        assert_eq!(greedy.steps, 2);
        assert_eq!(greedy.path, expected_path);
        assert_eq!(greedy.nodes_explored, 3);

        let a_star = AStarSearch::new(&puzzle).solve().unwrap();
        assert_eq!(a_star.steps, 2);
        assert_eq!(a_star.path, expected_path);
        assert_eq!(a_star.nodes_explored, 3);
    }

    #[test]
    fn test_initial_equals_goal() {
        let puzzle = EightPuzzle::new(Board::goal(), None);
        for algorithm in Algorithm::ALL {
            let result = algorithm.solve(&puzzle).unwrap();
            assert!(result.path.is_empty(), "{}", algorithm);
            assert_eq!(result.steps, 0, "{}", algorithm);
            assert_eq!(result.nodes_explored, 1, "{}", algorithm);
        }
    }

    #[test]
    fn test_unsolvable_board_reports_no_solution() {
        let puzzle = EightPuzzle::from_grids([[1, 2, 3], [4, 5, 6], [8, 7, 0]], None).unwrap();
        assert!(!puzzle.is_solvable());

        for algorithm in Algorithm::ALL {
            let outcome = algorithm.solve_with_limits(&puzzle, &SearchLimits::unlimited());
            assert!(
                matches!(outcome, SearchOutcome::NoSolution { .. }),
                "{}: {}",
                algorithm,
                outcome
            );
            match algorithm {
                // Every reachable board is dequeued exactly once.
                Algorithm::Bfs | Algorithm::Greedy => {
                    assert_eq!(outcome.nodes_explored(), REACHABLE_STATES)
                }
                // Stale entries are dequeued too.
                Algorithm::AStar => assert!(outcome.nodes_explored() >= REACHABLE_STATES),
            }
        }
    }

    #[test]
    fn test_classic_puzzle_with_custom_goal() {
        let puzzle = EightPuzzle::from_grids(
            [[2, 8, 3], [1, 6, 4], [7, 0, 5]],
            Some([[1, 2, 3], [8, 0, 4], [7, 6, 5]]),
        )
        .unwrap();

        let bfs = BreadthFirstSearch::new(&puzzle).solve().unwrap();
        let a_star = AStarSearch::new(&puzzle).solve().unwrap();
        let greedy = GreedySearch::new(&puzzle).solve().unwrap();

        assert_eq!(bfs.steps, 5);
        assert_eq!(a_star.steps, 5);
        assert!(greedy.steps >= 5);
        for result in [&bfs, &a_star, &greedy] {
            assert_valid_path(&puzzle, result);
        }
        assert_eq!(
            a_star.moves_from(puzzle.initial()),
            vec![
                Direction::Up,
                Direction::Up,
                Direction::Left,
                Direction::Down,
                Direction::Right
            ]
        );
    }

    #[test]
    fn test_optimality_on_scrambled_boards() {
        let goal = Board::goal();
        for seed in 0..6 {
            let initial = Board::new_scrambled_with_seed(&goal, 20, seed);
            let puzzle = EightPuzzle::new(initial, None);

            let bfs = BreadthFirstSearch::new(&puzzle).solve().unwrap();
            let greedy = GreedySearch::new(&puzzle).solve().unwrap();
            let a_star = AStarSearch::new(&puzzle).solve().unwrap();

            assert!(bfs.steps <= 20);
            assert_eq!(bfs.steps, a_star.steps, "seed {}", seed);
            assert!(greedy.steps >= bfs.steps, "seed {}", seed);
            assert!(
                a_star.nodes_explored <= bfs.nodes_explored,
                "seed {}: A* {} vs BFS {}",
                seed,
                a_star.nodes_explored,
                bfs.nodes_explored
            );
            for result in [&bfs, &greedy, &a_star] {
                assert_valid_path(&puzzle, result);
            }
        }
    }

    #[test]
    fn test_a_star_optimal_with_misplaced_tiles() {
        let goal = Board::goal();
        for seed in 10..14 {
            let initial = Board::new_scrambled_with_seed(&goal, 16, seed);
            let manhattan = EightPuzzle::new(initial, None);
            let misplaced = manhattan.clone().with_heuristic(Heuristic::MisplacedTiles);

            let by_manhattan = AStarSearch::new(&manhattan).solve().unwrap();
            let by_misplaced = AStarSearch::new(&misplaced).solve().unwrap();
            assert_eq!(by_manhattan.steps, by_misplaced.steps, "seed {}", seed);
            assert_valid_path(&misplaced, &by_misplaced);
        }
    }

    #[test]
    fn test_repeated_solves_agree() {
        let initial = Board::new_scrambled_with_seed(&Board::goal(), 24, 99);
        for algorithm in Algorithm::ALL {
            let first = algorithm.solve(&EightPuzzle::new(initial, None)).unwrap();
            let second = algorithm.solve(&EightPuzzle::new(initial, None)).unwrap();
            assert_eq!(first.steps, second.steps, "{}", algorithm);
            assert_eq!(first.nodes_explored, second.nodes_explored, "{}", algorithm);
            assert_eq!(first.path, second.path, "{}", algorithm);
        }
    }

    #[test]
    fn test_node_limit_boundary() {
        let puzzle = reference_puzzle();
        let search = BreadthFirstSearch::new(&puzzle);

        let enough = search.solve_with_limits(&SearchLimits::unlimited().with_max_nodes(13));
        assert!(enough.is_solved());
        assert_eq!(enough.nodes_explored(), 13);

        let short = search.solve_with_limits(&SearchLimits::unlimited().with_max_nodes(12));
        assert_eq!(
            short,
            SearchOutcome::Aborted {
                reason: TerminationReason::NodeLimitReached(12),
                nodes_explored: 12,
                time_taken: short.time_taken(),
            }
        );
        assert!(short.into_result().is_none());
    }

    #[test]
    fn test_node_limit_on_unsolvable_board() {
        let puzzle = EightPuzzle::from_grids([[1, 2, 3], [4, 5, 6], [8, 7, 0]], None).unwrap();
        let limits = SearchLimits::unlimited().with_max_nodes(500);
        for algorithm in Algorithm::ALL {
            let outcome = algorithm.solve_with_limits(&puzzle, &limits);
            assert!(
                matches!(
                    outcome,
                    SearchOutcome::Aborted {
                        reason: TerminationReason::NodeLimitReached(500),
                        nodes_explored: 500,
                        ..
                    }
                ),
                "{}: {}",
                algorithm,
                outcome
            );
        }
    }

    #[test]
    fn test_zero_time_limit_aborts_immediately() {
        let puzzle = reference_puzzle();
        let limits = SearchLimits::unlimited().with_time_limit(Duration::ZERO);
        for algorithm in Algorithm::ALL {
            let outcome = algorithm.solve_with_limits(&puzzle, &limits);
            match outcome {
                SearchOutcome::Aborted {
                    reason: TerminationReason::TimeLimitReached(limit),
                    nodes_explored,
                    ..
                } => {
                    assert_eq!(limit, Duration::ZERO);
                    assert_eq!(nodes_explored, 0);
                }
                other => panic!("{}: expected time abort, got {}", algorithm, other),
            }
        }
    }

    #[test]
    fn test_generous_time_limit_does_not_interfere() {
        let puzzle = reference_puzzle();
        let limits = SearchLimits::unlimited().with_time_limit(Duration::from_secs(60));
        let outcome = AStarSearch::new(&puzzle).solve_with_limits(&limits);
        assert!(outcome.is_solved());
        assert_eq!(outcome.result().map(|r| r.steps), Some(2));
    }

    #[test]
    fn test_search_limits_builders() {
        let limits = SearchLimits::unlimited();
        assert!(limits.is_unlimited());
        let limits = limits
            .with_max_nodes(10)
            .with_time_limit(Duration::from_millis(5));
        assert_eq!(limits.max_nodes, Some(10));
        assert_eq!(limits.time_limit, Some(Duration::from_millis(5)));
        assert!(!limits.is_unlimited());
    }

    #[test]
    fn test_search_tree_path_to() {
        let root = *reference_puzzle().initial();
        let first = root.slide(Direction::Right).unwrap();
        let second = first.slide(Direction::Down).unwrap();

        let mut tree = SearchTree::new(root);
        tree.link(first, root);
        tree.link(second, first);
        assert_eq!(tree.path_to(second), vec![first, second]);
        assert!(tree.path_to(root).is_empty());
    }

    #[test]
    fn test_frontier_ordering() {
        let board = Board::goal();
        let mut heap = BinaryHeap::new();
        heap.push(AStarNode { f: 5, g: 3, seq: 0, board });
        heap.push(AStarNode { f: 4, g: 4, seq: 1, board });
        heap.push(AStarNode { f: 4, g: 2, seq: 2, board });
        heap.push(AStarNode { f: 4, g: 2, seq: 3, board });
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|n| n.seq)).collect();
        assert_eq!(order, vec![2, 3, 1, 0]);

        let mut heap = BinaryHeap::new();
        heap.push(GreedyNode { h: 2, seq: 0, board });
        heap.push(GreedyNode { h: 1, seq: 1, board });
        heap.push(GreedyNode { h: 1, seq: 2, board });
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|n| n.seq)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_algorithm_names_and_strategies() {
        let puzzle = reference_puzzle();
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.strategy(&puzzle).name(), algorithm.name());
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
    }

    #[test]
    fn test_outcome_display() {
        let outcome = SearchOutcome::Aborted {
            reason: TerminationReason::NodeLimitReached(7),
            nodes_explored: 7,
            time_taken: Duration::ZERO,
        };
        assert_eq!(outcome.to_string(), "Aborted: node limit of 7 reached");
        let outcome = SearchOutcome::NoSolution {
            nodes_explored: 1,
            time_taken: Duration::ZERO,
        };
        assert_eq!(outcome.to_string(), "NoSolution");
    }
}
