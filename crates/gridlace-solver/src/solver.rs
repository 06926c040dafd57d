//! Depth-first backtracking search.

use std::time::Instant;

use gridlace_core::Grid;

use crate::SearchObserver;

/// The result of a backtracking search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SearchOutcome {
    /// A completion of the input grid was found.
    Solved(Grid),
    /// Every branch was explored without finding a completion: the puzzle is
    /// proven unsolvable. This is a normal outcome, not an error.
    Exhausted,
    /// The deadline passed before the search could finish. Inconclusive:
    /// the puzzle may or may not have a solution.
    DeadlineExceeded,
}

impl SearchOutcome {
    /// Returns the solved grid, or `None` for the other outcomes.
    #[must_use]
    pub fn solution(self) -> Option<Grid> {
        match self {
            Self::Solved(grid) => Some(grid),
            Self::Exhausted | Self::DeadlineExceeded => None,
        }
    }
}

/// Statistics collected during a search.
///
/// # Examples
///
/// ```
/// use gridlace_core::Grid;
/// use gridlace_solver::BacktrackSolver;
///
/// let grid: Grid = "534678912\n\
///                   672195348\n\
///                   198342567\n\
///                   859761423\n\
///                   426853791\n\
///                   713924856\n\
///                   961537284\n\
///                   287419635\n\
///                   345286179"
///     .parse()?;
/// let (outcome, stats) = BacktrackSolver::new().solve_with_stats(&grid, &mut |_: &Grid| {});
/// assert!(outcome.is_solved());
/// assert_eq!(stats.nodes_visited(), 1); // already solved: one terminal node
/// # Ok::<(), gridlace_core::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    nodes_visited: usize,
    placements_tried: usize,
    backtrack_count: usize,
}

impl SearchStats {
    /// Returns the number of search-tree nodes visited, including nodes whose
    /// branches all failed. The observer fires once per visited node.
    #[must_use]
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Returns the number of candidate placements tried.
    #[must_use]
    pub fn placements_tried(&self) -> usize {
        self.placements_tried
    }

    /// Returns the number of branches that were abandoned after exhausting
    /// their candidates.
    #[must_use]
    pub fn backtrack_count(&self) -> usize {
        self.backtrack_count
    }
}

/// A depth-first backtracking Sudoku solver.
///
/// Each call of the search is a node: if the grid is solved, the node is a
/// terminal success; otherwise the first empty cell in row-major order is
/// located and the digits that keep the grid consistent are tried in
/// ascending order, recursing on each until one branch succeeds. The fixed
/// scan order and candidate order make the search deterministic: the same
/// input always produces the same outcome.
///
/// Every branch operates on its own [`Grid`] value derived with
/// [`Grid::with`], so branches share no state and no undo step is needed.
/// The recursion depth is bounded by the number of initially empty cells.
///
/// # Examples
///
/// ```
/// use gridlace_core::Grid;
/// use gridlace_solver::BacktrackSolver;
///
/// let grid: Grid = "53..7....\n\
///                   6..195...\n\
///                   .98....6.\n\
///                   8...6...3\n\
///                   4..8.3..1\n\
///                   7...2...6\n\
///                   .6....28.\n\
///                   ...419..5\n\
///                   ....8..79"
///     .parse()?;
/// let outcome = BacktrackSolver::new().solve(&grid);
/// let solution = outcome.solution().expect("puzzle is solvable");
/// assert!(solution.is_solved());
/// # Ok::<(), gridlace_core::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver {
    deadline: Option<Instant>,
}

impl BacktrackSolver {
    /// Creates a solver with no deadline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a solver that gives up once `deadline` has passed.
    ///
    /// The deadline is consulted on entry to every node; when it has passed,
    /// the search unwinds with [`SearchOutcome::DeadlineExceeded`], which is
    /// reported distinctly from proven unsolvability.
    #[must_use]
    pub fn with_deadline(self, deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    /// Searches for a completion of `grid`.
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> SearchOutcome {
        self.solve_observed(grid, &mut |_: &Grid| {})
    }

    /// Searches for a completion of `grid`, notifying `observer` at every
    /// visited node.
    #[must_use]
    pub fn solve_observed(&self, grid: &Grid, observer: &mut dyn SearchObserver) -> SearchOutcome {
        self.solve_with_stats(grid, observer).0
    }

    /// Searches for a completion of `grid`, collecting [`SearchStats`].
    #[must_use]
    pub fn solve_with_stats(
        &self,
        grid: &Grid,
        observer: &mut dyn SearchObserver,
    ) -> (SearchOutcome, SearchStats) {
        let mut stats = SearchStats::default();
        // A grid whose givens already conflict can never be completed: every
        // candidate placement would fail revalidation, so reject the root
        // without descending. The root still counts as a visited node.
        if !grid.is_consistent() {
            observer.node_visited(grid);
            stats.nodes_visited = 1;
            return (SearchOutcome::Exhausted, stats);
        }
        let outcome = self.search(grid, observer, &mut stats);
        (outcome, stats)
    }

    fn search(
        &self,
        grid: &Grid,
        observer: &mut dyn SearchObserver,
        stats: &mut SearchStats,
    ) -> SearchOutcome {
        observer.node_visited(grid);
        stats.nodes_visited += 1;

        if grid.is_solved() {
            return SearchOutcome::Solved(*grid);
        }
        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            return SearchOutcome::DeadlineExceeded;
        }

        // The grid is consistent on entry, so a fully filled grid would have
        // been detected as solved above.
        let Some(pos) = grid.first_empty() else {
            return SearchOutcome::Exhausted;
        };

        // Candidates restricted to the three houses through `pos`; on a
        // consistent grid this equals whole-grid revalidation per placement
        // (property-tested in gridlace-core).
        for digit in grid.candidates_at(pos) {
            stats.placements_tried += 1;
            let branch = grid.with(pos, digit);
            match self.search(&branch, observer, stats) {
                SearchOutcome::Solved(solution) => return SearchOutcome::Solved(solution),
                SearchOutcome::DeadlineExceeded => return SearchOutcome::DeadlineExceeded,
                SearchOutcome::Exhausted => {}
            }
        }
        stats.backtrack_count += 1;
        SearchOutcome::Exhausted
    }
}

/// Searches for a completion of `grid` with a default [`BacktrackSolver`].
///
/// Returns the solved grid, or `None` if the puzzle is proven unsolvable.
#[must_use]
pub fn solve(grid: &Grid) -> Option<Grid> {
    BacktrackSolver::new().solve(grid).solution()
}

#[cfg(test)]
mod tests {
    use gridlace_core::{Digit, Position};
    use proptest::prelude::*;

    use super::*;

    const PUZZLE: &str = "\
53..7....
6..195...
.98....6.
8...6...3
4..8.3..1
7...2...6
.6....28.
...419..5
....8..79";

    const SOLUTION: &str = "\
534678912
672195348
198342567
859761423
426853791
713924856
961537284
287419635
345286179";

    fn parse(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_solves_sample_puzzle() {
        let solution = solve(&parse(PUZZLE)).expect("puzzle is solvable");
        assert_eq!(solution.to_string(), SOLUTION);
    }

    #[test]
    fn test_solved_grid_is_a_fixpoint() {
        let solved = parse(SOLUTION);
        assert!(solved.is_solved());
        assert_eq!(solve(&solved), Some(solved));

        let (outcome, stats) =
            BacktrackSolver::new().solve_with_stats(&solved, &mut |_: &Grid| {});
        assert_eq!(outcome, SearchOutcome::Solved(solved));
        assert_eq!(stats.nodes_visited(), 1);
        assert_eq!(stats.placements_tried(), 0);
    }

    #[test]
    fn test_conflicting_givens_are_rejected_immediately() {
        // two 5s in the first row; the contradiction is in the givens
        let mut lines = vec!["55..7...."];
        lines.extend(std::iter::repeat_n(".........", 8));
        let grid = parse(&lines.join("\n"));

        let (outcome, stats) = BacktrackSolver::new().solve_with_stats(&grid, &mut |_: &Grid| {});
        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert_eq!(stats.nodes_visited(), 1);
        assert_eq!(stats.placements_tried(), 0);
        assert_eq!(solve(&grid), None);
    }

    #[test]
    fn test_consistent_but_unsolvable_puzzle() {
        // (8, 0) is empty, its row holds 1-8 and its column holds 9
        let mut lines = vec!["12345678.", "........9"];
        lines.extend(std::iter::repeat_n(".........", 7));
        let grid = parse(&lines.join("\n"));
        assert!(grid.is_consistent());

        let (outcome, stats) = BacktrackSolver::new().solve_with_stats(&grid, &mut |_: &Grid| {});
        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert_eq!(stats.nodes_visited(), 1);
        assert_eq!(stats.placements_tried(), 0);
        assert_eq!(stats.backtrack_count(), 1);
    }

    #[test]
    fn test_filled_but_unsolved_grid_is_exhausted() {
        let grid = Grid::from_cells([Some(Digit::D1); 81]);
        assert_eq!(grid.first_empty(), None);
        assert_eq!(solve(&grid), None);
    }

    #[test]
    fn test_empty_grid_has_a_completion() {
        let solution = solve(&Grid::EMPTY).expect("empty grid is solvable");
        assert!(solution.is_solved());
    }

    #[test]
    fn test_solve_is_deterministic() {
        let grid = parse(PUZZLE);
        assert_eq!(solve(&grid), solve(&grid));
        assert_eq!(solve(&Grid::EMPTY), solve(&Grid::EMPTY));
    }

    #[test]
    fn test_observer_fires_once_per_node_starting_at_root() {
        let grid = parse(PUZZLE);
        let mut trace = Vec::new();
        let (outcome, stats) = BacktrackSolver::new()
            .solve_with_stats(&grid, &mut |visited: &Grid| trace.push(*visited));

        assert!(outcome.is_solved());
        assert_eq!(trace.len(), stats.nodes_visited());
        assert_eq!(trace.first(), Some(&grid));
        // last visited node is the solution itself
        assert_eq!(trace.last().copied(), outcome.solution());
    }

    #[test]
    fn test_observer_does_not_affect_outcome() {
        let grid = parse(PUZZLE);
        let silent = BacktrackSolver::new().solve(&grid);
        let observed = BacktrackSolver::new().solve_observed(&grid, &mut |_: &Grid| {});
        assert_eq!(silent, observed);
    }

    #[test]
    fn test_expired_deadline_reports_deadline_exceeded() {
        let solver = BacktrackSolver::new().with_deadline(Instant::now());
        let outcome = solver.solve(&Grid::EMPTY);
        assert_eq!(outcome, SearchOutcome::DeadlineExceeded);
        assert_eq!(outcome.solution(), None);
    }

    #[test]
    fn test_expired_deadline_still_recognizes_solved_grid() {
        // the solved check runs before the deadline check, so an already
        // complete grid is reported as solved even with a passed deadline
        let solved = parse(SOLUTION);
        let solver = BacktrackSolver::new().with_deadline(Instant::now());
        assert_eq!(solver.solve(&solved), SearchOutcome::Solved(solved));
    }

    fn solvable_grid_strategy() -> impl Strategy<Value = Grid> {
        // start from a known solution and blank out a handful of cells;
        // the result always has at least one completion
        proptest::collection::hash_set(0u8..81, 0..=20).prop_map(|holes| {
            let solved = parse(SOLUTION);
            let mut cells: [_; 81] = std::array::from_fn(|i| {
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::from_index(i as u8);
                solved.get(pos)
            });
            for hole in holes {
                cells[usize::from(hole)] = None;
            }
            Grid::from_cells(cells)
        })
    }

    proptest! {
        #[test]
        fn prop_punctured_solutions_solve_deterministically(grid in solvable_grid_strategy()) {
            let first = solve(&grid);
            let solution = first.expect("puncturing a solution keeps it solvable");
            prop_assert!(solution.is_solved());
            // every given survives into the solution
            for pos in Position::all() {
                if let Some(digit) = grid.get(pos) {
                    prop_assert_eq!(solution.get(pos), Some(digit));
                }
            }
            prop_assert_eq!(solve(&grid), first);
        }
    }
}
