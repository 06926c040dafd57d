//! Observation hook for the backtracking search.

use gridlace_core::Grid;

/// Receives a callback at every node the search visits.
///
/// Tracing the search (say, printing the grid on entry to every recursive
/// call) is expressed as an injected observer so the search itself stays a
/// pure function of its input: the hook fires synchronously on node entry
/// (including nodes that end in failure), and leaving it out changes nothing
/// about the search.
///
/// Any `FnMut(&Grid)` closure is an observer:
///
/// ```
/// use gridlace_core::Grid;
/// use gridlace_solver::BacktrackSolver;
///
/// let mut visited = 0;
/// let outcome = BacktrackSolver::new()
///     .solve_observed(&Grid::EMPTY, &mut |_grid: &Grid| visited += 1);
/// assert!(outcome.is_solved());
/// assert!(visited > 0);
/// ```
pub trait SearchObserver {
    /// Called on entry to a search node, before the node is expanded.
    fn node_visited(&mut self, grid: &Grid);
}

impl<F> SearchObserver for F
where
    F: FnMut(&Grid),
{
    fn node_visited(&mut self, grid: &Grid) {
        self(grid);
    }
}
