use minimax_core::{City, DistanceTable};

use crate::frontier::FifoFrontier;
use crate::solver::{SearchError, SearchResult, Solver, Strategy};
use crate::traits::Priority;
use crate::Partial;

/// Priority rule that assigns every node the same priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unordered;

impl Priority for Unordered {
    fn priority(&self, _table: &DistanceTable, _node: &Partial) -> u32 {
        0
    }
}

impl Solver<'_> {
    /// Enumerate every tour from `start` in level order.
    ///
    /// Exhaustive: every Hamiltonian cycle is closed and evaluated, with no
    /// pruning or early exit.
    pub fn bfs(&self, start: City) -> Result<SearchResult, SearchError> {
        self.search(Strategy::Bfs, start, FifoFrontier::new(), &Unordered)
    }
}
