use minimax_core::{City, DistanceTable};

use crate::frontier::PriorityFrontier;
use crate::solver::{SearchError, SearchResult, Solver, Strategy};
use crate::traits::Priority;
use crate::Partial;

/// Priority equal to the running minimax cost of the partial tour.
///
/// Since `max(a, b) >= a`, a child never has a lower priority than its
/// parent, so popped priorities are non-decreasing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningCost;

impl Priority for RunningCost {
    fn priority(&self, _table: &DistanceTable, node: &Partial) -> u32 {
        node.running_cost()
    }
}

impl Solver<'_> {
    /// Uniform-cost search from `start` on the running minimax cost.
    pub fn ucs(&self, start: City) -> Result<SearchResult, SearchError> {
        self.search(Strategy::Ucs, start, PriorityFrontier::new(), &RunningCost)
    }
}
