use minimax_core::{City, DistanceTable};

use crate::frontier::PriorityFrontier;
use crate::solver::{SearchError, SearchResult, Solver, Strategy};
use crate::traits::Priority;
use crate::Partial;

/// Estimate of the cost still to come from the current city.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Smallest weight from the current city to any unvisited city.
    ///
    /// Every completion leaves the current city along one of these edges, so
    /// this never exceeds the remaining minimax cost (admissible). This is
    /// the default, and the one behind the `A*` line of `minimax-tour`.
    #[default]
    NearestUnvisited,
    /// Largest weight from the current city to any unvisited city.
    ///
    /// Can overestimate the remaining cost. The search still enumerates every
    /// tour, so the returned cost is unaffected; only the order changes.
    FarthestUnvisited,
}

impl Heuristic {
    /// Estimate from `current` given the cities still to visit. An empty
    /// `unvisited` set estimates 0.
    pub fn estimate(self, table: &DistanceTable, current: City, unvisited: &[City]) -> u32 {
        let weights = unvisited.iter().map(|&c| table.distance(current, c));
        let estimate = match self {
            Self::NearestUnvisited => weights.min(),
            Self::FarthestUnvisited => weights.max(),
        };
        estimate.unwrap_or(0)
    }
}

/// A* priority: running minimax cost plus a heuristic estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Estimated {
    pub heuristic: Heuristic,
}

impl Priority for Estimated {
    fn priority(&self, table: &DistanceTable, node: &Partial) -> u32 {
        let unvisited = node.unvisited(table);
        let h = self.heuristic.estimate(table, node.current(), &unvisited);
        node.running_cost().saturating_add(h)
    }
}

impl Solver<'_> {
    /// A* search from `start`, using the configured [`Heuristic`].
    ///
    /// The cost of each completed tour is recomputed exactly when it is
    /// closed; the heuristic only orders the frontier.
    pub fn astar(&self, start: City) -> Result<SearchResult, SearchError> {
        let rule = Estimated {
            heuristic: self.config.heuristic,
        };
        self.search(Strategy::AStar, start, PriorityFrontier::new(), &rule)
    }
}
