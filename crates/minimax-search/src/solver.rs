use std::fmt;

use log::{debug, trace};
use minimax_core::{City, DistanceTable, Tour, minimax_cost};

use crate::astar::Heuristic;
use crate::traits::{Frontier, Priority};
use crate::Partial;

/// Search settings shared by all strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Heuristic used by [`Solver::astar`].
    pub heuristic: Heuristic,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Partial tours popped and expanded.
    pub expanded: usize,
    /// Children pushed onto the frontier.
    pub generated: usize,
    /// Complete tours closed and evaluated.
    pub completed: usize,
}

/// Best tour found by a search, with its exact minimax cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub tour: Tour,
    pub cost: u32,
    pub stats: SearchStats,
}

/// The three available strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Bfs,
    Ucs,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::Ucs, Strategy::AStar];

    /// Short name used in console output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Ucs => "UCS",
            Self::AStar => "A*",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Minimax tour solver over a borrowed, read-only distance table.
pub struct Solver<'a> {
    pub(crate) table: &'a DistanceTable,
    pub(crate) config: SearchConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver with the default [`SearchConfig`].
    pub fn new(table: &'a DistanceTable) -> Self {
        Self::with_config(table, SearchConfig::default())
    }

    pub fn with_config(table: &'a DistanceTable, config: SearchConfig) -> Self {
        Self { table, config }
    }

    #[inline]
    pub fn table(&self) -> &'a DistanceTable {
        self.table
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Run `strategy` from `start`.
    pub fn solve(&self, strategy: Strategy, start: City) -> Result<SearchResult, SearchError> {
        match strategy {
            Strategy::Bfs => self.bfs(start),
            Strategy::Ucs => self.ucs(start),
            Strategy::AStar => self.astar(start),
        }
    }

    fn check_start(&self, start: City) -> Result<(), SearchError> {
        let n = self.table.len();
        if n < 2 {
            return Err(SearchError::InsufficientCities(n));
        }
        if !self.table.contains(start) {
            return Err(SearchError::InvalidStartCity(start));
        }
        Ok(())
    }

    /// Shared expansion skeleton.
    ///
    /// Pops partial tours until the frontier is empty. A tour that has
    /// visited every city is closed and its exact cost compared against the
    /// best so far (the first one is always kept, later ones only when
    /// strictly cheaper); any other tour gets one child per unvisited city, in
    /// table order. Every weight is a valid cost, `u32::MAX` included, so "no
    /// tour yet" is `None` rather than a sentinel cost.
    pub(crate) fn search<F, P>(
        &self,
        strategy: Strategy,
        start: City,
        mut frontier: F,
        rule: &P,
    ) -> Result<SearchResult, SearchError>
    where
        F: Frontier,
        P: Priority,
    {
        self.check_start(start)?;
        let table = self.table;
        let n = table.len();

        let mut stats = SearchStats::default();
        let mut best: Option<(u32, Vec<City>)> = None;

        let root = Partial::root(start);
        let priority = rule.priority(table, &root);
        frontier.push(root, priority);

        while let Some(node) = frontier.pop() {
            if node.len() == n {
                stats.completed += 1;
                let closed = node.close();
                let cost = minimax_cost(table, &closed);
                if best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost) {
                    trace!(
                        "{strategy}: new best {} (cost {cost})",
                        Tour::new(closed.clone()).display(table)
                    );
                    best = Some((cost, closed));
                }
                continue;
            }

            stats.expanded += 1;
            for next in table.cities() {
                if node.visits(next) {
                    continue;
                }
                let child = node.extend(table, next);
                let priority = rule.priority(table, &child);
                frontier.push(child, priority);
                stats.generated += 1;
            }
        }

        // At least two cities and no pruning: the first city ordering always
        // reaches full length and is closed.
        let Some((best_cost, cities)) = best else {
            unreachable!("{strategy}: a table with {n} cities has at least one tour");
        };

        debug!(
            "{strategy}: cost {best_cost}, expanded {}, generated {}, completed {}",
            stats.expanded, stats.generated, stats.completed
        );

        Ok(SearchResult {
            tour: Tour::new(cities),
            cost: best_cost,
            stats,
        })
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when starting a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start city is not part of the distance table.
    InvalidStartCity(City),
    /// The table has fewer than two cities, so no tour exists.
    InsufficientCities(usize),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStartCity(c) => {
                write!(f, "start city #{} is not in the distance table", c.index())
            }
            Self::InsufficientCities(n) => {
                write!(f, "need at least 2 cities to form a tour, got {n}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
