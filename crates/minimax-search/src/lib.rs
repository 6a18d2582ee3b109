//! Search strategies for the minimax tour problem.
//!
//! All strategies enumerate every Hamiltonian cycle from a start city and
//! return the one whose largest edge weight is smallest:
//!
//! - **BFS** level-order enumeration ([`Solver::bfs`])
//! - **Uniform-cost** search on the running minimax cost ([`Solver::ucs`])
//! - **A\*** on running cost plus a [`Heuristic`] ([`Solver::astar`])
//!
//! They share one expansion skeleton and differ only in the [`Frontier`]
//! discipline and the [`Priority`] rule that orders it.
//!
//! # Trait seams
//!
//! | Trait | Implementors |
//! |---|---|
//! | [`Frontier`] | [`FifoFrontier`] (BFS), [`PriorityFrontier`] (UCS, A*) |
//! | [`Priority`] | [`Unordered`], [`RunningCost`], [`Estimated`] |

mod astar;
mod bfs;
mod frontier;
mod partial;
mod solver;
mod traits;
mod ucs;

pub use astar::{Estimated, Heuristic};
pub use bfs::Unordered;
pub use frontier::{FifoFrontier, PriorityFrontier};
pub use partial::Partial;
pub use solver::{
    SearchConfig, SearchError, SearchResult, SearchStats, Solver, Strategy,
};
pub use traits::{Frontier, Priority};
pub use ucs::RunningCost;
