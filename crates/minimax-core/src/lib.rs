//! **minimax-core** — graph model for the minimax tour problem.
//!
//! A tour starts at a city, visits every other city exactly once and returns
//! to where it started. Its cost is the *largest* edge weight it uses, not the
//! sum of them. This crate provides the pieces shared by every search
//! strategy:
//!
//! - [`City`] identifiers,
//! - the immutable [`DistanceTable`] (with a builder and the compiled-in
//!   [`reference`](DistanceTable::reference) instance),
//! - [`Tour`] and the [`minimax_cost`] function.

pub mod city;
pub mod table;
pub mod tour;

pub use city::City;
pub use table::{DistanceTable, DistanceTableBuilder, GraphError};
pub use tour::{Tour, TourDisplay, minimax_cost};
