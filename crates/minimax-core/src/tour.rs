use std::fmt;

use crate::{City, DistanceTable};

/// Minimax cost of a city sequence: the largest weight among consecutive
/// pairs. Sequences with fewer than two cities cost 0.
pub fn minimax_cost(table: &DistanceTable, cities: &[City]) -> u32 {
    cities
        .windows(2)
        .map(|w| table.distance(w[0], w[1]))
        .max()
        .unwrap_or(0)
}

/// An ordered sequence of cities.
///
/// Search strategies return closed tours: the first and last city are the
/// start, and every other city of the table appears exactly once in between
/// (see [`is_closed_over`](Self::is_closed_over)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    cities: Vec<City>,
}

impl Tour {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// First city, if any.
    #[inline]
    pub fn start(&self) -> Option<City> {
        self.cities.first().copied()
    }

    #[inline]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Minimax cost of this tour under `table`.
    pub fn cost(&self, table: &DistanceTable) -> u32 {
        minimax_cost(table, &self.cities)
    }

    /// Whether this is a Hamiltonian cycle over every city of `table`.
    pub fn is_closed_over(&self, table: &DistanceTable) -> bool {
        let n = table.len();
        if n == 0 || self.cities.len() != n + 1 {
            return false;
        }
        if self.cities.first() != self.cities.last() {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.cities[..n] {
            if !table.contains(c) || seen[c.index()] {
                return false;
            }
            seen[c.index()] = true;
        }
        true
    }

    /// Render with city labels, separated by single spaces.
    pub fn display<'a>(&'a self, table: &'a DistanceTable) -> TourDisplay<'a> {
        TourDisplay { tour: self, table }
    }
}

impl From<Vec<City>> for Tour {
    fn from(cities: Vec<City>) -> Self {
        Self::new(cities)
    }
}

impl FromIterator<City> for Tour {
    fn from_iter<I: IntoIterator<Item = City>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// [`Display`](fmt::Display) adaptor returned by [`Tour::display`].
pub struct TourDisplay<'a> {
    tour: &'a Tour,
    table: &'a DistanceTable,
}

impl fmt::Display for TourDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &c) in self.tour.cities.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match self.table.label(c) {
                Some(label) => f.write_str(label)?,
                None => write!(f, "#{}", c.index())?,
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tour_round_trip() {
        let tour = Tour::new(vec![City::new(0), City::new(2), City::new(0)]);
        let json = serde_json::to_string(&tour).unwrap();
        let back: Tour = serde_json::from_str(&json).unwrap();
        assert_eq!(tour, back);
    }
}
