use std::cmp::Ordering;

use minimax_core::{City, DistanceTable};

/// A partial tour on the frontier.
///
/// Holds the cities visited so far (starting with the start city) and the
/// running minimax cost, i.e. the largest edge weight used so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial {
    cities: Vec<City>,
    running: u32,
}

impl Partial {
    /// The single-city tour at `start`.
    pub fn root(start: City) -> Self {
        Self {
            cities: vec![start],
            running: 0,
        }
    }

    /// Extend by one edge from the current city to `next`.
    pub fn extend(&self, table: &DistanceTable, next: City) -> Self {
        let mut cities = Vec::with_capacity(self.cities.len() + 1);
        cities.extend_from_slice(&self.cities);
        cities.push(next);
        Self {
            running: self.running.max(table.distance(self.current(), next)),
            cities,
        }
    }

    /// Append the start city, producing the closed sequence.
    pub fn close(mut self) -> Vec<City> {
        self.cities.push(self.cities[0]);
        self.cities
    }

    #[inline]
    pub fn start(&self) -> City {
        self.cities[0]
    }

    /// City the tour currently ends at.
    #[inline]
    pub fn current(&self) -> City {
        self.cities[self.cities.len() - 1]
    }

    #[inline]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of distinct cities visited.
    #[inline]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always false: a partial tour holds at least its start city.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Largest edge weight used so far.
    #[inline]
    pub fn running_cost(&self) -> u32 {
        self.running
    }

    #[inline]
    pub fn visits(&self, city: City) -> bool {
        self.cities.contains(&city)
    }

    /// Cities of `table` not yet visited, in table order.
    pub fn unvisited(&self, table: &DistanceTable) -> Vec<City> {
        table.cities().filter(|&c| !self.visits(c)).collect()
    }
}

// ---------------------------------------------------------------------------
// Heap entry for priority frontiers
// ---------------------------------------------------------------------------

/// Partial tour tagged with its priority, ordered for use in `BinaryHeap`.
///
/// Lower priority pops first. Ties go to the lower current city, then to the
/// lexicographically smaller city sequence.
#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) priority: u32,
    pub(crate) node: Partial,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap yields the smallest entry.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.current().cmp(&self.node.current()))
            .then_with(|| other.node.cities.cmp(&self.node.cities))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_tracks_running_max() {
        let t = DistanceTable::reference();
        let a = t.city("A").unwrap();
        let b = t.city("B").unwrap();
        let d = t.city("D").unwrap();
        let p = Partial::root(a).extend(&t, b).extend(&t, d);
        assert_eq!(p.running_cost(), 25);
        assert_eq!(p.current(), d);
        assert_eq!(p.start(), a);
        assert_eq!(p.len(), 3);
        assert!(p.visits(b));
        assert_eq!(p.unvisited(&t), vec![t.city("C").unwrap()]);
        assert_eq!(p.close(), vec![a, b, d, a]);
    }

    #[test]
    fn entry_order_prefers_low_priority_then_lexicographic() {
        let t = DistanceTable::reference();
        let a = City::new(0);
        let ab = Partial::root(a).extend(&t, City::new(1));
        let ac = Partial::root(a).extend(&t, City::new(2));

        let low = Entry { priority: 1, node: ac.clone() };
        let high = Entry { priority: 2, node: ab.clone() };
        assert!(low > high);

        let first = Entry { priority: 5, node: ab };
        let second = Entry { priority: 5, node: ac };
        assert!(first > second);
    }

    #[test]
    fn entry_tie_prefers_current_city_over_path_order() {
        let t = DistanceTable::reference();
        let (a, b, c) = (City::new(0), City::new(1), City::new(2));
        // A C B ends at B, A B C ends at C: B wins although A B C sorts first.
        let acb = Partial::root(a).extend(&t, c).extend(&t, b);
        let abc = Partial::root(a).extend(&t, b).extend(&t, c);
        let at_b = Entry { priority: 35, node: acb };
        let at_c = Entry { priority: 35, node: abc };
        assert!(at_b > at_c);
    }
}
