use std::collections::{BinaryHeap, VecDeque};

use crate::Partial;
use crate::partial::Entry;
use crate::traits::Frontier;

/// First-in first-out frontier: level-order expansion.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Partial>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: Partial, _priority: u32) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<Partial> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Min-priority frontier with a deterministic tie-break.
///
/// Among equal priorities the node at the lowest current city is popped
/// first, then the lexicographically smallest city sequence, so results do
/// not depend on insertion order.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the next node together with its priority.
    pub fn pop_with_priority(&mut self) -> Option<(Partial, u32)> {
        self.heap.pop().map(|e| (e.node, e.priority))
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node: Partial, priority: u32) {
        self.heap.push(Entry { priority, node });
    }

    fn pop(&mut self) -> Option<Partial> {
        self.heap.pop().map(|e| e.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_core::{City, DistanceTable};

    fn nodes() -> Vec<Partial> {
        let t = DistanceTable::reference();
        let a = City::new(0);
        (1..4).map(|i| Partial::root(a).extend(&t, City::new(i))).collect()
    }

    #[test]
    fn fifo_keeps_insertion_order() {
        let mut f = FifoFrontier::new();
        let ns = nodes();
        for (i, n) in ns.iter().enumerate() {
            f.push(n.clone(), 10 - i as u32);
        }
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop().as_ref(), Some(&ns[0]));
        assert_eq!(f.pop().as_ref(), Some(&ns[1]));
        assert_eq!(f.pop().as_ref(), Some(&ns[2]));
        assert!(f.is_empty());
    }

    #[test]
    fn priority_pops_lowest_first() {
        let mut f = PriorityFrontier::new();
        let ns = nodes();
        f.push(ns[0].clone(), 3);
        f.push(ns[1].clone(), 1);
        f.push(ns[2].clone(), 2);
        assert_eq!(f.pop_with_priority(), Some((ns[1].clone(), 1)));
        assert_eq!(f.pop_with_priority(), Some((ns[2].clone(), 2)));
        assert_eq!(f.pop_with_priority(), Some((ns[0].clone(), 3)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn priority_ties_break_lexicographically() {
        let mut f = PriorityFrontier::new();
        let ns = nodes();
        // Insert in reverse so insertion order and path order disagree.
        for n in ns.iter().rev() {
            f.push(n.clone(), 7);
        }
        assert_eq!(f.pop().as_ref(), Some(&ns[0]));
        assert_eq!(f.pop().as_ref(), Some(&ns[1]));
        assert_eq!(f.pop().as_ref(), Some(&ns[2]));
    }

    #[test]
    fn priority_ties_break_on_current_city_first() {
        let t = DistanceTable::reference();
        let (a, b, c, d) = (City::new(0), City::new(1), City::new(2), City::new(3));
        let abd = Partial::root(a).extend(&t, b).extend(&t, d);
        let adb = Partial::root(a).extend(&t, d).extend(&t, b);
        let abc = Partial::root(a).extend(&t, b).extend(&t, c);

        let mut f = PriorityFrontier::new();
        f.push(abd.clone(), 25);
        f.push(abc.clone(), 25);
        f.push(adb.clone(), 25);
        assert_eq!(f.pop(), Some(adb));
        assert_eq!(f.pop(), Some(abc));
        assert_eq!(f.pop(), Some(abd));
    }
}
