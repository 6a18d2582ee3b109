use minimax_core::DistanceTable;

use crate::Partial;

/// Queue discipline holding the partial tours still to be expanded.
pub trait Frontier {
    /// Add `node` with the given priority. FIFO frontiers ignore `priority`.
    fn push(&mut self, node: Partial, priority: u32);

    /// Remove the next node to expand.
    fn pop(&mut self) -> Option<Partial>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rule assigning a priority to a partial tour. Lower is expanded first.
pub trait Priority {
    fn priority(&self, table: &DistanceTable, node: &Partial) -> u32;
}
