//! Min-priority frontier for uniform-cost search.
//!
//! Entries are stored in a min-heap keyed by `(cost, insertion_order)`.
//! Lower costs pop first; ties pop in insertion order (FIFO), which keeps
//! the path chosen among equal-cost alternatives reproducible.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<N> {
    node: N,
    cost: u32,
    /// Monotonically increasing; lower = pushed earlier.
    seq: u64,
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<N> Eq for Entry<N> {}

impl<N> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A priority queue popping the cheapest node first, FIFO among equals.
pub(crate) struct Frontier<N> {
    heap: BinaryHeap<Reverse<Entry<N>>>,
    seq: u64,
}

impl<N> Frontier<N> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, node: N, cost: u32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { node, cost, seq }));
    }

    /// Pop the cheapest node together with its cost.
    pub(crate) fn pop(&mut self) -> Option<(N, u32)> {
        self.heap.pop().map(|Reverse(e)| (e.node, e.cost))
    }

    /// Total number of pushes since creation.
    pub(crate) fn pushed(&self) -> u64 {
        self.seq
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_cheapest_first() {
        let mut f = Frontier::new();
        f.push("c", 3);
        f.push("a", 1);
        f.push("b", 2);
        assert_eq!(f.pop(), Some(("a", 1)));
        assert_eq!(f.pop(), Some(("b", 2)));
        assert_eq!(f.pop(), Some(("c", 3)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn equal_costs_pop_fifo() {
        let mut f = Frontier::new();
        f.push("first", 2);
        f.push("zero", 0);
        f.push("second", 2);
        f.push("third", 2);
        assert_eq!(f.pop(), Some(("zero", 0)));
        assert_eq!(f.pop(), Some(("first", 2)));
        assert_eq!(f.pop(), Some(("second", 2)));
        assert_eq!(f.pop(), Some(("third", 2)));
    }

    #[test]
    fn counts_pushes() {
        let mut f = Frontier::new();
        f.push(1, 1);
        f.push(2, 1);
        f.pop();
        assert_eq!(f.len(), 1);
        assert_eq!(f.pushed(), 2);
    }
}
