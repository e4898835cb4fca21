//! Open set ordered by priority with stable tie-breaking
//!
//! Entries with equal priority come out in the order they went in, which keeps
//! the returned path deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<(u32, u64, usize)>>,
    sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a node index under the given priority
    pub fn push(&mut self, priority: u32, index: usize) {
        self.heap.push(Reverse((priority, self.sequence, index)));
        self.sequence += 1;
    }

    /// Remove the lowest-priority, earliest-inserted node index
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse((_, _, index))| index)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
