//! Keyed frontier shared by the priority-ordered searches.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::NodeId;

/// Heap entry ordered by `(key, seq)`.
#[derive(Clone, Copy, Debug)]
struct NodeRef {
    id: NodeId,
    key: f64,
    /// Insertion counter; earlier entries win ties.
    seq: u64,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority frontier with at most one live entry per node.
///
/// Re-pushing a node supersedes its previous entry; superseded and evicted
/// entries stay in the heap and are skipped on pop.
#[derive(Debug, Default)]
pub(crate) struct PriorityFrontier {
    heap: BinaryHeap<NodeRef>,
    live: HashMap<NodeId, u64>,
    seq: u64,
}

impl PriorityFrontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Admit `id` with priority `key`, replacing any live entry for it.
    pub(crate) fn push(&mut self, id: NodeId, key: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.live.insert(id, seq);
        self.heap.push(NodeRef { id, key, seq });
    }

    /// Remove and return the live node with the smallest key.
    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        while let Some(top) = self.heap.pop() {
            // Skip stale entries.
            if self.live.get(&top.id) != Some(&top.seq) {
                continue;
            }
            self.live.remove(&top.id);
            return Some(top.id);
        }
        None
    }

    #[inline]
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.live.contains_key(&id)
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live.len()
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
        self.seq = 0;
    }
}
