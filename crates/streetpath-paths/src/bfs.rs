use std::collections::{HashSet, VecDeque};

use crate::delta::{Delta, Edge};
use crate::error::SearchError;
use crate::graph::NodeId;
use crate::search::{SearchCore, core_accessors};
use crate::traits::PathSearch;

/// Breadth-first search: FIFO frontier, first discovery wins.
///
/// Finds the path with the fewest hops, not the lightest one.
pub struct Bfs<'g> {
    core: SearchCore<'g>,
    queue: VecDeque<NodeId>,
    queued: HashSet<NodeId>,
}

impl Default for Bfs<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Bfs<'_> {
    pub fn new() -> Self {
        Self {
            core: SearchCore::new(),
            queue: VecDeque::new(),
            queued: HashSet::new(),
        }
    }
}

impl<'g> PathSearch<'g> for Bfs<'g> {
    core_accessors!('g);

    fn start(&mut self, origin: NodeId, goal: NodeId) -> Result<(), SearchError> {
        self.core.begin(origin, goal)?;
        self.queue.clear();
        self.queued.clear();
        self.queue.push_back(origin);
        self.queued.insert(origin);
        Ok(())
    }

    fn step(&mut self) -> Delta {
        let Some(graph) = self.core.running_graph() else {
            return Delta::empty();
        };
        let Some(current) = self.queue.pop_front() else {
            self.core.finish(None);
            return Delta::empty();
        };
        self.queued.remove(&current);

        if self.core.settle(current) {
            self.queue.clear();
            self.queued.clear();
            return Delta::empty();
        }

        let current_dist = self.core.state.distance_from_start(current);
        let mut edges = Vec::new();
        for nb in graph.neighbors_of(current) {
            if !self.core.state.visited(nb.id) && !self.queued.contains(&nb.id) {
                self.queue.push_back(nb.id);
                self.queued.insert(nb.id);
                self.core.predecessors.insert(nb.id, current);
                self.core
                    .state
                    .set_distance_from_start(nb.id, current_dist + nb.weight);
            } else {
                // Already discovered, but the edge still gets drawn.
                edges.push(Edge::new(current, nb.id));
            }
        }

        let delta = self.core.expansion_delta(current, edges);
        if self.queue.is_empty() {
            self.core.finish(None);
        }
        delta
    }

    fn frontier_len(&self) -> usize {
        self.queue.len()
    }
}
