use std::collections::HashSet;

use crate::delta::{Delta, Edge};
use crate::error::SearchError;
use crate::graph::NodeId;
use crate::search::{SearchCore, core_accessors};
use crate::traits::PathSearch;

/// Depth-first search: LIFO frontier, first discovery wins. No optimality
/// guarantee.
pub struct Dfs<'g> {
    core: SearchCore<'g>,
    stack: Vec<NodeId>,
    stacked: HashSet<NodeId>,
}

impl Default for Dfs<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Dfs<'_> {
    pub fn new() -> Self {
        Self {
            core: SearchCore::new(),
            stack: Vec::new(),
            stacked: HashSet::new(),
        }
    }
}

impl<'g> PathSearch<'g> for Dfs<'g> {
    core_accessors!('g);

    fn start(&mut self, origin: NodeId, goal: NodeId) -> Result<(), SearchError> {
        self.core.begin(origin, goal)?;
        self.stack.clear();
        self.stacked.clear();
        self.stack.push(origin);
        self.stacked.insert(origin);
        Ok(())
    }

    fn step(&mut self) -> Delta {
        let Some(graph) = self.core.running_graph() else {
            return Delta::empty();
        };
        let Some(current) = self.stack.pop() else {
            self.core.finish(None);
            return Delta::empty();
        };
        self.stacked.remove(&current);

        if self.core.settle(current) {
            self.stack.clear();
            self.stacked.clear();
            return Delta::empty();
        }

        let current_dist = self.core.state.distance_from_start(current);
        let mut edges = Vec::new();
        for nb in graph.neighbors_of(current) {
            if !self.core.state.visited(nb.id) && !self.stacked.contains(&nb.id) {
                self.stack.push(nb.id);
                self.stacked.insert(nb.id);
                self.core.predecessors.insert(nb.id, current);
                self.core
                    .state
                    .set_distance_from_start(nb.id, current_dist + nb.weight);
            } else {
                edges.push(Edge::new(current, nb.id));
            }
        }

        let delta = self.core.expansion_delta(current, edges);
        if self.stack.is_empty() {
            self.core.finish(None);
        }
        delta
    }

    fn frontier_len(&self) -> usize {
        self.stack.len()
    }
}
