use crate::delta::{Delta, Edge};
use crate::error::SearchError;
use crate::frontier::PriorityFrontier;
use crate::graph::NodeId;
use crate::search::{SearchCore, core_accessors};
use crate::traits::PathSearch;

/// Greedy best-first search: expands the frontier node that looks closest
/// to the goal (`distance_to_end`). Fast, not optimal.
///
/// `distance_from_start` is only bookkeeping along the discovery tree, so the
/// reported distance is the length of the path actually found.
pub struct Greedy<'g> {
    core: SearchCore<'g>,
    open: PriorityFrontier,
}

impl Default for Greedy<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Greedy<'_> {
    pub fn new() -> Self {
        Self {
            core: SearchCore::new(),
            open: PriorityFrontier::new(),
        }
    }
}

impl<'g> PathSearch<'g> for Greedy<'g> {
    core_accessors!('g);

    fn start(&mut self, origin: NodeId, goal: NodeId) -> Result<(), SearchError> {
        self.core.begin(origin, goal)?;
        self.open.clear();
        self.open.push(origin, 0.0);
        Ok(())
    }

    fn step(&mut self) -> Delta {
        let Some(graph) = self.core.running_graph() else {
            return Delta::empty();
        };
        let Some(current) = self.open.pop() else {
            self.core.finish(None);
            return Delta::empty();
        };

        if self.core.settle(current) {
            self.open.clear();
            return Delta::empty();
        }

        let current_dist = self.core.state.distance_from_start(current);
        let mut edges = Vec::new();
        for nb in graph.neighbors_of(current) {
            if self.core.state.visited(nb.id) || self.open.contains(nb.id) {
                edges.push(Edge::new(current, nb.id));
                continue;
            }
            let h = self.core.heuristic(graph, nb.id);
            let st = self.core.state.get_mut(nb.id);
            st.distance_to_end = h;
            st.distance_from_start = current_dist + nb.weight;
            self.core.predecessors.insert(nb.id, current);
            self.open.push(nb.id, h);
        }

        let delta = self.core.expansion_delta(current, edges);
        if self.open.is_empty() {
            self.core.finish(None);
        }
        delta
    }

    fn frontier_len(&self) -> usize {
        self.open.len()
    }
}
