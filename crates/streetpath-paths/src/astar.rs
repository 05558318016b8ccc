use crate::delta::{Delta, Edge};
use crate::error::SearchError;
use crate::frontier::PriorityFrontier;
use crate::graph::NodeId;
use crate::search::{SearchCore, core_accessors};
use crate::traits::PathSearch;

/// A* search: expands the frontier node with the smallest
/// `distance_from_start + distance_to_end`, using great-circle distance to
/// the goal as the heuristic.
///
/// A node that is reached more cheaply is re-prioritised if it is still
/// open, or re-opened if it was already expanded. A run takes at most one
/// step per vertex only when weights are consistent with the heuristic
/// (e.g. great-circle lengths); re-opened nodes cost extra steps.
pub struct AStar<'g> {
    core: SearchCore<'g>,
    open: PriorityFrontier,
}

impl Default for AStar<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl AStar<'_> {
    pub fn new() -> Self {
        Self {
            core: SearchCore::new(),
            open: PriorityFrontier::new(),
        }
    }
}

impl<'g> PathSearch<'g> for AStar<'g> {
    core_accessors!('g);

    fn start(&mut self, origin: NodeId, goal: NodeId) -> Result<(), SearchError> {
        self.core.begin(origin, goal)?;
        self.core.state.set_all_distances_to_infinity();
        self.core.state.set_distance_from_start(origin, 0.0);
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

        let current_g = self.core.state.distance_from_start(current);
        let mut edges = Vec::new();
        for nb in graph.neighbors_of(current) {
            let tentative = current_g + nb.weight;
            let known = self.core.state.get(nb.id);

            if self.open.contains(nb.id) {
                if known.distance_from_start <= tentative {
                    continue;
                }
            } else if known.visited {
                edges.push(Edge::new(current, nb.id));
                if known.distance_from_start <= tentative {
                    continue;
                }
                // Cheaper route into an expanded node: re-open it.
                self.core.state.set_visited(nb.id, false);
            } else {
                let h = self.core.heuristic(graph, nb.id);
                self.core.state.set_distance_to_end(nb.id, h);
            }

            let st = self.core.state.get_mut(nb.id);
            st.distance_from_start = tentative;
            let f = st.total_distance();
            self.core.predecessors.insert(nb.id, current);
            self.open.push(nb.id, f);
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
