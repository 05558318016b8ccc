use crate::delta::{Delta, Edge};
use crate::error::SearchError;
use crate::frontier::PriorityFrontier;
use crate::graph::NodeId;
use crate::search::{SearchCore, core_accessors};
use crate::traits::PathSearch;

/// Dijkstra's search: always expands the frontier node with the smallest
/// `distance_from_start`. Optimal for non-negative weights.
pub struct Dijkstra<'g> {
    core: SearchCore<'g>,
    open: PriorityFrontier,
}

impl Default for Dijkstra<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra<'_> {
    pub fn new() -> Self {
        Self {
            core: SearchCore::new(),
            open: PriorityFrontier::new(),
        }
    }
}

impl<'g> PathSearch<'g> for Dijkstra<'g> {
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

        let current_dist = self.core.state.distance_from_start(current);
        let mut edges = Vec::new();
        for nb in graph.neighbors_of(current) {
            if !self.core.state.visited(nb.id) {
                let tentative = current_dist + nb.weight;
                // Relaxation.
                if tentative < self.core.state.distance_from_start(nb.id) {
                    let h = self.core.heuristic(graph, nb.id);
                    let st = self.core.state.get_mut(nb.id);
                    st.distance_from_start = tentative;
                    st.distance_to_end = h;
                    self.core.predecessors.insert(nb.id, current);
                    self.open.push(nb.id, tentative);
                }
            }
            edges.push(Edge::new(current, nb.id));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{self, A, C};

    #[test]
    fn unit_square_distance_two() {
        let g = testutil::square();
        let mut d = Dijkstra::new();
        d.set_graph(&g);
        d.start(A, C).unwrap();
        testutil::run(&mut d);
        assert_eq!(d.final_distance(), Some(2.0));
        assert_eq!(testutil::path_of(&d, A, C).len(), 3);
    }

    #[test]
    fn untouched_nodes_start_at_infinity() {
        let g = testutil::square();
        let mut d = Dijkstra::new();
        d.set_graph(&g);
        d.start(A, C).unwrap();
        assert_eq!(d.node_state(A).distance_from_start, 0.0);
        assert_eq!(d.node_state(C).distance_from_start, f64::INFINITY);
    }

    #[test]
    fn prefers_light_detour_over_heavy_shortcut() {
        // 0 -(10)- 3 directly, or 0 -(1)- 1 -(1)- 2 -(1)- 3.
        // Discovery order would pop 3 right after 0's neighbours; the
        // priority queue must hold it back until the detour is cheaper.
        let g = testutil::weighted(4, &[(0, 3, 10.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);
        let mut d = Dijkstra::new();
        d.set_graph(&g);
        d.start(NodeId(0), NodeId(3)).unwrap();
        testutil::run(&mut d);
        assert_eq!(d.final_distance(), Some(3.0));
        assert_eq!(
            testutil::path_of(&d, NodeId(0), NodeId(3)),
            vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]
        );
    }

    #[test]
    fn draws_every_edge_of_an_expansion() {
        let g = testutil::square();
        let mut d = Dijkstra::new();
        d.set_graph(&g);
        d.start(A, C).unwrap();
        d.step();
        // B: edges to A and C, then the tree edge A->B.
        let delta = d.step();
        assert_eq!(delta.edges().len(), 3);
    }
}
