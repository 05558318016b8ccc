//! Bookkeeping shared by every search variant.

use std::collections::HashMap;

use streetpath_core::{LatLon, haversine_m};

use crate::delta::{Delta, Edge};
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::state::SearchState;
use crate::traits::Phase;

/// Graph binding, endpoints, per-node state and predecessor map of one run.
pub(crate) struct SearchCore<'g> {
    pub(crate) graph: Option<&'g Graph>,
    pub(crate) origin: NodeId,
    pub(crate) goal: NodeId,
    goal_pos: LatLon,
    pub(crate) state: SearchState,
    pub(crate) predecessors: HashMap<NodeId, NodeId>,
    pub(crate) phase: Phase,
    pub(crate) final_distance: Option<f64>,
}

impl<'g> SearchCore<'g> {
    pub(crate) fn new() -> Self {
        Self {
            graph: None,
            origin: NodeId(0),
            goal: NodeId(0),
            goal_pos: LatLon::default(),
            state: SearchState::new(),
            predecessors: HashMap::new(),
            phase: Phase::Idle,
            final_distance: None,
        }
    }

    /// Validate the endpoints and reset everything for a fresh run.
    ///
    /// On error nothing is modified.
    pub(crate) fn begin(&mut self, origin: NodeId, goal: NodeId) -> Result<&'g Graph, SearchError> {
        let graph = self
            .graph
            .ok_or(SearchError::InvalidState("no graph bound to the search"))?;
        if !graph.contains(origin) {
            return Err(SearchError::InvalidState("origin is not in the graph"));
        }
        let goal_pos = graph
            .vertex(goal)
            .map(|n| n.pos())
            .ok_or(SearchError::InvalidState("goal is not in the graph"))?;

        self.origin = origin;
        self.goal = goal;
        self.goal_pos = goal_pos;
        self.state.reset_vertices();
        self.state.set_distance_from_start(origin, 0.0);
        self.predecessors.clear();
        self.final_distance = None;
        self.phase = Phase::Running;

        log::debug!("search started: {origin} -> {goal}");
        Ok(graph)
    }

    /// The bound graph while the run is in progress.
    #[inline]
    pub(crate) fn running_graph(&self) -> Option<&'g Graph> {
        match self.phase {
            Phase::Running => self.graph,
            _ => None,
        }
    }

    /// End the run. `reached` is the goal if it was popped.
    pub(crate) fn finish(&mut self, reached: Option<NodeId>) {
        self.phase = Phase::Finished;
        self.final_distance = reached.map(|id| self.state.distance_from_start(id));
        match self.final_distance {
            Some(d) => log::debug!("search finished: {} -> {} in {d:.3} m", self.origin, self.goal),
            None => log::debug!("search finished: no path {} -> {}", self.origin, self.goal),
        }
    }

    /// Pop-side bookkeeping: mark `current` visited and finish if it is the
    /// goal. Returns `true` when the run ended.
    pub(crate) fn settle(&mut self, current: NodeId) -> bool {
        self.state.set_visited(current, true);
        if current == self.goal {
            self.finish(Some(current));
            return true;
        }
        false
    }

    /// Heuristic distance from `id` to the goal, in meters.
    pub(crate) fn heuristic(&self, graph: &Graph, id: NodeId) -> f64 {
        graph
            .vertex(id)
            .map(|n| haversine_m(n.pos(), self.goal_pos))
            .unwrap_or(0.0)
    }

    /// Delta for the expansion of `current`: the origin marker on the first
    /// expansion, otherwise `edges` plus the tree edge into `current`.
    pub(crate) fn expansion_delta(&self, current: NodeId, mut edges: Vec<Edge>) -> Delta {
        if current == self.origin {
            return Delta::Origin { id: current };
        }
        if let Some(&pred) = self.predecessors.get(&current) {
            edges.push(Edge::new(pred, current));
        }
        Delta::Edges { edges }
    }
}

/// Implements the [`PathSearch`](crate::PathSearch) accessors that only read
/// the `core` field, and `set_graph`.
macro_rules! core_accessors {
    ($g:lifetime) => {
        fn set_graph(&mut self, graph: &$g $crate::graph::Graph) {
            self.core.graph = Some(graph);
        }

        fn phase(&self) -> $crate::traits::Phase {
            self.core.phase
        }

        fn predecessor_of(&self, id: $crate::graph::NodeId) -> Option<$crate::graph::NodeId> {
            self.core.predecessors.get(&id).copied()
        }

        fn predecessors(
            &self,
        ) -> &std::collections::HashMap<$crate::graph::NodeId, $crate::graph::NodeId> {
            &self.core.predecessors
        }

        fn final_distance(&self) -> Option<f64> {
            self.core.final_distance
        }

        fn node_state(&self, id: $crate::graph::NodeId) -> $crate::state::NodeState {
            self.core.state.get(id)
        }
    };
}

pub(crate) use core_accessors;
