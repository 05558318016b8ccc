//! Per-run search fields, kept beside the graph instead of on its nodes.

use std::collections::HashMap;

use crate::graph::NodeId;

/// The mutable scalars a search keeps for one node during one run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeState {
    pub distance_from_start: f64,
    /// Heuristic estimate of the remaining distance to the goal.
    pub distance_to_end: f64,
    pub visited: bool,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            distance_from_start: 0.0,
            distance_to_end: 0.0,
            visited: false,
        }
    }
}

impl NodeState {
    /// `distance_from_start + distance_to_end`, the A* priority.
    #[inline]
    pub fn total_distance(&self) -> f64 {
        self.distance_from_start + self.distance_to_end
    }
}

/// Companion map of [`NodeState`] keyed by node id.
///
/// Nodes without an entry read as the default state, with
/// `distance_from_start` equal to the current base distance (zero, or
/// infinity after [`set_all_distances_to_infinity`](Self::set_all_distances_to_infinity)).
#[derive(Clone, Debug)]
pub struct SearchState {
    nodes: HashMap<NodeId, NodeState>,
    base_distance: f64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            base_distance: 0.0,
        }
    }

    /// Restore every node to its default state.
    pub fn reset_vertices(&mut self) {
        self.nodes.clear();
        self.base_distance = 0.0;
    }

    /// Set `distance_from_start` of every node to `+inf`.
    pub fn set_all_distances_to_infinity(&mut self) {
        self.base_distance = f64::INFINITY;
        for s in self.nodes.values_mut() {
            s.distance_from_start = f64::INFINITY;
        }
    }

    /// State of `id`.
    pub fn get(&self, id: NodeId) -> NodeState {
        match self.nodes.get(&id) {
            Some(s) => *s,
            None => self.fresh(),
        }
    }

    /// Mutable state of `id`, materialized on first access.
    pub fn get_mut(&mut self, id: NodeId) -> &mut NodeState {
        let fresh = self.fresh();
        self.nodes.entry(id).or_insert(fresh)
    }

    #[inline]
    pub fn distance_from_start(&self, id: NodeId) -> f64 {
        self.get(id).distance_from_start
    }

    #[inline]
    pub fn distance_to_end(&self, id: NodeId) -> f64 {
        self.get(id).distance_to_end
    }

    #[inline]
    pub fn visited(&self, id: NodeId) -> bool {
        self.get(id).visited
    }

    #[inline]
    pub fn set_distance_from_start(&mut self, id: NodeId, d: f64) {
        self.get_mut(id).distance_from_start = d;
    }

    #[inline]
    pub fn set_distance_to_end(&mut self, id: NodeId, d: f64) {
        self.get_mut(id).distance_to_end = d;
    }

    #[inline]
    pub fn set_visited(&mut self, id: NodeId, visited: bool) {
        self.get_mut(id).visited = visited;
    }

    fn fresh(&self) -> NodeState {
        NodeState {
            distance_from_start: self.base_distance,
            ..NodeState::default()
        }
    }
}
