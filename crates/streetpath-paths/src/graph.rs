//! Street graph: vertices with coordinates and weighted adjacency.

use std::collections::HashMap;
use std::fmt;

use streetpath_core::LatLon;

/// Default number of search steps a host should run per animation tick.
pub const DEFAULT_STEPS_PER_TICK: usize = 30;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Identity of a vertex, unique within a [`Graph`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub i64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One entry of a node's adjacency list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub id: NodeId,
    /// Edge weight in meters. Always `>= 0`.
    pub weight: f64,
}

/// A graph vertex. Identity and adjacency never change once the graph is
/// built; per-run search fields live in [`SearchState`](crate::SearchState).
#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    pos: LatLon,
    neighbors: Vec<Neighbor>,
}

impl Node {
    fn new(id: NodeId, pos: LatLon) -> Self {
        Self {
            id,
            pos,
            neighbors: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn pos(&self) -> LatLon {
        self.pos
    }

    /// Adjacency in insertion order.
    #[inline]
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// Owner of every [`Node`] of one loaded map.
pub struct Graph {
    vertices: HashMap<NodeId, Node>,
    edge_count: usize,
    steps_per_tick: usize,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            edge_count: 0,
            steps_per_tick: DEFAULT_STEPS_PER_TICK,
        }
    }

    /// Insert a vertex. Inserting an id that already exists is a no-op.
    ///
    /// Returns `true` if the vertex was inserted.
    pub fn add_vertex(&mut self, id: NodeId, lat: f64, lon: f64) -> bool {
        if self.vertices.contains_key(&id) {
            return false;
        }
        self.vertices.insert(id, Node::new(id, LatLon::new(lat, lon)));
        true
    }

    /// Insert an undirected edge of the given weight (meters).
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> bool {
        self.add_edge_directed(from, to, weight, false)
    }

    /// Insert an edge. Unless `directed`, the reverse edge is added with the
    /// same weight.
    ///
    /// This is a no-op returning `false` when either endpoint is missing or
    /// the weight is negative or NaN.
    pub fn add_edge_directed(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: f64,
        directed: bool,
    ) -> bool {
        if !self.vertices.contains_key(&from) || !self.vertices.contains_key(&to) {
            return false;
        }
        if !(weight >= 0.0) {
            log::warn!("rejecting edge {from} -> {to} with weight {weight}");
            return false;
        }

        if let Some(n) = self.vertices.get_mut(&from) {
            n.neighbors.push(Neighbor { id: to, weight });
        }
        if !directed {
            if let Some(n) = self.vertices.get_mut(&to) {
                n.neighbors.push(Neighbor { id: from, weight });
            }
        }
        self.edge_count += 1;
        true
    }

    /// Remove every vertex and edge, e.g. before loading a new map.
    ///
    /// The steps-per-tick setting is kept.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    #[inline]
    pub fn vertex(&self, id: NodeId) -> Option<&Node> {
        self.vertices.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Adjacency of `id`, or an empty slice if the vertex is unknown.
    pub fn neighbors_of(&self, id: NodeId) -> &[Neighbor] {
        match self.vertices.get(&id) {
            Some(n) => &n.neighbors,
            None => &[],
        }
    }

    /// Weight of the cheapest edge `from -> to`, if any.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.neighbors_of(from)
            .iter()
            .filter(|n| n.id == to)
            .map(|n| n.weight)
            .min_by(f64::total_cmp)
    }

    /// Iterate all vertices in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &Node> {
        self.vertices.values()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of successful edge insertions (an undirected edge counts once).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// How many search steps a host should run per animation tick.
    #[inline]
    pub fn steps_per_tick(&self) -> usize {
        self.steps_per_tick
    }

    /// Set the animation pace. Zero is clamped to one.
    pub fn set_steps_per_tick(&mut self, steps: usize) {
        if steps == 0 {
            log::warn!("steps per tick must be positive, using 1");
        }
        self.steps_per_tick = steps.max(1);
    }
}
