//! The object a host drives: binds a graph, endpoints and an algorithm.

use crate::algorithm::{Algorithm, Search};
use crate::delta::Delta;
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::path::reconstruct_path;
use crate::state::NodeState;
use crate::traits::PathSearch;

/// What [`SearchSession::final_distance`] reports when no path was found.
pub const NO_PATH: f64 = -1.0;

/// Round a distance to millimetres for stable display.
fn round3(d: f64) -> f64 {
    (d * 1000.0).round() / 1000.0
}

/// Lifecycle owner for one "find path" action.
///
/// The session borrows the graph immutably for as long as it lives, so the
/// adjacency cannot change under a running search. Only one session should
/// drive searches over a given graph at a time.
///
/// ```
/// use streetpath_paths::{Graph, NodeId, SearchSession};
///
/// let mut g = Graph::new();
/// g.add_vertex(NodeId(1), 0.0, 0.0);
/// g.add_vertex(NodeId(2), 0.0, 0.0001);
/// g.add_edge(NodeId(1), NodeId(2), 11.1);
///
/// let mut session = SearchSession::new();
/// session.set_graph(&g);
/// session.set_origin(NodeId(1));
/// session.set_goal(NodeId(2));
/// session.start("Dijkstra's Search").unwrap();
/// while !session.is_finished() {
///     session.tick();
/// }
/// assert_eq!(session.path(), vec![NodeId(1), NodeId(2)]);
/// assert_eq!(session.final_distance(), 11.1);
/// ```
pub struct SearchSession<'g> {
    graph: Option<&'g Graph>,
    origin: Option<NodeId>,
    goal: Option<NodeId>,
    search: Option<Search<'g>>,
    /// Origin and goal the active search was started with.
    endpoints: Option<(NodeId, NodeId)>,
    finished: bool,
    steps: usize,
}

impl Default for SearchSession<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g> SearchSession<'g> {
    pub fn new() -> Self {
        Self {
            graph: None,
            origin: None,
            goal: None,
            search: None,
            endpoints: None,
            finished: false,
            steps: 0,
        }
    }

    pub fn set_graph(&mut self, graph: &'g Graph) {
        self.graph = Some(graph);
    }

    pub fn set_origin(&mut self, id: NodeId) {
        self.origin = Some(id);
    }

    pub fn set_goal(&mut self, id: NodeId) {
        self.goal = Some(id);
    }

    #[inline]
    pub fn graph(&self) -> Option<&'g Graph> {
        self.graph
    }

    #[inline]
    pub fn origin(&self) -> Option<NodeId> {
        self.origin
    }

    #[inline]
    pub fn goal(&self) -> Option<NodeId> {
        self.goal
    }

    /// Start a run with the algorithm called `name`.
    ///
    /// Unknown names fall back to A*. See [`start_with`](Self::start_with).
    pub fn start(&mut self, name: &str) -> Result<(), SearchError> {
        self.start_with(Algorithm::from_name_or_default(name))
    }

    /// Discard any previous run and start `algorithm` from origin to goal.
    ///
    /// Fails with [`SearchError::InvalidState`] if the graph, origin or goal
    /// is unset or not in the graph. The session is unchanged on failure.
    pub fn start_with(&mut self, algorithm: Algorithm) -> Result<(), SearchError> {
        let graph = self
            .graph
            .ok_or(SearchError::InvalidState("graph must be set before starting"))?;
        let origin = self
            .origin
            .ok_or(SearchError::InvalidState("origin must be set before starting"))?;
        let goal = self
            .goal
            .ok_or(SearchError::InvalidState("goal must be set before starting"))?;

        let mut search = algorithm.instantiate();
        search.set_graph(graph);
        search.start(origin, goal)?;

        self.reset();
        self.search = Some(search);
        self.endpoints = Some((origin, goal));
        log::debug!(
            "{algorithm} over {} vertices / {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(())
    }

    /// Run one step of the active search.
    ///
    /// Returns an empty delta when no search is running.
    pub fn step(&mut self) -> Delta {
        if self.finished {
            return Delta::empty();
        }
        let Some(search) = self.search.as_mut() else {
            return Delta::empty();
        };

        let delta = search.step();
        self.steps += 1;
        log::trace!("step {}: {delta:?}", self.steps);
        if search.is_finished() {
            self.finished = true;
        }
        delta
    }

    /// Run up to the graph's steps-per-tick, stopping early when the search
    /// finishes. Empty deltas are dropped.
    pub fn tick(&mut self) -> Vec<Delta> {
        let Some(graph) = self.graph else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for _ in 0..graph.steps_per_tick() {
            if self.finished || self.search.is_none() {
                break;
            }
            let delta = self.step();
            if !delta.is_empty() {
                out.push(delta);
            }
        }
        out
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether a search has been started and is not finished yet.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.search.is_some() && !self.finished
    }

    /// The algorithm of the active search.
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.search.as_ref().map(Search::algorithm)
    }

    /// Number of `step` calls made on the active search.
    #[inline]
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    pub fn frontier_len(&self) -> usize {
        self.search.as_ref().map_or(0, |s| s.frontier_len())
    }

    pub fn predecessor_of(&self, id: NodeId) -> Option<NodeId> {
        self.search.as_ref()?.predecessor_of(id)
    }

    /// The path found, origin first. Empty while running, when no path
    /// exists, or when origin and goal coincide.
    pub fn path(&self) -> Vec<NodeId> {
        let (Some(search), Some((origin, goal))) = (&self.search, self.endpoints) else {
            return Vec::new();
        };
        if !self.finished || search.final_distance().is_none() {
            return Vec::new();
        }
        reconstruct_path(search.predecessors(), origin, goal).unwrap_or_default()
    }

    /// Path length in meters rounded to 3 decimals, or [`NO_PATH`].
    pub fn final_distance(&self) -> f64 {
        self.search
            .as_ref()
            .and_then(|s| s.final_distance())
            .map_or(NO_PATH, round3)
    }

    /// Per-run fields of `id`; defaults when no search is active.
    pub fn node_state(&self, id: NodeId) -> NodeState {
        self.search
            .as_ref()
            .map_or_else(NodeState::default, |s| s.node_state(id))
    }

    /// Discard the active search and all of its per-node state.
    ///
    /// Graph, origin and goal stay set, so the same run can be started again.
    pub fn reset(&mut self) {
        if self.search.take().is_some() {
            log::debug!("search reset after {} steps", self.steps);
        }
        self.endpoints = None;
        self.finished = false;
        self.steps = 0;
    }
}
