use std::collections::HashMap;

use crate::delta::Delta;
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::state::NodeState;

/// Lifecycle of one search run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// No run started.
    #[default]
    Idle,
    /// Started and not yet finished.
    Running,
    /// Terminal. Further steps are no-ops.
    Finished,
}

/// The step-at-a-time protocol every search algorithm implements.
pub trait PathSearch<'g> {
    /// Bind the graph to search. Must precede [`start`](Self::start).
    fn set_graph(&mut self, graph: &'g Graph);

    /// Begin a run from `origin` to `goal`, discarding any previous run.
    ///
    /// Fails with [`SearchError::InvalidState`] if no graph is bound or
    /// either endpoint is not in it; the search is left untouched then.
    fn start(&mut self, origin: NodeId, goal: NodeId) -> Result<(), SearchError>;

    /// Expand exactly one frontier node and report what to draw.
    ///
    /// Returns an empty delta once the run is finished or before it started.
    fn step(&mut self) -> Delta;

    fn phase(&self) -> Phase;

    fn is_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }

    /// The node `id` was reached from during the current run.
    fn predecessor_of(&self, id: NodeId) -> Option<NodeId>;

    fn predecessors(&self) -> &HashMap<NodeId, NodeId>;

    /// Length in meters of the path found, or `None` when the goal was not
    /// reached (or the run has not finished).
    fn final_distance(&self) -> Option<f64>;

    /// Per-run fields of `id`.
    fn node_state(&self, id: NodeId) -> NodeState;

    /// Number of discovered nodes waiting to be expanded.
    fn frontier_len(&self) -> usize;
}
