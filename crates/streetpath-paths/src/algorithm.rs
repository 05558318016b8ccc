//! Closed set of search variants and the factory that builds them.

use std::collections::HashMap;
use std::fmt;

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::delta::Delta;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::greedy::Greedy;
use crate::state::NodeState;
use crate::traits::{PathSearch, Phase};

/// The selectable search algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    AStar,
    BreadthFirst,
    Greedy,
    DepthFirst,
    Dijkstra,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::AStar,
        Algorithm::BreadthFirst,
        Algorithm::Greedy,
        Algorithm::DepthFirst,
        Algorithm::Dijkstra,
    ];

    /// Display name, which is also the name [`from_name`](Self::from_name)
    /// accepts.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => "A* Search",
            Algorithm::BreadthFirst => "Breadth-First Search",
            Algorithm::Greedy => "Greedy Search",
            Algorithm::DepthFirst => "Depth-First Search",
            Algorithm::Dijkstra => "Dijkstra's Search",
        }
    }

    /// Look up an algorithm by its exact, case-sensitive display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Like [`from_name`](Self::from_name) but falls back to the default
    /// ([`Algorithm::AStar`]) for unknown names.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            let fallback = Self::default();
            log::warn!("unknown algorithm {name:?}, using {fallback}");
            fallback
        })
    }

    /// A fresh, idle instance of this algorithm.
    pub fn instantiate<'g>(self) -> Search<'g> {
        match self {
            Algorithm::AStar => Search::AStar(AStar::new()),
            Algorithm::BreadthFirst => Search::Bfs(Bfs::new()),
            Algorithm::Greedy => Search::Greedy(Greedy::new()),
            Algorithm::DepthFirst => Search::Dfs(Dfs::new()),
            Algorithm::Dijkstra => Search::Dijkstra(Dijkstra::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One running instance of any [`Algorithm`].
pub enum Search<'g> {
    Bfs(Bfs<'g>),
    Dfs(Dfs<'g>),
    Dijkstra(Dijkstra<'g>),
    Greedy(Greedy<'g>),
    AStar(AStar<'g>),
}

macro_rules! dispatch {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            Search::Bfs($s) => $body,
            Search::Dfs($s) => $body,
            Search::Dijkstra($s) => $body,
            Search::Greedy($s) => $body,
            Search::AStar($s) => $body,
        }
    };
}

impl Search<'_> {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Search::Bfs(_) => Algorithm::BreadthFirst,
            Search::Dfs(_) => Algorithm::DepthFirst,
            Search::Dijkstra(_) => Algorithm::Dijkstra,
            Search::Greedy(_) => Algorithm::Greedy,
            Search::AStar(_) => Algorithm::AStar,
        }
    }
}

impl<'g> PathSearch<'g> for Search<'g> {
    fn set_graph(&mut self, graph: &'g Graph) {
        dispatch!(self, s => s.set_graph(graph))
    }

    fn start(&mut self, origin: NodeId, goal: NodeId) -> Result<(), SearchError> {
        dispatch!(self, s => s.start(origin, goal))
    }

    fn step(&mut self) -> Delta {
        dispatch!(self, s => s.step())
    }

    fn phase(&self) -> Phase {
        dispatch!(self, s => s.phase())
    }

    fn predecessor_of(&self, id: NodeId) -> Option<NodeId> {
        dispatch!(self, s => s.predecessor_of(id))
    }

    fn predecessors(&self) -> &HashMap<NodeId, NodeId> {
        dispatch!(self, s => s.predecessors())
    }

    fn final_distance(&self) -> Option<f64> {
        dispatch!(self, s => s.final_distance())
    }

    fn node_state(&self, id: NodeId) -> NodeState {
        dispatch!(self, s => s.node_state(id))
    }

    fn frontier_len(&self) -> usize {
        dispatch!(self, s => s.frontier_len())
    }
}
