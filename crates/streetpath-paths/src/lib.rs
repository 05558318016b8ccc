//! Incremental pathfinding over street networks.
//!
//! Searches run **one bounded step at a time** so that a host render loop can
//! animate frontier expansion frame by frame, at its own pace, and throw a
//! run away between any two steps:
//!
//! - **Breadth-first** ([`Bfs`]) and **depth-first** ([`Dfs`]) search
//! - **Dijkstra** ([`Dijkstra`]) with a real priority queue
//! - **Greedy best-first** ([`Greedy`]) and **A\*** ([`AStar`]) guided by
//!   great-circle distance to the goal
//!
//! Hosts normally drive a [`SearchSession`], which binds a [`Graph`], an
//! origin and a goal to one [`Algorithm`] and hands back a [`Delta`] per step.
//!
//! # Per-run state
//!
//! [`Node`]s are immutable once the graph is built. Tentative distances,
//! heuristic estimates and visited flags live in a [`SearchState`] owned by
//! the running search, so a reset or a new run can never observe values left
//! over from a previous one.
//!
//! | Type | Role |
//! |---|---|
//! | [`PathSearch`] | step contract every algorithm implements |
//! | [`Search`] | one instance of any [`Algorithm`] |
//! | [`SearchSession`] | lifecycle owner a host talks to |

mod algorithm;
mod astar;
mod bfs;
mod delta;
mod dfs;
mod dijkstra;
mod error;
mod frontier;
mod graph;
mod greedy;
mod path;
mod search;
mod session;
mod state;
mod traits;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod testutil;

pub use algorithm::{Algorithm, Search};
pub use astar::AStar;
pub use bfs::Bfs;
pub use delta::{Delta, Edge};
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use error::SearchError;
pub use graph::{DEFAULT_STEPS_PER_TICK, Graph, Neighbor, Node, NodeId};
pub use greedy::Greedy;
pub use path::reconstruct_path;
pub use session::{NO_PATH, SearchSession};
pub use state::{NodeState, SearchState};
pub use traits::{PathSearch, Phase};
