//! Graph fixtures and helpers shared by the unit tests.

use streetpath_core::{LatLon, haversine_m};

use crate::graph::{Graph, NodeId};
use crate::path::reconstruct_path;
use crate::traits::PathSearch;

pub(crate) const A: NodeId = NodeId(1);
pub(crate) const B: NodeId = NodeId(2);
pub(crate) const C: NodeId = NodeId(3);
pub(crate) const D: NodeId = NodeId(4);
pub(crate) const ISLAND: NodeId = NodeId(5);

/// Unit-weight square A-B-C-D-A, small enough (about 0.1 m a side) that the
/// haversine heuristic stays below every unit-weight path.
pub(crate) fn square() -> Graph {
    let mut g = Graph::new();
    g.add_vertex(A, 0.0, 0.0);
    g.add_vertex(B, 0.0, 1e-6);
    g.add_vertex(C, 1e-6, 1e-6);
    g.add_vertex(D, 1e-6, 0.0);
    g.add_edge(A, B, 1.0);
    g.add_edge(B, C, 1.0);
    g.add_edge(C, D, 1.0);
    g.add_edge(D, A, 1.0);
    g
}

/// [`square`] plus a vertex with no edges.
pub(crate) fn square_with_island() -> Graph {
    let mut g = square();
    g.add_vertex(ISLAND, 1.0, 1.0);
    g
}

/// `0 - 1 - ... - (n-1)` with unit weights.
pub(crate) fn line(n: i64) -> Graph {
    let mut g = Graph::new();
    for i in 0..n {
        g.add_vertex(NodeId(i), 0.0, i as f64 * 1e-6);
    }
    for i in 1..n {
        g.add_edge(NodeId(i - 1), NodeId(i), 1.0);
    }
    g
}

/// `n` vertices packed within a few centimetres, with explicit weights.
pub(crate) fn weighted(n: i64, edges: &[(i64, i64, f64)]) -> Graph {
    let mut g = Graph::new();
    for i in 0..n {
        g.add_vertex(NodeId(i), 0.0, i as f64 * 1e-7);
    }
    for &(a, b, w) in edges {
        g.add_edge(NodeId(a), NodeId(b), w);
    }
    g
}

/// A `rows x cols` block of streets with haversine weights. Vertex ids are
/// `row * cols + col`.
pub(crate) fn grid(rows: i64, cols: i64) -> Graph {
    let mut g = Graph::new();
    let pos = |r: i64, c: i64| LatLon::new(52.5 + r as f64 * 0.001, 13.4 + c as f64 * 0.0015);
    for r in 0..rows {
        for c in 0..cols {
            let p = pos(r, c);
            g.add_vertex(NodeId(r * cols + c), p.lat, p.lon);
        }
    }
    for r in 0..rows {
        for c in 0..cols {
            let id = NodeId(r * cols + c);
            if c + 1 < cols {
                g.add_edge(id, NodeId(id.0 + 1), haversine_m(pos(r, c), pos(r, c + 1)));
            }
            if r + 1 < rows {
                g.add_edge(id, NodeId(id.0 + cols), haversine_m(pos(r, c), pos(r + 1, c)));
            }
        }
    }
    g
}

/// Step until finished. Returns the number of steps taken.
pub(crate) fn run<'g>(search: &mut impl PathSearch<'g>) -> usize {
    let mut steps = 0;
    while !search.is_finished() {
        search.step();
        steps += 1;
        assert!(steps <= 100_000, "search does not terminate");
    }
    steps
}

/// The path a finished search found from `origin` to `goal`.
pub(crate) fn path_of<'g>(search: &impl PathSearch<'g>, origin: NodeId, goal: NodeId) -> Vec<NodeId> {
    reconstruct_path(search.predecessors(), origin, goal).expect("no path recorded")
}

/// Sum of edge weights along `path`.
pub(crate) fn path_length(g: &Graph, path: &[NodeId]) -> f64 {
    path.windows(2)
        .map(|w| g.edge_weight(w[0], w[1]).expect("path uses a missing edge"))
        .fold(0.0, |acc, w| acc + w)
}

/// Shortest distance and fewest hops over all simple paths. Small graphs only.
pub(crate) fn brute_force(g: &Graph, origin: NodeId, goal: NodeId) -> Option<(f64, usize)> {
    fn walk(
        g: &Graph,
        at: NodeId,
        goal: NodeId,
        on_path: &mut Vec<NodeId>,
        dist: f64,
        best: &mut Option<(f64, usize)>,
    ) {
        if at == goal {
            let hops = on_path.len() - 1;
            *best = Some(match *best {
                Some((d, h)) => (d.min(dist), h.min(hops)),
                None => (dist, hops),
            });
            return;
        }
        for nb in g.neighbors_of(at) {
            if on_path.contains(&nb.id) {
                continue;
            }
            on_path.push(nb.id);
            walk(g, nb.id, goal, on_path, dist + nb.weight, best);
            on_path.pop();
        }
    }

    let mut best = None;
    walk(g, origin, goal, &mut vec![origin], 0.0, &mut best);
    best
}
