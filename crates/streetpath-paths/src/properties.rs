//! Randomised checks of the search guarantees on small geographic graphs.

use std::collections::HashSet;

use proptest::prelude::*;
use streetpath_core::{LatLon, haversine_m};

use crate::algorithm::Algorithm;
use crate::graph::{Graph, NodeId};
use crate::path::reconstruct_path;
use crate::session::{NO_PATH, SearchSession};
use crate::testutil;
use crate::traits::PathSearch;

/// A small random street graph: coordinates plus edges whose weight is the
/// great-circle length scaled by a detour factor >= 1, which keeps the
/// haversine heuristic admissible and consistent.
#[derive(Debug, Clone)]
struct Sketch {
    coords: Vec<(f64, f64)>,
    edges: Vec<(usize, usize, f64)>,
    origin: usize,
    goal: usize,
}

impl Sketch {
    fn build(&self) -> Graph {
        let mut g = Graph::new();
        for (i, &(lat, lon)) in self.coords.iter().enumerate() {
            g.add_vertex(NodeId(i as i64), lat, lon);
        }
        let mut seen = HashSet::new();
        for &(a, b, detour) in &self.edges {
            // One street per pair, no loops.
            if a == b || !seen.insert((a.min(b), a.max(b))) {
                continue;
            }
            let w = haversine_m(self.pos(a), self.pos(b)) * detour;
            g.add_edge(NodeId(a as i64), NodeId(b as i64), w);
        }
        g
    }

    fn pos(&self, i: usize) -> LatLon {
        LatLon::from(self.coords[i])
    }

    fn origin(&self) -> NodeId {
        NodeId(self.origin as i64)
    }

    fn goal(&self) -> NodeId {
        NodeId(self.goal as i64)
    }
}

fn arb_sketch() -> impl Strategy<Value = Sketch> {
    (2usize..9).prop_flat_map(|n| {
        (
            prop::collection::vec((52.50f64..52.51, 13.40f64..13.41), n),
            prop::collection::vec((0..n, 0..n, 1.0f64..3.0), 0..n * 3),
            0..n,
            0..n,
        )
            .prop_map(|(coords, edges, origin, goal)| Sketch {
                coords,
                edges,
                origin,
                goal,
            })
    })
}

fn run_all(g: &Graph, algorithm: Algorithm, origin: NodeId, goal: NodeId) -> (Vec<crate::Delta>, Option<f64>, usize) {
    let mut s = algorithm.instantiate();
    s.set_graph(g);
    s.start(origin, goal).unwrap();
    let mut deltas = Vec::new();
    while !s.is_finished() {
        deltas.push(s.step());
    }
    let steps = deltas.len();
    (deltas, s.final_distance(), steps)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn terminates_within_vertex_count(sk in arb_sketch()) {
        let g = sk.build();
        for a in Algorithm::ALL {
            let (_, _, steps) = run_all(&g, a, sk.origin(), sk.goal());
            prop_assert!(steps <= g.vertex_count(), "{} took {} steps", a, steps);
        }
    }

    #[test]
    fn found_paths_are_real(sk in arb_sketch()) {
        let g = sk.build();
        let reachable = testutil::brute_force(&g, sk.origin(), sk.goal());
        for a in Algorithm::ALL {
            let mut s = a.instantiate();
            s.set_graph(&g);
            s.start(sk.origin(), sk.goal()).unwrap();
            testutil::run(&mut s);

            prop_assert_eq!(s.final_distance().is_some(), reachable.is_some(), "{}", a);
            let Some(reported) = s.final_distance() else { continue };
            let path = reconstruct_path(s.predecessors(), sk.origin(), sk.goal()).unwrap();
            if sk.origin != sk.goal {
                prop_assert_eq!(path.first(), Some(&sk.origin()));
                prop_assert_eq!(path.last(), Some(&sk.goal()));
            }
            for w in path.windows(2) {
                prop_assert!(g.edge_weight(w[0], w[1]).is_some());
            }
            prop_assert!(close(testutil::path_length(&g, &path), reported), "{}", a);
        }
    }

    #[test]
    fn dijkstra_and_astar_are_optimal(sk in arb_sketch()) {
        let g = sk.build();
        let best = testutil::brute_force(&g, sk.origin(), sk.goal());
        let (_, dijkstra, _) = run_all(&g, Algorithm::Dijkstra, sk.origin(), sk.goal());
        let (_, astar, _) = run_all(&g, Algorithm::AStar, sk.origin(), sk.goal());
        match best {
            Some((d, _)) => {
                prop_assert!(close(dijkstra.unwrap(), d), "dijkstra {:?} vs {}", dijkstra, d);
                prop_assert!(close(astar.unwrap(), d), "astar {:?} vs {}", astar, d);
            }
            None => {
                prop_assert!(dijkstra.is_none());
                prop_assert!(astar.is_none());
            }
        }
    }

    #[test]
    fn bfs_uses_fewest_hops(sk in arb_sketch()) {
        let g = sk.build();
        let Some((_, hops)) = testutil::brute_force(&g, sk.origin(), sk.goal()) else {
            return Ok(());
        };
        let mut s = Algorithm::BreadthFirst.instantiate();
        s.set_graph(&g);
        s.start(sk.origin(), sk.goal()).unwrap();
        testutil::run(&mut s);
        let path = reconstruct_path(s.predecessors(), sk.origin(), sk.goal()).unwrap();
        prop_assert_eq!(path.len().saturating_sub(1), hops);
    }

    #[test]
    fn heuristic_never_overestimates(sk in arb_sketch()) {
        let g = sk.build();
        for (i, from) in sk.coords.iter().enumerate() {
            for (j, to) in sk.coords.iter().enumerate() {
                if let Some((d, _)) = testutil::brute_force(&g, NodeId(i as i64), NodeId(j as i64)) {
                    let h = haversine_m(LatLon::from(*from), LatLon::from(*to));
                    prop_assert!(h <= d + 1e-6, "h = {} > d = {}", h, d);
                }
            }
        }
    }

    #[test]
    fn runs_are_deterministic(sk in arb_sketch()) {
        let g = sk.build();
        for a in Algorithm::ALL {
            let first = run_all(&g, a, sk.origin(), sk.goal());
            let second = run_all(&g, a, sk.origin(), sk.goal());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn reset_reproduces_fresh_run(sk in arb_sketch()) {
        let g = sk.build();
        for a in Algorithm::ALL {
            let mut s = SearchSession::new();
            s.set_graph(&g);
            s.set_origin(sk.origin());
            s.set_goal(sk.goal());

            s.start_with(a).unwrap();
            while !s.is_finished() {
                s.tick();
            }
            let first = (s.final_distance(), s.path(), s.steps_taken());

            s.reset();
            for n in g.vertices() {
                prop_assert_eq!(s.node_state(n.id()), crate::NodeState::default());
            }

            s.start_with(a).unwrap();
            while !s.is_finished() {
                s.tick();
            }
            prop_assert_eq!(&first, &(s.final_distance(), s.path(), s.steps_taken()));

            let fresh_graph = sk.build();
            let mut fresh = SearchSession::new();
            fresh.set_graph(&fresh_graph);
            fresh.set_origin(sk.origin());
            fresh.set_goal(sk.goal());
            fresh.start_with(a).unwrap();
            while !fresh.is_finished() {
                fresh.tick();
            }
            prop_assert_eq!(&first, &(fresh.final_distance(), fresh.path(), fresh.steps_taken()));
            if first.0 == NO_PATH {
                prop_assert!(first.1.is_empty());
            }
        }
    }
}
