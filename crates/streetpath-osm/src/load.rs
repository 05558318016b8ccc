use streetpath_core::haversine_m;
use streetpath_paths::{Graph, NodeId};

use crate::overpass::MapData;

/// What [`load_graph`] did with a [`MapData`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub vertices_added: usize,
    /// Node records whose id was already in the graph.
    pub duplicate_vertices: usize,
    pub edges_added: usize,
    /// Way segments with an endpoint that is not a known node.
    pub skipped_segments: usize,
}

/// Add every node of `data` to `graph`, then one undirected edge per
/// consecutive pair of each way, weighted by its great-circle length in
/// meters.
pub fn load_graph(graph: &mut Graph, data: &MapData) -> LoadStats {
    let mut stats = LoadStats::default();

    for n in &data.nodes {
        if graph.add_vertex(NodeId(n.id), n.lat, n.lon) {
            stats.vertices_added += 1;
        } else {
            stats.duplicate_vertices += 1;
        }
    }

    for way in &data.ways {
        for pair in way.ids.windows(2) {
            let (from, to) = (NodeId(pair[0]), NodeId(pair[1]));
            let (Some(a), Some(b)) = (graph.vertex(from), graph.vertex(to)) else {
                stats.skipped_segments += 1;
                continue;
            };
            let weight = haversine_m(a.pos(), b.pos());
            if graph.add_edge(from, to, weight) {
                stats.edges_added += 1;
            }
        }
    }

    if stats.skipped_segments > 0 {
        log::warn!(
            "skipped {} way segments with unknown endpoints",
            stats.skipped_segments
        );
    }
    log::debug!(
        "loaded {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overpass::{NodeRecord, WayRecord};
    use streetpath_core::LatLon;

    fn data() -> MapData {
        MapData {
            nodes: vec![
                NodeRecord { id: 1, lat: 52.500, lon: 13.400 },
                NodeRecord { id: 2, lat: 52.501, lon: 13.400 },
                NodeRecord { id: 3, lat: 52.501, lon: 13.401 },
                NodeRecord { id: 1, lat: 0.0, lon: 0.0 },
            ],
            ways: vec![
                WayRecord { ids: vec![1, 2, 3] },
                WayRecord { ids: vec![3, 77, 1] },
                WayRecord { ids: vec![2] },
            ],
        }
    }

    #[test]
    fn builds_weighted_undirected_graph() {
        let mut g = Graph::new();
        let stats = load_graph(&mut g, &data());
        assert_eq!(
            stats,
            LoadStats {
                vertices_added: 3,
                duplicate_vertices: 1,
                edges_added: 2,
                skipped_segments: 2,
            }
        );
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);

        let w = g.edge_weight(NodeId(1), NodeId(2)).unwrap();
        let expected = haversine_m(LatLon::new(52.5, 13.4), LatLon::new(52.501, 13.4));
        assert_eq!(w, expected);
        assert_eq!(g.edge_weight(NodeId(2), NodeId(1)), Some(w));
        // First record wins for duplicated ids.
        assert_eq!(g.vertex(NodeId(1)).unwrap().pos(), LatLon::new(52.5, 13.4));
    }

    #[test]
    fn loaded_graph_is_searchable() {
        let mut g = Graph::new();
        load_graph(&mut g, &data());
        let mut s = streetpath_paths::SearchSession::new();
        s.set_graph(&g);
        s.set_origin(NodeId(1));
        s.set_goal(NodeId(3));
        s.start("A* Search").unwrap();
        while !s.is_finished() {
            s.tick();
        }
        assert_eq!(s.path(), vec![NodeId(1), NodeId(2), NodeId(3)]);
        assert!(s.final_distance() > 100.0);
    }
}
