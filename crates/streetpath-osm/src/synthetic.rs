//! Synthetic street grids.
//!
//! Streets run along rows and columns of a jittered lattice around a center
//! coordinate. A configurable share of block segments is left out so the
//! network looks less like graph paper and searches have something to route
//! around.

use rand::{Rng, RngExt};
use streetpath_core::LatLon;

use crate::overpass::{MapData, NodeRecord, WayRecord};

/// Meters per degree of latitude on the mean-radius sphere.
const METERS_PER_DEGREE: f64 = 111_195.0;

/// Shape of a generated street grid.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub center: LatLon,
    /// Distance between neighbouring intersections, in meters.
    pub spacing_m: f64,
    /// Maximum random offset of an intersection, as a fraction of
    /// `spacing_m` (0.0-0.5).
    pub jitter: f64,
    /// Probability that a block segment is left out (0.0-1.0).
    pub drop_pct: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            center: LatLon::new(52.5200, 13.4050),
            spacing_m: 80.0,
            jitter: 0.2,
            drop_pct: 0.1,
        }
    }
}

/// Street grid generator.
pub struct StreetGridGen<R: Rng> {
    pub rng: R,
    pub config: GridConfig,
}

impl<R: Rng> StreetGridGen<R> {
    /// Create a new generator.
    pub fn new(config: GridConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Id of the intersection at (`row`, `col`). Ids start at 1.
    pub fn node_id(&self, row: usize, col: usize) -> i64 {
        (row * self.config.cols + col) as i64 + 1
    }

    /// Generate nodes and ways. Each row and each column becomes one or more
    /// ways, split wherever a segment was dropped.
    pub fn generate(&mut self) -> MapData {
        let GridConfig {
            rows,
            cols,
            center,
            spacing_m,
            jitter,
            drop_pct,
        } = self.config.clone();
        let jitter = jitter.clamp(0.0, 0.5);
        let drop_pct = drop_pct.clamp(0.0, 1.0);

        let dlat = spacing_m / METERS_PER_DEGREE;
        let dlon = dlat / center.lat.to_radians().cos();
        let origin = center.shift(
            -dlat * (rows.saturating_sub(1)) as f64 / 2.0,
            -dlon * (cols.saturating_sub(1)) as f64 / 2.0,
        );

        let mut data = MapData::default();
        for r in 0..rows {
            for c in 0..cols {
                let (jr, jc) = if jitter > 0.0 {
                    (
                        self.rng.random_range(-jitter..jitter),
                        self.rng.random_range(-jitter..jitter),
                    )
                } else {
                    (0.0, 0.0)
                };
                let p = origin.shift(dlat * (r as f64 + jr), dlon * (c as f64 + jc));
                data.nodes.push(NodeRecord {
                    id: self.node_id(r, c),
                    lat: p.lat,
                    lon: p.lon,
                });
            }
        }

        for r in 0..rows {
            let ids: Vec<i64> = (0..cols).map(|c| self.node_id(r, c)).collect();
            self.split_street(&ids, drop_pct, &mut data.ways);
        }
        for c in 0..cols {
            let ids: Vec<i64> = (0..rows).map(|r| self.node_id(r, c)).collect();
            self.split_street(&ids, drop_pct, &mut data.ways);
        }

        log::debug!(
            "generated {}x{} grid: {} nodes, {} ways",
            rows,
            cols,
            data.nodes.len(),
            data.ways.len()
        );
        data
    }

    fn split_street(&mut self, ids: &[i64], drop_pct: f64, ways: &mut Vec<WayRecord>) {
        let mut current: Vec<i64> = Vec::new();
        for (i, &id) in ids.iter().enumerate() {
            if current.is_empty() {
                current.push(id);
                continue;
            }
            let r: f64 = self.rng.random();
            if r < drop_pct {
                if current.len() >= 2 {
                    ways.push(WayRecord {
                        ids: std::mem::take(&mut current),
                    });
                }
                current.clear();
            }
            current.push(id);
            if i + 1 == ids.len() && current.len() >= 2 {
                ways.push(WayRecord {
                    ids: std::mem::take(&mut current),
                });
            }
        }
    }
}
