//! Map loading for the streetpath engine.
//!
//! - [`parse_map`] decodes an Overpass API response (`{"elements": [...]}`)
//!   or the pre-split `{"nodes": [...], "ways": [...]}` document into
//!   [`MapData`].
//! - [`load_graph`] turns [`MapData`] into a [`Graph`](streetpath_paths::Graph),
//!   weighting every way segment by its great-circle length in meters.
//! - [`StreetGridGen`] produces synthetic street grids for demos and tests.

mod error;
mod load;
mod overpass;
mod synthetic;

pub use error::LoadError;
pub use load::{LoadStats, load_graph};
pub use overpass::{MapData, NodeRecord, WayRecord, parse_map, parse_overpass, parse_prepared};
pub use synthetic::{GridConfig, StreetGridGen};
