//! Overpass JSON documents.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// A map vertex as delivered by the map source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
}

/// An ordered run of node ids forming one street.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WayRecord {
    pub ids: Vec<i64>,
}

/// Nodes and ways of one map, in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapData {
    pub nodes: Vec<NodeRecord>,
    pub ways: Vec<WayRecord>,
}

// ---------------------------------------------------------------------------
// Wire formats
// ---------------------------------------------------------------------------

/// Raw Overpass API response.
#[derive(Deserialize)]
struct OverpassResponse {
    elements: Vec<Element>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Element {
    Node { id: i64, lat: f64, lon: f64 },
    Way { nodes: Vec<i64> },
    #[serde(other)]
    Other,
}

/// The pre-split document the map backend stores and serves.
#[derive(Serialize, Deserialize)]
struct Prepared {
    nodes: Vec<PreparedNode>,
    ways: Vec<PreparedWay>,
}

#[derive(Serialize, Deserialize)]
struct PreparedNode {
    #[serde(rename = "type", default = "node_tag")]
    kind: String,
    id: i64,
    lat: f64,
    lon: f64,
}

#[derive(Serialize, Deserialize)]
struct PreparedWay {
    #[serde(rename = "type", default = "way_tag")]
    kind: String,
    ids: Vec<i64>,
}

fn node_tag() -> String {
    "node".to_owned()
}

fn way_tag() -> String {
    "way".to_owned()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Overpass(OverpassResponse),
    Prepared(Prepared),
}

impl From<OverpassResponse> for MapData {
    fn from(resp: OverpassResponse) -> Self {
        let mut data = MapData::default();
        for el in resp.elements {
            match el {
                Element::Node { id, lat, lon } => data.nodes.push(NodeRecord { id, lat, lon }),
                Element::Way { nodes } => data.ways.push(WayRecord { ids: nodes }),
                Element::Other => {}
            }
        }
        data
    }
}

impl From<Prepared> for MapData {
    fn from(doc: Prepared) -> Self {
        MapData {
            nodes: doc
                .nodes
                .into_iter()
                .map(|n| NodeRecord {
                    id: n.id,
                    lat: n.lat,
                    lon: n.lon,
                })
                .collect(),
            ways: doc
                .ways
                .into_iter()
                .map(|w| WayRecord { ids: w.ids })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Decode a raw Overpass response. Elements other than nodes and ways are
/// ignored.
pub fn parse_overpass(json: &str) -> Result<MapData, LoadError> {
    let resp: OverpassResponse = serde_json::from_str(json)?;
    Ok(resp.into())
}

/// Decode the pre-split `{"nodes": [...], "ways": [...]}` document.
pub fn parse_prepared(json: &str) -> Result<MapData, LoadError> {
    let doc: Prepared = serde_json::from_str(json)?;
    Ok(doc.into())
}

/// Decode either document shape, detected from its top-level keys.
pub fn parse_map(json: &str) -> Result<MapData, LoadError> {
    let doc: Document = serde_json::from_str(json)?;
    Ok(match doc {
        Document::Overpass(resp) => resp.into(),
        Document::Prepared(doc) => doc.into(),
    })
}

impl MapData {
    /// Read and decode a document of either shape.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, LoadError> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        parse_map(&buf)
    }

    /// Read and decode the document at `path`.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path)?;
        parse_map(&json)
    }

    /// Encode as the pre-split document.
    pub fn to_prepared_json(&self) -> Result<String, LoadError> {
        let doc = Prepared {
            nodes: self
                .nodes
                .iter()
                .map(|n| PreparedNode {
                    kind: node_tag(),
                    id: n.id,
                    lat: n.lat,
                    lon: n.lon,
                })
                .collect(),
            ways: self
                .ways
                .iter()
                .map(|w| PreparedWay {
                    kind: way_tag(),
                    ids: w.ids.clone(),
                })
                .collect(),
        };
        Ok(serde_json::to_string(&doc)?)
    }
}
