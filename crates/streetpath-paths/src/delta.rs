//! Per-step output consumed by a renderer.

use crate::graph::NodeId;

/// A traversed edge to highlight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Edge {
    pub from_id: NodeId,
    pub to_id: NodeId,
}

impl Edge {
    #[inline]
    pub const fn new(from_id: NodeId, to_id: NodeId) -> Self {
        Self { from_id, to_id }
    }
}

/// What one search step changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Delta {
    /// The origin was expanded (only ever the first step of a run).
    Origin { id: NodeId },
    /// Edges traversed by this step. Empty for terminal and no-op steps.
    Edges { edges: Vec<Edge> },
}

impl Default for Delta {
    fn default() -> Self {
        Self::empty()
    }
}

impl Delta {
    /// A delta that marks nothing.
    #[inline]
    pub const fn empty() -> Self {
        Delta::Edges { edges: Vec::new() }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Delta::Edges { edges } if edges.is_empty())
    }

    /// Edges carried by this delta (none for [`Delta::Origin`]).
    pub fn edges(&self) -> &[Edge] {
        match self {
            Delta::Origin { .. } => &[],
            Delta::Edges { edges } => edges,
        }
    }
}
