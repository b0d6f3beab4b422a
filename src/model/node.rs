//! Node in the analyzed network.

use serde::{Deserialize, Serialize};

use super::AttrMap;

/// Opaque node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        NodeId(raw)
    }
}

/// A node with its display name and numeric attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Display string; the alphabetical ordering sorts on this.
    pub name: String,
    /// Flat numeric attribute map. A missing key means the node has no such
    /// attribute.
    #[serde(default)]
    pub attributes: AttrMap,
    /// Optional classification tag. Unrelated to the ordering core; see
    /// [`GraphModel::derive_layers`](super::GraphModel::derive_layers).
    #[serde(default)]
    pub layer: Option<String>,
    /// Precomputed external scalar rank, consumed by the external-rank
    /// ordering. Rank computation happens outside this crate.
    #[serde(default)]
    pub rank: Option<f64>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes: AttrMap::new(),
            layer: None,
            rank: None,
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: f64) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    pub fn with_rank(mut self, rank: f64) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).copied()
    }
}
