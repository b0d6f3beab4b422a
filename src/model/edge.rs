//! Edge in the analyzed network.

use serde::{Deserialize, Serialize};

use super::{AttrMap, NodeId};

/// An edge between two nodes.
///
/// Every engine algorithm treats the endpoint pair as unordered.
/// [`GraphModel`](super::GraphModel) canonicalizes endpoints on construction
/// so that `source <= target` by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    /// Flat numeric attribute map, same shape as node attributes.
    #[serde(default)]
    pub attributes: AttrMap,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attributes: AttrMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: f64) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).copied()
    }

    /// True if the edge is incident to the given node.
    pub fn touches(&self, id: NodeId) -> bool {
        self.source == id || self.target == id
    }

    /// The "other" end of the edge from the given node.
    pub fn other_endpoint(&self, from: NodeId) -> Option<NodeId> {
        if from == self.source {
            Some(self.target)
        } else if from == self.target {
            Some(self.source)
        } else {
            None
        }
    }

    /// Endpoints reordered so `source <= target` by id.
    pub fn canonical(mut self) -> Self {
        if self.source > self.target {
            std::mem::swap(&mut self.source, &mut self.target);
        }
        self
    }
}
