//! GraphModel — immutable view of a loaded network.
//!
//! Constructed once per analysis from the loader's output. Construction takes
//! ownership (the deep copy happens at the call site via `to_vec`/`clone` if
//! the caller wants to keep its own arrays) and canonicalizes edge endpoints
//! so `source <= target` by id. After that the model is never mutated; every
//! ordering call returns a new vector.
//!
//! The adjacency table maps each node to the indices of its incident edges,
//! in edge-array order. That order is load order, which keeps every
//! traversal over neighbors deterministic.

use hashbrown::HashMap;
use smallvec::SmallVec;

use super::{Edge, Node, NodeId, attribute_labels};

// ============================================================================
// GraphModel
// ============================================================================

/// Immutable node/edge view with adjacency queries.
#[derive(Debug, Clone)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// node id → indices into `edges`, in edge-array order.
    adjacency: HashMap<NodeId, SmallVec<[usize; 4]>>,
}

impl GraphModel {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let edges: Vec<Edge> = edges.into_iter().map(Edge::canonical).collect();

        let mut adjacency: HashMap<NodeId, SmallVec<[usize; 4]>> =
            nodes.iter().map(|n| (n.id, SmallVec::new())).collect();
        for (i, edge) in edges.iter().enumerate() {
            if let Some(list) = adjacency.get_mut(&edge.source) {
                list.push(i);
            }
            // A self-loop is one incident edge, not two.
            if edge.source != edge.target {
                if let Some(list) = adjacency.get_mut(&edge.target) {
                    list.push(i);
                }
            }
        }

        Self { nodes, edges, adjacency }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Incident edges of a node, in edge-array order.
    pub fn incident_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|list| list.iter().map(|&i| &self.edges[i]))
    }

    /// Adjacent node ids, in edge-array order. Parallel edges contribute one
    /// entry each.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.incident_edges(id)
            .filter_map(|e| e.other_endpoint(id))
            .collect()
    }

    /// Number of incident edges (self-loops count once).
    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.get(&id).map_or(0, |list| list.len())
    }

    /// Degree table over the full edge set.
    pub fn degree_table(&self) -> DegreeTable {
        DegreeTable::from_graph(self)
    }

    /// Attribute labels occurring on nodes, sorted.
    pub fn attribute_labels(&self) -> Vec<String> {
        attribute_labels(&self.nodes)
    }

    /// Attribute labels occurring on edges, sorted.
    pub fn edge_attribute_labels(&self) -> Vec<String> {
        attribute_labels(&self.edges)
    }

    /// Distinct layer tags present on nodes, sorted. Untagged nodes are not
    /// represented.
    pub fn layers(&self) -> Vec<String> {
        let mut layers: Vec<String> = Vec::new();
        for node in &self.nodes {
            if let Some(layer) = &node.layer {
                if !layers.iter().any(|l| l == layer) {
                    layers.push(layer.clone());
                }
            }
        }
        layers.sort();
        layers
    }

    /// Copy of the node array with each node assigned to a layer: the label
    /// of its attribute with the highest range-normalized value. Nodes with
    /// no attributes stay unclassified. A zero-range attribute normalizes to
    /// 0.0; ties resolve to the lexicographically first label.
    pub fn derive_layers(&self) -> Vec<Node> {
        let mut extents: HashMap<&str, (f64, f64)> = HashMap::new();
        for node in &self.nodes {
            for (label, &value) in &node.attributes {
                let entry = extents.entry(label.as_str()).or_insert((value, value));
                entry.0 = entry.0.min(value);
                entry.1 = entry.1.max(value);
            }
        }

        self.nodes
            .iter()
            .cloned()
            .map(|mut node| {
                let mut labels: Vec<&String> = node.attributes.keys().collect();
                labels.sort();

                let mut best: Option<(f64, &String)> = None;
                for label in labels {
                    let value = node.attributes[label];
                    let (min, max) = extents[label.as_str()];
                    let normalized = if max > min { (value - min) / (max - min) } else { 0.0 };
                    if best.is_none_or(|(top, _)| normalized > top) {
                        best = Some((normalized, label));
                    }
                }
                node.layer = best.map(|(_, label)| label.clone());
                node
            })
            .collect()
    }
}

// ============================================================================
// DegreeTable
// ============================================================================

/// node id → count of incident edges, computed once from the full edge set.
///
/// This is a value, not a cache: compute it from the graph and pass it to
/// whoever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DegreeTable {
    counts: HashMap<NodeId, usize>,
}

impl DegreeTable {
    /// Count incident edges for every listed node. Self-loops count once.
    pub fn new(nodes: &[Node], edges: &[Edge]) -> Self {
        let mut counts: HashMap<NodeId, usize> =
            nodes.iter().map(|n| (n.id, 0)).collect();
        for edge in edges {
            if let Some(c) = counts.get_mut(&edge.source) {
                *c += 1;
            }
            if edge.source != edge.target {
                if let Some(c) = counts.get_mut(&edge.target) {
                    *c += 1;
                }
            }
        }
        Self { counts }
    }

    pub fn from_graph(graph: &GraphModel) -> Self {
        Self::new(graph.nodes(), graph.edges())
    }

    /// Degree of a node; 0 for ids outside the table.
    pub fn degree(&self, id: NodeId) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
