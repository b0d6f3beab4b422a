//! # Ordering Engine
//!
//! Total orders over nodes and edges. Every strategy is a pure function:
//! the graph stays untouched and a freshly ordered vector comes back.
//! Callers that want to replace their arrays do so with an explicit
//! assignment.
//!
//! Strategy selection is a closed enum carrying exactly the parameters each
//! strategy needs (pivot node, attribute keys, shuffle seed), so dispatch is
//! exhaustive at compile time.
//!
//! Every sort in this module is stable. Downstream algorithms (the RCM
//! tie-break, the motif scans) rely on equal keys preserving input order.

pub mod rcm;
pub mod stats;

use std::cmp::Reverse;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::model::{Edge, GraphModel, Node, NodeId, attribute_mean};
use crate::{Error, Result};

// ============================================================================
// PositionIndex
// ============================================================================

/// Bijection node id → integer rank, built from an ordered node sequence.
///
/// Total over exactly the node set it was built from; ties cannot occur
/// because ranks are array positions.
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    ranks: HashMap<NodeId, usize>,
}

impl PositionIndex {
    pub fn from_nodes(nodes: &[Node]) -> Self {
        Self::from_ids(nodes.iter().map(|n| n.id))
    }

    pub fn from_ids(ids: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            ranks: ids.into_iter().enumerate().map(|(i, id)| (id, i)).collect(),
        }
    }

    pub fn rank(&self, id: NodeId) -> Option<usize> {
        self.ranks.get(&id).copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.ranks.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Rank as a signed integer, for offset arithmetic.
    ///
    /// Edge endpoints outside the index violate the loader invariant that
    /// every edge references known nodes.
    pub(crate) fn rank_i64(&self, id: NodeId) -> i64 {
        self.rank(id)
            .expect("edge endpoint missing from the position index") as i64
    }
}

// ============================================================================
// Strategies
// ============================================================================

/// Node ordering strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeOrdering {
    /// Ascending by display name.
    Alphabetical,
    /// Descending by the mean of all present attribute values; nodes without
    /// attributes sort last.
    Mean,
    /// Descending by incident-edge count.
    Degree,
    /// Descending by one attribute; absent sorts last.
    Attribute(String),
    /// Descending by the first attribute, second as tie-break.
    TwoAttributes(String, String),
    /// Nodes adjacent to the pivot first, the pivot itself at position 0,
    /// relative order otherwise preserved.
    Neighborhood(NodeId),
    /// Ascending by the precomputed external rank; unranked nodes sort last.
    ExternalRank,
    /// Reverse Cuthill–McKee bandwidth reduction.
    ReverseCuthillMcKee,
    /// Seeded Fisher–Yates shuffle.
    Random(u64),
}

/// Edge ordering strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EdgeOrdering {
    /// Ascending by `(min, max)` of the endpoint ranks under the current
    /// node order.
    NodeOrder,
    /// Same span key, but under a degree-descending node ranking.
    Degree,
    /// Descending by the mean of the edge attributes.
    Mean,
    /// Descending by one edge attribute, node-order span as the pre-pass so
    /// ties stay deterministic.
    Attribute(String),
    /// Staircase-oriented: ascending by the degree rank of the
    /// higher-degree endpoint, then by signed endpoint distance under the
    /// current node order.
    Staircase,
    /// Group edges by source node, order groups by the source's rank, sort
    /// inside each group with the inner strategy.
    GroupedBySource(Box<EdgeOrdering>),
    /// Seeded Fisher–Yates shuffle.
    Random(u64),
}

// ============================================================================
// Node ordering
// ============================================================================

/// Produce a total order over the graph's nodes.
pub fn order_nodes(graph: &GraphModel, ordering: &NodeOrdering) -> Result<Vec<Node>> {
    let mut nodes = graph.nodes().to_vec();
    match ordering {
        NodeOrdering::Alphabetical => {
            nodes.sort_by(|a, b| a.name.cmp(&b.name));
        }
        NodeOrdering::Mean => {
            nodes = sort_desc_by(nodes, |n| {
                attribute_mean(&n.attributes).unwrap_or(f64::NEG_INFINITY)
            });
        }
        NodeOrdering::Degree => {
            let degrees = graph.degree_table();
            nodes.sort_by_key(|n| Reverse(degrees.degree(n.id)));
        }
        NodeOrdering::Attribute(key) => {
            nodes = sort_desc_by(nodes, |n| attribute_or_floor(n, key));
        }
        NodeOrdering::TwoAttributes(first, second) => {
            let mut keyed: Vec<((f64, f64), Node)> = nodes
                .into_iter()
                .map(|n| {
                    let key = (attribute_or_floor(&n, first), attribute_or_floor(&n, second));
                    (key, n)
                })
                .collect();
            keyed.sort_by(|a, b| {
                b.0.0.total_cmp(&a.0.0).then_with(|| b.0.1.total_cmp(&a.0.1))
            });
            nodes = keyed.into_iter().map(|(_, n)| n).collect();
        }
        NodeOrdering::Neighborhood(pivot) => {
            if graph.node(*pivot).is_none() {
                return Err(Error::UnknownNode(*pivot));
            }
            let adjacent: HashSet<NodeId> = graph.neighbors(*pivot).into_iter().collect();
            let (mut front, back): (Vec<Node>, Vec<Node>) =
                nodes.into_iter().partition(|n| adjacent.contains(&n.id));
            front.extend(back);
            if let Some(pos) = front.iter().position(|n| n.id == *pivot) {
                let selected = front.remove(pos);
                front.insert(0, selected);
            }
            nodes = front;
        }
        NodeOrdering::ExternalRank => {
            let mut keyed: Vec<(f64, Node)> = nodes
                .into_iter()
                .map(|n| (n.rank.unwrap_or(f64::INFINITY), n))
                .collect();
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
            nodes = keyed.into_iter().map(|(_, n)| n).collect();
        }
        NodeOrdering::ReverseCuthillMcKee => {
            nodes = rcm::reverse_cuthill_mckee(graph);
        }
        NodeOrdering::Random(seed) => {
            fastrand::Rng::with_seed(*seed).shuffle(&mut nodes);
        }
    }
    Ok(nodes)
}

// ============================================================================
// Edge ordering
// ============================================================================

/// Produce a total order over the graph's edges, given the current node
/// order.
pub fn order_edges(graph: &GraphModel, node_order: &[Node], ordering: &EdgeOrdering) -> Vec<Edge> {
    sort_edges(graph, node_order, ordering, graph.edges().to_vec())
}

fn sort_edges(
    graph: &GraphModel,
    node_order: &[Node],
    ordering: &EdgeOrdering,
    mut edges: Vec<Edge>,
) -> Vec<Edge> {
    match ordering {
        EdgeOrdering::NodeOrder => {
            let index = PositionIndex::from_nodes(node_order);
            edges.sort_by_key(|e| endpoint_span(e, &index));
        }
        EdgeOrdering::Degree => {
            let ranking = degree_ranking(graph);
            edges.sort_by_key(|e| endpoint_span(e, &ranking));
        }
        EdgeOrdering::Mean => {
            edges = sort_desc_by(edges, |e| {
                attribute_mean(&e.attributes).unwrap_or(f64::NEG_INFINITY)
            });
        }
        EdgeOrdering::Attribute(key) => {
            let index = PositionIndex::from_nodes(node_order);
            edges.sort_by_key(|e| endpoint_span(e, &index));
            edges = sort_desc_by(edges, |e| {
                e.attribute(key).unwrap_or(f64::NEG_INFINITY)
            });
        }
        EdgeOrdering::Staircase => {
            let ranking = degree_ranking(graph);
            let index = PositionIndex::from_nodes(node_order);
            edges.sort_by_key(|e| {
                let ds = ranking.rank_i64(e.source);
                let dt = ranking.rank_i64(e.target);
                // The endpoint ranked higher by degree leads the key.
                let (lead, other, lead_rank) = if ds < dt {
                    (e.source, e.target, ds)
                } else {
                    (e.target, e.source, dt)
                };
                (lead_rank, index.rank_i64(other) - index.rank_i64(lead))
            });
        }
        EdgeOrdering::GroupedBySource(inner) => {
            let index = PositionIndex::from_nodes(node_order);
            let mut groups: Vec<(NodeId, Vec<Edge>)> = Vec::new();
            for edge in edges {
                match groups.iter_mut().find(|(source, _)| *source == edge.source) {
                    Some((_, group)) => group.push(edge),
                    None => groups.push((edge.source, vec![edge])),
                }
            }
            groups.sort_by_key(|(source, _)| index.rank_i64(*source));
            return groups
                .into_iter()
                .flat_map(|(_, group)| sort_edges(graph, node_order, inner, group))
                .collect();
        }
        EdgeOrdering::Random(seed) => {
            fastrand::Rng::with_seed(*seed).shuffle(&mut edges);
        }
    }
    edges
}

// ============================================================================
// Helpers
// ============================================================================

/// Stable descending sort by a float key, computed once per item.
/// `total_cmp` keeps −∞ (absent attributes) well ordered.
fn sort_desc_by<T>(items: Vec<T>, key: impl Fn(&T) -> f64) -> Vec<T> {
    let mut keyed: Vec<(f64, T)> = items.into_iter().map(|t| (key(&t), t)).collect();
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, t)| t).collect()
}

fn attribute_or_floor(node: &Node, key: &str) -> f64 {
    node.attribute(key).unwrap_or(f64::NEG_INFINITY)
}

/// `(min, max)` of the endpoint ranks under the given index.
fn endpoint_span(edge: &Edge, index: &PositionIndex) -> (i64, i64) {
    let s = index.rank_i64(edge.source);
    let t = index.rank_i64(edge.target);
    (s.min(t), s.max(t))
}

/// Node ranking by descending degree, ties by input position.
fn degree_ranking(graph: &GraphModel) -> PositionIndex {
    let degrees = graph.degree_table();
    let mut ids: Vec<NodeId> = graph.nodes().iter().map(|n| n.id).collect();
    ids.sort_by_key(|id| Reverse(degrees.degree(*id)));
    PositionIndex::from_ids(ids)
}

// ============================================================================
// Tests
// ============================================================================
