//! Edge-span statistics over a node order.
//!
//! The span of an edge is the absolute rank distance between its endpoints.
//! The maximum span is the bandwidth of the ordering.

use serde::{Deserialize, Serialize};

use super::PositionIndex;
use crate::model::{Edge, Node};

/// Min/max/mean edge span under one node order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanStats {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
}

/// Span statistics, `None` when there are no edges.
pub fn span_stats(node_order: &[Node], edges: &[Edge]) -> Option<SpanStats> {
    if edges.is_empty() {
        return None;
    }
    let index = PositionIndex::from_nodes(node_order);
    let spans: Vec<usize> = edges
        .iter()
        .map(|e| index.rank_i64(e.source).abs_diff(index.rank_i64(e.target)) as usize)
        .collect();

    let sum: usize = spans.iter().sum();
    Some(SpanStats {
        min: *spans.iter().min().expect("edge list checked non-empty"),
        max: *spans.iter().max().expect("edge list checked non-empty"),
        mean: sum as f64 / spans.len() as f64,
    })
}

/// Bandwidth of the ordering: the maximum edge span, 0 without edges.
pub fn bandwidth(node_order: &[Node], edges: &[Edge]) -> usize {
    span_stats(node_order, edges).map_or(0, |s| s.max)
}
