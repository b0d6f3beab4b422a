//! Analysis pipeline.
//!
//! One call runs the whole engine for a chosen strategy pair:
//! order nodes → order edges → detect motifs → score stairs.
//!
//! Strategy and pivot selection live in [`AnalysisContext`], an immutable
//! value owned by the caller and passed in explicitly. Nothing here caches
//! anything across calls; re-analyzing after a strategy change is just
//! another `analyze` call.

use serde::Serialize;
use tracing::debug;

use crate::model::{DegreeTable, Edge, GraphModel, Node};
use crate::motif::{self, Motif, StairQuality};
use crate::ordering::{self, EdgeOrdering, NodeOrdering, PositionIndex};
use crate::ordering::stats::{SpanStats, span_stats};
use crate::Result;

/// The caller's selections for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisContext {
    pub node_ordering: NodeOrdering,
    pub edge_ordering: EdgeOrdering,
}

impl AnalysisContext {
    pub fn new(node_ordering: NodeOrdering, edge_ordering: EdgeOrdering) -> Self {
        Self { node_ordering, edge_ordering }
    }
}

/// Everything one analysis run produces.
///
/// The position index and degree table are carried for downstream callers
/// but skipped on serialization: the node order already encodes the ranks,
/// and degrees are derivable from the graph.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub node_order: Vec<Node>,
    pub edge_order: Vec<Edge>,
    #[serde(skip)]
    pub positions: PositionIndex,
    #[serde(skip)]
    pub degrees: DegreeTable,
    pub stairs: Vec<Motif>,
    pub stair_qualities: Vec<StairQuality>,
    pub escalators: Vec<Motif>,
    pub runways: Vec<Motif>,
    pub span_stats: Option<SpanStats>,
}

/// Run the full pipeline over a graph with the given context.
pub fn analyze(graph: &GraphModel, ctx: &AnalysisContext) -> Result<Analysis> {
    let node_order = ordering::order_nodes(graph, &ctx.node_ordering)?;
    let edge_order = ordering::order_edges(graph, &node_order, &ctx.edge_ordering);
    debug!(
        nodes = node_order.len(),
        edges = edge_order.len(),
        "ordering complete"
    );

    let positions = PositionIndex::from_nodes(&node_order);
    let degrees = graph.degree_table();

    let stairs = motif::detect_stairs(&positions, &edge_order);
    let stair_qualities = motif::score_stairs(&stairs, &degrees);
    let escalators = motif::detect_escalators(&positions, &edge_order);
    let runways = motif::detect_runways(&edge_order);
    debug!(
        stairs = stairs.len(),
        escalators = escalators.len(),
        runways = runways.len(),
        "motif scan complete"
    );

    let span_stats = span_stats(&node_order, &edge_order);

    Ok(Analysis {
        node_order,
        edge_order,
        positions,
        degrees,
        stairs,
        stair_qualities,
        escalators,
        runways,
        span_stats,
    })
}
