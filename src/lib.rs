//! # biofabric-rs — Graph Ordering & Motif Detection Engine
//!
//! The analytical core behind matrix- and line-based network encodings
//! (adjacency matrix, BioFabric, quilt): total-order algorithms over nodes
//! and edges, Reverse Cuthill–McKee bandwidth reduction, and three
//! single-pass detectors for recurring adjacency shapes (stairs, escalators,
//! runways) with quality scoring.
//!
//! ## Design Principles
//!
//! 1. **Pure batch computation**: every operation is a synchronous function
//!    over in-memory arrays; orderings return fresh vectors, the graph is
//!    never mutated
//! 2. **Clean DTOs**: `Node`, `Edge`, `Motif` cross all boundaries and carry
//!    the serde data contract for external loaders and renderers
//! 3. **Closed strategy enums**: ordering selection is exhaustive at compile
//!    time, each variant carrying exactly the parameters it needs
//! 4. **Explicit state machines**: each motif detector is an `Idle`/`Building`
//!    machine with pure transitions, not a tangle of inline branches
//!
//! ## Quick Start
//!
//! ```rust
//! use biofabric_rs::{
//!     AnalysisContext, Edge, EdgeOrdering, GraphModel, Node, NodeOrdering, analyze,
//! };
//!
//! # fn main() -> biofabric_rs::Result<()> {
//! let graph = GraphModel::new(
//!     vec![
//!         Node::new(1, "alpha").with_attribute("weight", 0.4),
//!         Node::new(2, "beta"),
//!         Node::new(3, "gamma"),
//!         Node::new(4, "delta"),
//!     ],
//!     vec![Edge::new(1, 2), Edge::new(1, 3), Edge::new(1, 4)],
//! );
//!
//! let ctx = AnalysisContext::new(NodeOrdering::Degree, EdgeOrdering::NodeOrder);
//! let report = analyze(&graph, &ctx)?;
//!
//! assert_eq!(report.stairs.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! GraphModel → order_nodes ─┬→ order_edges → detect_{stairs,escalators,runways}
//!                           └→ PositionIndex ──────────┘        │
//!              degree_table ────────────────────────→ score_stairs
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod ordering;
pub mod motif;
pub mod analysis;
pub mod export;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{AttrMap, DegreeTable, Edge, GraphModel, Node, NodeId};

// ============================================================================
// Re-exports: Ordering
// ============================================================================

pub use ordering::{
    EdgeOrdering, NodeOrdering, PositionIndex, order_edges, order_nodes,
};
pub use ordering::rcm::reverse_cuthill_mckee;
pub use ordering::stats::{SpanStats, bandwidth, span_stats};

// ============================================================================
// Re-exports: Motif detection
// ============================================================================

pub use motif::{
    Motif, MotifKind, StairGrade, StairQuality, detect_escalators, detect_runways,
    detect_stairs, score_stairs,
};

// ============================================================================
// Re-exports: Analysis & export
// ============================================================================

pub use analysis::{Analysis, AnalysisContext, analyze};
pub use export::{write_json_report, write_text_report};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pivot or other node parameter names an id outside the node set.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
