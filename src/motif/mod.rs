//! # Motif Detection
//!
//! Three single-pass scanners over an ordered edge sequence, classifying
//! recurring adjacency shapes the way they appear in a fabric-style layout:
//!
//! | Motif     | Shape                                                        |
//! |-----------|--------------------------------------------------------------|
//! | Stair     | one fixed endpoint, the other stepping in one direction      |
//! | Escalator | both endpoints shifting by ±1 between consecutive edges      |
//! | Runway    | consecutive edges chained by incidence, position ignored     |
//!
//! Each detector makes exactly one forward pass, keeps its candidate state in
//! an explicit machine (`Idle` / `Building`), discards runs shorter than the
//! minimum length, and never emits overlapping runs.

pub mod stairs;
pub mod escalator;
pub mod runway;
pub mod quality;

use serde::{Deserialize, Serialize};

use crate::model::{Edge, NodeId};

pub use escalator::detect_escalators;
pub use quality::{StairQuality, score_stairs};
pub use runway::detect_runways;
pub use stairs::detect_stairs;

// ============================================================================
// Scan configuration
// ============================================================================
//
// These constants are the tuning points of the detectors. The minimum run
// length is 3 for every motif kind.

/// Minimum number of edges in a stair run.
pub const MIN_STAIR_LEN: usize = 3;
/// Minimum number of edges in an escalator run.
pub const MIN_ESCALATOR_LEN: usize = 3;
/// Minimum number of edges in a runway streak.
pub const MIN_RUNWAY_LEN: usize = 3;

/// Largest allowed rank step of a stair's moving endpoint.
pub const STAIR_STEP_LIMIT: i64 = 2;
/// Source-side tolerance for an escalator's relaxed entry step.
pub const ESCALATOR_ENTRY_TOLERANCE: i64 = 1;
/// Target-side tolerance for an escalator's relaxed exit step.
pub const ESCALATOR_EXIT_TOLERANCE: i64 = 1;

// ============================================================================
// Motif DTOs
// ============================================================================

/// Direction a positional scan is locked into. Ranks count from the top of
/// the fabric, so `Decreasing` means successive edges step to higher ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanDirection {
    Increasing,
    Decreasing,
}

/// Quality tag of a stair run. `Optimal` requires every step to be a unit
/// step and no pivot switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StairGrade {
    Optimal,
    SemiOptimal,
}

/// What kind of run a motif is, with the stair-specific payload inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MotifKind {
    Stair { pivot: NodeId, grade: StairGrade },
    Escalator,
    Runway,
}

/// A maximal contiguous run of edges satisfying one detector's predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motif {
    pub kind: MotifKind,
    pub edges: Vec<Edge>,
}

impl Motif {
    /// Run length in edges. Always ≥ 3 for emitted motifs.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
