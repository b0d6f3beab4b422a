//! Stair detection.
//!
//! A stair is a run of edges sharing one fixed endpoint (the pivot) while the
//! other endpoint's rank moves by a small consistent signed step in one
//! direction. A run may perform at most one direction switch through the
//! "cross" test; a switch, like any step larger than one rank, downgrades the
//! whole run to [`StairGrade::SemiOptimal`].

use crate::model::{Edge, NodeId};
use crate::ordering::PositionIndex;

use super::{
    MIN_STAIR_LEN, Motif, MotifKind, STAIR_STEP_LIMIT, ScanDirection, StairGrade,
};

// ============================================================================
// State machine
// ============================================================================

/// A stair candidate under construction. Holds at least two edges.
#[derive(Debug, Clone)]
struct StairRun {
    pivot: NodeId,
    direction: ScanDirection,
    grade: StairGrade,
    edges: Vec<Edge>,
}

enum ScanState {
    /// Between candidates; remembers the last edge seen so the next edge can
    /// open a fresh run with it.
    Idle { previous: Option<Edge> },
    Building(StairRun),
}

impl StairRun {
    /// Try to open a run from two consecutive edges. Branch precedence:
    /// shared source, shared target, then the two crossed pairings (which
    /// start semi-optimal by construction).
    fn open(prev: &Edge, next: &Edge, order: &PositionIndex) -> Option<StairRun> {
        if prev.source == next.source {
            let diff = order.rank_i64(next.target) - order.rank_i64(prev.target);
            let direction = if diff > 0 && diff <= STAIR_STEP_LIMIT {
                ScanDirection::Increasing
            } else if diff < 0 && diff.abs() <= STAIR_STEP_LIMIT {
                ScanDirection::Decreasing
            } else {
                return None;
            };
            Some(StairRun::started(prev.source, direction, step_grade(diff), prev, next))
        } else if prev.target == next.target {
            let diff = order.rank_i64(next.source) - order.rank_i64(prev.source);
            let direction = if diff < 0 && diff.abs() <= STAIR_STEP_LIMIT {
                ScanDirection::Increasing
            } else if diff > 0 && diff <= STAIR_STEP_LIMIT {
                ScanDirection::Decreasing
            } else {
                return None;
            };
            Some(StairRun::started(prev.target, direction, step_grade(diff), prev, next))
        } else if prev.source == next.target {
            let cross = order.rank_i64(next.source) - order.rank_i64(prev.target);
            (cross < 0 && cross.abs() <= STAIR_STEP_LIMIT).then(|| {
                StairRun::started(
                    prev.source,
                    ScanDirection::Increasing,
                    StairGrade::SemiOptimal,
                    prev,
                    next,
                )
            })
        } else if prev.target == next.source {
            let cross = order.rank_i64(next.target) - order.rank_i64(prev.source);
            (cross > 0 && cross <= STAIR_STEP_LIMIT).then(|| {
                StairRun::started(
                    prev.target,
                    ScanDirection::Increasing,
                    StairGrade::SemiOptimal,
                    prev,
                    next,
                )
            })
        } else {
            None
        }
    }

    fn started(
        pivot: NodeId,
        direction: ScanDirection,
        grade: StairGrade,
        prev: &Edge,
        next: &Edge,
    ) -> StairRun {
        StairRun {
            pivot,
            direction,
            grade,
            edges: vec![prev.clone(), next.clone()],
        }
    }

    /// Try to take `next` into the run. Returns false (and leaves the run
    /// untouched) when the predicate fails.
    fn extend(&mut self, next: &Edge, order: &PositionIndex) -> bool {
        let prev = self.last().clone();
        if next.source == self.pivot {
            let diff = order.rank_i64(next.target) - order.rank_i64(prev.target);
            let cross = order.rank_i64(next.target) - order.rank_i64(prev.source);
            match self.direction {
                ScanDirection::Increasing if diff > 0 && diff <= STAIR_STEP_LIMIT => {
                    self.step(next, diff);
                    true
                }
                ScanDirection::Decreasing if diff < 0 && diff.abs() <= STAIR_STEP_LIMIT => {
                    self.step(next, diff);
                    true
                }
                ScanDirection::Decreasing
                    if self.pivot == prev.target && cross > 0 && cross <= STAIR_STEP_LIMIT =>
                {
                    self.switch(next);
                    true
                }
                _ => false,
            }
        } else if next.target == self.pivot {
            let diff = order.rank_i64(next.source) - order.rank_i64(prev.source);
            let cross = order.rank_i64(next.source) - order.rank_i64(prev.target);
            match self.direction {
                ScanDirection::Increasing if diff < 0 && diff.abs() <= STAIR_STEP_LIMIT => {
                    self.step(next, diff);
                    true
                }
                ScanDirection::Decreasing if diff > 0 && diff <= STAIR_STEP_LIMIT => {
                    self.step(next, diff);
                    true
                }
                ScanDirection::Decreasing
                    if self.pivot == prev.source && cross < 0 && cross.abs() <= STAIR_STEP_LIMIT =>
                {
                    self.switch(next);
                    true
                }
                _ => false,
            }
        } else {
            false
        }
    }

    fn step(&mut self, next: &Edge, offset: i64) {
        if offset.abs() != 1 {
            self.grade = StairGrade::SemiOptimal;
        }
        self.edges.push(next.clone());
    }

    /// The one allowed direction switch. Only reachable from `Decreasing`,
    /// so a second switch cannot occur. Always downgrades: a switched run is
    /// no longer a single-direction staircase.
    fn switch(&mut self, next: &Edge) {
        self.direction = ScanDirection::Increasing;
        self.grade = StairGrade::SemiOptimal;
        self.edges.push(next.clone());
    }

    fn last(&self) -> &Edge {
        self.edges.last().expect("a stair run always holds at least two edges")
    }

    fn into_motif(self) -> Motif {
        Motif {
            kind: MotifKind::Stair { pivot: self.pivot, grade: self.grade },
            edges: self.edges,
        }
    }
}

fn step_grade(offset: i64) -> StairGrade {
    if offset.abs() == 1 { StairGrade::Optimal } else { StairGrade::SemiOptimal }
}

// ============================================================================
// Detection
// ============================================================================

/// Scan an ordered edge sequence for stair motifs.
///
/// One forward pass. When a long-enough run ends it is emitted and the scan
/// restarts at the current edge; a too-short candidate is discarded and its
/// last edge may seed the next candidate immediately.
pub fn detect_stairs(order: &PositionIndex, edges: &[Edge]) -> Vec<Motif> {
    let mut motifs = Vec::new();
    let mut state = ScanState::Idle { previous: None };

    for edge in edges {
        state = match state {
            ScanState::Building(mut run) => {
                if run.extend(edge, order) {
                    ScanState::Building(run)
                } else if run.edges.len() >= MIN_STAIR_LEN {
                    motifs.push(run.into_motif());
                    ScanState::Idle { previous: Some(edge.clone()) }
                } else {
                    reopen(run.last(), edge, order)
                }
            }
            ScanState::Idle { previous: Some(prev) } => reopen(&prev, edge, order),
            ScanState::Idle { previous: None } => {
                ScanState::Idle { previous: Some(edge.clone()) }
            }
        };
    }

    if let ScanState::Building(run) = state {
        if run.edges.len() >= MIN_STAIR_LEN {
            motifs.push(run.into_motif());
        }
    }
    motifs
}

fn reopen(prev: &Edge, edge: &Edge, order: &PositionIndex) -> ScanState {
    match StairRun::open(prev, edge, order) {
        Some(run) => ScanState::Building(run),
        None => ScanState::Idle { previous: Some(edge.clone()) },
    }
}

// ============================================================================
// Tests
// ============================================================================
