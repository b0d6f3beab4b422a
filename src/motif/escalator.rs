//! Escalator detection.
//!
//! An escalator is a run of edges drawing a diagonal: between consecutive
//! edges both endpoints shift by exactly one rank in the same direction.
//! Entry and exit steps get one relaxed check each, governed by the
//! source-side and target-side tolerances.

use crate::model::Edge;
use crate::ordering::PositionIndex;

use super::{
    ESCALATOR_ENTRY_TOLERANCE, ESCALATOR_EXIT_TOLERANCE, MIN_ESCALATOR_LEN, Motif, MotifKind,
    ScanDirection,
};

// ============================================================================
// State machine
// ============================================================================

#[derive(Debug, Clone)]
struct EscalatorRun {
    direction: ScanDirection,
    edges: Vec<Edge>,
}

enum ScanState {
    Idle { previous: Option<Edge> },
    Building(EscalatorRun),
}

enum Step {
    /// Strict diagonal step taken, run stays open.
    Continued,
    /// Relaxed exit step taken, run is complete including this edge.
    Finished,
    /// Predicate failed, edge not taken.
    Rejected,
}

impl EscalatorRun {
    /// Try to open a run from two consecutive edges. The source-side offset
    /// gets the relaxed entry tolerance; the target side must be a strict
    /// unit step.
    fn open(prev: &Edge, next: &Edge, order: &PositionIndex) -> Option<EscalatorRun> {
        let ds = order.rank_i64(next.source) - order.rank_i64(prev.source);
        let dt = order.rank_i64(next.target) - order.rank_i64(prev.target);
        let direction = if ds > 0 && ds <= ESCALATOR_ENTRY_TOLERANCE && dt == 1 {
            ScanDirection::Decreasing
        } else if ds < 0 && ds.abs() <= ESCALATOR_ENTRY_TOLERANCE && dt == -1 {
            ScanDirection::Increasing
        } else {
            return None;
        };
        Some(EscalatorRun {
            direction,
            edges: vec![prev.clone(), next.clone()],
        })
    }

    fn extend(&mut self, next: &Edge, order: &PositionIndex) -> Step {
        let prev = self.last().clone();
        let ds = order.rank_i64(next.source) - order.rank_i64(prev.source);
        let dt = order.rank_i64(next.target) - order.rank_i64(prev.target);
        match self.direction {
            ScanDirection::Decreasing => {
                if ds == 1 && dt == 1 {
                    self.edges.push(next.clone());
                    Step::Continued
                } else if ds == 1 && dt > 0 && dt <= ESCALATOR_EXIT_TOLERANCE {
                    self.edges.push(next.clone());
                    Step::Finished
                } else {
                    Step::Rejected
                }
            }
            ScanDirection::Increasing => {
                if ds == -1 && dt == -1 {
                    self.edges.push(next.clone());
                    Step::Continued
                } else if ds == -1 && dt < 0 && dt.abs() <= ESCALATOR_EXIT_TOLERANCE {
                    self.edges.push(next.clone());
                    Step::Finished
                } else {
                    Step::Rejected
                }
            }
        }
    }

    fn last(&self) -> &Edge {
        self.edges.last().expect("an escalator run always holds at least two edges")
    }

    fn into_motif(self) -> Motif {
        Motif { kind: MotifKind::Escalator, edges: self.edges }
    }
}

// ============================================================================
// Detection
// ============================================================================

/// Scan an ordered edge sequence for escalator motifs.
///
/// One forward pass; emitted runs never overlap, and a discarded short
/// candidate may seed the next one with its last edge.
pub fn detect_escalators(order: &PositionIndex, edges: &[Edge]) -> Vec<Motif> {
    let mut motifs = Vec::new();
    let mut state = ScanState::Idle { previous: None };

    for edge in edges {
        state = match state {
            ScanState::Building(mut run) => match run.extend(edge, order) {
                Step::Continued => ScanState::Building(run),
                Step::Finished => {
                    // A finished run closed via the relaxed exit; it took the
                    // current edge, so the scan resumes after it.
                    motifs.push(run.into_motif());
                    ScanState::Idle { previous: Some(edge.clone()) }
                }
                Step::Rejected => {
                    if run.edges.len() >= MIN_ESCALATOR_LEN {
                        motifs.push(run.into_motif());
                        ScanState::Idle { previous: Some(edge.clone()) }
                    } else {
                        reopen(run.last(), edge, order)
                    }
                }
            },
            ScanState::Idle { previous: Some(prev) } => reopen(&prev, edge, order),
            ScanState::Idle { previous: None } => {
                ScanState::Idle { previous: Some(edge.clone()) }
            }
        };
    }

    if let ScanState::Building(run) = state {
        if run.edges.len() >= MIN_ESCALATOR_LEN {
            motifs.push(run.into_motif());
        }
    }
    motifs
}

fn reopen(prev: &Edge, edge: &Edge, order: &PositionIndex) -> ScanState {
    match EscalatorRun::open(prev, edge, order) {
        Some(run) => ScanState::Building(run),
        None => ScanState::Idle { previous: Some(edge.clone()) },
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeId;

    fn index(ids: &[u64]) -> PositionIndex {
        PositionIndex::from_ids(ids.iter().map(|&i| NodeId(i)))
    }

    #[test]
    fn test_descending_diagonal_of_three() {
        // Sources ranked 0,1,2 and targets ranked 3,4,5: both endpoints
        // advance by one rank per edge.
        let order = index(&[0, 1, 2, 3, 4, 5]);
        let edges = vec![Edge::new(0u64, 3u64), Edge::new(1u64, 4u64), Edge::new(2u64, 5u64)];
        let motifs = detect_escalators(&order, &edges);
        assert_eq!(motifs.len(), 1);
        assert_eq!(motifs[0].len(), 3);
        assert_eq!(motifs[0].kind, MotifKind::Escalator);
    }

    #[test]
    fn test_ascending_diagonal_of_three() {
        let order = index(&[0, 1, 2, 3, 4, 5]);
        let edges = vec![Edge::new(2u64, 5u64), Edge::new(1u64, 4u64), Edge::new(0u64, 3u64)];
        assert_eq!(detect_escalators(&order, &edges).len(), 1);
    }

    #[test]
    fn test_two_step_diagonal_is_discarded() {
        let order = index(&[0, 1, 2, 3, 4, 5]);
        let edges = vec![Edge::new(0u64, 3u64), Edge::new(1u64, 4u64)];
        assert!(detect_escalators(&order, &edges).is_empty());
    }

    #[test]
    fn test_broken_diagonal_is_discarded() {
        // Third edge jumps two ranks on the source side.
        let order = index(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let edges = vec![Edge::new(0u64, 4u64), Edge::new(1u64, 5u64), Edge::new(3u64, 6u64)];
        assert!(detect_escalators(&order, &edges).is_empty());
    }

    #[test]
    fn test_long_diagonal_closes_at_break_and_is_emitted() {
        let order = index(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let edges = vec![
            Edge::new(0u64, 5u64),
            Edge::new(1u64, 6u64),
            Edge::new(2u64, 7u64),
            Edge::new(3u64, 8u64),
            Edge::new(9u64, 0u64),
        ];
        let motifs = detect_escalators(&order, &edges);
        assert_eq!(motifs.len(), 1);
        assert_eq!(motifs[0].len(), 4);
    }

    #[test]
    fn test_unrelated_edges_produce_nothing() {
        let order = index(&[0, 1, 10, 11]);
        let edges = vec![Edge::new(0u64, 1u64), Edge::new(10u64, 11u64)];
        assert!(detect_escalators(&order, &edges).is_empty());
    }
}
