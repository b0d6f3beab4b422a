//! Stair quality scoring.
//!
//! Turns detected stairs into `(grade, score)` tuples with
//! `score = run length / degree(pivot)`. The degree comes from the full
//! degree table, never from the run itself: a stair only covers the pivot's
//! edges that happen to sit consecutively in the chosen edge order.

use serde::{Deserialize, Serialize};

use super::{Motif, MotifKind, StairGrade};
use crate::model::DegreeTable;

/// Quality tuple for one stair run.
///
/// `score` is `None` when the pivot's degree is zero. That cannot happen for
/// a genuine stair pivot (it carries the run's edges), but the guard keeps a
/// corrupt degree table from turning into a NaN downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StairQuality {
    pub grade: StairGrade,
    pub score: Option<f64>,
}

/// Score every stair in the motif list; non-stair motifs are skipped.
pub fn score_stairs(motifs: &[Motif], degrees: &DegreeTable) -> Vec<StairQuality> {
    motifs
        .iter()
        .filter_map(|motif| match motif.kind {
            MotifKind::Stair { pivot, grade } => {
                let degree = degrees.degree(pivot);
                let score = (degree > 0).then(|| motif.len() as f64 / degree as f64);
                Some(StairQuality { grade, score })
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Node, NodeId};

    fn stair(pivot: u64, grade: StairGrade, edges: Vec<Edge>) -> Motif {
        Motif {
            kind: MotifKind::Stair { pivot: NodeId(pivot), grade },
            edges,
        }
    }

    #[test]
    fn test_score_is_length_over_degree() {
        let nodes: Vec<Node> = (0..4).map(|i| Node::new(i, format!("n{i}"))).collect();
        let edges = vec![Edge::new(0u64, 1u64), Edge::new(0u64, 2u64), Edge::new(0u64, 3u64)];
        let degrees = DegreeTable::new(&nodes, &edges);

        let motifs = vec![stair(0, StairGrade::Optimal, edges)];
        let qualities = score_stairs(&motifs, &degrees);
        assert_eq!(qualities.len(), 1);
        assert_eq!(qualities[0].grade, StairGrade::Optimal);
        assert_eq!(qualities[0].score, Some(1.0));
    }

    #[test]
    fn test_degree_comes_from_the_full_table() {
        // Pivot 0 has five incident edges; the stair covers three of them.
        let nodes: Vec<Node> = (0..6).map(|i| Node::new(i, format!("n{i}"))).collect();
        let all_edges: Vec<Edge> = (1..6).map(|i| Edge::new(0u64, i as u64)).collect();
        let degrees = DegreeTable::new(&nodes, &all_edges);

        let motifs = vec![stair(0, StairGrade::Optimal, all_edges[..3].to_vec())];
        let qualities = score_stairs(&motifs, &degrees);
        assert_eq!(qualities[0].score, Some(3.0 / 5.0));
    }

    #[test]
    fn test_zero_degree_pivot_yields_undefined_score() {
        let degrees = DegreeTable::default();
        let motifs = vec![stair(7, StairGrade::SemiOptimal, vec![
            Edge::new(7u64, 1u64),
            Edge::new(7u64, 2u64),
            Edge::new(7u64, 3u64),
        ])];
        let qualities = score_stairs(&motifs, &degrees);
        assert_eq!(qualities[0].score, None);
    }

    #[test]
    fn test_non_stair_motifs_are_skipped() {
        let motifs = vec![Motif { kind: MotifKind::Runway, edges: vec![] }];
        assert!(score_stairs(&motifs, &DegreeTable::default()).is_empty());
    }
}
