//! End-to-end tests for the motif detectors and quality scoring.
//!
//! The first four tests are the canonical shapes: a stair star, an escalator
//! diagonal, a runway chain, and a pair of unrelated edges that must yield
//! nothing. The rest exercise maximality, thresholds and scoring.

use biofabric_rs::{
    DegreeTable, Edge, GraphModel, MotifKind, Node, NodeId, PositionIndex, StairGrade,
    detect_escalators, detect_runways, detect_stairs, score_stairs,
};
use pretty_assertions::assert_eq;

fn index(ids: &[u64]) -> PositionIndex {
    PositionIndex::from_ids(ids.iter().map(|&i| NodeId(i)))
}

// ============================================================================
// 1. Stair: pivot A fixed, opposite endpoint ranks 1, 2, 3.
// ============================================================================

#[test]
fn test_stair_star_with_unit_steps() {
    let order = index(&[0, 1, 2, 3]);
    let edges = vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(0, 3)];

    let stairs = detect_stairs(&order, &edges);
    assert_eq!(stairs.len(), 1);
    assert_eq!(stairs[0].len(), 3);
    assert_eq!(
        stairs[0].kind,
        MotifKind::Stair { pivot: NodeId(0), grade: StairGrade::Optimal }
    );

    let nodes: Vec<Node> = (0..4).map(|i| Node::new(i, format!("n{i}"))).collect();
    let degrees = DegreeTable::new(&nodes, &edges);
    let qualities = score_stairs(&stairs, &degrees);
    assert_eq!(qualities[0].score, Some(1.0));
}

// ============================================================================
// 2. Escalator: both endpoint ranks advance by exactly one per edge.
// ============================================================================

#[test]
fn test_escalator_diagonal_of_three() {
    let order = index(&[0, 1, 2, 3, 4, 5]);
    let edges = vec![Edge::new(0, 3), Edge::new(1, 4), Edge::new(2, 5)];

    let escalators = detect_escalators(&order, &edges);
    assert_eq!(escalators.len(), 1);
    assert_eq!(escalators[0].len(), 3);
    assert_eq!(escalators[0].kind, MotifKind::Escalator);
}

// ============================================================================
// 3. Runway: edges chained by shared endpoints, positions irrelevant.
// ============================================================================

#[test]
fn test_runway_chain_of_three() {
    let edges = vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 4)];

    let runways = detect_runways(&edges);
    assert_eq!(runways.len(), 1);
    assert_eq!(runways[0].len(), 3);
    assert_eq!(runways[0].kind, MotifKind::Runway);
}

// ============================================================================
// 4. Unrelated edges: every detector returns an empty list.
// ============================================================================

#[test]
fn test_unrelated_edges_yield_no_motifs() {
    let order = index(&[0, 1, 8, 9]);
    let edges = vec![Edge::new(0, 1), Edge::new(8, 9)];

    assert!(detect_stairs(&order, &edges).is_empty());
    assert!(detect_escalators(&order, &edges).is_empty());
    assert!(detect_runways(&edges).is_empty());
}

// ============================================================================
// Maximality: a qualifying fan of five is one motif, never split.
// ============================================================================

#[test]
fn test_stair_runs_are_maximal() {
    let order = index(&[0, 1, 2, 3, 4, 5]);
    let edges: Vec<Edge> = (1..6).map(|i| Edge::new(0, i)).collect();

    let stairs = detect_stairs(&order, &edges);
    assert_eq!(stairs.len(), 1);
    assert_eq!(stairs[0].len(), 5);
}

#[test]
fn test_escalator_runs_are_maximal() {
    let order = index(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let edges: Vec<Edge> = (0..5).map(|i| Edge::new(i, i + 5)).collect();

    let escalators = detect_escalators(&order, &edges);
    assert_eq!(escalators.len(), 1);
    assert_eq!(escalators[0].len(), 5);
}

#[test]
fn test_runway_streaks_are_maximal() {
    let edges = vec![
        Edge::new(1, 2),
        Edge::new(2, 3),
        Edge::new(3, 4),
        Edge::new(4, 5),
        Edge::new(5, 6),
    ];
    let runways = detect_runways(&edges);
    assert_eq!(runways.len(), 1);
    assert_eq!(runways[0].len(), 5);
}

// ============================================================================
// Minimum length: two-edge candidates never surface.
// ============================================================================

#[test]
fn test_two_edge_runs_are_below_threshold() {
    let order = index(&[0, 1, 2, 8, 9]);
    let stair_edges = vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(8, 9)];
    assert!(detect_stairs(&order, &stair_edges).is_empty());

    let order = index(&[0, 1, 2, 3, 8, 9]);
    let escalator_edges = vec![Edge::new(0, 2), Edge::new(1, 3), Edge::new(8, 9)];
    assert!(detect_escalators(&order, &escalator_edges).is_empty());

    let runway_edges = vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(8, 9)];
    assert!(detect_runways(&runway_edges).is_empty());
}

// ============================================================================
// Stair grades: oversized steps and pivot switches downgrade.
// ============================================================================

#[test]
fn test_stair_with_a_double_step_is_semi_optimal() {
    let order = index(&[0, 1, 2, 3, 4]);
    let edges = vec![Edge::new(0, 1), Edge::new(0, 3), Edge::new(0, 4)];

    let stairs = detect_stairs(&order, &edges);
    assert_eq!(stairs.len(), 1);
    assert_eq!(
        stairs[0].kind,
        MotifKind::Stair { pivot: NodeId(0), grade: StairGrade::SemiOptimal }
    );
}

#[test]
fn test_stair_pivot_switch_is_semi_optimal() {
    // Two edges hang below pivot 10, then the run turns across it. All steps
    // are unit steps; the switch alone costs the optimal grade.
    let order = index(&[10, 11, 12, 13]);
    let edges = vec![Edge::new(11, 10), Edge::new(12, 10), Edge::new(10, 13)];

    let stairs = detect_stairs(&order, &edges);
    assert_eq!(stairs.len(), 1);
    assert_eq!(stairs[0].len(), 3);
    assert_eq!(
        stairs[0].kind,
        MotifKind::Stair { pivot: NodeId(10), grade: StairGrade::SemiOptimal }
    );
}

// ============================================================================
// Scoring uses the full degree table, not the run.
// ============================================================================

#[test]
fn test_stair_score_against_full_degree() {
    // Pivot 0 carries five edges but only three sit consecutively: the two
    // fan edges after the gap edge (2,3) restart too late to chain.
    let order = index(&[0, 1, 2, 3, 4, 5]);
    let edges = vec![
        Edge::new(0, 1),
        Edge::new(0, 2),
        Edge::new(0, 3),
        Edge::new(2, 3),
        Edge::new(0, 4),
        Edge::new(0, 5),
    ];
    let nodes: Vec<Node> = (0..6).map(|i| Node::new(i, format!("n{i}"))).collect();
    let graph = GraphModel::new(nodes, edges.clone());

    let stairs = detect_stairs(&order, &edges);
    assert_eq!(stairs.len(), 1);
    assert_eq!(stairs[0].len(), 3);

    let qualities = score_stairs(&stairs, &graph.degree_table());
    // Run of 3 over degree 5.
    assert_eq!(qualities[0].score, Some(3.0 / 5.0));
}
