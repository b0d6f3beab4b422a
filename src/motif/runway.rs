//! Runway detection.
//!
//! A runway is a streak of consecutive edges chained by incidence: each edge
//! touches the current streak node, or failing that the previous edge's
//! other endpoint, which then becomes the streak node (first-match rule).
//! Node positions play no role; only who touches whom matters, so a hub
//! keeps its streak node while a path walks it along the chain.

use crate::model::{Edge, NodeId};

use super::{MIN_RUNWAY_LEN, Motif, MotifKind};

/// The streak under construction: its chaining node and edges so far.
#[derive(Debug, Clone)]
struct Streak {
    node: NodeId,
    edges: Vec<Edge>,
}

impl Streak {
    /// Fresh streak adopting the edge's source as the streak node.
    fn start(edge: &Edge) -> Streak {
        Streak { node: edge.source, edges: vec![edge.clone()] }
    }

    /// Try to take `next` into the streak. Checks the streak node first and
    /// only then the previous edge's other endpoint; the matched endpoint
    /// stays (or becomes) the streak node.
    fn extend(&mut self, next: &Edge) -> bool {
        if next.touches(self.node) {
            self.edges.push(next.clone());
            return true;
        }
        let prev_other = self
            .edges
            .last()
            .and_then(|prev| prev.other_endpoint(self.node))
            .expect("the last streak edge always touches the streak node");
        if next.touches(prev_other) {
            self.node = prev_other;
            self.edges.push(next.clone());
            return true;
        }
        false
    }

    fn into_motif(self) -> Motif {
        Motif { kind: MotifKind::Runway, edges: self.edges }
    }
}

/// Scan an ordered edge sequence for runway motifs.
///
/// One forward pass; a broken streak is emitted when long enough, and the
/// breaking edge always starts the next streak.
pub fn detect_runways(edges: &[Edge]) -> Vec<Motif> {
    let mut motifs = Vec::new();
    let mut streak: Option<Streak> = None;

    for edge in edges {
        streak = Some(match streak {
            None => Streak::start(edge),
            Some(mut current) => {
                if current.extend(edge) {
                    current
                } else {
                    if current.edges.len() >= MIN_RUNWAY_LEN {
                        motifs.push(current.into_motif());
                    }
                    Streak::start(edge)
                }
            }
        });
    }

    if let Some(current) = streak {
        if current.edges.len() >= MIN_RUNWAY_LEN {
            motifs.push(current.into_motif());
        }
    }
    motifs
}

// ============================================================================
// Tests
// ============================================================================
