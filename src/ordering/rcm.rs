//! Reverse Cuthill–McKee node ordering.
//!
//! A graph-traversal heuristic that approximately minimizes the bandwidth of
//! the ordering: the maximum rank distance between connected endpoints.
//!
//! The result is deterministic for a given input: the seed scan keeps the
//! earliest node among equal minimum degrees, neighbor discovery follows
//! edge-array order, and the neighbor sort is stable.

use std::collections::VecDeque;

use crate::model::{GraphModel, Node, NodeId};

/// Order nodes by Reverse Cuthill–McKee.
///
/// Repeatedly seeds with the unvisited node of globally smallest degree
/// (which also covers disconnected components and isolated nodes), expands
/// breadth-first with newly discovered neighbors sorted by ascending degree,
/// and reverses the completion list.
pub fn reverse_cuthill_mckee(graph: &GraphModel) -> Vec<Node> {
    let degrees = graph.degree_table();

    let mut not_visited: Vec<NodeId> = graph.nodes().iter().map(|n| n.id).collect();
    let mut completion: Vec<NodeId> = Vec::with_capacity(not_visited.len());
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    while !not_visited.is_empty() {
        let mut seed_idx = 0;
        for (i, id) in not_visited.iter().enumerate() {
            if degrees.degree(*id) < degrees.degree(not_visited[seed_idx]) {
                seed_idx = i;
            }
        }
        queue.push_back(not_visited.remove(seed_idx));

        while let Some(current) = queue.pop_front() {
            let mut discovered: Vec<NodeId> = Vec::new();
            for neighbor in graph.neighbors(current) {
                if let Some(pos) = not_visited.iter().position(|id| *id == neighbor) {
                    not_visited.remove(pos);
                    discovered.push(neighbor);
                }
            }
            discovered.sort_by_key(|id| degrees.degree(*id));
            queue.extend(discovered);
            completion.push(current);
        }
    }

    completion.reverse();
    completion
        .into_iter()
        .map(|id| {
            graph
                .node(id)
                .expect("completion list only holds ids taken from the node set")
                .clone()
        })
        .collect()
}
