//! Rank assignment.
//!
//! Longest-path layering anchored at the sources: a node sits `minlen` ranks below the deepest of
//! its predecessors, and nodes without predecessors (isolated ones included) sit on rank 0.

use crate::graphlib::EdgeKey;
use crate::{Error, LayoutGraph, Result};
use std::collections::VecDeque;

pub fn longest_path(g: &mut LayoutGraph) -> Result<()> {
    let ids = g.node_ids();
    let mut indegree: Vec<usize> = vec![0; ids.len()];
    for e in g.edges() {
        if e.is_self_loop() {
            continue;
        }
        if let Some(w) = g.node_position(&e.w) {
            indegree[w] += 1;
        }
    }

    let mut rank: Vec<i32> = vec![0; ids.len()];
    let mut queue: VecDeque<usize> = (0..ids.len()).filter(|&i| indegree[i] == 0).collect();
    let mut visited: usize = 0;

    while let Some(v) = queue.pop_front() {
        visited += 1;
        for e in g.out_edges(&ids[v], None) {
            if e.is_self_loop() {
                continue;
            }
            let Some(w) = g.node_position(&e.w) else {
                continue;
            };
            rank[w] = rank[w].max(rank[v] + minlen(g, &e));
            indegree[w] -= 1;
            if indegree[w] == 0 {
                queue.push_back(w);
            }
        }
    }

    if visited != ids.len() {
        let id = indegree
            .iter()
            .position(|&d| d > 0)
            .map(|i| ids[i].clone())
            .unwrap_or_default();
        return Err(Error::Cycle { id });
    }

    for (id, r) in ids.iter().zip(rank) {
        if let Some(n) = g.node_mut(id) {
            n.rank = Some(r);
        }
    }
    Ok(())
}

fn minlen(g: &LayoutGraph, e: &EdgeKey) -> i32 {
    g.edge_by_key(e)
        .map(|l| l.minlen.max(1) as i32)
        .unwrap_or(1)
}

/// `rank(w) - rank(v) - minlen` for an edge; zero means the edge is tight.
#[doc(hidden)]
pub fn slack(g: &LayoutGraph, e: &EdgeKey) -> i32 {
    let w_rank = g.node(&e.w).and_then(|n| n.rank).unwrap_or(0);
    let v_rank = g.node(&e.v).and_then(|n| n.rank).unwrap_or(0);
    w_rank - v_rank - minlen(g, e)
}
