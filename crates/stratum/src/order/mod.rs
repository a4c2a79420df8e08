//! Node ordering / crossing minimization.
//!
//! Starts from a depth-first initial order, then alternates downward and upward barycenter sweeps
//! (with alternating tie bias) and keeps the layering with the fewest weighted crossings. Stops
//! once four consecutive sweeps fail to improve on the best layering.

mod barycenter;
mod cross_count;
mod init_order;

pub use barycenter::{BarycenterEntry, barycenter, sort};
pub use cross_count::cross_count;
pub use init_order::init_order;

use crate::LayoutGraph;
use crate::util::build_layer_matrix;

/// Which adjacent rank a sweep reads neighbour positions from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    /// Predecessors on the rank above (downward sweep).
    InEdges,
    /// Successors on the rank below (upward sweep).
    OutEdges,
}

const MAX_STALE_SWEEPS: usize = 4;

pub fn order(g: &mut LayoutGraph) {
    let layering = init_order(g);
    if layering.is_empty() {
        return;
    }
    assign_order(g, &layering);

    let mut best_cc = cross_count(g, &layering);
    let mut best_layering = layering;
    let max_rank = best_layering.len() - 1;

    let mut i: usize = 0;
    let mut last_best: usize = 0;
    while last_best < MAX_STALE_SWEEPS && best_cc > 0.0 {
        let bias_right = i % 4 >= 2;
        let layers = build_layer_matrix(g);
        if i % 2 == 1 {
            for layer in &layers[1..] {
                sweep_layer(g, layer, Relationship::InEdges, bias_right);
            }
        } else {
            for layer in layers[..max_rank].iter().rev() {
                sweep_layer(g, layer, Relationship::OutEdges, bias_right);
            }
        }

        let layering = build_layer_matrix(g);
        let cc = cross_count(g, &layering);
        if cc < best_cc {
            last_best = 0;
            best_cc = cc;
            best_layering = layering;
        }

        i += 1;
        last_best += 1;
    }

    tracing::debug!(crossings = best_cc, sweeps = i, "order: crossing reduction done");
    assign_order(g, &best_layering);
}

fn sweep_layer(
    g: &mut LayoutGraph,
    layer: &[String],
    relationship: Relationship,
    bias_right: bool,
) {
    let entries = barycenter(g, layer, relationship);
    let sorted = sort(entries, bias_right);
    for (i, v) in sorted.iter().enumerate() {
        if let Some(n) = g.node_mut(v) {
            n.order = Some(i);
        }
    }
}

fn assign_order(g: &mut LayoutGraph, layering: &[Vec<String>]) {
    for layer in layering {
        for (i, v) in layer.iter().enumerate() {
            if let Some(n) = g.node_mut(v) {
                n.order = Some(i);
            }
        }
    }
}
