//! Split long edges into chains of rank-adjacent edges.
//!
//! Every edge spanning more than one rank is replaced by a path through zero-size dummy nodes,
//! one per intermediate rank, so ordering and positioning see the edge on every rank it crosses.
//! Requires ranks to be assigned.

use crate::graphlib::EdgeKey;
use crate::{EdgeLabel, LayoutGraph, NodeLabel};

pub fn run(g: &mut LayoutGraph) {
    let mut dummies: usize = 0;
    for e in g.edge_keys() {
        dummies += normalize_edge(g, e);
    }
    if dummies > 0 {
        tracing::debug!(dummies, "normalize: inserted dummy nodes");
    }
}

fn normalize_edge(g: &mut LayoutGraph, e: EdgeKey) -> usize {
    let v_rank = g.node(&e.v).and_then(|n| n.rank).unwrap_or(0);
    let w_rank = g.node(&e.w).and_then(|n| n.rank).unwrap_or(0);
    if e.is_self_loop() || w_rank <= v_rank + 1 {
        return 0;
    }

    let Some(label) = g.remove_edge_key(&e) else {
        return 0;
    };

    let mut prev = e.v.clone();
    let mut inserted = 0;
    for r in (v_rank + 1)..w_rank {
        let dummy = add_dummy_node(
            g,
            NodeLabel {
                rank: Some(r),
                dummy: true,
                ..Default::default()
            },
        );
        g.set_edge_named(
            prev,
            dummy.clone(),
            e.name.clone(),
            Some(EdgeLabel {
                weight: label.weight,
                ..Default::default()
            }),
        );
        prev = dummy;
        inserted += 1;
    }

    g.set_edge_named(
        prev,
        e.w,
        e.name,
        Some(EdgeLabel {
            weight: label.weight,
            ..Default::default()
        }),
    );
    inserted
}

fn add_dummy_node(g: &mut LayoutGraph, label: NodeLabel) -> String {
    let mut i = g.node_count();
    loop {
        let id = format!("_d{i}");
        if !g.has_node(&id) {
            g.set_node(id.clone(), label);
            return id;
        }
        i += 1;
    }
}
