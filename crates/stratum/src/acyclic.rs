//! Break cycles by reversing a depth-first feedback arc set.
//!
//! Nodes are visited in insertion order and out-edges in edge insertion order, so the same input
//! always reverses the same edges. Self-loops are left alone; ranking skips them.

use crate::LayoutGraph;
use crate::graphlib::EdgeKey;
use rustc_hash::FxHashSet as HashSet;

pub fn run(g: &mut LayoutGraph) {
    let fas = dfs_fas(g);
    if !fas.is_empty() {
        tracing::debug!(reversed = fas.len(), "acyclic: reversing feedback arcs");
    }

    for e in fas {
        let Some(mut label) = g.remove_edge_key(&e) else {
            continue;
        };
        label.forward_name = e.name.clone();
        label.reversed = true;

        let name = unique_rev_name(g, &e.w, &e.v);
        g.set_edge_named(e.w, e.v, Some(name), Some(label));
    }
}

fn unique_rev_name(g: &LayoutGraph, v: &str, w: &str) -> String {
    let mut i = 1usize;
    loop {
        let candidate = format!("rev{i}");
        if !g.has_edge(v, w, Some(&candidate)) {
            return candidate;
        }
        i += 1;
    }
}

/// Depth-first walk with an explicit stack of `(node, out-edges, next index)` frames; an edge
/// pointing back at a node still on the stack is a feedback arc.
fn dfs_fas(g: &LayoutGraph) -> Vec<EdgeKey> {
    let mut fas: Vec<EdgeKey> = Vec::new();
    let mut visited: HashSet<String> = HashSet::default();
    let mut on_stack: HashSet<String> = HashSet::default();
    let mut frames: Vec<(String, Vec<EdgeKey>, usize)> = Vec::new();

    for root in g.nodes() {
        if !visited.insert(root.to_string()) {
            continue;
        }
        on_stack.insert(root.to_string());
        frames.push((root.to_string(), g.out_edges(root, None), 0));

        while let Some((v, edges, next)) = frames.last_mut() {
            let Some(e) = edges.get(*next).cloned() else {
                on_stack.remove(v.as_str());
                frames.pop();
                continue;
            };
            *next += 1;
            if e.is_self_loop() {
                continue;
            }
            if on_stack.contains(&e.w) {
                fas.push(e);
            } else if visited.insert(e.w.clone()) {
                on_stack.insert(e.w.clone());
                let out = g.out_edges(&e.w, None);
                frames.push((e.w, out, 0));
            }
        }
    }
    fas
}
