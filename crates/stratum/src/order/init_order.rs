use crate::LayoutGraph;
use rustc_hash::FxHashSet as HashSet;

/// Initial layering: a depth-first walk along out-edges, started from nodes sorted by
/// `(rank, insertion index)`, appends each node to its rank as it is first reached.
pub fn init_order(g: &LayoutGraph) -> Vec<Vec<String>> {
    let Some(max_rank) = crate::util::max_rank(g) else {
        return Vec::new();
    };
    let mut layers: Vec<Vec<String>> = vec![Vec::new(); (max_rank.max(0) + 1) as usize];
    let mut visited: HashSet<String> = HashSet::default();

    let mut start: Vec<(i32, usize, &str)> = g
        .nodes()
        .enumerate()
        .map(|(idx, v)| {
            let rank = g.node(v).and_then(|n| n.rank).unwrap_or(i32::MAX);
            (rank, idx, v)
        })
        .collect();
    start.sort_unstable_by_key(|&(rank, idx, _)| (rank, idx));

    // Explicit `(successors, next index)` frames keep long chains off the call stack.
    let mut frames: Vec<(Vec<&str>, usize)> = Vec::new();
    for (_, _, root) in start {
        if !visit(g, root, &mut visited, &mut layers) {
            continue;
        }
        frames.push((g.successors(root), 0));
        while let Some((succs, next)) = frames.last_mut() {
            let Some(&w) = succs.get(*next) else {
                frames.pop();
                continue;
            };
            *next += 1;
            if visit(g, w, &mut visited, &mut layers) {
                frames.push((g.successors(w), 0));
            }
        }
    }
    layers
}

/// Appends `v` to its rank on first visit; returns whether its successors should be walked.
fn visit(
    g: &LayoutGraph,
    v: &str,
    visited: &mut HashSet<String>,
    layers: &mut [Vec<String>],
) -> bool {
    if !visited.insert(v.to_string()) {
        return false;
    }
    let Some(rank) = g.node(v).and_then(|n| n.rank) else {
        return false;
    };
    if let Some(layer) = layers.get_mut(rank.max(0) as usize) {
        layer.push(v.to_string());
    }
    true
}
