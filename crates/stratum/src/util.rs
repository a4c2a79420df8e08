//! Small helpers shared by the ordering and positioning passes.

use crate::LayoutGraph;

pub fn max_rank(g: &LayoutGraph) -> Option<i32> {
    let mut max: Option<i32> = None;
    g.for_each_node(|_, n| {
        if let Some(r) = n.rank {
            max = Some(max.map_or(r, |m| m.max(r)));
        }
    });
    max
}

/// Node ids grouped by rank, each layer sorted by `order` (insertion order breaks ties).
pub fn build_layer_matrix(g: &LayoutGraph) -> Vec<Vec<String>> {
    let Some(max_rank) = max_rank(g) else {
        return Vec::new();
    };
    let mut layers: Vec<Vec<(usize, String)>> = vec![Vec::new(); (max_rank.max(0) + 1) as usize];
    g.for_each_node(|id, n| {
        let Some(rank) = n.rank else {
            return;
        };
        let order = n.order.unwrap_or(usize::MAX);
        layers[rank.max(0) as usize].push((order, id.to_string()));
    });
    layers
        .into_iter()
        .map(|mut layer| {
            layer.sort_by_key(|(order, _)| *order);
            layer.into_iter().map(|(_, id)| id).collect()
        })
        .collect()
}
