use super::Relationship;
use crate::LayoutGraph;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct BarycenterEntry {
    pub v: String,
    /// Index of `v` in the layer before sorting.
    pub i: usize,
    /// Weighted mean order of the neighbours on the fixed rank; `None` when there are none.
    pub barycenter: Option<f64>,
    pub weight: f64,
}

pub fn barycenter(
    g: &LayoutGraph,
    layer: &[String],
    relationship: Relationship,
) -> Vec<BarycenterEntry> {
    layer
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let edges = match relationship {
                Relationship::InEdges => g.in_edges(v, None),
                Relationship::OutEdges => g.out_edges(v, None),
            };
            let mut sum = 0.0;
            let mut weight = 0.0;
            for e in edges.iter().filter(|e| !e.is_self_loop()) {
                let other = match relationship {
                    Relationship::InEdges => &e.v,
                    Relationship::OutEdges => &e.w,
                };
                let Some(order) = g.node(other).and_then(|n| n.order) else {
                    continue;
                };
                let w = g.edge_by_key(e).map(|l| l.weight).unwrap_or(1.0);
                sum += w * order as f64;
                weight += w;
            }
            BarycenterEntry {
                v: v.clone(),
                i,
                barycenter: (weight > 0.0).then(|| sum / weight),
                weight,
            }
        })
        .collect()
}

/// Orders a layer by barycenter.
///
/// Entries without a barycenter keep their original index; the others fill the remaining slots
/// in barycenter order. Equal barycenters fall back to the original index, reversed when
/// `bias_right` is set.
pub fn sort(entries: Vec<BarycenterEntry>, bias_right: bool) -> Vec<String> {
    let (mut sortable, mut unsortable): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(|e| e.barycenter.is_some());

    sortable.sort_by(|a, b| {
        let (ba, bb) = (a.barycenter.unwrap_or(0.0), b.barycenter.unwrap_or(0.0));
        match ba.total_cmp(&bb) {
            Ordering::Equal if bias_right => b.i.cmp(&a.i),
            Ordering::Equal => a.i.cmp(&b.i),
            other => other,
        }
    });
    // Popped from the back, so the smallest original index comes out first.
    unsortable.sort_by(|a, b| b.i.cmp(&a.i));

    let mut vs: Vec<String> = Vec::with_capacity(sortable.len() + unsortable.len());
    consume_unsortable(&mut vs, &mut unsortable);
    for entry in sortable {
        vs.push(entry.v);
        consume_unsortable(&mut vs, &mut unsortable);
    }
    vs.extend(unsortable.into_iter().rev().map(|e| e.v));
    vs
}

fn consume_unsortable(vs: &mut Vec<String>, unsortable: &mut Vec<BarycenterEntry>) {
    while unsortable.last().is_some_and(|e| e.i <= vs.len()) {
        if let Some(e) = unsortable.pop() {
            vs.push(e.v);
        }
    }
}
