//! Coordinate assignment.
//!
//! Works in the top-to-bottom frame (see [`crate::coordinate_system`]). Ranks are stacked along
//! y, each as tall as its tallest node and separated by `ranksep`. Along x every layer starts
//! packed at minimum separation and is then pulled toward the barycenter of its neighbours for
//! a fixed number of alternating passes. Each pass keeps the order and the minimum separation.

use crate::LayoutGraph;
use crate::util::build_layer_matrix;

const ALIGNMENT_PASSES: usize = 8;

pub fn position(g: &mut LayoutGraph) {
    let layers = build_layer_matrix(g);
    position_y(g, &layers);
    position_x(g, &layers);
}

fn position_y(g: &mut LayoutGraph, layers: &[Vec<String>]) {
    let ranksep = g.graph().ranksep;
    let mut prev_y: f64 = 0.0;
    for layer in layers {
        let max_h = layer
            .iter()
            .filter_map(|v| g.node(v))
            .map(|n| n.height)
            .fold(0.0_f64, f64::max);
        for v in layer {
            if let Some(n) = g.node_mut(v) {
                n.y = Some(prev_y + max_h / 2.0);
            }
        }
        prev_y += max_h + ranksep;
    }
}

/// Minimum center-to-center distance between neighbours `a` and `b` in a layer.
fn separation(g: &LayoutGraph, a: &str, b: &str) -> f64 {
    let label = g.graph();
    let half = |id: &str| -> (f64, f64) {
        match g.node(id) {
            Some(n) if n.dummy => (n.width / 2.0, label.edgesep / 2.0),
            Some(n) => (n.width / 2.0, label.nodesep / 2.0),
            None => (0.0, 0.0),
        }
    };
    let (wa, sa) = half(a);
    let (wb, sb) = half(b);
    wa + sa + sb + wb
}

fn position_x(g: &mut LayoutGraph, layers: &[Vec<String>]) {
    let mut xs: Vec<Vec<f64>> = Vec::with_capacity(layers.len());
    let mut seps: Vec<Vec<f64>> = Vec::with_capacity(layers.len());
    for layer in layers {
        let sep: Vec<f64> = layer
            .windows(2)
            .map(|pair| separation(g, &pair[0], &pair[1]))
            .collect();
        let mut x: Vec<f64> = Vec::with_capacity(layer.len());
        let mut cursor = layer
            .first()
            .and_then(|v| g.node(v))
            .map(|n| n.width / 2.0)
            .unwrap_or(0.0);
        for i in 0..layer.len() {
            if i > 0 {
                cursor += sep[i - 1];
            }
            x.push(cursor);
        }
        xs.push(x);
        seps.push(sep);
    }
    write_x(g, layers, &xs);

    for pass in 0..ALIGNMENT_PASSES {
        let downward = pass % 2 == 0;
        let ranks: Vec<usize> = if downward {
            (1..layers.len()).collect()
        } else {
            (0..layers.len().saturating_sub(1)).rev().collect()
        };
        for r in ranks {
            let desired: Vec<f64> = layers[r]
                .iter()
                .zip(&xs[r])
                .map(|(v, &current)| neighbour_center(g, v, downward).unwrap_or(current))
                .collect();
            xs[r] = place_balanced(&desired, &seps[r]);
            write_x(g, std::slice::from_ref(&layers[r]), std::slice::from_ref(&xs[r]));
        }
    }
}

fn write_x(g: &mut LayoutGraph, layers: &[Vec<String>], xs: &[Vec<f64>]) {
    for (layer, x) in layers.iter().zip(xs) {
        for (v, &x) in layer.iter().zip(x) {
            if let Some(n) = g.node_mut(v) {
                n.x = Some(x);
            }
        }
    }
}

/// Weighted mean x of the neighbours on the rank above (`upper`) or below.
fn neighbour_center(g: &LayoutGraph, v: &str, upper: bool) -> Option<f64> {
    let edges = if upper {
        g.in_edges(v, None)
    } else {
        g.out_edges(v, None)
    };
    let mut sum = 0.0;
    let mut weight = 0.0;
    for e in edges.iter().filter(|e| !e.is_self_loop()) {
        let other = if upper { &e.v } else { &e.w };
        let Some(x) = g.node(other).and_then(|n| n.x) else {
            continue;
        };
        let w = g.edge_by_key(e).map(|l| l.weight).unwrap_or(1.0);
        sum += w * x;
        weight += w;
    }
    (weight > 0.0).then(|| sum / weight)
}

/// Places a layer as close to `desired` as the separations allow.
///
/// A left-to-right pass pushes nodes right to make room, a right-to-left pass pushes them left;
/// both results respect `x[i + 1] - x[i] >= sep[i]`, and so does their average.
pub fn place_balanced(desired: &[f64], sep: &[f64]) -> Vec<f64> {
    let n = desired.len();
    if n == 0 {
        return Vec::new();
    }

    let mut right = desired.to_vec();
    for i in 1..n {
        right[i] = right[i].max(right[i - 1] + sep[i - 1]);
    }
    let mut left = desired.to_vec();
    for i in (0..n - 1).rev() {
        left[i] = left[i].min(left[i + 1] - sep[i]);
    }

    right.iter().zip(&left).map(|(r, l)| (r + l) / 2.0).collect()
}
