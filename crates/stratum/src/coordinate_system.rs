//! Rank-direction transforms.
//!
//! Ranking, ordering and positioning always work top-to-bottom. For left-to-right layouts the
//! node boxes are transposed before and the coordinates swapped back after; bottom-to-top and
//! right-to-left layouts additionally mirror the rank axis.

use crate::{LayoutGraph, RankDir};

pub fn adjust(g: &mut LayoutGraph) {
    if g.graph().rankdir.is_horizontal() {
        swap_width_height(g);
    }
}

pub fn undo(g: &mut LayoutGraph) {
    let rankdir = g.graph().rankdir;
    if matches!(rankdir, RankDir::BT | RankDir::RL) {
        reverse_y(g);
    }
    if rankdir.is_horizontal() {
        swap_xy(g);
        swap_width_height(g);
    }
}

fn swap_width_height(g: &mut LayoutGraph) {
    g.for_each_node_mut(|_, n| {
        (n.width, n.height) = (n.height, n.width);
    });
}

fn reverse_y(g: &mut LayoutGraph) {
    g.for_each_node_mut(|_, n| {
        if let Some(y) = n.y {
            n.y = Some(-y);
        }
    });
}

fn swap_xy(g: &mut LayoutGraph) {
    g.for_each_node_mut(|_, n| {
        (n.x, n.y) = (n.y, n.x);
    });
}
