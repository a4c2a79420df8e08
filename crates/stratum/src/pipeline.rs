//! The layout pipeline.
//!
//! `layout` runs every pass on a private working copy (multigraph, self-loops dropped) so dummy
//! nodes and reversed edges never leak into the caller's graph. Only coordinates, ranks, orders
//! and the drawing extent are written back.

use crate::graphlib::{Graph, GraphOptions};
use crate::{
    EdgeLabel, Error, LayoutGraph, NodeLabel, Result, acyclic, coordinate_system, normalize,
    order, position, rank,
};

pub fn layout(g: &mut LayoutGraph) -> Result<()> {
    validate(g)?;
    let mut lg = build_layout_graph(g);
    tracing::debug!(
        nodes = lg.node_count(),
        edges = lg.edge_count(),
        rankdir = %lg.graph().rankdir,
        "layout: start"
    );

    run_layout(&mut lg)?;
    update_input_graph(g, &lg);

    tracing::debug!(
        width = g.graph().width,
        height = g.graph().height,
        "layout: done"
    );
    Ok(())
}

fn run_layout(g: &mut LayoutGraph) -> Result<()> {
    coordinate_system::adjust(g);
    acyclic::run(g);
    rank::longest_path(g)?;
    normalize::run(g);
    order::order(g);
    position::position(g);
    coordinate_system::undo(g);
    translate(g);
    verify(g)
}

fn validate(g: &LayoutGraph) -> Result<()> {
    let label = g.graph();
    for (name, value) in [
        ("nodesep", label.nodesep),
        ("ranksep", label.ranksep),
        ("edgesep", label.edgesep),
        ("marginx", label.marginx),
        ("marginy", label.marginy),
    ] {
        if !(value.is_finite() && value >= 0.0) {
            return Err(Error::InvalidSpacing { name, value });
        }
    }

    let mut bad: Option<Error> = None;
    g.for_each_node(|id, n| {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if bad.is_none() && !(ok(n.width) && ok(n.height)) {
            bad = Some(Error::InvalidNodeSize {
                id: id.to_string(),
                width: n.width,
                height: n.height,
            });
        }
    });
    bad.map_or(Ok(()), Err)
}

fn build_layout_graph(g: &LayoutGraph) -> LayoutGraph {
    let mut lg: LayoutGraph = Graph::new(GraphOptions { multigraph: true });
    lg.set_graph(g.graph().clone());

    g.for_each_node(|id, n| {
        lg.set_node(id, NodeLabel::with_size(n.width, n.height));
    });
    for (i, e) in g.edges().enumerate() {
        if e.is_self_loop() {
            continue;
        }
        let label = g.edge_by_key(e).cloned().unwrap_or_default();
        // Distinct names keep parallel edges apart even if the caller's graph is simple.
        let name = e.name.clone().unwrap_or_else(|| format!("e{i}"));
        lg.set_edge_named(
            e.v.clone(),
            e.w.clone(),
            Some(name),
            Some(EdgeLabel {
                minlen: label.minlen,
                weight: label.weight,
                ..Default::default()
            }),
        );
    }
    lg
}

/// Shifts the drawing so its top-left corner sits at `(marginx, marginy)`.
fn translate(g: &mut LayoutGraph) {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    g.for_each_node(|_, n| {
        let (Some(x), Some(y)) = (n.x, n.y) else {
            return;
        };
        min_x = min_x.min(x - n.width / 2.0);
        max_x = max_x.max(x + n.width / 2.0);
        min_y = min_y.min(y - n.height / 2.0);
        max_y = max_y.max(y + n.height / 2.0);
    });
    if !min_x.is_finite() {
        return;
    }

    let (marginx, marginy) = (g.graph().marginx, g.graph().marginy);
    let dx = marginx - min_x;
    let dy = marginy - min_y;
    g.for_each_node_mut(|_, n| {
        n.x = n.x.map(|x| x + dx);
        n.y = n.y.map(|y| y + dy);
    });

    let label = g.graph_mut();
    label.width = max_x - min_x + 2.0 * marginx;
    label.height = max_y - min_y + 2.0 * marginy;
}

fn verify(g: &LayoutGraph) -> Result<()> {
    let mut bad: Option<String> = None;
    g.for_each_node(|id, n| {
        if n.dummy || bad.is_some() {
            return;
        }
        let finite = matches!((n.x, n.y), (Some(x), Some(y)) if x.is_finite() && y.is_finite());
        if !finite {
            bad = Some(id.to_string());
        }
    });
    match bad {
        Some(id) => Err(Error::NonFiniteCoordinate { id }),
        None => Ok(()),
    }
}

fn update_input_graph(g: &mut LayoutGraph, lg: &LayoutGraph) {
    g.for_each_node_mut(|id, n| {
        let Some(laid_out) = lg.node(id) else {
            return;
        };
        n.x = laid_out.x;
        n.y = laid_out.y;
        n.rank = laid_out.rank;
        n.order = laid_out.order;
    });
    let (width, height) = (lg.graph().width, lg.graph().height);
    let label = g.graph_mut();
    label.width = width;
    label.height = height;
}
