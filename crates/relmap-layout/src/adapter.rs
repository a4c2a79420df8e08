use crate::options::{LayoutOptions, NODE_HEIGHT, NODE_WIDTH};
use crate::{Error, Result};
use relmap_core::{Edge, Node, Position, RelationGraph};
use stratum::graphlib::{Graph, GraphOptions};
use stratum::{EdgeLabel, LayoutGraph, NodeLabel};

/// Builds the engine graph for `nodes` and `edges`, in input order.
///
/// Edges are named by their index so parallel edges stay distinct. An edge naming a node that is
/// not in `nodes` is rejected rather than letting the engine invent the node.
pub fn build_graph(nodes: &[Node], edges: &[Edge], options: &LayoutOptions) -> Result<LayoutGraph> {
    let mut g: LayoutGraph = Graph::new(GraphOptions { multigraph: true });
    g.set_graph(options.graph_label());

    for node in nodes {
        if g.has_node(&node.id) {
            return Err(Error::DuplicateNode {
                id: node.id.clone(),
            });
        }
        g.set_node(node.id.clone(), NodeLabel::with_size(NODE_WIDTH, NODE_HEIGHT));
    }

    for (i, edge) in edges.iter().enumerate() {
        for endpoint in [&edge.source, &edge.target] {
            if !g.has_node(endpoint) {
                return Err(Error::DanglingEdge {
                    edge: edge.id.clone(),
                    node: endpoint.clone(),
                });
            }
        }
        g.set_edge_named(
            edge.source.clone(),
            edge.target.clone(),
            Some(i.to_string()),
            Some(EdgeLabel::default()),
        );
    }
    Ok(g)
}

/// Lays out `nodes` and `edges` and returns a new graph with every node positioned.
///
/// Positions are the top-left corners of the `NODE_WIDTH` x `NODE_HEIGHT` boxes. Edges are
/// returned as given. The inputs are not modified.
pub fn layout_elements(
    nodes: &[Node],
    edges: &[Edge],
    options: &LayoutOptions,
) -> Result<RelationGraph> {
    if nodes.is_empty() && edges.is_empty() {
        return Ok(RelationGraph::default());
    }

    let mut g = build_graph(nodes, edges, options)?;
    stratum::layout(&mut g)?;

    let mut positioned = Vec::with_capacity(nodes.len());
    for node in nodes {
        let label = g.node(&node.id).ok_or_else(|| stratum::Error::NonFiniteCoordinate {
            id: node.id.clone(),
        })?;
        let (Some(x), Some(y)) = (label.x, label.y) else {
            return Err(stratum::Error::NonFiniteCoordinate {
                id: node.id.clone(),
            }
            .into());
        };
        positioned.push(Node {
            position: Position::new(x - label.width / 2.0, y - label.height / 2.0),
            ..node.clone()
        });
    }

    tracing::debug!(
        nodes = positioned.len(),
        edges = edges.len(),
        rankdir = %options.rankdir,
        width = g.graph().width,
        height = g.graph().height,
        "layout_elements"
    );

    Ok(RelationGraph {
        nodes: positioned,
        edges: edges.to_vec(),
    })
}

/// [`layout_elements`] over a whole [`RelationGraph`].
pub fn layout_graph(graph: &RelationGraph, options: &LayoutOptions) -> Result<RelationGraph> {
    layout_elements(&graph.nodes, &graph.edges, options)
}
