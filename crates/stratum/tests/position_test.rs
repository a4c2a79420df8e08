use stratum::graphlib::{Graph, GraphOptions};
use stratum::position::{place_balanced, position};
use stratum::{GraphLabel, LayoutGraph, NodeLabel};

fn node(width: f64, height: f64, rank: i32, order: usize) -> NodeLabel {
    NodeLabel {
        width,
        height,
        rank: Some(rank),
        order: Some(order),
        ..Default::default()
    }
}

#[test]
fn place_balanced_keeps_feasible_targets() {
    assert_eq!(place_balanced(&[0.0, 100.0], &[10.0]), vec![0.0, 100.0]);
}

#[test]
fn place_balanced_spreads_colliding_targets_around_their_center() {
    assert_eq!(place_balanced(&[0.0, 0.0], &[10.0]), vec![-5.0, 5.0]);
    assert_eq!(place_balanced(&[0.0, 0.0, 0.0], &[10.0, 10.0]), vec![-10.0, 0.0, 10.0]);
}

#[test]
fn place_balanced_handles_an_empty_layer() {
    assert!(place_balanced(&[], &[]).is_empty());
}

#[test]
fn position_stacks_ranks_by_their_tallest_node() {
    let mut g: LayoutGraph = Graph::new(GraphOptions { multigraph: true });
    g.set_graph(GraphLabel {
        ranksep: 10.0,
        ..Default::default()
    });
    g.set_node("a", node(10.0, 40.0, 0, 0));
    g.set_node("b", node(10.0, 20.0, 0, 1));
    g.set_node("c", node(10.0, 30.0, 1, 0));

    position(&mut g);
    assert_eq!(g.node("a").unwrap().y, Some(20.0));
    assert_eq!(g.node("b").unwrap().y, Some(20.0));
    assert_eq!(g.node("c").unwrap().y, Some(40.0 + 10.0 + 15.0));
}

#[test]
fn position_uses_edgesep_next_to_dummy_nodes() {
    let mut g: LayoutGraph = Graph::new(GraphOptions { multigraph: true });
    g.set_graph(GraphLabel {
        nodesep: 50.0,
        edgesep: 20.0,
        ..Default::default()
    });
    g.set_node("a", node(100.0, 10.0, 0, 0));
    g.set_node(
        "d",
        NodeLabel {
            dummy: true,
            ..node(0.0, 0.0, 0, 1)
        },
    );

    position(&mut g);
    let (a, d) = (g.node("a").unwrap().x.unwrap(), g.node("d").unwrap().x.unwrap());
    assert_eq!(d - a, 50.0 + 25.0 + 10.0);
}
