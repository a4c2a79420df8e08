use stratum::graphlib::{Graph, GraphOptions};
use stratum::order::{BarycenterEntry, cross_count, init_order, order, sort};
use stratum::{EdgeLabel, GraphLabel, LayoutGraph, NodeLabel, util};

fn new_graph() -> LayoutGraph {
    let mut g: LayoutGraph = Graph::new(GraphOptions { multigraph: true });
    g.set_graph(GraphLabel::default());
    g
}

fn ranked(id: &str, rank: i32) -> (String, NodeLabel) {
    (
        id.to_string(),
        NodeLabel {
            rank: Some(rank),
            ..Default::default()
        },
    )
}

fn layering(layers: &[&[&str]]) -> Vec<Vec<String>> {
    layers
        .iter()
        .map(|l| l.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn entry(v: &str, i: usize, barycenter: Option<f64>) -> BarycenterEntry {
    BarycenterEntry {
        v: v.to_string(),
        i,
        barycenter,
        weight: 1.0,
    }
}

#[test]
fn cross_count_returns_0_for_an_empty_layering() {
    let g = new_graph();
    assert_eq!(cross_count(&g, &[]), 0.0);
}

#[test]
fn cross_count_returns_0_for_a_layering_with_no_crossings() {
    let mut g = new_graph();
    g.set_edge("a1", "b1");
    g.set_edge("a2", "b2");
    assert_eq!(cross_count(&g, &layering(&[&["a1", "a2"], &["b1", "b2"]])), 0.0);
}

#[test]
fn cross_count_returns_1_for_a_layering_with_1_crossing() {
    let mut g = new_graph();
    g.set_edge("a1", "b1");
    g.set_edge("a2", "b2");
    assert_eq!(cross_count(&g, &layering(&[&["a1", "a2"], &["b2", "b1"]])), 1.0);
}

#[test]
fn cross_count_weights_crossings_by_edge_weight() {
    let mut g = new_graph();
    g.set_edge_with_label(
        "a1",
        "b1",
        EdgeLabel {
            weight: 2.0,
            ..Default::default()
        },
    );
    g.set_edge("a2", "b2");
    assert_eq!(cross_count(&g, &layering(&[&["a1", "a2"], &["b2", "b1"]])), 2.0);
}

#[test]
fn cross_count_sums_crossings_across_layers() {
    let mut g = new_graph();
    g.set_path(&["a1", "b1", "c1"]);
    g.set_path(&["a2", "b2", "c2"]);
    assert_eq!(
        cross_count(
            &g,
            &layering(&[&["a1", "a2"], &["b2", "b1"], &["c1", "c2"]])
        ),
        2.0
    );
}

#[test]
fn init_order_assigns_non_overlapping_orders_per_rank() {
    let mut g = new_graph();
    for (id, r) in [ranked("a", 0), ranked("b", 1), ranked("c", 1), ranked("d", 0)] {
        g.set_node(id, r);
    }
    g.set_edge("a", "c");
    g.set_edge("d", "b");

    let layers = init_order(&g);
    assert_eq!(layers, layering(&[&["a", "d"], &["c", "b"]]));
}

#[test]
fn init_order_is_empty_without_ranks() {
    let mut g = new_graph();
    g.set_node("a", NodeLabel::default());
    assert!(init_order(&g).is_empty());
}

#[test]
fn sort_orders_by_barycenter() {
    let sorted = sort(vec![entry("a", 0, Some(2.0)), entry("b", 1, Some(1.0))], false);
    assert_eq!(sorted, vec!["b", "a"]);
}

#[test]
fn sort_keeps_entries_without_a_barycenter_in_place() {
    let sorted = sort(
        vec![
            entry("a", 0, Some(3.0)),
            entry("b", 1, None),
            entry("c", 2, Some(1.0)),
        ],
        false,
    );
    assert_eq!(sorted, vec!["c", "b", "a"]);
}

#[test]
fn sort_breaks_ties_by_index_with_the_requested_bias() {
    let entries = vec![entry("a", 0, Some(1.0)), entry("b", 1, Some(1.0))];
    assert_eq!(sort(entries.clone(), false), vec!["a", "b"]);
    assert_eq!(sort(entries, true), vec!["b", "a"]);
}

#[test]
fn order_removes_an_avoidable_crossing() {
    let mut g = new_graph();
    for (id, r) in [
        ranked("a", 0),
        ranked("b", 0),
        ranked("c", 1),
        ranked("x", 1),
        ranked("y", 1),
        ranked("p", 2),
        ranked("q", 2),
    ] {
        g.set_node(id, r);
    }
    g.set_edge("a", "c");
    g.set_edge("c", "q");
    g.set_edge("b", "x");
    g.set_edge("x", "p");
    g.set_edge("b", "y");
    g.set_edge("y", "q");

    // Depth-first: [a, b], [c, x, y], [q, p]; `x -> p` crosses `y -> q`.
    assert_eq!(cross_count(&g, &init_order(&g)), 1.0);

    order(&mut g);
    let layers = util::build_layer_matrix(&g);
    assert_eq!(cross_count(&g, &layers), 0.0);
    assert_eq!(layers[1], vec!["c", "y", "x"]);
    for layer in &layers {
        let mut orders: Vec<usize> = layer
            .iter()
            .map(|v| g.node(v).unwrap().order.unwrap())
            .collect();
        orders.sort_unstable();
        assert_eq!(orders, (0..layer.len()).collect::<Vec<_>>());
    }
}
