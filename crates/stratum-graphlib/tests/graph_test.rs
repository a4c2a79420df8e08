use stratum_graphlib::{EdgeKey, Graph, GraphOptions};

fn multigraph() -> Graph<(), i32, ()> {
    Graph::new(GraphOptions { multigraph: true })
}

#[test]
fn nodes_iterate_in_insertion_order() {
    let mut g: Graph<i32, (), ()> = Graph::default();
    g.set_node("c", 3);
    g.set_node("a", 1);
    g.set_node("b", 2);
    g.set_node("a", 10);

    assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    assert_eq!(g.node("a"), Some(&10));
    assert_eq!(g.node_position("b"), Some(2));
    assert_eq!(g.node_count(), 3);
}

#[test]
fn set_edge_creates_missing_endpoints() {
    let mut g: Graph<i32, (), ()> = Graph::default();
    g.set_edge("a", "b");

    assert!(g.has_node("a"));
    assert!(g.has_node("b"));
    assert_eq!(g.node("a"), Some(&0));
    assert!(g.has_edge("a", "b", None));
    assert!(!g.has_edge("b", "a", None));
}

#[test]
fn set_edge_uses_the_default_edge_label() {
    let mut g = multigraph();
    g.set_default_edge_label(|| 42);
    g.set_edge("a", "b");
    assert_eq!(g.edge("a", "b", None), Some(&42));
}

#[test]
fn simple_graphs_ignore_edge_names() {
    let mut g: Graph<(), i32, ()> = Graph::default();
    g.set_edge_named("a", "b", Some("x"), Some(1));
    g.set_edge_named("a", "b", Some("y"), Some(2));

    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge("a", "b", Some("anything")), Some(&2));
}

#[test]
fn multigraphs_keep_parallel_named_edges() {
    let mut g = multigraph();
    g.set_edge_named("a", "b", Some("x"), Some(1));
    g.set_edge_named("a", "b", Some("y"), Some(2));

    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edge("a", "b", Some("x")), Some(&1));
    assert_eq!(g.edge("a", "b", Some("y")), Some(&2));
    assert_eq!(g.out_edges("a", None).len(), 2);
    assert_eq!(g.successors("a"), vec!["b"]);
}

#[test]
fn remove_edge_key_returns_the_label_and_updates_adjacency() {
    let mut g = multigraph();
    g.set_edge_with_label("a", "b", 1);
    g.set_edge_with_label("b", "c", 2);
    g.set_edge_with_label("a", "c", 3);

    let removed = g.remove_edge_key(&EdgeKey::new("a", "b", None::<String>));
    assert_eq!(removed, Some(1));
    assert_eq!(g.edge_count(), 2);
    assert!(g.in_edges("b", None).is_empty());
    assert_eq!(g.successors("a"), vec!["c"]);
    assert_eq!(g.remove_edge_key(&EdgeKey::new("a", "b", None::<String>)), None);

    let keys: Vec<(String, String)> = g.edges().map(|k| (k.v.clone(), k.w.clone())).collect();
    assert_eq!(
        keys,
        vec![
            ("b".to_string(), "c".to_string()),
            ("a".to_string(), "c".to_string())
        ]
    );
}

#[test]
fn re_added_edges_move_to_the_end_of_the_edge_order() {
    let mut g = multigraph();
    g.set_path(&["a", "b", "c"]);
    let ab = EdgeKey::new("a", "b", None::<String>);
    let label = g.remove_edge_key(&ab);
    g.set_edge_named("b", "a", Some("rev1"), label);

    let order: Vec<String> = g.edges().map(|k| format!("{}{}", k.v, k.w)).collect();
    assert_eq!(order, vec!["bc", "ba"]);
}

#[test]
fn in_and_out_edges_can_be_filtered_by_the_other_endpoint() {
    let mut g = multigraph();
    g.set_edge("a", "b");
    g.set_edge("a", "c");
    g.set_edge("d", "c");

    assert_eq!(g.out_edges("a", Some("c")).len(), 1);
    assert_eq!(g.in_edges("c", Some("d")).len(), 1);
    assert_eq!(g.in_edges("c", None).len(), 2);
    assert_eq!(g.predecessors("c"), vec!["a", "d"]);
    assert!(g.out_edges("missing", None).is_empty());
}

#[test]
fn sources_and_sinks_follow_insertion_order() {
    let mut g = multigraph();
    g.set_node("lonely", ());
    g.set_path(&["a", "b", "c"]);
    g.set_edge("x", "c");

    assert_eq!(g.sources(), vec!["lonely", "a", "x"]);
    assert_eq!(g.sinks(), vec!["lonely", "c"]);
}

#[test]
fn edge_mut_by_key_updates_the_label_in_place() {
    let mut g = multigraph();
    g.set_edge_with_label("a", "b", 1);
    let key = EdgeKey::new("a", "b", None::<String>);
    if let Some(label) = g.edge_mut_by_key(&key) {
        *label = 9;
    }
    assert_eq!(g.edge_by_key(&key), Some(&9));
}
