//! Relationship normalization.
//!
//! Entities become nodes in first-occurrence order; triples become edges in input order with
//! position-based ids (`e{index}`, counted over the input, so dropped triples leave gaps).
//! Malformed triples are dropped with a warning rather than failing the whole response.

use crate::model::{Edge, Node, NodeRole, RelationGraph, Relationship};
use indexmap::IndexMap;
use rustc_hash::FxHashSet as HashSet;

/// Node id for a display name: trimmed, with every internal whitespace run replaced by `-`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("-")
}

pub fn normalize(relationships: &[Relationship]) -> RelationGraph {
    let mut nodes: IndexMap<String, Node> = IndexMap::new();
    for rel in relationships {
        for (name, role) in [(&rel.from, NodeRole::Source), (&rel.to, NodeRole::Target)] {
            let id = slugify(name);
            if id.is_empty() {
                continue;
            }
            nodes
                .entry(id)
                .or_insert_with_key(|id| Node::new(id.clone(), name.trim(), role));
        }
    }

    let mut edges: Vec<Edge> = Vec::with_capacity(relationships.len());
    for (index, rel) in relationships.iter().enumerate() {
        let source = slugify(&rel.from);
        let target = slugify(&rel.to);
        if !(nodes.contains_key(&source) && nodes.contains_key(&target)) {
            tracing::warn!(
                index,
                from = %rel.from,
                to = %rel.to,
                "dropping relationship with a blank endpoint"
            );
            continue;
        }
        edges.push(Edge {
            id: format!("e{index}"),
            source,
            target,
            label: rel.label.clone(),
        });
    }

    tracing::debug!(
        relationships = relationships.len(),
        nodes = nodes.len(),
        edges = edges.len(),
        "normalized relationships"
    );
    RelationGraph {
        nodes: nodes.into_values().collect(),
        edges,
    }
}

/// Keeps the edges whose endpoints both name a node in `nodes`, in their original order.
pub fn prune_dangling_edges(nodes: &[Node], edges: Vec<Edge>) -> Vec<Edge> {
    let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    edges
        .into_iter()
        .filter(|e| {
            let keep = known.contains(e.source.as_str()) && known.contains(e.target.as_str());
            if !keep {
                tracing::warn!(
                    edge = %e.id,
                    source = %e.source,
                    target = %e.target,
                    "dropping edge with an unknown endpoint"
                );
            }
            keep
        })
        .collect()
}
