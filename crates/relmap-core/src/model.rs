//! Node and edge types.
//!
//! Positions are top-left corners in layout units. Everything here is rebuilt from scratch for
//! every service response.

use serde::{Deserialize, Serialize};

/// One `from -> to` statement extracted by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub label: String,
}

impl Relationship {
    pub fn new(from: impl Into<String>, to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: label.into(),
        }
    }
}

/// The side of a relationship on which an entity first appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    #[default]
    Source,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub role: NodeRole,
    #[serde(default)]
    pub position: Position,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, role: NodeRole) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            role,
            position: Position::ORIGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: String,
}

/// A node set plus the edges between them.
///
/// Node ids are unique and every edge endpoint names a node in `nodes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl RelationGraph {
    pub fn from_relationships(relationships: &[Relationship]) -> Self {
        crate::normalize::normalize(relationships)
    }

    /// Builds a graph from pre-made parts, keeping the first node for each id and dropping edges
    /// whose endpoints are unknown.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut unique: indexmap::IndexMap<String, Node> = indexmap::IndexMap::new();
        for node in nodes {
            if unique.contains_key(&node.id) {
                tracing::warn!(id = %node.id, "dropping duplicate node id");
                continue;
            }
            unique.insert(node.id.clone(), node);
        }
        let nodes: Vec<Node> = unique.into_values().collect();
        let edges = crate::normalize::prune_dangling_edges(&nodes, edges);
        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
