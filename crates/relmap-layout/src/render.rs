//! Render surface conversion.
//!
//! The graph widget takes `{ nodes, edges }` in its own camelCase shape with inline styles.
//! Source entities are drawn blue, target entities purple; every edge is an animated amber
//! smoothstep with a dark label badge.

use relmap_core::{Edge, Node, NodeRole, Position, RelationGraph};
use serde::{Deserialize, Serialize};

pub const SOURCE_BACKGROUND: &str = "#1d4ed8";
pub const TARGET_BACKGROUND: &str = "#9333ea";
pub const EDGE_STROKE: &str = "#f59e0b";
pub const EDGE_TYPE: &str = "smoothstep";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub background_color: String,
    pub color: String,
    pub border_radius: String,
    pub padding: String,
    pub text_align: String,
}

impl NodeStyle {
    pub fn for_role(role: NodeRole) -> Self {
        let background = match role {
            NodeRole::Source => SOURCE_BACKGROUND,
            NodeRole::Target => TARGET_BACKGROUND,
        };
        Self {
            background_color: background.to_string(),
            color: "#fff".to_string(),
            border_radius: "8px".to_string(),
            padding: "10px".to_string(),
            text_align: "center".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    pub id: String,
    pub position: Position,
    pub data: NodeData,
    pub style: NodeStyle,
    pub draggable: bool,
}

impl From<&Node> for RenderNode {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            position: node.position,
            data: NodeData {
                label: node.label.clone(),
            },
            style: NodeStyle::for_role(node.role),
            draggable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub stroke: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    pub fill: String,
    pub font_weight: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelBgStyle {
    pub fill: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    pub animated: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub style: EdgeStyle,
    pub label_style: LabelStyle,
    pub label_bg_style: LabelBgStyle,
    pub label_bg_padding: [u32; 2],
    pub label_bg_border_radius: u32,
}

impl From<&Edge> for RenderEdge {
    fn from(edge: &Edge) -> Self {
        Self {
            id: edge.id.clone(),
            source: edge.source.clone(),
            target: edge.target.clone(),
            label: edge.label.clone(),
            animated: true,
            kind: EDGE_TYPE.to_string(),
            style: EdgeStyle {
                stroke: EDGE_STROKE.to_string(),
            },
            label_style: LabelStyle {
                fill: "#fff".to_string(),
                font_weight: "bold".to_string(),
                font_size: 12,
            },
            label_bg_style: LabelBgStyle {
                fill: "rgba(0, 0, 0, 0.7)".to_string(),
                color: "#fff".to_string(),
            },
            label_bg_padding: [8, 4],
            label_bg_border_radius: 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderGraph {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
}

impl RenderGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl From<&RelationGraph> for RenderGraph {
    fn from(graph: &RelationGraph) -> Self {
        Self {
            nodes: graph.nodes.iter().map(RenderNode::from).collect(),
            edges: graph.edges.iter().map(RenderEdge::from).collect(),
        }
    }
}
