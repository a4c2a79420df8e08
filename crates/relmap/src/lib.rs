#![forbid(unsafe_code)]

//! `relmap` turns the relationship triples extracted from source code into a positioned graph.
//!
//! The pipeline is `response -> normalize -> layout -> render`. [`build`] runs it and reports
//! every failure; [`generate`] runs it and degrades any failure to an empty graph with the
//! "No relationships found." status, which is what an interactive front end shows. [`Session`]
//! owns the state of such a front end.

mod session;

pub use relmap_core::*;
pub use session::{Action, Session, Status};

pub mod layout {
    pub use relmap_layout::render::{
        EDGE_STROKE, EDGE_TYPE, LabelBgStyle, LabelStyle, NodeData, NodeStyle, SOURCE_BACKGROUND,
        TARGET_BACKGROUND,
    };
    pub use relmap_layout::{
        Error, LayoutOptions, NODE_HEIGHT, NODE_WIDTH, RankDir, RenderEdge, RenderGraph,
        RenderNode, Result, build_graph, layout_elements, layout_graph,
    };
}

use relmap_layout::{LayoutOptions, RenderGraph};

pub const NO_RELATIONSHIPS: &str = "No relationships found.";

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Response(#[from] relmap_core::Error),
    #[error(transparent)]
    Layout(#[from] relmap_layout::Error),
}

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

/// The outcome of one generate round trip, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub graph: RenderGraph,
    pub summary: String,
    pub status: Status,
}

impl Generated {
    pub fn no_relationships(summary: impl Into<String>) -> Self {
        Self {
            graph: RenderGraph::default(),
            summary: summary.into(),
            status: Status::NoRelationships,
        }
    }
}

/// Normalizes, lays out and converts a service response.
pub fn build(response: &GenerateResponse, options: &LayoutOptions) -> PipelineResult<RenderGraph> {
    let graph = normalize(&response.relationships);
    let laid_out = relmap_layout::layout_graph(&graph, options)?;
    Ok(RenderGraph::from(&laid_out))
}

/// Like [`build`], but never fails: errors and empty results become
/// [`Status::NoRelationships`] with an empty graph.
pub fn generate(response: &GenerateResponse, options: &LayoutOptions) -> Generated {
    match build(response, options) {
        Ok(graph) if graph.nodes.is_empty() => Generated::no_relationships(response.summary.clone()),
        Ok(graph) => Generated {
            graph,
            summary: response.summary.clone(),
            status: Status::Ready,
        },
        Err(err) => {
            tracing::warn!(error = %err, "generate failed");
            Generated::no_relationships(String::new())
        }
    }
}

/// [`generate`] straight from a raw response body.
pub fn generate_from_body(body: &str, options: &LayoutOptions) -> Generated {
    match parse_response(body) {
        Ok(response) => generate(&response, options),
        Err(err) => {
            tracing::warn!(error = %err, "unreadable service response");
            Generated::no_relationships(String::new())
        }
    }
}
