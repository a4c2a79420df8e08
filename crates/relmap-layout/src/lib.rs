#![forbid(unsafe_code)]

//! Layout adapter for relationship graphs.
//!
//! [`layout_elements`] feeds a node set and an edge list to the `stratum` layered layout engine
//! and returns a new node list whose positions are top-left corners. [`render`] turns a positioned
//! graph into the JSON shape the interactive graph widget consumes.

mod adapter;
mod options;
pub mod render;

pub use adapter::{build_graph, layout_elements, layout_graph};
pub use options::{LayoutOptions, NODE_HEIGHT, NODE_WIDTH};
pub use render::{RenderEdge, RenderGraph, RenderNode};
pub use stratum::RankDir;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("edge `{edge}` references unknown node `{node}`")]
    DanglingEdge { edge: String, node: String },

    #[error("duplicate node id `{id}`")]
    DuplicateNode { id: String },

    #[error("layout engine failure: {0}")]
    Engine(#[from] stratum::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
