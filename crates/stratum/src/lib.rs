//! Layered (Sugiyama-style) graph layout.
//!
//! The pipeline breaks cycles, assigns longest-path ranks, threads dummy nodes through long edges,
//! reduces crossings with barycenter sweeps and finally assigns coordinates from the spacing
//! parameters on [`GraphLabel`]. Output coordinates are node centers.

#![forbid(unsafe_code)]

pub use stratum_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod acyclic;
pub mod coordinate_system;
mod model;
pub mod normalize;
pub mod order;
mod pipeline;
pub mod position;
pub mod rank;
pub mod util;

pub use model::{EdgeLabel, GraphLabel, NodeLabel, ParseRankDirError, RankDir};
pub use pipeline::layout;

/// A layout graph as consumed by [`layout`].
pub type LayoutGraph = graphlib::Graph<NodeLabel, EdgeLabel, GraphLabel>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("node `{id}` has an invalid size ({width} x {height})")]
    InvalidNodeSize { id: String, width: f64, height: f64 },

    #[error("invalid {name}: {value} (expected a finite, non-negative number)")]
    InvalidSpacing { name: &'static str, value: f64 },

    #[error("graph still contains a cycle through `{id}` after cycle breaking")]
    Cycle { id: String },

    #[error("layout produced a non-finite coordinate for node `{id}`")]
    NonFiniteCoordinate { id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
