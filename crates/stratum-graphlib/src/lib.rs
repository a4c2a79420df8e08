//! Graph container APIs used by `stratum`.
//!
//! Nodes are keyed by string id and edges by `(v, w, name)`. Every iteration API returns items in
//! insertion order, which the layout passes rely on for deterministic tie-breaking.

mod graph;

pub use graph::{EdgeKey, Graph, GraphOptions};
