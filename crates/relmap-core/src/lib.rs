#![forbid(unsafe_code)]

//! Relationship graph model (headless).
//!
//! The remote extraction service answers with `(from, to, label)` triples. This crate turns them
//! into a node set and an edge list with stable ids, ready for layout:
//! - [`normalize`] deduplicates entities in first-occurrence order and drops malformed triples
//! - [`wire`] holds the request/response shapes of the service
//! - [`model`] holds the node/edge types shared with the layout and render layers

pub mod error;
pub mod model;
pub mod normalize;
pub mod wire;

pub use error::{Error, Result};
pub use model::{Edge, Node, NodeRole, Position, RelationGraph, Relationship};
pub use normalize::{normalize, prune_dangling_edges, slugify};
pub use wire::{GenerateRequest, GenerateResponse, ModelChoice, ServiceError, parse_response};
