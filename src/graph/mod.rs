//! Directed weighted graph storage and path queries
//!
//! Provides the in-memory graph and its operations:
//! - Vertex interning and tagged-edge CRUD under a reader/writer lock
//! - Dijkstra single-pair shortest path over the adjacency lists

pub(crate) mod algos;
pub mod store;
pub mod types;

pub use store::Graph;
pub use types::{PathEdge, Weight};
