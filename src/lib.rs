//! Skein
//!
//! In-memory directed weighted graph with value-interned vertices,
//! optionally tagged edges, and single-pair shortest-path queries.

pub mod error;
pub mod graph;
pub mod logging;
