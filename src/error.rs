//! Error types for graph operations
//!
//! Failure classes:
//! - `InvalidArgument`: malformed input (zero weight, unknown endpoint)
//! - `DuplicateEdge`: inserting an edge that already exists
//! - `NotFound`: looking up an edge that does not exist

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Broad failure classes for graph operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed input: zero weight, or an endpoint that is not a vertex
    InvalidArgument,
    /// An edge with the same source, destination and tag already exists
    DuplicateEdge,
    /// The queried edge does not exist
    NotFound,
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Invalid arguments (rejected before the graph is touched)
    #[error("edge weight must be non-zero")]
    ZeroWeight,

    #[error("vertex not in graph: {vertex}")]
    UnknownVertex { vertex: String },

    // Duplicate insertion
    #[error("edge already exists: {src} -> {dest}{}", fmt_tag(.tag))]
    DuplicateEdge {
        src: String,
        dest: String,
        tag: Option<String>,
    },

    // Missing edge lookups
    #[error("edge not found: {src} -> {dest}{}", fmt_tag(.tag))]
    EdgeNotFound {
        src: String,
        dest: String,
        tag: Option<String>,
    },
}

impl GraphError {
    /// Create an error for an endpoint that is not a vertex of the graph
    pub fn unknown_vertex(vertex: impl fmt::Debug) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for an edge that already exists
    pub fn duplicate_edge(src: impl fmt::Debug, dest: impl fmt::Debug, tag: Option<&str>) -> Self {
        GraphError::DuplicateEdge {
            src: format!("{:?}", src),
            dest: format!("{:?}", dest),
            tag: tag.map(str::to_owned),
        }
    }

    /// Create an error for an edge that was not found
    pub fn edge_not_found(src: impl fmt::Debug, dest: impl fmt::Debug, tag: Option<&str>) -> Self {
        GraphError::EdgeNotFound {
            src: format!("{:?}", src),
            dest: format!("{:?}", dest),
            tag: tag.map(str::to_owned),
        }
    }

    /// Get the failure class for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            // Invalid arguments
            GraphError::ZeroWeight | GraphError::UnknownVertex { .. } => ErrorKind::InvalidArgument,

            // Duplicate insertion
            GraphError::DuplicateEdge { .. } => ErrorKind::DuplicateEdge,

            // Missing edge lookups
            GraphError::EdgeNotFound { .. } => ErrorKind::NotFound,
        }
    }
}

fn fmt_tag(tag: &Option<String>) -> String {
    match tag {
        Some(tag) => format!(" (tag '{}')", tag),
        None => String::new(),
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
