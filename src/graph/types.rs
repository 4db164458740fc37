use serde::Serialize;
use std::fmt;

/// Edge weight and accumulated path cost.
///
/// Weights must be non-zero; costs accumulate with saturating addition,
/// and `Weight::MAX` is reserved as the not-yet-reached sentinel during
/// search. A path whose cost saturates is indistinguishable from an
/// unreachable destination.
pub type Weight = u64;

/// Index of an interned vertex in the graph's arena
pub(crate) type VertexId = usize;

/// Outgoing edge as stored in an adjacency list.
/// The source end is the adjacency key, so only the destination is recorded.
#[derive(Debug, Clone)]
pub(crate) struct OutEdge {
    pub(crate) dest: VertexId,
    pub(crate) weight: Weight,
    pub(crate) tag: Option<String>,
}

/// A single hop of a resolved path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEdge<T> {
    /// Vertex the hop leaves from
    pub source: T,
    /// Vertex the hop arrives at
    pub destination: T,
    /// Cost of traversing this hop
    pub weight: Weight,
    /// Tag of the traversed edge, if it carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl<T: fmt::Display> fmt::Display for PathEdge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}, cost {}", self.source, self.destination, self.weight)?;
        if let Some(tag) = &self.tag {
            write!(f, ", tag '{}'", tag)?;
        }
        Ok(())
    }
}
