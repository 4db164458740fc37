//! Locked vertex and edge storage
//!
//! The graph interns vertex values into an arena and keeps directed,
//! tagged adjacency lists per vertex, all behind a reader/writer lock.

use crate::error::{GraphError, Result};
use crate::graph::algos::dijkstra;
use crate::graph::types::{OutEdge, PathEdge, VertexId, Weight};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A directed, weighted graph over values of type `T`.
///
/// Vertices are interned by value: adding the same value twice yields the
/// same vertex, and every operation addresses vertices by value. Edges are
/// directed, carry a non-zero weight and an optional tag, and parallel
/// edges between the same endpoints may coexist as long as their tags
/// differ. A symmetric edge is stored as two independent directed edges.
///
/// All operations take an internal reader/writer lock, so a `Graph` can be
/// shared across threads by reference; lookups and path queries run
/// concurrently while mutations get exclusive access.
#[derive(Debug)]
pub struct Graph<T> {
    inner: RwLock<GraphInner<T>>,
}

/// State guarded by the graph's lock: the vertex arena (in insertion
/// order), the value-to-id intern map, and the adjacency lists.
#[derive(Debug)]
pub(crate) struct GraphInner<T> {
    pub(crate) vertices: Vec<T>,
    pub(crate) ids: HashMap<T, VertexId>,
    pub(crate) edges: HashMap<VertexId, Vec<OutEdge>>,
}

impl<T> Graph<T> {
    /// Create an empty graph
    pub fn new() -> Self {
        Graph {
            inner: RwLock::new(GraphInner::default()),
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    /// Add a vertex. Adding a value that is already a vertex is a no-op,
    /// and the existing vertex keeps its edges.
    pub fn add_vertex(&self, value: T) {
        self.inner.write().intern(value);
    }

    /// Check whether `value` is a vertex of the graph
    pub fn contains_vertex(&self, value: &T) -> bool {
        self.inner.read().ids.contains_key(value)
    }

    /// Number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.inner.read().vertices.len()
    }

    /// Number of directed edges in the graph. A symmetric edge counts as
    /// two.
    pub fn edge_count(&self) -> usize {
        self.inner.read().edges.values().map(Vec::len).sum()
    }

    /// Check whether the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.inner.read().vertices.is_empty()
    }

    /// Add a directed edge from `src` to `dest`.
    ///
    /// The weight must be non-zero and both endpoints must already be
    /// vertices. At most one edge may exist per `(src, dest, tag)` triple;
    /// a second edge between the same endpoints needs a different tag.
    pub fn add_edge(&self, src: &T, dest: &T, weight: Weight, tag: Option<&str>) -> Result<()> {
        let mut inner = self.inner.write();
        let (src_id, dest_id) = inner.check_edge(src, dest, weight)?;
        inner.insert_edge(src_id, dest_id, weight, tag)
    }

    /// Add a pair of directed edges, `src -> dest` and `dest -> src`, with
    /// the same weight and tag.
    ///
    /// The pair is all-or-nothing: if the reverse edge turns out to be a
    /// duplicate the forward edge is rolled back before returning the
    /// error.
    pub fn add_symmetric_edge(
        &self,
        src: &T,
        dest: &T,
        weight: Weight,
        tag: Option<&str>,
    ) -> Result<()> {
        let mut inner = self.inner.write();
        let (src_id, dest_id) = inner.check_edge(src, dest, weight)?;
        inner.insert_edge(src_id, dest_id, weight, tag)?;
        if let Err(err) = inner.insert_edge(dest_id, src_id, weight, tag) {
            inner.delete_edge(src_id, dest_id, tag);
            return Err(err);
        }
        Ok(())
    }

    /// Remove the edge matching `(src, dest, tag)` exactly. Removing an
    /// edge that does not exist is a no-op.
    pub fn remove_edge(&self, src: &T, dest: &T, tag: Option<&str>) {
        let mut inner = self.inner.write();
        if let (Some(src_id), Some(dest_id)) = (inner.id_of(src), inner.id_of(dest)) {
            inner.delete_edge(src_id, dest_id, tag);
        }
    }

    /// Remove both directions of a symmetric edge. Each direction is
    /// removed independently, so a half-present pair loses whichever half
    /// exists.
    pub fn remove_symmetric_edge(&self, src: &T, dest: &T, tag: Option<&str>) {
        let mut inner = self.inner.write();
        if let (Some(src_id), Some(dest_id)) = (inner.id_of(src), inner.id_of(dest)) {
            inner.delete_edge(src_id, dest_id, tag);
            inner.delete_edge(dest_id, src_id, tag);
        }
    }

    /// Check whether an edge matching `(src, dest, tag)` exists
    pub fn contains_edge(&self, src: &T, dest: &T, tag: Option<&str>) -> bool {
        let inner = self.inner.read();
        match (inner.id_of(src), inner.id_of(dest)) {
            (Some(src_id), Some(dest_id)) => inner.find_edge(src_id, dest_id, tag).is_some(),
            _ => false,
        }
    }

    /// Check whether both directions of a symmetric edge exist with the
    /// given tag and equal weights
    pub fn contains_symmetric_edge(&self, src: &T, dest: &T, tag: Option<&str>) -> bool {
        let inner = self.inner.read();
        let (Some(src_id), Some(dest_id)) = (inner.id_of(src), inner.id_of(dest)) else {
            return false;
        };
        match (
            inner.find_edge(src_id, dest_id, tag),
            inner.find_edge(dest_id, src_id, tag),
        ) {
            (Some(forward), Some(reverse)) => forward.weight == reverse.weight,
            _ => false,
        }
    }

    /// Look up the edge matching `(src, dest, tag)` and return it as a
    /// path hop
    pub fn get_edge(&self, src: &T, dest: &T, tag: Option<&str>) -> Result<PathEdge<T>> {
        let inner = self.inner.read();
        let found = match (inner.id_of(src), inner.id_of(dest)) {
            (Some(src_id), Some(dest_id)) => inner.find_edge(src_id, dest_id, tag),
            _ => None,
        };
        match found {
            Some(edge) => Ok(PathEdge {
                source: src.clone(),
                destination: dest.clone(),
                weight: edge.weight,
                tag: edge.tag.clone(),
            }),
            None => Err(GraphError::edge_not_found(src, dest, tag)),
        }
    }

    /// Resolve the cheapest path from `src` to `dest` as a sequence of
    /// hops.
    ///
    /// Both endpoints must be vertices of the graph. An unreachable
    /// destination yields an empty path rather than an error, as does
    /// `src == dest`.
    #[tracing::instrument(skip(self), fields(src = ?src, dest = ?dest))]
    pub fn shortest_path(&self, src: &T, dest: &T) -> Result<Vec<PathEdge<T>>> {
        let inner = self.inner.read();
        let src_id = inner.require_vertex(src)?;
        let dest_id = inner.require_vertex(dest)?;
        let path = dijkstra::find_path(&inner, src_id, dest_id);
        tracing::debug!(hops = path.len(), "shortest path resolved");
        Ok(path)
    }
}

impl<T> Default for GraphInner<T> {
    fn default() -> Self {
        GraphInner {
            vertices: Vec::new(),
            ids: HashMap::new(),
            edges: HashMap::new(),
        }
    }
}

impl<T> GraphInner<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    /// Intern `value` into the arena, returning its id
    fn intern(&mut self, value: T) -> VertexId {
        if let Some(&id) = self.ids.get(&value) {
            return id;
        }
        let id = self.vertices.len();
        self.vertices.push(value.clone());
        self.ids.insert(value, id);
        id
    }

    fn id_of(&self, value: &T) -> Option<VertexId> {
        self.ids.get(value).copied()
    }

    fn require_vertex(&self, value: &T) -> Result<VertexId> {
        self.id_of(value)
            .ok_or_else(|| GraphError::unknown_vertex(value))
    }

    /// Validate an edge insertion: non-zero weight first, then both
    /// endpoints
    fn check_edge(&self, src: &T, dest: &T, weight: Weight) -> Result<(VertexId, VertexId)> {
        if weight == 0 {
            return Err(GraphError::ZeroWeight);
        }
        let src_id = self.require_vertex(src)?;
        let dest_id = self.require_vertex(dest)?;
        Ok((src_id, dest_id))
    }

    fn find_edge(&self, src: VertexId, dest: VertexId, tag: Option<&str>) -> Option<&OutEdge> {
        self.edges
            .get(&src)?
            .iter()
            .find(|edge| edge.dest == dest && edge.tag.as_deref() == tag)
    }

    fn insert_edge(
        &mut self,
        src: VertexId,
        dest: VertexId,
        weight: Weight,
        tag: Option<&str>,
    ) -> Result<()> {
        if self.find_edge(src, dest, tag).is_some() {
            return Err(GraphError::duplicate_edge(
                &self.vertices[src],
                &self.vertices[dest],
                tag,
            ));
        }
        self.edges.entry(src).or_default().push(OutEdge {
            dest,
            weight,
            tag: tag.map(str::to_owned),
        });
        Ok(())
    }

    /// Remove the first edge matching `(src, dest, tag)` exactly; the
    /// remaining edges keep their insertion order
    fn delete_edge(&mut self, src: VertexId, dest: VertexId, tag: Option<&str>) {
        if let Some(outgoing) = self.edges.get_mut(&src) {
            if let Some(found) = outgoing
                .iter()
                .position(|edge| edge.dest == dest && edge.tag.as_deref() == tag)
            {
                outgoing.remove(found);
            }
        }
    }
}
