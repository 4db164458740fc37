//! Single-pair shortest path over the vertex arena
//!
//! Classic Dijkstra with a decrease-key heap: every vertex is seeded up
//! front, relaxation only ever lowers a key in place, and the search stops
//! as soon as the destination is popped. Ties are never re-relaxed, so the
//! first hop to reach a vertex at a given cost is the one that stays.

use crate::graph::algos::heap::DistanceHeap;
use crate::graph::store::GraphInner;
use crate::graph::types::{OutEdge, PathEdge, VertexId, Weight};
use std::time::Instant;

/// Predecessor hop recorded when a relaxation improves a vertex
#[derive(Clone, Copy)]
struct Hop<'a> {
    source: VertexId,
    edge: &'a OutEdge,
}

/// Resolve the cheapest path from `src` to `dest`.
///
/// Returns an empty vector when `dest` is unreachable, and also when
/// `src == dest`: a vertex is at distance zero from itself and there is
/// no hop to report.
pub(crate) fn find_path<T: Clone>(
    inner: &GraphInner<T>,
    src: VertexId,
    dest: VertexId,
) -> Vec<PathEdge<T>> {
    let started = Instant::now();
    let vertex_count = inner.vertices.len();
    let mut dist = vec![Weight::MAX; vertex_count];
    dist[src] = 0;
    let mut prev: Vec<Option<Hop<'_>>> = vec![None; vertex_count];
    let mut heap = DistanceHeap::seeded(vertex_count, src);
    let mut settled = 0usize;

    while let Some((current, current_dist)) = heap.pop_min() {
        // A MAX pop means everything left in the heap is unreachable.
        if current == dest || current_dist == Weight::MAX {
            break;
        }
        settled += 1;

        let Some(outgoing) = inner.edges.get(&current) else {
            continue;
        };
        for edge in outgoing {
            let candidate = current_dist.saturating_add(edge.weight);
            // Strict improvement only: on a tie the earlier hop stays.
            if candidate < dist[edge.dest] {
                dist[edge.dest] = candidate;
                prev[edge.dest] = Some(Hop {
                    source: current,
                    edge,
                });
                heap.decrease(edge.dest, candidate);
            }
        }
    }

    let path = reconstruct(inner, dest, &prev);
    crate::trace_time!(started, "dijkstra_find_path", settled = settled, hops = path.len());
    path
}

/// Walk the predecessor chain backwards from `dest`, then flip it forward
fn reconstruct<T: Clone>(
    inner: &GraphInner<T>,
    dest: VertexId,
    prev: &[Option<Hop<'_>>],
) -> Vec<PathEdge<T>> {
    let mut path = Vec::new();
    let mut current = dest;
    while let Some(hop) = prev[current] {
        path.push(PathEdge {
            source: inner.vertices[hop.source].clone(),
            destination: inner.vertices[current].clone(),
            weight: hop.edge.weight,
            tag: hop.edge.tag.clone(),
        });
        current = hop.source;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests;
