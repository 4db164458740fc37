//! Arena-indexed min-heap for the shortest-path search

use crate::graph::types::{VertexId, Weight};

/// Binary min-heap over vertex distances with in-place decrease-key.
///
/// Every vertex is seeded exactly once and `slots` maps an arena index to
/// its current position in `entries`, so a relaxation can lower a key and
/// restore heap order in O(log n) instead of rebuilding the whole heap.
/// A `None` slot means the vertex has already been popped.
#[derive(Debug)]
pub(crate) struct DistanceHeap {
    entries: Vec<HeapEntry>,
    slots: Vec<Option<usize>>,
}

/// Heap entry ordered by accumulated distance
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    vertex: VertexId,
    distance: Weight,
}

impl DistanceHeap {
    /// Seed the heap with every vertex of the arena: `src` at distance 0,
    /// the rest at `Weight::MAX`.
    pub(crate) fn seeded(vertex_count: usize, src: VertexId) -> Self {
        let mut heap = DistanceHeap {
            entries: Vec::with_capacity(vertex_count),
            slots: vec![None; vertex_count],
        };
        // Pushing src first keeps every push O(1): all later entries are
        // MAX and never sift above their parent.
        heap.push(src, 0);
        for vertex in 0..vertex_count {
            if vertex != src {
                heap.push(vertex, Weight::MAX);
            }
        }
        heap
    }

    fn push(&mut self, vertex: VertexId, distance: Weight) {
        let slot = self.entries.len();
        self.entries.push(HeapEntry { vertex, distance });
        self.slots[vertex] = Some(slot);
        self.sift_up(slot);
    }

    /// Pop the vertex with the smallest distance, or `None` once every
    /// vertex has been popped.
    pub(crate) fn pop_min(&mut self) -> Option<(VertexId, Weight)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.swap_entries(0, last);
        let entry = self.entries.pop()?;
        self.slots[entry.vertex] = None;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((entry.vertex, entry.distance))
    }

    /// Lower `vertex`'s key to `distance` and restore heap order.
    ///
    /// Already-popped vertices are ignored: with non-negative weights a
    /// strict improvement can never reach a settled vertex.
    pub(crate) fn decrease(&mut self, vertex: VertexId, distance: Weight) {
        let Some(slot) = self.slots[vertex] else {
            return;
        };
        if distance >= self.entries[slot].distance {
            return;
        }
        self.entries[slot].distance = distance;
        self.sift_up(slot);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].distance >= self.entries[parent].distance {
                break;
            }
            self.swap_entries(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < self.entries.len()
                && self.entries[left].distance < self.entries[smallest].distance
            {
                smallest = left;
            }
            if right < self.entries.len()
                && self.entries[right].distance < self.entries[smallest].distance
            {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_entries(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.slots[self.entries[a].vertex] = Some(a);
        self.slots[self.entries[b].vertex] = Some(b);
    }
}
