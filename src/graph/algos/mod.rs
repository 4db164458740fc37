//! Search algorithms over the adjacency lists

pub(crate) mod dijkstra;
pub(crate) mod heap;
