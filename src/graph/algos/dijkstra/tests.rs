use crate::error::ErrorKind;
use crate::graph::store::Graph;
use crate::graph::types::PathEdge;

/// Build the four-vertex diamond used across the search tests:
/// a -> b (1), b -> c (10), a -> d (5), d -> c (5).
fn diamond() -> Graph<&'static str> {
    let graph = Graph::new();
    for vertex in ["a", "b", "c", "d"] {
        graph.add_vertex(vertex);
    }
    graph.add_edge(&"a", &"b", 1, None).unwrap();
    graph.add_edge(&"b", &"c", 10, None).unwrap();
    graph.add_edge(&"a", &"d", 5, None).unwrap();
    graph.add_edge(&"d", &"c", 5, None).unwrap();
    graph
}

/// Test that the search picks the cheaper route even when its first hop
/// is more expensive
#[test]
fn test_shortest_path_picks_cheapest_route() {
    let graph = diamond();

    let path = graph.shortest_path(&"a", &"c").unwrap();

    assert_eq!(
        path,
        vec![
            PathEdge {
                source: "a",
                destination: "d",
                weight: 5,
                tag: None,
            },
            PathEdge {
                source: "d",
                destination: "c",
                weight: 5,
                tag: None,
            },
        ]
    );
}

/// Test that a multi-hop chain beats a heavier direct edge
#[test]
fn test_shortest_path_follows_multi_hop_chain() {
    let graph = Graph::new();
    for vertex in ["a", "b", "c", "d"] {
        graph.add_vertex(vertex);
    }
    graph.add_edge(&"a", &"b", 2, None).unwrap();
    graph.add_edge(&"b", &"c", 2, None).unwrap();
    graph.add_edge(&"c", &"d", 2, None).unwrap();
    graph.add_edge(&"a", &"d", 7, None).unwrap();

    let path = graph.shortest_path(&"a", &"d").unwrap();

    assert_eq!(path.len(), 3);
    assert_eq!(path.iter().map(|hop| hop.weight).sum::<u64>(), 6);
    assert_eq!(path[0].source, "a");
    assert_eq!(path[2].destination, "d");
}

/// Test that an unreachable destination yields an empty path, not an error
#[test]
fn test_shortest_path_unreachable_returns_empty() {
    let graph = diamond();
    graph.add_vertex("island");

    let path = graph.shortest_path(&"a", &"island").unwrap();

    assert!(path.is_empty());
}

/// Test that edges are directed: the reverse query finds nothing
#[test]
fn test_shortest_path_respects_edge_direction() {
    let graph = diamond();

    let path = graph.shortest_path(&"c", &"a").unwrap();

    assert!(path.is_empty());
}

/// Test that a query from a vertex to itself yields an empty path
#[test]
fn test_shortest_path_to_self_returns_empty() {
    let graph = diamond();

    let path = graph.shortest_path(&"a", &"a").unwrap();

    assert!(path.is_empty());
}

/// Test that both endpoints must be vertices of the graph
#[test]
fn test_shortest_path_requires_known_endpoints() {
    let graph = diamond();

    let err = graph.shortest_path(&"a", &"nowhere").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = graph.shortest_path(&"nowhere", &"a").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

/// Test that on a cost tie the first improvement found is kept: with two
/// equal-cost routes the one relaxed earlier wins
#[test]
fn test_shortest_path_keeps_first_improvement_on_tie() {
    let graph = Graph::new();
    for vertex in ["a", "b", "c", "d"] {
        graph.add_vertex(vertex);
    }
    graph.add_edge(&"a", &"b", 1, None).unwrap();
    graph.add_edge(&"a", &"c", 1, None).unwrap();
    graph.add_edge(&"b", &"d", 1, None).unwrap();
    graph.add_edge(&"c", &"d", 1, None).unwrap();

    let path = graph.shortest_path(&"a", &"d").unwrap();

    assert_eq!(path.len(), 2);
    assert_eq!(path[0].destination, "b");
    assert_eq!(path[1].source, "b");
}

/// Test that repeated queries over the same graph return the same path
#[test]
fn test_shortest_path_is_deterministic_across_runs() {
    let graph = diamond();

    let first = graph.shortest_path(&"a", &"c").unwrap();
    for _ in 0..5 {
        assert_eq!(graph.shortest_path(&"a", &"c").unwrap(), first);
    }
}

/// Test that the cheapest of two parallel edges is used and its tag is
/// reported on the hop
#[test]
fn test_shortest_path_uses_cheapest_parallel_edge() {
    let graph = Graph::new();
    graph.add_vertex("a");
    graph.add_vertex("b");
    graph.add_edge(&"a", &"b", 9, None).unwrap();
    graph.add_edge(&"a", &"b", 3, Some("toll")).unwrap();

    let path = graph.shortest_path(&"a", &"b").unwrap();

    assert_eq!(path.len(), 1);
    assert_eq!(path[0].weight, 3);
    assert_eq!(path[0].tag.as_deref(), Some("toll"));
}

/// Test that a Weight::MAX edge never relaxes: MAX is the unreached
/// sentinel, so a cost that saturates to it reads as unreachable
#[test]
fn test_max_weight_edge_never_relaxes() {
    let graph = Graph::new();
    graph.add_vertex("a");
    graph.add_vertex("b");
    graph.add_edge(&"a", &"b", u64::MAX, None).unwrap();

    let path = graph.shortest_path(&"a", &"b").unwrap();

    assert!(path.is_empty());
}
