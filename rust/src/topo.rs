//! Depth-first topological sort with back-edge detection.
//!
//! The traversal runs on an explicit stack of `(vertex, remaining successors)`
//! frames so that arbitrarily long dependency chains cannot overflow the call
//! stack.

use crate::error::PertError;
use crate::graph::{Graph, VertexId};
use crate::store::{AttributeStore, Color};
use crate::{log_debug, log_passes};

/// Compute a topological order of `graph`, sources first.
///
/// Stamps colour, parent, discovery/finish times and rank into `store`.
/// Ranks count down from the vertex count as vertices finish, so the
/// returned order lists vertices by ascending rank.
///
/// # Returns
/// * `Ok(order)` when the graph is acyclic
/// * `Err(PertError::NotADag)` as soon as an edge into an in-progress vertex
///   (including a self-loop) is found; the partial state in `store` is
///   meaningless in that case
pub(crate) fn topological_order<G: Graph>(
    graph: &G,
    store: &mut AttributeStore,
    verbosity: u8,
) -> Result<Vec<VertexId>, PertError> {
    let count = graph.vertex_count();
    if store.len() < count {
        return Err(PertError::VertexOutOfRange {
            vertex: store.len(),
            count: store.len(),
        });
    }
    for attrs in store.iter_mut() {
        attrs.color = Color::Unvisited;
        attrs.parent = None;
    }

    let mut clock = 0;
    let mut next_rank = count;
    // Collected in finish order; reversed at the end.
    let mut finished: Vec<VertexId> = Vec::with_capacity(count);
    let mut stack = Vec::new();

    for root in graph.vertices() {
        if store[root].color != Color::Unvisited {
            continue;
        }
        log_passes!(verbosity, "  DFS root: {}", root);

        clock += 1;
        store[root].color = Color::InProgress;
        store[root].discovery_time = clock;
        stack.push((root, graph.successors(root)));

        while let Some(frame) = stack.last_mut() {
            let u = frame.0;
            match frame.1.next() {
                Some(v) => {
                    if v >= count {
                        return Err(PertError::VertexOutOfRange { vertex: v, count });
                    }
                    let color = store[v].color;
                    match color {
                        Color::Unvisited => {
                            clock += 1;
                            let attrs = &mut store[v];
                            attrs.color = Color::InProgress;
                            attrs.parent = Some(u);
                            attrs.discovery_time = clock;
                            stack.push((v, graph.successors(v)));
                        }
                        Color::InProgress => {
                            log_passes!(verbosity, "  Back edge {} -> {}", u, v);
                            return Err(PertError::NotADag { vertex: v });
                        }
                        Color::Done => {}
                    }
                }
                None => {
                    stack.pop();
                    clock += 1;
                    let attrs = &mut store[u];
                    attrs.finish_time = clock;
                    attrs.color = Color::Done;
                    attrs.rank = next_rank;
                    next_rank -= 1;
                    finished.push(u);
                    log_debug!(
                        verbosity,
                        "    vertex {}: d={} f={} rank={}",
                        u,
                        attrs.discovery_time,
                        attrs.finish_time,
                        attrs.rank
                    );
                }
            }
        }
    }

    finished.reverse();
    Ok(finished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TaskGraph;

    fn sort(
        count: usize,
        edges: &[(usize, usize)],
    ) -> (Result<Vec<VertexId>, PertError>, AttributeStore) {
        let graph = TaskGraph::from_edges(count, edges.iter().copied()).unwrap();
        let mut store = AttributeStore::with_durations(vec![1; count]);
        let result = topological_order(&graph, &mut store, 0);
        (result, store)
    }

    #[test]
    fn test_chain_order() {
        let (order, store) = sort(3, &[(0, 1), (1, 2)]);
        assert_eq!(order.unwrap(), vec![0, 1, 2]);
        assert_eq!(store[0].rank, 1);
        assert_eq!(store[2].rank, 3);
        assert_eq!(store[1].parent, Some(0));
        assert_eq!(store[0].parent, None);
    }

    #[test]
    fn test_edges_point_forward_in_rank() {
        // Edges point from higher to lower index so enumeration order is not
        // already topological.
        let edges = [(3, 1), (3, 2), (1, 0), (2, 0), (4, 3)];
        let (order, store) = sort(5, &edges);
        let order = order.unwrap();
        assert_eq!(order.first(), Some(&4));
        assert_eq!(order.last(), Some(&0));
        for (u, v) in edges {
            assert!(store[u].rank < store[v].rank, "{u} -> {v}");
        }
        let ranks: Vec<usize> = order.iter().map(|&v| store[v].rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_times_are_nested() {
        let (order, store) = sort(4, &[(0, 1), (0, 2), (2, 3)]);
        assert!(order.is_ok());
        for attrs in store.iter() {
            assert_eq!(attrs.color, Color::Done);
            assert!(attrs.discovery_time < attrs.finish_time);
        }
        // Root interval contains every descendant interval.
        assert_eq!(store[0].discovery_time, 1);
        assert_eq!(store[0].finish_time, 8);
        assert!(store[2].discovery_time < store[3].discovery_time);
        assert!(store[3].finish_time < store[2].finish_time);
    }

    #[test]
    fn test_cycle_detected() {
        let (order, _) = sort(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(order, Err(PertError::NotADag { vertex: 0 }));
    }

    #[test]
    fn test_self_loop_detected() {
        let (order, _) = sort(2, &[(0, 1), (1, 1)]);
        assert_eq!(order, Err(PertError::NotADag { vertex: 1 }));
    }

    #[test]
    fn test_cycle_reached_from_later_root() {
        // 0 is isolated; the cycle 2 -> 3 -> 1 -> 2 is only entered from root 1.
        let (order, _) = sort(4, &[(1, 2), (2, 3), (3, 1)]);
        assert!(matches!(order, Err(PertError::NotADag { .. })));
    }

    #[test]
    fn test_cross_edge_is_not_a_cycle() {
        // 2 -> 1 reaches an already finished vertex.
        let (order, _) = sort(3, &[(0, 1), (2, 1)]);
        assert_eq!(order.unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let count = 200_000;
        let edges: Vec<(usize, usize)> = (1..count).map(|v| (v - 1, v)).collect();
        let (order, store) = sort(count, &edges);
        let order = order.unwrap();
        assert_eq!(order.len(), count);
        assert_eq!(store[count - 1].rank, count);
    }

    #[test]
    fn test_short_store_is_rejected() {
        let graph = TaskGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let mut store = AttributeStore::with_durations(vec![1, 1]);
        assert_eq!(
            topological_order(&graph, &mut store, 0),
            Err(PertError::VertexOutOfRange {
                vertex: 2,
                count: 2
            })
        );
    }

    #[test]
    fn test_empty_graph() {
        let (order, store) = sort(0, &[]);
        assert!(order.unwrap().is_empty());
        assert!(store.is_empty());
    }
}
