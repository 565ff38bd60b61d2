//! Connectivity over the adjacency matrix.
use crate::graph::{Graph, VertexId};

/// Visited flags for every vertex, walking edges of nonzero multiplicity
/// from `root`. Neighbors are tried in ascending numeric order and the
/// visited state is freshly allocated on every call.
pub fn reachable_from(graph: &Graph, root: VertexId) -> Vec<bool> {
    let mut visited = vec![false; graph.vertex_count()];
    if root.index() >= graph.vertex_count() {
        return visited;
    }
    visited[root.index()] = true;
    let mut stack = vec![root];
    while let Some(current) = stack.pop() {
        for next in graph.vertex_ids() {
            if !visited[next.index()] && graph.multiplicity(current, next) > 0 {
                visited[next.index()] = true;
                stack.push(next);
            }
        }
    }
    visited
}

/// A graph is connected when every vertex is reachable from vertex 0, so an
/// isolated vertex disconnects the graph even when all edges sit elsewhere.
pub fn is_connected(graph: &Graph) -> bool {
    reachable_from(graph, VertexId::new(0)).iter().all(|&v| v)
}

/// Vertices not reachable from vertex 0, ascending.
pub fn unreachable_vertices(graph: &Graph) -> Vec<VertexId> {
    reachable_from(graph, VertexId::new(0))
        .into_iter()
        .enumerate()
        .filter_map(|(idx, visited)| (!visited).then(|| VertexId::from_usize(idx)))
        .collect()
}
