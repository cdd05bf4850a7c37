use rand::{Rng, rngs::StdRng};

use super::{SpanningTree, SpanningTreeAlgorithm, debug_assert_connected, get_rng, random_vertex};
use crate::maze::{Graph, Vertex};

/// Randomized Prim: grow a single region from a random cell, opening a random
/// wall on its frontier at every step.
pub struct Prim<R = StdRng> {
    rng: R,
}

impl Prim {
    pub fn new(seed: Option<u64>) -> Self {
        Prim { rng: get_rng(seed) }
    }
}

impl<R: Rng> Prim<R> {
    pub fn with_rng(rng: R) -> Self {
        Prim { rng }
    }

    /// Draws frontier walls uniformly at random until one leads to an
    /// unvisited cell.
    ///
    /// A wall may have been pushed before its far cell was reached through
    /// another wall, so stale candidates are discarded and the draw retried.
    fn next_frontier_edge(
        &mut self,
        frontier: &mut Vec<(Vertex, Vertex)>,
        visited: &[bool],
    ) -> Option<(Vertex, Vertex)> {
        while !frontier.is_empty() {
            let idx = self.rng.random_range(0..frontier.len());
            let candidate = frontier.swap_remove(idx);
            if !visited[candidate.1] {
                return Some(candidate);
            }
        }
        None
    }
}

impl<R: Rng> SpanningTreeAlgorithm for Prim<R> {
    fn spanning_tree(&mut self, graph: &Graph) -> SpanningTree {
        if graph.is_empty() {
            return SpanningTree::new();
        }
        debug_assert_connected(graph);

        let vertex_count = graph.vertex_count();
        let target = vertex_count - 1;
        let mut visited = vec![false; vertex_count];
        let mut frontier = Vec::new();
        let mut tree = SpanningTree::with_capacity(target);

        let mut vertex = random_vertex(graph, &mut self.rng);
        while tree.len() < target {
            visited[vertex] = true;
            frontier.extend(
                graph
                    .internal_neighbors(vertex)
                    .filter(|&next| !visited[next])
                    .map(|next| (vertex, next)),
            );

            let Some(edge) = self.next_frontier_edge(&mut frontier, &visited) else {
                // Only reachable on disconnected input
                break;
            };
            tree.push(edge);
            vertex = edge.1;
        }

        tracing::debug!(vertex_count, tree_edges = tree.len(), "prim finished");
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_support::{assert_spanning_tree, cycle_graph, grid_graph};

    #[test]
    fn test_randomized_prim() {
        let graph = grid_graph(7, 7);
        let tree = Prim::new(None).spanning_tree(&graph);
        assert_spanning_tree(&graph, &tree);
    }

    #[test]
    fn test_tree_edges_point_away_from_region() {
        // Every accepted edge leads from the grown region to a new cell, so
        // each far endpoint appears exactly once.
        let graph = cycle_graph(9);
        let tree = Prim::new(Some(11)).spanning_tree(&graph);
        let mut reached = tree.iter().map(|&(_, v)| v).collect::<Vec<_>>();
        reached.sort_unstable();
        reached.dedup();
        assert_eq!(reached.len(), 8);
        assert_spanning_tree(&graph, &tree);
    }
}
