use rand::{Rng, rngs::StdRng, seq::SliceRandom};

use super::{SpanningTree, SpanningTreeAlgorithm, debug_assert_connected, get_rng, random_vertex};
use crate::maze::Graph;

/// Randomized breadth-first search, expanding level by level from a random
/// cell. Produces short, bushy corridors radiating from the start.
pub struct BreadthFirstSearch<R = StdRng> {
    rng: R,
}

impl BreadthFirstSearch {
    pub fn new(seed: Option<u64>) -> Self {
        BreadthFirstSearch { rng: get_rng(seed) }
    }
}

impl<R: Rng> BreadthFirstSearch<R> {
    pub fn with_rng(rng: R) -> Self {
        BreadthFirstSearch { rng }
    }
}

impl<R: Rng> SpanningTreeAlgorithm for BreadthFirstSearch<R> {
    fn spanning_tree(&mut self, graph: &Graph) -> SpanningTree {
        if graph.is_empty() {
            return SpanningTree::new();
        }
        debug_assert_connected(graph);

        let vertex_count = graph.vertex_count();
        let mut visited = vec![false; vertex_count];
        let mut tree = SpanningTree::with_capacity(vertex_count - 1);

        let start = random_vertex(graph, &mut self.rng);
        visited[start] = true;
        let mut current_level = vec![start];
        let mut next_level = Vec::new();
        let mut depth = 0usize;

        while !current_level.is_empty() {
            for &vertex in &current_level {
                for next in graph.internal_neighbors(vertex) {
                    if visited[next] {
                        continue;
                    }
                    visited[next] = true;
                    tree.push((vertex, next));
                    next_level.push(next);
                }
            }

            current_level.clear();
            std::mem::swap(&mut current_level, &mut next_level);
            // Randomize which parent of the next level claims shared children
            current_level.shuffle(&mut self.rng);
            depth += 1;
        }

        tracing::debug!(vertex_count, depth, tree_edges = tree.len(), "bfs finished");
        tree
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::generators::test_support::{assert_spanning_tree, grid_graph};
    use crate::maze::Vertex;

    fn distances(graph: &Graph, edges: Option<&SpanningTree>, start: Vertex) -> Vec<usize> {
        let mut adjacency = vec![Vec::new(); graph.vertex_count()];
        match edges {
            Some(tree) => tree.iter().for_each(|&(u, v)| {
                adjacency[u].push(v);
                adjacency[v].push(u);
            }),
            None => (0..graph.vertex_count())
                .for_each(|u| adjacency[u].extend(graph.internal_neighbors(u))),
        }

        let mut dist = vec![usize::MAX; graph.vertex_count()];
        dist[start] = 0;
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for &v in &adjacency[u] {
                if dist[v] == usize::MAX {
                    dist[v] = dist[u] + 1;
                    queue.push_back(v);
                }
            }
        }
        dist
    }

    #[test]
    fn test_randomized_bfs() {
        let graph = grid_graph(6, 8);
        let tree = BreadthFirstSearch::new(None).spanning_tree(&graph);
        assert_spanning_tree(&graph, &tree);
    }

    #[test]
    fn test_bfs_tree_preserves_shortest_distances() {
        let graph = grid_graph(7, 5);
        let tree = BreadthFirstSearch::new(Some(9)).spanning_tree(&graph);
        // The first edge always leaves the start cell
        let start = tree[0].0;
        assert_eq!(
            distances(&graph, Some(&tree), start),
            distances(&graph, None, start)
        );
    }
}
