use rand::{Rng, rngs::StdRng, seq::SliceRandom};

use super::{SpanningTree, SpanningTreeAlgorithm, debug_assert_connected, get_rng, random_vertex};
use crate::maze::{Graph, Vertex};

/// Randomized depth-first search. Produces long winding corridors.
pub struct DepthFirstSearch<R = StdRng> {
    rng: R,
}

/// A vertex on the DFS stack together with its remaining neighbors, in the
/// shuffled order they will be tried.
struct Frame {
    vertex: Vertex,
    order: Vec<Vertex>,
    cursor: usize,
}

impl DepthFirstSearch {
    pub fn new(seed: Option<u64>) -> Self {
        DepthFirstSearch { rng: get_rng(seed) }
    }
}

impl<R: Rng> DepthFirstSearch<R> {
    pub fn with_rng(rng: R) -> Self {
        DepthFirstSearch { rng }
    }

    fn frame(&mut self, graph: &Graph, vertex: Vertex) -> Frame {
        let mut order = graph.internal_neighbors(vertex).collect::<Vec<_>>();
        order.shuffle(&mut self.rng);
        Frame {
            vertex,
            order,
            cursor: 0,
        }
    }
}

impl<R: Rng> SpanningTreeAlgorithm for DepthFirstSearch<R> {
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
        // Explicit stack instead of recursion so that large mazes cannot
        // overflow the call stack
        let mut stack = vec![self.frame(graph, start)];

        while let Some(top) = stack.last_mut() {
            let Some(&next) = top.order.get(top.cursor) else {
                // No unvisited neighbor left, backtrack
                stack.pop();
                continue;
            };
            top.cursor += 1;
            if visited[next] {
                continue;
            }

            let current = top.vertex;
            visited[next] = true;
            tree.push((current, next));
            let frame = self.frame(graph, next);
            stack.push(frame);
        }

        tracing::debug!(vertex_count, tree_edges = tree.len(), "dfs finished");
        tree
    }
}
