use rand::{Rng, rngs::StdRng, seq::SliceRandom};

use super::{SpanningTree, SpanningTreeAlgorithm, UnionFind, debug_assert_connected, get_rng};
use crate::maze::Graph;

/// Randomized Kruskal: scan the walls in shuffled order and open every wall
/// that joins two still separate regions.
pub struct Kruskal<R = StdRng> {
    rng: R,
}

impl Kruskal {
    pub fn new(seed: Option<u64>) -> Self {
        Kruskal { rng: get_rng(seed) }
    }
}

impl<R: Rng> Kruskal<R> {
    pub fn with_rng(rng: R) -> Self {
        Kruskal { rng }
    }
}

impl<R: Rng> SpanningTreeAlgorithm for Kruskal<R> {
    fn spanning_tree(&mut self, graph: &Graph) -> SpanningTree {
        debug_assert_connected(graph);
        let vertex_count = graph.vertex_count();
        let target = vertex_count.saturating_sub(1);

        let mut edges = graph.internal_edges();
        edges.shuffle(&mut self.rng);

        let mut uf = UnionFind::new(vertex_count);
        let mut tree = SpanningTree::with_capacity(target);
        for (u, v) in edges {
            if tree.len() == target {
                break;
            }
            // If cells are not yet connected, open the wall between them
            if uf.union(u, v) {
                tree.push((u, v));
            }
        }

        tracing::debug!(vertex_count, tree_edges = tree.len(), "kruskal finished");
        tree
    }
}
