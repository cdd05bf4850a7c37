use rand::{Rng, rngs::StdRng, seq::SliceRandom};

use super::{SpanningTree, SpanningTreeAlgorithm, UnionFind, debug_assert_connected, get_rng};
use crate::maze::Graph;

/// Strides tried when walking the edge list. Any of them that does not divide
/// the edge count is coprime to it, so the walk visits every edge once.
const STRIDE_PRIMES: [usize; 16] = [
    29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Kruskal variant that scans the unshuffled edge list with a prime stride
/// modulo the edge count instead of shuffling it.
pub struct StrideKruskal<R = StdRng> {
    rng: R,
    strides: &'static [usize],
}

impl StrideKruskal {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_rng(get_rng(seed))
    }
}

impl<R: Rng> StrideKruskal<R> {
    pub fn with_rng(rng: R) -> Self {
        StrideKruskal {
            rng,
            strides: &STRIDE_PRIMES,
        }
    }

    /// Replaces the stride candidates. When every candidate divides the edge
    /// count, the edges are shuffled and walked in order instead.
    pub fn with_strides(mut self, strides: &'static [usize]) -> Self {
        self.strides = strides;
        self
    }
}

/// First candidate, rotating from index `first`, that does not divide
/// `edge_count`.
fn coprime_stride(candidates: &[usize], edge_count: usize, first: usize) -> Option<usize> {
    (0..candidates.len())
        .map(|k| candidates[(first + k) % candidates.len()])
        .find(|&prime| edge_count % prime != 0)
}

impl<R: Rng> SpanningTreeAlgorithm for StrideKruskal<R> {
    fn spanning_tree(&mut self, graph: &Graph) -> SpanningTree {
        debug_assert_connected(graph);
        let vertex_count = graph.vertex_count();
        let target = vertex_count.saturating_sub(1);

        let mut edges = graph.internal_edges();
        let edge_count = edges.len();
        if edge_count == 0 {
            return SpanningTree::new();
        }

        let first = self.rng.random_range(0..self.strides.len().max(1));
        let stride = match coprime_stride(self.strides, edge_count, first) {
            Some(prime) => prime,
            None => {
                tracing::warn!(
                    edge_count,
                    "no coprime stride available, shuffling edges instead"
                );
                edges.shuffle(&mut self.rng);
                1
            }
        };

        let mut uf = UnionFind::new(vertex_count);
        let mut tree = SpanningTree::with_capacity(target);
        let mut index = self.rng.random_range(0..edge_count);
        for _ in 0..edge_count {
            if tree.len() == target {
                break;
            }
            let (u, v) = edges[index];
            if uf.union(u, v) {
                tree.push((u, v));
            }
            index = (index + stride) % edge_count;
        }

        tracing::debug!(
            vertex_count,
            edge_count,
            stride,
            tree_edges = tree.len(),
            "stride kruskal finished"
        );
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_support::{assert_spanning_tree, cycle_graph, grid_graph};

    #[test]
    fn test_stride_kruskal() {
        let graph = grid_graph(11, 7);
        let tree = StrideKruskal::new(None).spanning_tree(&graph);
        assert_spanning_tree(&graph, &tree);
    }

    #[test]
    fn test_stride_visits_every_edge_once() {
        let edge_count = 29 * 4 + 3;
        let stride = coprime_stride(&STRIDE_PRIMES, edge_count, 0).unwrap();
        let mut seen = vec![false; edge_count];
        let mut index = 5;
        for _ in 0..edge_count {
            assert!(!seen[index]);
            seen[index] = true;
            index = (index + stride) % edge_count;
        }
        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn test_stride_skips_divisors() {
        // 29 * 31 is divisible by the first two candidates
        assert_eq!(coprime_stride(&STRIDE_PRIMES, 29 * 31, 0), Some(37));
        // Rotation wraps around the candidate list
        assert_eq!(coprime_stride(&STRIDE_PRIMES, 97, 15), Some(29));
    }

    #[test]
    fn test_no_stride_when_every_candidate_divides() {
        assert_eq!(coprime_stride(&[2, 3, 5], 30, 1), None);
    }

    #[test]
    fn test_shuffle_fallback_still_spans() {
        // A ring of 30 cells has 30 walls, divisible by every candidate
        let graph = cycle_graph(30);
        for seed in 0..8 {
            let tree = StrideKruskal::new(Some(seed))
                .with_strides(&[2, 3, 5])
                .spanning_tree(&graph);
            assert_spanning_tree(&graph, &tree);
        }
    }

    #[test]
    fn test_shuffle_fallback_is_deterministic() {
        let graph = cycle_graph(30);
        let build = || StrideKruskal::new(Some(11)).with_strides(&[2, 3, 5]);
        let first = build().spanning_tree(&graph);
        let second = build().spanning_tree(&graph);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_candidate_list_falls_back() {
        let graph = grid_graph(4, 3);
        let tree = StrideKruskal::new(Some(3))
            .with_strides(&[])
            .spanning_tree(&graph);
        assert_spanning_tree(&graph, &tree);
    }
}
