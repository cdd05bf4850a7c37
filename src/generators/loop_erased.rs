//! Wilson's algorithm.
//!
//! Random walks are started from every cell not yet in the tree and run until
//! they hit the tree. Whenever a walk crosses itself the loop is erased, so
//! the path that finally joins the tree is self-avoiding. The resulting tree
//! is drawn uniformly from all spanning trees of the graph, unlike the other
//! generators which favour particular shapes.

use rand::{Rng, rngs::StdRng, seq::SliceRandom};

use super::{SpanningTree, SpanningTreeAlgorithm, debug_assert_connected, get_rng};
use crate::maze::{Graph, Vertex};

/// Marker for cells that are neither in the tree nor on the current walk.
const UNVISITED: usize = 0;

pub struct LoopErasedRandomWalk<R = StdRng> {
    rng: R,
}

impl LoopErasedRandomWalk {
    pub fn new(seed: Option<u64>) -> Self {
        LoopErasedRandomWalk { rng: get_rng(seed) }
    }
}

impl<R: Rng> LoopErasedRandomWalk<R> {
    pub fn with_rng(rng: R) -> Self {
        LoopErasedRandomWalk { rng }
    }

    /// Uniformly random internal neighbor of `vertex`, counting parallel walls
    /// separately.
    fn random_neighbor(&mut self, graph: &Graph, vertex: Vertex) -> Option<Vertex> {
        let degree = graph.internal_neighbors(vertex).count();
        if degree == 0 {
            return None;
        }
        let k = self.rng.random_range(0..degree);
        graph.internal_neighbors(vertex).nth(k)
    }

    /// Walks from `vertex` until reaching a cell of an earlier round, tagging
    /// the cells of the walk with `round`. Appends the loop-erased walk to
    /// `tree`.
    fn walk(
        &mut self,
        graph: &Graph,
        mut vertex: Vertex,
        round: usize,
        visited: &mut [usize],
        tree: &mut SpanningTree,
    ) {
        let mut path = Vec::new();

        while visited[vertex] == UNVISITED {
            visited[vertex] = round;
            path.push(vertex);

            let Some(next) = self.random_neighbor(graph, vertex) else {
                // Isolated cell, only possible on disconnected input
                return;
            };

            if visited[next] == round {
                // The walk crossed itself: erase the loop back to `next`
                while let Some(erased) = path.pop() {
                    visited[erased] = UNVISITED;
                    if erased == next {
                        break;
                    }
                }
            }

            vertex = next;
        }

        path.push(vertex);
        tree.extend(path.windows(2).map(|step| (step[0], step[1])));
    }
}

impl<R: Rng> SpanningTreeAlgorithm for LoopErasedRandomWalk<R> {
    fn spanning_tree(&mut self, graph: &Graph) -> SpanningTree {
        if graph.is_empty() {
            return SpanningTree::new();
        }
        debug_assert_connected(graph);

        let vertex_count = graph.vertex_count();
        let mut visited = vec![UNVISITED; vertex_count];
        let mut tree = SpanningTree::with_capacity(vertex_count - 1);

        let mut order = (0..vertex_count).collect::<Vec<_>>();
        order.shuffle(&mut self.rng);

        let mut round = 1;
        visited[order[0]] = round;
        for &vertex in &order[1..] {
            if visited[vertex] != UNVISITED {
                continue;
            }
            round += 1;
            self.walk(graph, vertex, round, &mut visited, &mut tree);
        }

        tracing::debug!(
            vertex_count,
            walks = round - 1,
            tree_edges = tree.len(),
            "loop-erased random walk finished"
        );
        tree
    }
}
