use rand::{Rng, SeedableRng, rngs::StdRng};

mod bfs;
mod dfs;
mod kruskal;
mod loop_erased;
mod prim;
mod stride_kruskal;
pub mod union_find;

pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use kruskal::Kruskal;
pub use loop_erased::LoopErasedRandomWalk;
pub use prim::Prim;
pub use stride_kruskal::StrideKruskal;
pub use union_find::UnionFind;

use crate::{
    error::MazeError,
    maze::{Graph, Maze, Vertex},
};

/// Edges `(u, v)` of a spanning tree. A valid tree over `V` vertices has
/// exactly `V - 1` of them.
pub type SpanningTree = Vec<(Vertex, Vertex)>;

/// A randomized strategy that turns a fully walled graph into a spanning tree.
///
/// Boundary walls are ignored. The input must be connected across internal
/// walls; implementations assert this in debug builds.
pub trait SpanningTreeAlgorithm {
    fn spanning_tree(&mut self, graph: &Graph) -> SpanningTree;
}

impl<T: SpanningTreeAlgorithm + ?Sized> SpanningTreeAlgorithm for Box<T> {
    fn spanning_tree(&mut self, graph: &Graph) -> SpanningTree {
        (**self).spanning_tree(graph)
    }
}

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Picks a uniformly random vertex of a non-empty graph.
fn random_vertex<R: Rng>(graph: &Graph, rng: &mut R) -> Vertex {
    rng.random_range(0..graph.vertex_count())
}

fn debug_assert_connected(graph: &Graph) {
    debug_assert!(
        graph.is_connected(),
        "spanning tree requested for a graph that is not connected"
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Generator {
    Kruskal,
    Dfs,
    Bfs,
    LoopErased,
    Prim,
    StrideKruskal,
}

impl Generator {
    pub const ALL: [Generator; 6] = [
        Generator::Kruskal,
        Generator::Dfs,
        Generator::Bfs,
        Generator::LoopErased,
        Generator::Prim,
        Generator::StrideKruskal,
    ];

    /// Builds the algorithm with its own random source.
    pub fn build(self, seed: Option<u64>) -> Box<dyn SpanningTreeAlgorithm> {
        self.build_with_rng(get_rng(seed))
    }

    /// Builds the algorithm around an injected random source.
    pub fn build_with_rng<R: Rng + 'static>(self, rng: R) -> Box<dyn SpanningTreeAlgorithm> {
        match self {
            Generator::Kruskal => Box::new(Kruskal::with_rng(rng)),
            Generator::Dfs => Box::new(DepthFirstSearch::with_rng(rng)),
            Generator::Bfs => Box::new(BreadthFirstSearch::with_rng(rng)),
            Generator::LoopErased => Box::new(LoopErasedRandomWalk::with_rng(rng)),
            Generator::Prim => Box::new(Prim::with_rng(rng)),
            Generator::StrideKruskal => Box::new(StrideKruskal::with_rng(rng)),
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::Dfs => write!(f, "Randomized Depth-First Search (DFS)"),
            Generator::Bfs => write!(f, "Randomized Breadth-First Search (BFS)"),
            Generator::LoopErased => write!(f, "Loop-Erased Random Walk (Wilson's Algorithm)"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::StrideKruskal => write!(f, "Kruskal's Algorithm (coprime stride)"),
        }
    }
}

/// Generates `maze` with the given algorithm, seeding its random source from
/// `seed` or from the OS.
pub fn generate_maze(
    maze: &mut Maze,
    generator: Generator,
    seed: Option<u64>,
) -> Result<(), MazeError> {
    tracing::info!(%generator, ?seed, "generating maze");
    let mut algorithm = generator.build(seed);
    maze.generate(&mut algorithm)
}

/// Helpers shared by the per-algorithm test modules.
#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::maze::Border;

    fn wall() -> Border {
        Border::line(0.0, 0.0, 1.0, 0.0)
    }

    /// `width` x `height` grid with a boundary wall on every outer side.
    pub fn grid_graph(width: usize, height: usize) -> Graph {
        let mut graph = Graph::new(width * height);
        for y in 0..height {
            for x in 0..width {
                let v = y * width + x;
                if x + 1 < width {
                    graph.add_edge(v, v + 1, wall());
                }
                if y + 1 < height {
                    graph.add_edge(v, v + width, wall());
                }
                if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
                    graph.add_boundary(v, wall());
                }
            }
        }
        graph
    }

    /// `n` cells in a ring.
    pub fn cycle_graph(n: usize) -> Graph {
        let mut graph = Graph::new(n);
        for v in 0..n {
            graph.add_edge(v, (v + 1) % n, wall());
        }
        graph
    }

    /// Asserts that `tree` is a spanning tree of `graph`: `V - 1` edges, all
    /// of them internal walls of the graph, none of them closing a cycle.
    pub fn assert_spanning_tree(graph: &Graph, tree: &SpanningTree) {
        let vertex_count = graph.vertex_count();
        assert_eq!(tree.len(), vertex_count.saturating_sub(1));
        let mut uf = UnionFind::new(vertex_count);
        for &(u, v) in tree {
            assert!(
                graph.border_between(u, v).is_some(),
                "tree edge {u} - {v} is not a wall of the graph"
            );
            assert!(uf.union(u, v), "tree edge {u} - {v} closes a cycle");
        }
        assert!((1..vertex_count).all(|v| uf.same_set(0, v)));
    }
}
