pub mod border;
pub mod graph;

pub use border::Border;
pub use graph::{Edge, Graph, Vertex};

use crate::{
    error::MazeError,
    generators::{SpanningTree, SpanningTreeAlgorithm, UnionFind},
    solvers::{Solution, Solver, solve_tree},
    topology::Topology,
};

/// A maze over an arbitrary cell graph.
///
/// Lifecycle: created with its vertex count and endpoints, populated once with
/// the fully walled graph, then generated exactly once. Generation opens the
/// passages of a random spanning tree and records the unique route from
/// `start` to `end`.
#[derive(Debug, Clone)]
pub struct Maze {
    vertex_count: usize,
    start: Vertex,
    end: Vertex,
    graph: Graph,
    initialised: bool,
    generated: bool,
    solver: Solver,
    solution: Solution,
}

impl Maze {
    /// Creates an empty maze. The graph is supplied by
    /// [`Maze::initialise_graph`].
    pub fn new(vertex_count: usize, start: Vertex, end: Vertex) -> Self {
        Maze {
            vertex_count,
            start,
            end,
            graph: Graph::new(vertex_count),
            initialised: false,
            generated: false,
            solver: Solver::default(),
            solution: Solution::default(),
        }
    }

    /// Creates a maze with the size, endpoints and full graph of `topology`.
    pub fn from_topology<T: Topology + ?Sized>(topology: &T) -> Result<Self, MazeError> {
        let mut maze = Maze::new(
            topology.vertex_count(),
            topology.start_vertex(),
            topology.end_vertex(),
        );
        maze.initialise_graph(topology.build_graph())?;
        Ok(maze)
    }

    /// Selects the traversal used to extract the solution.
    pub fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }

    /// Installs the fully walled graph.
    ///
    /// The graph must match the maze's vertex count, have mirrored internal
    /// walls and be connected across them.
    pub fn initialise_graph(&mut self, graph: Graph) -> Result<(), MazeError> {
        if self.generated {
            return Err(MazeError::AlreadyGenerated);
        }
        if graph.vertex_count() != self.vertex_count {
            return Err(MazeError::VertexCountMismatch {
                expected: self.vertex_count,
                found: graph.vertex_count(),
            });
        }
        if self.start >= self.vertex_count {
            return Err(MazeError::StartOutOfRange {
                vertex: self.start,
                vertex_count: self.vertex_count,
            });
        }
        if self.end >= self.vertex_count {
            return Err(MazeError::EndOutOfRange {
                vertex: self.end,
                vertex_count: self.vertex_count,
            });
        }
        graph.validate()?;
        if !graph.is_connected() {
            return Err(MazeError::Disconnected);
        }

        tracing::debug!(
            vertex_count = self.vertex_count,
            internal_walls = graph.internal_edge_count(),
            boundary_walls = graph.boundary_edge_count(),
            "initialised maze graph"
        );
        self.graph = graph;
        self.initialised = true;
        Ok(())
    }

    /// Carves the maze with `algorithm` and solves it.
    ///
    /// The solution is taken from the graph before any wall is removed, since
    /// the borders of opened passages are gone afterwards.
    pub fn generate<A: SpanningTreeAlgorithm + ?Sized>(
        &mut self,
        algorithm: &mut A,
    ) -> Result<(), MazeError> {
        if self.generated {
            return Err(MazeError::AlreadyGenerated);
        }
        if !self.initialised {
            return Err(MazeError::NotInitialised);
        }

        let tree = algorithm.spanning_tree(&self.graph);
        self.check_spanning_tree(&tree)?;
        let solution = solve_tree(&self.graph, &tree, self.start, self.end, self.solver)?;

        self.generated = true;
        for &(u, v) in &tree {
            self.graph.remove_edge(u, v)?;
        }

        tracing::info!(
            vertex_count = self.vertex_count,
            passages = tree.len(),
            remaining_walls = self.graph.internal_edge_count(),
            solution_length = solution.route.len(),
            "generated maze"
        );
        self.solution = solution;
        Ok(())
    }

    /// Rejects algorithm output that is not a spanning tree.
    fn check_spanning_tree(&self, tree: &SpanningTree) -> Result<(), MazeError> {
        let expected = self.vertex_count.saturating_sub(1);
        if tree.len() != expected {
            return Err(MazeError::IncompleteSpanningTree {
                expected,
                found: tree.len(),
            });
        }

        let mut uf = UnionFind::new(self.vertex_count);
        for &(u, v) in tree {
            if let Some(&vertex) = [u, v].iter().find(|&&x| x >= self.vertex_count) {
                return Err(MazeError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
            if !uf.union(u, v) {
                return Err(MazeError::CyclicSpanningTree { u, v });
            }
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Checks if the maze has no cells.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    pub fn start(&self) -> Vertex {
        self.start
    }

    pub fn end(&self) -> Vertex {
        self.end
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// The remaining walls. Before generation this is the full graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Passages on the route from start to end. Empty before generation.
    pub fn solution_path(&self) -> &Graph {
        &self.solution.path
    }

    /// Cells on the route from start to end. Empty before generation.
    pub fn solution_route(&self) -> &[Vertex] {
        &self.solution.route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, SpanningTree, generate_maze};

    fn wall() -> Border {
        Border::line(0.0, 0.0, 1.0, 0.0)
    }

    fn two_cells() -> Maze {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, wall());
        graph.add_boundary(0, wall());
        graph.add_boundary(1, wall());
        let mut maze = Maze::new(2, 0, 1);
        maze.initialise_graph(graph).unwrap();
        maze
    }

    /// Returns a fixed list of edges, whatever the graph.
    struct Fixed(SpanningTree);

    impl SpanningTreeAlgorithm for Fixed {
        fn spanning_tree(&mut self, _graph: &Graph) -> SpanningTree {
            self.0.clone()
        }
    }

    #[test]
    fn test_two_cell_maze() {
        let mut maze = two_cells();
        generate_maze(&mut maze, Generator::Kruskal, None).unwrap();
        assert_eq!(maze.solution_route(), &[0, 1]);
        assert_eq!(maze.solution_path().internal_edges(), vec![(0, 1)]);
        assert_eq!(maze.graph().internal_edge_count(), 0);
        assert_eq!(maze.graph().boundary_edge_count(), 2);
    }

    #[test]
    fn test_generate_twice_fails() {
        let mut maze = two_cells();
        generate_maze(&mut maze, Generator::Prim, Some(1)).unwrap();
        assert_eq!(
            generate_maze(&mut maze, Generator::Prim, Some(1)),
            Err(MazeError::AlreadyGenerated)
        );
    }

    #[test]
    fn test_generate_before_initialise_fails() {
        let mut maze = Maze::new(2, 0, 1);
        assert_eq!(
            generate_maze(&mut maze, Generator::Dfs, None),
            Err(MazeError::NotInitialised)
        );
    }

    #[test]
    fn test_initialise_rejects_bad_graphs() {
        let mut maze = Maze::new(3, 0, 2);
        assert_eq!(
            maze.initialise_graph(Graph::new(2)),
            Err(MazeError::VertexCountMismatch {
                expected: 3,
                found: 2
            })
        );

        let mut disconnected = Graph::new(3);
        disconnected.add_edge(0, 1, wall());
        assert_eq!(
            maze.initialise_graph(disconnected),
            Err(MazeError::Disconnected)
        );

        let mut maze = Maze::new(2, 0, 5);
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, wall());
        assert_eq!(
            maze.initialise_graph(graph),
            Err(MazeError::EndOutOfRange {
                vertex: 5,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn test_incomplete_tree_is_rejected() {
        let mut maze = two_cells();
        assert_eq!(
            maze.generate(&mut Fixed(vec![])),
            Err(MazeError::IncompleteSpanningTree {
                expected: 1,
                found: 0
            })
        );
        // Nothing was opened
        assert_eq!(maze.graph().internal_edge_count(), 1);
        assert!(!maze.is_generated());
    }

    #[test]
    fn test_cyclic_tree_is_rejected() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, wall());
        graph.add_edge(1, 2, wall());
        graph.add_edge(0, 2, wall());
        let mut maze = Maze::new(3, 0, 2);
        maze.initialise_graph(graph).unwrap();
        assert_eq!(
            maze.generate(&mut Fixed(vec![(0, 1), (1, 0)])),
            Err(MazeError::CyclicSpanningTree { u: 1, v: 0 })
        );
    }

    #[test]
    fn test_single_cell_maze() {
        let mut maze = Maze::new(1, 0, 0);
        let mut graph = Graph::new(1);
        graph.add_boundary(0, wall());
        maze.initialise_graph(graph).unwrap();
        generate_maze(&mut maze, Generator::LoopErased, None).unwrap();
        assert_eq!(maze.solution_route(), &[0]);
        assert_eq!(maze.graph().boundary_edge_count(), 1);
    }
}
