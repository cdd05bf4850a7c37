use std::collections::VecDeque;

use crate::{
    error::MazeError,
    generators::SpanningTree,
    maze::{Graph, Vertex},
};

/// Traversal used to find each cell's parent in the spanning tree.
///
/// A tree has exactly one path between two cells, so both yield the same
/// route; they differ only in visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Solver {
    Dfs,
    #[default]
    Bfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// The unique route between start and end of a perfect maze.
#[derive(Debug, Clone, Default)]
pub struct Solution {
    /// Sparse graph holding only the passages on the route, with their
    /// borders of the full graph.
    pub path: Graph,
    /// Cells on the route, start first and end last.
    pub route: Vec<Vertex>,
}

/// Solves the maze whose passages are the `tree` edges of `graph`.
///
/// Must run before the tree edges are removed from `graph`, since their
/// borders are looked up there.
pub fn solve_tree(
    graph: &Graph,
    tree: &SpanningTree,
    start: Vertex,
    end: Vertex,
    solver: Solver,
) -> Result<Solution, MazeError> {
    let vertex_count = graph.vertex_count();
    let mut tree_graph = Graph::new(vertex_count);
    for &(u, v) in tree {
        let border = graph
            .border_between(u, v)
            .ok_or(MazeError::EdgeNotFound { u, v })?;
        tree_graph.add_shared_edge(u, v, border.clone());
    }

    let parent = parents(&tree_graph, start, solver);

    // Backtrack from the goal to mark the path
    let mut path = Graph::new(vertex_count);
    let mut route = vec![end];
    let mut current = end;
    while current != start {
        let previous = parent[current].ok_or(MazeError::Unreachable { start, end })?;
        if let Some(border) = tree_graph.border_between(previous, current) {
            path.add_shared_edge(previous, current, border.clone());
        }
        route.push(previous);
        current = previous;
    }
    route.reverse();

    tracing::debug!(%solver, start, end, length = route.len(), "solved maze");
    Ok(Solution { path, route })
}

/// Parent of every cell reachable from `start`; `start` is its own parent.
fn parents(tree: &Graph, start: Vertex, solver: Solver) -> Vec<Option<Vertex>> {
    let mut parent = vec![None; tree.vertex_count()];
    parent[start] = Some(start);

    let mut frontier = VecDeque::from([start]);
    while let Some(vertex) = match solver {
        Solver::Bfs => frontier.pop_front(),
        Solver::Dfs => frontier.pop_back(),
    } {
        for next in tree.internal_neighbors(vertex) {
            if parent[next].is_none() {
                parent[next] = Some(vertex);
                frontier.push_back(next);
            }
        }
    }

    parent
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::maze::Border;

    fn wall(x: f64) -> Border {
        Border::line(x, 0.0, x, 1.0)
    }

    /// Full 2x3 grid:
    ///
    /// ```text
    /// 0 1 2
    /// 3 4 5
    /// ```
    fn grid() -> Graph {
        let mut graph = Graph::new(6);
        for (u, v) in [(0, 1), (1, 2), (3, 4), (4, 5), (0, 3), (1, 4), (2, 5)] {
            graph.add_edge(u, v, wall(u as f64 + v as f64));
        }
        graph
    }

    #[rstest]
    fn test_route_follows_tree(#[values(Solver::Dfs, Solver::Bfs)] solver: Solver) {
        let graph = grid();
        let tree = vec![(0, 3), (3, 4), (4, 1), (1, 2), (2, 5)];
        let solution = solve_tree(&graph, &tree, 0, 5, solver).unwrap();
        assert_eq!(solution.route, vec![0, 3, 4, 1, 2, 5]);
        assert_eq!(solution.path.internal_edge_count(), 5);
        // Borders on the path are the ones of the full graph
        let border = solution.path.border_between(4, 1).unwrap();
        assert!(std::sync::Arc::ptr_eq(border, graph.border_between(1, 4).unwrap()));
    }

    #[test]
    fn test_route_ignores_side_branches() {
        let graph = grid();
        let tree = vec![(0, 1), (1, 2), (1, 4), (4, 3), (4, 5)];
        let solution = solve_tree(&graph, &tree, 3, 2, Solver::Bfs).unwrap();
        assert_eq!(solution.route, vec![3, 4, 1, 2]);
        assert_eq!(solution.path.internal_edges(), vec![(1, 2), (1, 4), (3, 4)]);
    }

    #[test]
    fn test_start_equals_end() {
        let graph = grid();
        let tree = vec![(0, 1), (1, 2), (1, 4), (4, 3), (4, 5)];
        let solution = solve_tree(&graph, &tree, 4, 4, Solver::Dfs).unwrap();
        assert_eq!(solution.route, vec![4]);
        assert_eq!(solution.path.internal_edge_count(), 0);
    }

    #[test]
    fn test_unreachable_end() {
        let graph = grid();
        let tree = vec![(0, 1)];
        assert_eq!(
            solve_tree(&graph, &tree, 0, 5, Solver::Bfs).unwrap_err(),
            MazeError::Unreachable { start: 0, end: 5 }
        );
    }

    #[test]
    fn test_tree_edge_must_be_a_wall() {
        let graph = grid();
        let tree = vec![(0, 4)];
        assert_eq!(
            solve_tree(&graph, &tree, 0, 4, Solver::Bfs).unwrap_err(),
            MazeError::EdgeNotFound { u: 0, v: 4 }
        );
    }
}
