use std::{collections::VecDeque, sync::Arc};

use crate::error::MazeError;

use super::border::Border;

/// Index of a maze cell, in `[0, vertex_count)`.
pub type Vertex = usize;

/// One wall as seen from one of its cells.
///
/// `neighbor` is `None` for boundary walls, which have no cell on the other
/// side and are never opened.
#[derive(Debug, Clone)]
pub struct Edge {
    pub neighbor: Option<Vertex>,
    pub border: Arc<Border>,
}

impl Edge {
    pub fn is_boundary(&self) -> bool {
        self.neighbor.is_none()
    }
}

/// Adjacency-list graph of cells and the walls between them.
///
/// Internal walls are stored twice, once per endpoint, and both entries share
/// the same [`Border`] allocation.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates a graph of `vertex_count` cells without any walls.
    pub fn new(vertex_count: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All walls of cell `v`, boundary walls included.
    ///
    /// # Panics
    /// If `v` is out of range.
    pub fn neighbors(&self, v: Vertex) -> &[Edge] {
        &self.adjacency[v]
    }

    /// Cells sharing an internal wall with `v`, one entry per wall.
    pub fn internal_neighbors(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency[v].iter().filter_map(|edge| edge.neighbor)
    }

    /// Iterates over `(vertex, walls)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &[Edge])> {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(v, edges)| (v, edges.as_slice()))
    }

    /// Adds an internal wall between `u` and `v` and returns its shared border.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, border: Border) -> Arc<Border> {
        let border = Arc::new(border);
        self.add_shared_edge(u, v, Arc::clone(&border));
        border
    }

    /// Adds an internal wall whose border is already shared elsewhere.
    pub fn add_shared_edge(&mut self, u: Vertex, v: Vertex, border: Arc<Border>) {
        self.adjacency[u].push(Edge {
            neighbor: Some(v),
            border: Arc::clone(&border),
        });
        self.adjacency[v].push(Edge {
            neighbor: Some(u),
            border,
        });
    }

    /// Adds a boundary wall to cell `u`.
    pub fn add_boundary(&mut self, u: Vertex, border: Border) {
        self.adjacency[u].push(Edge {
            neighbor: None,
            border: Arc::new(border),
        });
    }

    /// Border of the first internal wall between `u` and `v`, if any.
    pub fn border_between(&self, u: Vertex, v: Vertex) -> Option<&Arc<Border>> {
        self.adjacency
            .get(u)?
            .iter()
            .find(|edge| edge.neighbor == Some(v))
            .map(|edge| &edge.border)
    }

    /// Removes the internal wall between `u` and `v` from both cells, opening
    /// a passage. Returns the removed border.
    ///
    /// When several walls separate the same pair of cells only one of them is
    /// removed.
    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> Result<Arc<Border>, MazeError> {
        let vertex_count = self.vertex_count();
        for vertex in [u, v] {
            if vertex >= vertex_count {
                return Err(MazeError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }

        let forward = self.adjacency[u]
            .iter()
            .position(|edge| edge.neighbor == Some(v))
            .ok_or(MazeError::EdgeNotFound { u, v })?;
        let border = Arc::clone(&self.adjacency[u][forward].border);

        if u == v {
            self.adjacency[u].remove(forward);
            return Ok(border);
        }

        let backward = self.adjacency[v]
            .iter()
            .position(|edge| edge.neighbor == Some(u) && Arc::ptr_eq(&edge.border, &border))
            .ok_or(MazeError::AsymmetricEdge { u, v })?;

        self.adjacency[u].remove(forward);
        self.adjacency[v].remove(backward);
        Ok(border)
    }

    /// Every internal wall once, as `(u, v)` with `u < v`.
    pub fn internal_edges(&self) -> Vec<(Vertex, Vertex)> {
        self.iter()
            .flat_map(|(u, edges)| {
                edges
                    .iter()
                    .filter_map(move |edge| edge.neighbor.filter(|&v| v > u).map(|v| (u, v)))
            })
            .collect()
    }

    /// Number of internal walls, each counted once.
    pub fn internal_edge_count(&self) -> usize {
        self.iter()
            .map(|(u, edges)| {
                edges
                    .iter()
                    .filter(|edge| edge.neighbor.is_some_and(|v| v > u))
                    .count()
            })
            .sum()
    }

    /// Number of boundary walls.
    pub fn boundary_edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .flatten()
            .filter(|edge| edge.is_boundary())
            .count()
    }

    /// Whether every cell is reachable from cell 0 across internal walls.
    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        let mut visited = vec![false; self.vertex_count()];
        let mut queue = VecDeque::from([0]);
        visited[0] = true;
        let mut reached = 1;

        while let Some(u) = queue.pop_front() {
            for v in self.internal_neighbors(u) {
                if !visited[v] {
                    visited[v] = true;
                    reached += 1;
                    queue.push_back(v);
                }
            }
        }

        reached == self.vertex_count()
    }

    /// Checks that every internal wall is in range and mirrored with the same
    /// border.
    pub fn validate(&self) -> Result<(), MazeError> {
        let vertex_count = self.vertex_count();
        for (u, edges) in self.iter() {
            for edge in edges {
                let Some(v) = edge.neighbor else {
                    continue;
                };
                if v >= vertex_count {
                    return Err(MazeError::VertexOutOfRange {
                        vertex: v,
                        vertex_count,
                    });
                }
                let mirrored = self.adjacency[v]
                    .iter()
                    .any(|back| {
                        back.neighbor == Some(u) && Arc::ptr_eq(&back.border, &edge.border)
                    });
                if !mirrored {
                    return Err(MazeError::AsymmetricEdge { u, v });
                }
            }
        }
        Ok(())
    }
}
