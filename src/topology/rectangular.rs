use std::fmt;

use super::{Bounds, Topology};
use crate::{
    error::TopologyError,
    maze::{Border, Graph, Vertex},
};

/// `width` x `height` grid of unit squares. Row 0 is at `y = 0`.
///
/// The entrance is on the left side of the first row and the exit on the
/// right side of the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangular {
    width: usize,
    height: usize,
}

impl Rectangular {
    pub fn new(width: usize, height: usize) -> Result<Self, TopologyError> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(TopologyError::InvalidSize(format!("{width}x{height}")));
        }
        Ok(Rectangular { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: usize, column: usize) -> Vertex {
        row * self.width + column
    }
}

impl Topology for Rectangular {
    fn vertex_count(&self) -> usize {
        self.width * self.height
    }

    fn start_vertex(&self) -> Vertex {
        0
    }

    fn end_vertex(&self) -> Vertex {
        self.vertex_count() - 1
    }

    fn build_graph(&self) -> Graph {
        let (width, height) = (self.width, self.height);
        let mut graph = Graph::new(self.vertex_count());

        // Lower and upper boundaries
        for column in 0..width {
            let x = column as f64;
            let top = height as f64;
            graph.add_boundary(self.index(0, column), Border::line(x, 0.0, x + 1.0, 0.0));
            graph.add_boundary(
                self.index(height - 1, column),
                Border::line(x, top, x + 1.0, top),
            );
        }

        // Side boundaries with gaps for the entrance and exit
        for row in 0..height {
            let y = row as f64;
            if row != 0 {
                graph.add_boundary(self.index(row, 0), Border::line(0.0, y, 0.0, y + 1.0));
            }
            if row != height - 1 {
                let x = width as f64;
                graph.add_boundary(self.index(row, width - 1), Border::line(x, y, x, y + 1.0));
            }
        }

        for row in 0..height {
            for column in 0..width - 1 {
                let (x, y) = ((column + 1) as f64, row as f64);
                graph.add_edge(
                    self.index(row, column),
                    self.index(row, column + 1),
                    Border::line(x, y, x, y + 1.0),
                );
            }
        }

        for row in 0..height - 1 {
            for column in 0..width {
                let (x, y) = (column as f64, (row + 1) as f64);
                graph.add_edge(
                    self.index(row, column),
                    self.index(row + 1, column),
                    Border::line(x, y, x + 1.0, y),
                );
            }
        }

        graph
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width as f64, self.height as f64)
    }
}

impl fmt::Display for Rectangular {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangular maze of size {}x{}", self.width, self.height)
    }
}
