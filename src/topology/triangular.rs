use std::fmt;

use super::{Bounds, Topology};
use crate::{
    error::TopologyError,
    maze::{Border, Graph, Vertex},
};

/// Staircase of unit squares with `rows` rows. Row `i` lies between `y = i`
/// and `y = i + 1` and holds `rows - i` cells starting at `x = 0`.
///
/// The entrance is on the left side of the first cell and the exit on the
/// right side of the single cell of the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangular {
    rows: usize,
}

impl Triangular {
    pub fn new(rows: usize) -> Result<Self, TopologyError> {
        let doubled_count = rows.checked_add(1).and_then(|n| n.checked_mul(rows));
        if rows == 0 || doubled_count.is_none() {
            return Err(TopologyError::InvalidSize(rows.to_string()));
        }
        Ok(Triangular { rows })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn cells_in_row(&self, row: usize) -> usize {
        self.rows - row
    }

    fn index(&self, row: usize, column: usize) -> Vertex {
        // Rows above hold rows + (rows - 1) + ... + (rows - row + 1) cells
        row * self.rows - row * row.saturating_sub(1) / 2 + column
    }
}

impl Topology for Triangular {
    fn vertex_count(&self) -> usize {
        self.rows * (self.rows + 1) / 2
    }

    fn start_vertex(&self) -> Vertex {
        0
    }

    fn end_vertex(&self) -> Vertex {
        self.vertex_count() - 1
    }

    fn build_graph(&self) -> Graph {
        let rows = self.rows;
        let mut graph = Graph::new(self.vertex_count());

        // Top of the first row and bottom of the last one
        for column in 0..rows {
            let x = column as f64;
            graph.add_boundary(self.index(0, column), Border::line(x, 0.0, x + 1.0, 0.0));
        }
        let (last, bottom) = (self.end_vertex(), rows as f64);
        graph.add_boundary(last, Border::line(0.0, bottom, 1.0, bottom));

        for row in 0..rows {
            let (y, cells) = (row as f64, self.cells_in_row(row));
            if row != 0 {
                graph.add_boundary(self.index(row, 0), Border::line(0.0, y, 0.0, y + 1.0));
            }
            if row + 1 < rows {
                // Right side, and the part of the bottom no cell of the next row covers
                let rightmost = self.index(row, cells - 1);
                let (x, below) = (cells as f64, (cells - 1) as f64);
                graph.add_boundary(rightmost, Border::line(x, y, x, y + 1.0));
                graph.add_boundary(rightmost, Border::line(below, y + 1.0, x, y + 1.0));
            }
        }

        for row in 0..rows {
            let y = row as f64;
            for column in 0..self.cells_in_row(row) - 1 {
                let x = (column + 1) as f64;
                graph.add_edge(
                    self.index(row, column),
                    self.index(row, column + 1),
                    Border::line(x, y, x, y + 1.0),
                );
            }
        }

        for row in 0..rows - 1 {
            let y = (row + 1) as f64;
            for column in 0..self.cells_in_row(row + 1) {
                let x = column as f64;
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
        let rows = self.rows as f64;
        Bounds::new(0.0, 0.0, rows, rows)
    }
}

impl fmt::Display for Triangular {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangular maze with {} rows", self.rows)
    }
}
