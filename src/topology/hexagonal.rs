use std::{f64::consts::FRAC_PI_3, fmt};

use super::{Bounds, Topology};
use crate::{
    error::TopologyError,
    maze::{Border, Graph, Vertex},
};

/// How the triangle lattice is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexagonShape {
    /// Flat-sided hexagon.
    #[default]
    Straight,
    /// Rows bent into concentric arcs, giving a disc.
    Circular,
}

/// Side of a triangle in sector coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// Between corners `(row + 1, column)` and `(row + 1, column + 1)`.
    Base,
    /// Between corners `(row, column)` and `(row + 1, column + 1)`.
    Right,
    /// Between corners `(row, column)` and `(row + 1, column)`.
    Left,
}

/// Hexagon made of six triangular sectors, each split into `size²`
/// triangles.
///
/// In every sector, row `i` holds `i + 1` upward triangles and `i` downward
/// ones. The entrance and exit are the outer triangles at column 0 of sectors
/// 0 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hexagonal {
    size: usize,
    shape: HexagonShape,
}

impl Hexagonal {
    pub fn new(size: usize) -> Result<Self, TopologyError> {
        Self::with_shape(size, HexagonShape::Straight)
    }

    pub fn circular(size: usize) -> Result<Self, TopologyError> {
        Self::with_shape(size, HexagonShape::Circular)
    }

    pub fn with_shape(size: usize, shape: HexagonShape) -> Result<Self, TopologyError> {
        let vertex_count = size.checked_mul(size).and_then(|n| n.checked_mul(6));
        if size == 0 || vertex_count.is_none() {
            return Err(TopologyError::InvalidSize(size.to_string()));
        }
        Ok(Hexagonal { size, shape })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn shape(&self) -> HexagonShape {
        self.shape
    }

    fn index(&self, sector: usize, down: bool, row: usize, column: usize) -> Vertex {
        let mut index = sector * self.size * self.size;
        if down {
            index += self.size * (self.size + 1) / 2;
        }
        index + row * (row + 1) / 2 + column
    }

    fn wall(&self, sector: usize, row: usize, column: usize, side: Side) -> Border {
        match self.shape {
            HexagonShape::Straight => self.straight_wall(sector, row, column, side),
            HexagonShape::Circular => self.curved_wall(sector, row, column, side),
        }
    }

    fn straight_wall(&self, sector: usize, row: usize, column: usize, side: Side) -> Border {
        // Corners of sector 0, which points downwards from the centre
        let size = self.size as f64;
        let (x2, y2) = (-size / 2.0, -size * 3f64.sqrt() / 2.0);
        let (x3, y3) = (-x2, y2);
        let (dx12, dy12) = (x2 / size, y2 / size);
        let (dx23, dy23) = ((x3 - x2) / size, (y3 - y2) / size);

        let (row, column) = (row as f64, column as f64);
        let (x1, y1, x2, y2) = match side {
            Side::Base => {
                let x = dx12 * (row + 1.0) + dx23 * column;
                let y = dy12 * (row + 1.0) + dy23 * column;
                (x, y, x + dx23, y + dy23)
            }
            Side::Right => {
                let x = dx12 * row + dx23 * column;
                let y = dy12 * row + dy23 * column;
                (x, y, x + dx12 + dx23, y + dy12 + dy23)
            }
            Side::Left => {
                let x = dx12 * row + dx23 * column;
                let y = dy12 * row + dy23 * column;
                (x, y, x + dx12, y + dy12)
            }
        };

        let theta = sector as f64 * FRAC_PI_3;
        let (sin, cos) = theta.sin_cos();
        Border::line(
            x1 * cos - y1 * sin,
            x1 * sin + y1 * cos,
            x2 * cos - y2 * sin,
            x2 * sin + y2 * cos,
        )
    }

    fn curved_wall(&self, sector: usize, row: usize, column: usize, side: Side) -> Border {
        let base = (sector as f64 - 2.0) * FRAC_PI_3;
        let (row, column) = (row as f64, column as f64);

        if side == Side::Base {
            let step = FRAC_PI_3 / (row + 1.0);
            return Border::arc(
                0.0,
                0.0,
                row + 1.0,
                base + column * step,
                base + (column + 1.0) * step,
            );
        }

        let theta1 = if row > 0.0 {
            base + column * FRAC_PI_3 / row
        } else {
            base
        };
        let outer_column = if side == Side::Right {
            column + 1.0
        } else {
            column
        };
        let theta2 = base + outer_column * FRAC_PI_3 / (row + 1.0);
        Border::line(
            row * theta1.cos(),
            row * theta1.sin(),
            (row + 1.0) * theta2.cos(),
            (row + 1.0) * theta2.sin(),
        )
    }
}

impl Topology for Hexagonal {
    fn vertex_count(&self) -> usize {
        6 * self.size * self.size
    }

    fn start_vertex(&self) -> Vertex {
        self.index(0, false, self.size - 1, 0)
    }

    fn end_vertex(&self) -> Vertex {
        self.index(3, false, self.size - 1, 0)
    }

    fn build_graph(&self) -> Graph {
        let size = self.size;
        let mut graph = Graph::new(self.vertex_count());

        for sector in 0..6 {
            // Outer boundary, except entrance and exit
            for column in 0..size {
                if column > 0 || sector % 3 != 0 {
                    graph.add_boundary(
                        self.index(sector, false, size - 1, column),
                        self.wall(sector, size - 1, column, Side::Base),
                    );
                }
            }

            // Walls between neighbouring sectors
            for row in 0..size {
                graph.add_edge(
                    self.index(sector, false, row, row),
                    self.index((sector + 1) % 6, false, row, 0),
                    self.wall(sector, row, row, Side::Right),
                );
            }

            for row in 0..size {
                for column in 0..=row {
                    if row + 1 < size {
                        graph.add_edge(
                            self.index(sector, false, row, column),
                            self.index(sector, true, row, column),
                            self.wall(sector, row, column, Side::Base),
                        );
                    }
                    if column < row {
                        graph.add_edge(
                            self.index(sector, false, row, column),
                            self.index(sector, true, row - 1, column),
                            self.wall(sector, row, column, Side::Right),
                        );
                    }
                    if column > 0 {
                        graph.add_edge(
                            self.index(sector, false, row, column),
                            self.index(sector, true, row - 1, column - 1),
                            self.wall(sector, row, column, Side::Left),
                        );
                    }
                }
            }
        }

        graph
    }

    fn bounds(&self) -> Bounds {
        let size = self.size as f64;
        match self.shape {
            HexagonShape::Straight => {
                let half_height = size * 3f64.sqrt() / 2.0;
                Bounds::new(-size, -half_height, size, half_height)
            }
            HexagonShape::Circular => Bounds::new(-size, -size, size, size),
        }
    }
}

impl fmt::Display for Hexagonal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self.shape {
            HexagonShape::Straight => "Hexagonal",
            HexagonShape::Circular => "Circular",
        };
        let size = self.size;
        write!(f, "{shape} maze with triangular lattice of size {size}")
    }
}
