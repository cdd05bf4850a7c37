//! Cell layouts that produce the fully walled graph a [`Maze`] is carved
//! from.
//!
//! [`Maze`]: crate::maze::Maze

mod circular;
mod hexagonal;
mod honeycomb;
mod rectangular;
mod triangular;
mod user;

pub use circular::Circular;
pub use hexagonal::{HexagonShape, Hexagonal};
pub use honeycomb::Honeycomb;
pub use rectangular::Rectangular;
pub use triangular::Triangular;
pub use user::{UserDefined, Wall};

use std::fmt;

use crate::maze::{Graph, Vertex};

/// Provides the vertex count, endpoints and initial graph of a maze.
///
/// The graph must be connected across its internal walls, with every
/// internal wall stored on both of its cells.
pub trait Topology: fmt::Display {
    fn vertex_count(&self) -> usize;

    fn start_vertex(&self) -> Vertex;

    fn end_vertex(&self) -> Vertex;

    /// Builds the graph with every wall standing.
    fn build_graph(&self) -> Graph;

    /// Drawing extent of all walls, in maze units.
    fn bounds(&self) -> Bounds;
}

impl<T: Topology + ?Sized> Topology for Box<T> {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn start_vertex(&self) -> Vertex {
        (**self).start_vertex()
    }

    fn end_vertex(&self) -> Vertex {
        (**self).end_vertex()
    }

    fn build_graph(&self) -> Graph {
        (**self).build_graph()
    }

    fn bounds(&self) -> Bounds {
        (**self).bounds()
    }
}

/// Axis-aligned rectangle in maze units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Bounds {
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Bounds {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Smallest rectangle holding both `self` and the box `(xmin, ymin, xmax, ymax)`.
    pub fn union(self, (xmin, ymin, xmax, ymax): (f64, f64, f64, f64)) -> Self {
        Bounds {
            xmin: self.xmin.min(xmin),
            ymin: self.ymin.min(ymin),
            xmax: self.xmax.max(xmax),
            ymax: self.ymax.max(ymax),
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
}

impl From<(f64, f64, f64, f64)> for Bounds {
    fn from((xmin, ymin, xmax, ymax): (f64, f64, f64, f64)) -> Self {
        Bounds::new(xmin, ymin, xmax, ymax)
    }
}

/// Maze layouts selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MazeKind {
    #[default]
    Rectangular,
    /// Hexagon split into triangles.
    Hexagonal,
    Honeycomb,
    Circular,
    /// Hexagonal triangle lattice bent into a disc.
    CircularHexagonal,
    /// Staircase of square cells.
    Triangular,
    /// Graph read from a description file.
    User,
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeKind::Rectangular => write!(f, "Rectangular"),
            MazeKind::Hexagonal => write!(f, "Hexagonal (triangular lattice)"),
            MazeKind::Honeycomb => write!(f, "Honeycomb"),
            MazeKind::Circular => write!(f, "Circular"),
            MazeKind::CircularHexagonal => write!(f, "Circular (triangular lattice)"),
            MazeKind::Triangular => write!(f, "Triangular"),
            MazeKind::User => write!(f, "User defined graph"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_union() {
        let bounds = Bounds::new(0.0, 0.0, 1.0, 1.0).union((-1.0, 0.5, 0.5, 3.0));
        assert_eq!(bounds, Bounds::new(-1.0, 0.0, 1.0, 3.0));
        assert_eq!(bounds.width(), 2.0);
        assert_eq!(bounds.height(), 3.0);
    }

    #[test]
    fn test_boxed_topology() {
        let topology: Box<dyn Topology> = Box::new(Rectangular::new(2, 3).unwrap());
        assert_eq!(topology.vertex_count(), 6);
        assert_eq!(topology.end_vertex(), 5);
        assert_eq!(topology.to_string(), "Rectangular maze of size 2x3");
    }
}
