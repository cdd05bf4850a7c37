use std::{
    f64::consts::{FRAC_PI_2, TAU},
    fmt,
};

use super::{Bounds, Topology};
use crate::{
    error::TopologyError,
    maze::{Border, Graph, Vertex},
};

/// Disc of `size` concentric rings around a single centre cell.
///
/// Ring `i` spans radii `i..i + 1`. A ring has as many cells as the one
/// inside it, doubled whenever those cells would otherwise be wider than 2
/// units at the inner radius. The entrance and exit are opposite cells of the
/// outer ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circular {
    size: usize,
    ring_counts: Vec<usize>,
    ring_offsets: Vec<usize>,
}

impl Circular {
    pub fn new(size: usize) -> Result<Self, TopologyError> {
        if size == 0 {
            return Err(TopologyError::InvalidSize(size.to_string()));
        }

        let mut ring_counts: Vec<usize> = vec![1];
        let mut ring_offsets: Vec<usize> = vec![0];
        for ring in 1..size {
            let previous = ring_counts[ring - 1];
            let count = if TAU * ring as f64 / previous as f64 > 2.0 {
                previous * 2
            } else {
                previous
            };
            let Some(offset) = ring_offsets[ring - 1].checked_add(previous) else {
                return Err(TopologyError::InvalidSize(size.to_string()));
            };
            ring_offsets.push(offset);
            ring_counts.push(count);
        }
        let (offset, count) = (ring_offsets[size - 1], ring_counts[size - 1]);
        if offset.checked_add(count).is_none() {
            return Err(TopologyError::InvalidSize(size.to_string()));
        }

        Ok(Circular {
            size,
            ring_counts,
            ring_offsets,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells in each ring, innermost first.
    pub fn ring_counts(&self) -> &[usize] {
        &self.ring_counts
    }

    /// Angle at which cell `cell` of a ring with `count` cells starts.
    fn angle(cell: usize, count: usize) -> f64 {
        cell as f64 * TAU / count as f64 - FRAC_PI_2
    }

    fn outer_ring(&self) -> (usize, usize) {
        let last = self.size - 1;
        (self.ring_offsets[last], self.ring_counts[last])
    }
}

impl Topology for Circular {
    fn vertex_count(&self) -> usize {
        let (offset, count) = self.outer_ring();
        offset + count
    }

    fn start_vertex(&self) -> Vertex {
        self.outer_ring().0
    }

    fn end_vertex(&self) -> Vertex {
        let (offset, count) = self.outer_ring();
        offset + count / 2
    }

    fn build_graph(&self) -> Graph {
        let (start, end) = (self.start_vertex(), self.end_vertex());
        let mut graph = Graph::new(self.vertex_count());

        for ring in 1..self.size {
            let count = self.ring_counts[ring];
            let inner_count = self.ring_counts[ring - 1];
            let radius = ring as f64;

            for cell in 0..count {
                let node = self.ring_offsets[ring] + cell;
                let (theta1, theta2) = (Self::angle(cell, count), Self::angle(cell + 1, count));

                // Arc shared with the cell of the inner ring
                let inner = self.ring_offsets[ring - 1] + inner_count * cell / count;
                graph.add_edge(node, inner, Border::arc(0.0, 0.0, radius, theta1, theta2));

                // Radial wall towards the next cell of the same ring
                let next = self.ring_offsets[ring] + (cell + 1) % count;
                let (sin, cos) = theta2.sin_cos();
                graph.add_edge(
                    node,
                    next,
                    Border::line(
                        radius * cos,
                        radius * sin,
                        (radius + 1.0) * cos,
                        (radius + 1.0) * sin,
                    ),
                );

                if ring == self.size - 1 && node != start && node != end {
                    graph.add_boundary(node, Border::arc(0.0, 0.0, radius + 1.0, theta1, theta2));
                }
            }
        }

        graph
    }

    fn bounds(&self) -> Bounds {
        let size = self.size as f64;
        Bounds::new(-size, -size, size, size)
    }
}

impl fmt::Display for Circular {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circular maze of size {}", self.size)
    }
}
