use std::{f64::consts::FRAC_PI_3, fmt};

use super::{Bounds, Topology};
use crate::{
    error::TopologyError,
    maze::{Border, Graph, Vertex},
};

/// Axial offsets of the six neighbours, in the same order as the sides
/// returned by [`Honeycomb::wall`].
const NEIGHBOURS: [(i64, i64); 6] = [(-1, 0), (-1, 1), (0, 1), (1, 0), (1, -1), (0, -1)];

/// Hexagon of hexagonal cells with `size` cells along each side.
///
/// Cells are addressed by axial coordinates `(u, v)` where `u` points up and
/// `v` to the right. The entrance is the bottom side of the first cell and the
/// exit the top side of the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Honeycomb {
    size: usize,
}

impl Honeycomb {
    pub fn new(size: usize) -> Result<Self, TopologyError> {
        // Cell indices are computed in i64 and reach about 4 * size²
        let fits = i64::try_from(size)
            .ok()
            .and_then(|s| s.checked_mul(s))
            .and_then(|n| n.checked_mul(4))
            .is_some_and(|n| usize::try_from(n).is_ok());
        if size == 0 || !fits {
            return Err(TopologyError::InvalidSize(size.to_string()));
        }
        Ok(Honeycomb { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn radius(&self) -> i64 {
        self.size as i64
    }

    /// Inclusive range of `v` in row `u`.
    fn v_extent(&self, u: i64) -> (i64, i64) {
        let size = self.radius();
        if u < 0 {
            (-size - u + 1, size - 1)
        } else {
            (-size + 1, size - 1 - u)
        }
    }

    fn contains(&self, u: i64, v: i64) -> bool {
        let size = self.radius();
        if u <= -size || u >= size {
            return false;
        }
        let (low, high) = self.v_extent(u);
        (low..=high).contains(&v)
    }

    fn index(&self, u: i64, v: i64) -> Vertex {
        let size = self.radius();
        let index = if u <= 0 {
            (3 * size + u) * (size + u - 1) / 2 + v
        } else {
            (3 * size * (size - 1) + (4 * size - u - 1) * u) / 2 + v
        };
        index as Vertex
    }

    fn wall(&self, u: i64, v: i64, side: usize) -> Border {
        let (u, v) = (u as f64, v as f64);
        let cx = 3f64.sqrt() / 2.0 * u + 3f64.sqrt() * v;
        let cy = 1.5 * u;
        let theta1 = (side as f64 - 2.5) * FRAC_PI_3;
        let theta2 = theta1 + FRAC_PI_3;
        Border::line(
            cx + theta1.cos(),
            cy + theta1.sin(),
            cx + theta2.cos(),
            cy + theta2.sin(),
        )
    }
}

impl Topology for Honeycomb {
    fn vertex_count(&self) -> usize {
        3 * self.size * (self.size - 1) + 1
    }

    fn start_vertex(&self) -> Vertex {
        0
    }

    fn end_vertex(&self) -> Vertex {
        self.vertex_count() - 1
    }

    fn build_graph(&self) -> Graph {
        let size = self.radius();
        let (start, end) = (self.start_vertex(), self.end_vertex());
        let mut graph = Graph::new(self.vertex_count());

        for u in (-size + 1)..size {
            let (low, high) = self.v_extent(u);
            for v in low..=high {
                let node = self.index(u, v);
                for (side, (du, dv)) in NEIGHBOURS.into_iter().enumerate() {
                    let (nu, nv) = (u + du, v + dv);
                    if self.contains(nu, nv) {
                        // Each internal wall is added from its higher cell
                        let neighbour = self.index(nu, nv);
                        if neighbour < node {
                            graph.add_edge(node, neighbour, self.wall(u, v, side));
                        }
                    } else if !((node == start && side == 0) || (node == end && side == 3)) {
                        graph.add_boundary(node, self.wall(u, v, side));
                    }
                }
            }
        }

        graph
    }

    fn bounds(&self) -> Bounds {
        let size = self.size as f64;
        let (xlim, ylim) = (3f64.sqrt() * (size - 0.5), 1.5 * size - 0.5);
        Bounds::new(-xlim, -ylim, xlim, ylim)
    }
}

impl fmt::Display for Honeycomb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Honeycomb maze of size {}", self.size)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::topology::test_support::assert_well_formed;

    #[test]
    fn test_indices_are_dense() {
        let topology = Honeycomb::new(4).unwrap();
        let size = topology.radius();
        let mut indices = Vec::new();
        for u in (-size + 1)..size {
            let (low, high) = topology.v_extent(u);
            indices.extend((low..=high).map(|v| topology.index(u, v)));
        }
        let expected: Vec<_> = (0..topology.vertex_count()).collect();
        assert_eq!(indices, expected);
    }

    #[rstest]
    #[case(1, 0, 4)]
    #[case(2, 12, 16)]
    #[case(3, 42, 28)]
    fn test_wall_counts(#[case] size: usize, #[case] internal: usize, #[case] boundary: usize) {
        let graph = Honeycomb::new(size).unwrap().build_graph();
        assert_eq!(graph.internal_edge_count(), internal);
        assert_eq!(graph.boundary_edge_count(), boundary);
    }

    #[test]
    fn test_shared_walls_coincide() {
        // The wall stored for a pair must be the side both cells see
        let topology = Honeycomb::new(2).unwrap();
        let a = topology.wall(0, 0, 2);
        let b = topology.wall(0, 1, 5);
        let ((ax1, ay1), (ax2, ay2)) = a.endpoints();
        let ((bx1, by1), (bx2, by2)) = b.endpoints();
        assert!((ax1 - bx2).abs() < 1e-9 && (ay1 - by2).abs() < 1e-9);
        assert!((ax2 - bx1).abs() < 1e-9 && (ay2 - by1).abs() < 1e-9);
    }

    #[rstest]
    fn test_well_formed(#[values(1, 2, 6)] size: usize) {
        assert_well_formed(&Honeycomb::new(size).unwrap());
    }

    #[rstest]
    #[case(0)]
    #[case(usize::MAX)]
    #[case(1 << 32)]
    fn test_invalid_size_is_rejected(#[case] size: usize) {
        let result = Honeycomb::new(size);
        assert!(matches!(result, Err(TopologyError::InvalidSize(_))));
    }
}
