use std::{
    fmt,
    io::{BufRead, Read},
    path::{Path, PathBuf},
    str::{FromStr, SplitWhitespace},
};

use super::{Bounds, Topology};
use crate::{
    error::TopologyError,
    maze::{Border, Graph, Vertex},
};

/// One wall of a user graph: the cell it belongs to, the cell on the other
/// side (if any) and its geometry.
pub type Wall = (Vertex, Option<Vertex>, Border);

/// Graph read from a whitespace-separated description.
///
/// The description starts with the vertex count, followed by any number of
/// walls, each written as
///
/// ```text
/// u v Line x1 y1 x2 y2
/// u v Arc cx cy r theta1 theta2
/// ```
///
/// where `v` is `-1` for a boundary wall. Every internal wall is listed once
/// and stored on both cells. The entrance is vertex 0 and the exit the last
/// vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDefined {
    vertex_count: usize,
    walls: Vec<Wall>,
    source: Option<PathBuf>,
}

impl UserDefined {
    /// Parses a description from any buffered reader.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, TopologyError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    /// Parses the description stored at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TopologyError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| TopologyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut topology: UserDefined = text.parse()?;
        topology.source = Some(path.to_path_buf());
        Ok(topology)
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }
}

impl FromStr for UserDefined {
    type Err = TopologyError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(text);

        let Some((position, token)) = tokens.next_token() else {
            return Err(TopologyError::MissingVertexCount);
        };
        let vertex_count: usize = token.parse().map_err(|_| TopologyError::InvalidNumber {
            position,
            token: token.to_string(),
            expected: "vertex count",
        })?;
        if vertex_count == 0 {
            return Err(TopologyError::InvalidSize("0 vertices".to_string()));
        }

        let mut walls = Vec::new();
        while let Some((start, token)) = tokens.next_token() {
            let u = parse_vertex(start, token, vertex_count)?;
            let (position, token) = tokens.edge_token(start)?;
            let v = match parse_vertex(position, token, vertex_count) {
                Err(TopologyError::VertexOutOfRange { vertex: -1, .. }) => None,
                other => Some(other?),
            };

            let (position, kind) = tokens.edge_token(start)?;
            let border = match kind {
                "Line" => {
                    let [x1, y1, x2, y2] = tokens.numbers(start)?;
                    Border::line(x1, y1, x2, y2)
                }
                "Arc" => {
                    let [cx, cy, r, theta1, theta2] = tokens.numbers(start)?;
                    Border::arc(cx, cy, r, theta1, theta2)
                }
                _ => {
                    return Err(TopologyError::UnknownBorderType {
                        position,
                        token: kind.to_string(),
                    });
                }
            };
            walls.push((u, v, border));
        }

        tracing::debug!(vertex_count, walls = walls.len(), "parsed user graph");
        Ok(UserDefined {
            vertex_count,
            walls,
            source: None,
        })
    }
}

/// Parses a vertex id in `[0, vertex_count)`.
fn parse_vertex(
    position: usize,
    token: &str,
    vertex_count: usize,
) -> Result<Vertex, TopologyError> {
    let vertex: i64 = token.parse().map_err(|_| TopologyError::InvalidNumber {
        position,
        token: token.to_string(),
        expected: "vertex id",
    })?;
    usize::try_from(vertex)
        .ok()
        .filter(|&v| v < vertex_count)
        .ok_or(TopologyError::VertexOutOfRange {
            position,
            vertex,
            vertex_count,
        })
}

/// Whitespace-separated tokens with their 1-based positions.
struct Tokens<'a> {
    inner: std::iter::Enumerate<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Tokens {
            inner: text.split_whitespace().enumerate(),
        }
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        self.inner.next().map(|(index, token)| (index + 1, token))
    }

    /// Next token of the wall starting at token `start`.
    fn edge_token(&mut self, start: usize) -> Result<(usize, &'a str), TopologyError> {
        self.next_token()
            .ok_or(TopologyError::TruncatedEdge { position: start })
    }

    /// Reads the `N` coordinates of the wall starting at token `start`.
    fn numbers<const N: usize>(&mut self, start: usize) -> Result<[f64; N], TopologyError> {
        let mut values = [0.0; N];
        for value in &mut values {
            let (position, token) = self.edge_token(start)?;
            *value = token.parse().map_err(|_| TopologyError::InvalidNumber {
                position,
                token: token.to_string(),
                expected: "coordinate",
            })?;
        }
        Ok(values)
    }
}

impl Topology for UserDefined {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn start_vertex(&self) -> Vertex {
        0
    }

    fn end_vertex(&self) -> Vertex {
        self.vertex_count - 1
    }

    fn build_graph(&self) -> Graph {
        let mut graph = Graph::new(self.vertex_count);
        for &(u, v, border) in &self.walls {
            match v {
                Some(v) => {
                    graph.add_edge(u, v, border);
                }
                None => graph.add_boundary(u, border),
            }
        }
        graph
    }

    /// Union of the wall extents. Arcs count with their full circle.
    fn bounds(&self) -> Bounds {
        let mut walls = self.walls.iter().map(|(_, _, border)| border.bounds());
        match walls.next() {
            Some(first) => walls.fold(Bounds::from(first), Bounds::union),
            None => Bounds::new(0.0, 0.0, 0.0, 0.0),
        }
    }
}

impl fmt::Display for UserDefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User defined maze")?;
        if let Some(path) = &self.source {
            write!(f, " from {}", path.display())?;
        }
        write!(f, " with {} cells", self.vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::rstest;

    use super::*;
    use crate::topology::test_support::assert_well_formed;

    /// Two unit squares side by side, open on the far left and right.
    const TWO_SQUARES: &str = "2
        0 1 Line 1 0 1 1
        0 -1 Line 0 0 1 0
        0 -1 Line 0 1 1 1
        1 -1 Line 1 0 2 0
        1 -1 Line 1 1 2 1
    ";

    #[test]
    fn test_parse_two_squares() {
        let topology = UserDefined::from_reader(Cursor::new(TWO_SQUARES)).unwrap();
        assert_eq!(topology.vertex_count(), 2);
        assert_eq!((topology.start_vertex(), topology.end_vertex()), (0, 1));
        assert_eq!(topology.walls().len(), 5);

        let graph = topology.build_graph();
        assert_eq!(graph.internal_edges(), vec![(0, 1)]);
        assert_eq!(graph.boundary_edge_count(), 4);
        assert_eq!(topology.bounds(), Bounds::new(0.0, 0.0, 2.0, 1.0));
        assert_well_formed(&topology);
    }

    #[test]
    fn test_arc_bounds_use_full_circle() {
        let topology: UserDefined = "1 0 -1 Arc 1 1 2 0 0.5".parse().unwrap();
        assert_eq!(topology.bounds(), Bounds::new(-1.0, -1.0, 3.0, 3.0));
        assert!(matches!(topology.walls()[0], (0, None, Border::Arc { .. })));
    }

    #[test]
    fn test_empty_edge_list() {
        let topology: UserDefined = "1".parse().unwrap();
        assert_eq!(topology.bounds(), Bounds::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(topology.build_graph().vertex_count(), 1);
    }

    #[rstest]
    #[case("", "does not start with a vertex count")]
    #[case("two", "token 1 (`two`) is not a valid vertex count")]
    #[case("0", "invalid maze size 0 vertices")]
    #[case("2 0 1 Line 0 0 1", "edge starting at token 2 is truncated")]
    #[case("2 0", "edge starting at token 2 is truncated")]
    #[case("2 0 1 Curve 0 0 1 1", "token 4 (`Curve`) is not a border type")]
    #[case(
        "2 0 2 Line 0 0 1 1",
        "token 3 references vertex 2, but there are 2 vertices"
    )]
    #[case("2 -1 1 Line 0 0 1 1", "token 2 references vertex -1")]
    #[case("2 0 1 Line 0 x 1 1", "token 6 (`x`) is not a valid coordinate")]
    #[case("2 0 1.5 Line 0 0 1 1", "token 3 (`1.5`) is not a valid vertex id")]
    fn test_parse_errors(#[case] text: &str, #[case] message: &str) {
        let err = text.parse::<UserDefined>().unwrap_err();
        assert!(err.to_string().contains(message), "{err}");
    }

    #[test]
    fn test_missing_file() {
        let err = UserDefined::from_path("/nonexistent/graph.txt").unwrap_err();
        assert!(matches!(err, TopologyError::Io { .. }));
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!("mazegen-user-{}.txt", std::process::id()));
        std::fs::write(&path, TWO_SQUARES).unwrap();
        let topology = UserDefined::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(topology.vertex_count(), 2);
        assert!(topology.to_string().contains("with 2 cells"));
    }
}
