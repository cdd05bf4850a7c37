//! Output of generated mazes as SVG images or gnuplot scripts.

mod gnuplot;
mod svg;

pub use gnuplot::GnuplotRenderer;
pub use svg::SvgRenderer;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    error::RenderError,
    maze::{Border, Maze, Vertex},
    topology::Bounds,
};

/// Pixels per maze unit.
pub const SCALE: f64 = 30.0;

/// Colours and line width shared by all renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub stroke_color: String,
    pub background_color: String,
    pub stroke_width: u32,
    pub solution_color: String,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            stroke_color: "black".to_string(),
            background_color: "white".to_string(),
            stroke_width: 3,
            solution_color: "red".to_string(),
        }
    }
}

/// Writes a maze in some output format.
pub trait Render {
    /// File extension of the output, without the dot.
    fn extension(&self) -> &'static str;

    /// Writes the remaining walls of `maze`, framed by `bounds`, to `out`.
    fn render(&self, maze: &Maze, bounds: Bounds, out: &mut dyn Write) -> Result<(), RenderError>;

    /// Renders into `<prefix>.<extension>` and returns the path written.
    fn render_to_file(
        &self,
        maze: &Maze,
        bounds: Bounds,
        prefix: &Path,
    ) -> Result<PathBuf, RenderError> {
        let path = output_path(prefix, self.extension());
        write_file(&path, |out| self.render(maze, bounds, out))?;
        Ok(path)
    }
}

/// Output formats selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Svg,
    /// Gnuplot script producing a PNG.
    Gnuplot,
}

impl OutputFormat {
    pub fn renderer(self, style: Style, draw_solution: bool) -> Box<dyn Render> {
        match self {
            OutputFormat::Svg => Box::new(SvgRenderer::new(style).with_solution(draw_solution)),
            OutputFormat::Gnuplot => {
                Box::new(GnuplotRenderer::new(style).with_solution(draw_solution))
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Svg => write!(f, "SVG"),
            OutputFormat::Gnuplot => write!(f, "gnuplot"),
        }
    }
}

/// `<prefix>.<extension>`, keeping any dots already in the prefix.
pub fn output_path(prefix: &Path, extension: &str) -> PathBuf {
    let mut path = prefix.as_os_str().to_owned();
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

/// Creates `path` and hands a buffered writer to `write`.
fn write_file<F>(path: &Path, write: F) -> Result<(), RenderError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), RenderError>,
{
    let with_path = |source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(with_path)?;
    let mut out = BufWriter::new(file);
    write(&mut out).map_err(|err| match err {
        RenderError::Write(source) => with_path(source),
        other => other,
    })?;
    out.flush().map_err(with_path)?;

    tracing::info!(path = %path.display(), "wrote maze");
    Ok(())
}

/// Every wall still standing, each once: boundary walls and internal walls
/// seen from their higher-numbered cell.
pub(crate) fn visible_walls(maze: &Maze) -> impl Iterator<Item = &Border> {
    maze.graph().iter().flat_map(|(vertex, edges)| {
        edges
            .iter()
            .filter(move |edge| edge.neighbor.is_none_or(|neighbor| neighbor < vertex))
            .map(|edge| edge.border.as_ref())
    })
}

/// Approximate centre of a cell: the mean of its remaining wall midpoints.
fn cell_anchor(maze: &Maze, vertex: Vertex) -> Option<(f64, f64)> {
    let edges = maze.graph().neighbors(vertex);
    if edges.is_empty() {
        return None;
    }
    let (sx, sy) = edges
        .iter()
        .map(|edge| edge.border.midpoint())
        .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
    let n = edges.len() as f64;
    Some((sx / n, sy / n))
}

/// Points of the solution route: the start cell's anchor, the midpoint of
/// every opened wall along the route, then the end cell's anchor.
pub(crate) fn solution_points(maze: &Maze) -> Vec<(f64, f64)> {
    let route = maze.solution_route();
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return Vec::new();
    };

    let path = maze.solution_path();
    let mut points: Vec<_> = cell_anchor(maze, first).into_iter().collect();
    points.extend(
        route
            .windows(2)
            .filter_map(|pair| path.border_between(pair[0], pair[1]))
            .map(|border| border.midpoint()),
    );
    points.extend(cell_anchor(maze, last));
    points
}

/// Formats a coordinate with at most three decimals.
pub(crate) fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid printing "-0"
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Output size in pixels for `bounds`, with one unit of margin on each side.
pub(crate) fn resolution(bounds: Bounds) -> (u64, u64) {
    let width = ((bounds.width() + 2.0) * SCALE) as u64;
    let height = ((bounds.height() + 2.0) * SCALE) as u64;
    (width, height)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{
        generators::{Generator, generate_maze},
        maze::Maze,
        topology::{Rectangular, Topology},
    };

    /// A generated 3x3 rectangular maze and its topology.
    pub fn small_maze() -> (Maze, Rectangular) {
        let topology = Rectangular::new(3, 3).unwrap();
        let mut maze = Maze::from_topology(&topology).unwrap();
        generate_maze(&mut maze, Generator::Kruskal, Some(7)).unwrap();
        (maze, topology)
    }

    pub fn render_to_string<R: super::Render>(renderer: &R) -> String {
        let (maze, topology) = small_maze();
        let mut out = Vec::new();
        renderer.render(&maze, topology.bounds(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }
}
