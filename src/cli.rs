//! Command-line surface of the `mazegen` binary.
//!
//! Parses options with clap, builds the requested topology, generates and
//! solves the maze, and writes it out in the chosen format.

use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

use clap::Parser;
use thiserror::Error;

use crate::{
    error::{MazeError, RenderError, TopologyError},
    generators::{Generator, generate_maze},
    maze::Maze,
    render::{OutputFormat, Style, output_path},
    solvers::Solver,
    topology::{
        Circular, Hexagonal, Honeycomb, MazeKind, Rectangular, Topology, Triangular, UserDefined,
    },
};

/// Options of the `mazegen` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mazegen",
    version,
    about = "Generate perfect mazes on various tilings."
)]
pub struct Cli {
    /// Maze layout.
    #[arg(short, long, value_enum, default_value_t = MazeKind::Rectangular)]
    pub maze: MazeKind,

    /// Spanning tree algorithm used to carve the maze.
    #[arg(short, long, value_enum, default_value_t = Generator::Kruskal)]
    pub algorithm: Generator,

    /// Size of non-rectangular mazes.
    #[arg(short, long, default_value_t = 20)]
    pub size: usize,

    /// Width of rectangular mazes.
    #[arg(short, long, default_value_t = 20)]
    pub width: usize,

    /// Height of rectangular mazes.
    #[arg(short = 'H', long, default_value_t = 20)]
    pub height: usize,

    /// Output format.
    #[arg(
        short = 't',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Svg
    )]
    pub output: OutputFormat,

    /// Prefix of the output files.
    #[arg(short = 'o', long, default_value = "maze")]
    pub prefix: PathBuf,

    /// Graph description for user defined mazes.
    #[arg(short, long, required_if_eq("maze", "user"))]
    pub file: Option<PathBuf>,

    /// Colour of the walls.
    #[arg(short = 'c', long, default_value = "black")]
    pub color: String,

    /// Colour of the background.
    #[arg(short, long, default_value = "white")]
    pub background: String,

    /// Width of the walls.
    #[arg(short = 'l', long, default_value_t = 3)]
    pub stroke_width: u32,

    /// Draw the route from entrance to exit.
    #[arg(long)]
    pub solution: bool,

    /// Colour of the route.
    #[arg(long, default_value = "red")]
    pub solution_color: String,

    /// Traversal used to find the route.
    #[arg(long, value_enum, default_value_t = Solver::Bfs)]
    pub solver: Solver,

    /// Seed for reproducible mazes.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Append logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Run gnuplot on the generated script.
    #[arg(long)]
    pub run_gnuplot: bool,
}

impl Cli {
    pub fn style(&self) -> Style {
        Style {
            stroke_color: self.color.clone(),
            background_color: self.background.clone(),
            stroke_width: self.stroke_width,
            solution_color: self.solution_color.clone(),
        }
    }

    /// Builds the topology selected by `--maze`.
    pub fn topology(&self) -> Result<Box<dyn Topology>, TopologyError> {
        let topology: Box<dyn Topology> = match self.maze {
            MazeKind::Rectangular => Box::new(Rectangular::new(self.width, self.height)?),
            MazeKind::Hexagonal => Box::new(Hexagonal::new(self.size)?),
            MazeKind::Honeycomb => Box::new(Honeycomb::new(self.size)?),
            MazeKind::Circular => Box::new(Circular::new(self.size)?),
            MazeKind::CircularHexagonal => Box::new(Hexagonal::circular(self.size)?),
            MazeKind::Triangular => Box::new(Triangular::new(self.size)?),
            MazeKind::User => {
                let path = self.file.as_deref().ok_or(TopologyError::MissingFile)?;
                Box::new(UserDefined::from_path(path)?)
            }
        };
        Ok(topology)
    }
}

/// Errors surfaced while executing the command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Topology(#[from] TopologyError),
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to run gnuplot on {script}: {source}")]
    Gnuplot {
        script: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("gnuplot exited with {status}")]
    GnuplotFailed { status: ExitStatus },
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Human readable description of the topology.
    pub description: String,
    pub generator: Generator,
    pub vertex_count: usize,
    /// Number of cells on the route from entrance to exit.
    pub route_length: usize,
    /// File written by the renderer.
    pub output: PathBuf,
    /// Image produced by gnuplot, when it was run.
    pub image: Option<PathBuf>,
}

/// Executes the command described by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the topology cannot be built, generation fails,
/// or the output cannot be written.
pub fn run_cli(cli: &Cli) -> Result<Summary, CliError> {
    let topology = cli.topology()?;
    tracing::info!(maze = %topology, algorithm = %cli.algorithm, "building maze");

    let mut maze = Maze::from_topology(topology.as_ref())?.with_solver(cli.solver);
    generate_maze(&mut maze, cli.algorithm, cli.seed)?;

    let renderer = cli.output.renderer(cli.style(), cli.solution);
    let output = renderer.render_to_file(&maze, topology.bounds(), &cli.prefix)?;

    let image = if cli.output == OutputFormat::Gnuplot && cli.run_gnuplot {
        run_gnuplot(&output)?;
        Some(output_path(&cli.prefix, "png"))
    } else {
        None
    };

    Ok(Summary {
        description: topology.to_string(),
        generator: cli.algorithm,
        vertex_count: maze.vertex_count(),
        route_length: maze.solution_route().len(),
        output,
        image,
    })
}

fn run_gnuplot(script: &Path) -> Result<(), CliError> {
    tracing::debug!(script = %script.display(), "running gnuplot");
    let status = Command::new("gnuplot")
        .arg(script)
        .status()
        .map_err(|source| CliError::Gnuplot {
            script: script.to_path_buf(),
            source,
        })?;
    if !status.success() {
        return Err(CliError::GnuplotFailed { status });
    }
    Ok(())
}
