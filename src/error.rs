//! Error types shared across the crate.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::maze::Vertex;

/// Errors raised by the graph model and the maze orchestrator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Tried to open a passage between two cells that share no wall.
    #[error("no internal wall between vertices {u} and {v}")]
    EdgeNotFound { u: Vertex, v: Vertex },
    /// `generate` was called a second time on the same maze.
    #[error("maze has already been generated")]
    AlreadyGenerated,
    /// `generate` was called before the graph was populated.
    #[error("maze graph has not been initialised")]
    NotInitialised,
    /// The topology produced a graph of the wrong size.
    #[error("graph has {found} vertices but the maze expects {expected}")]
    VertexCountMismatch { expected: usize, found: usize },
    /// An edge references a vertex outside `[0, V)`.
    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },
    /// The start vertex lies outside the graph.
    #[error("start vertex {vertex} is out of range for {vertex_count} vertices")]
    StartOutOfRange { vertex: Vertex, vertex_count: usize },
    /// The end vertex lies outside the graph.
    #[error("end vertex {vertex} is out of range for {vertex_count} vertices")]
    EndOutOfRange { vertex: Vertex, vertex_count: usize },
    /// An internal edge is missing its mirror entry or the mirror carries a
    /// different border.
    #[error("edge {u} -> {v} has no matching edge {v} -> {u}")]
    AsymmetricEdge { u: Vertex, v: Vertex },
    /// Some cells cannot be reached from the others across internal walls.
    #[error("graph is not connected across its internal walls")]
    Disconnected,
    /// A spanning-tree algorithm returned the wrong number of edges, which
    /// means the input graph was disconnected.
    #[error("spanning tree has {found} edges, expected {expected}")]
    IncompleteSpanningTree { expected: usize, found: usize },
    /// A spanning-tree algorithm returned an edge closing a cycle.
    #[error("spanning tree edge {u} - {v} closes a cycle")]
    CyclicSpanningTree { u: Vertex, v: Vertex },
    /// The end vertex could not be reached from the start vertex.
    #[error("vertex {end} is unreachable from vertex {start}")]
    Unreachable { start: Vertex, end: Vertex },
}

/// Errors raised while building a topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("failed to read graph description {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read graph description: {0}")]
    Read(#[from] io::Error),
    #[error("graph description does not start with a vertex count")]
    MissingVertexCount,
    #[error("token {position} (`{token}`) is not a valid {expected}")]
    InvalidNumber {
        position: usize,
        token: String,
        expected: &'static str,
    },
    #[error("token {position} (`{token}`) is not a border type, expected `Line` or `Arc`")]
    UnknownBorderType { position: usize, token: String },
    #[error("edge starting at token {position} is truncated")]
    TruncatedEdge { position: usize },
    #[error(
        "edge at token {position} references vertex {vertex}, but there are {vertex_count} vertices"
    )]
    VertexOutOfRange {
        position: usize,
        vertex: i64,
        vertex_count: usize,
    },
    #[error("user defined mazes need a graph description file")]
    MissingFile,
    #[error("invalid maze size {0}")]
    InvalidSize(String),
}

/// Errors raised while writing a rendered maze.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write maze output: {0}")]
    Write(#[from] io::Error),
}
