//! Perfect maze generation over arbitrary cell tessellations.
//!
//! A [`topology`] describes cells and the walls between them as a graph.
//! One of the [`generators`] picks a random spanning tree of that graph, the
//! [`maze::Maze`] opens the walls on the tree, and the unique route between
//! the entrance and exit is extracted by the [`solvers`]. The result can be
//! written out by the [`render`] module.

pub mod cli;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod render;
pub mod solvers;
pub mod topology;
