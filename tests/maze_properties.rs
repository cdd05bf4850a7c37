use std::collections::HashMap;

use mazegen::{
    error::MazeError,
    generators::{Generator, UnionFind, generate_maze},
    maze::{Graph, Maze, Vertex},
    topology::{Circular, Hexagonal, Honeycomb, Rectangular, Topology, Triangular},
};
use proptest::{prelude::*, sample::select};
use rstest::rstest;

/// Internal walls of `graph` with their multiplicity.
fn wall_counts(graph: &Graph) -> HashMap<(Vertex, Vertex), usize> {
    let mut counts = HashMap::new();
    for edge in graph.internal_edges() {
        *counts.entry(edge).or_default() += 1;
    }
    counts
}

/// Walls present in `full` but no longer in `carved`.
fn opened_passages(full: &Graph, carved: &Graph) -> Vec<(Vertex, Vertex)> {
    let mut remaining = wall_counts(carved);
    let mut opened = Vec::new();
    for edge in full.internal_edges() {
        match remaining.get_mut(&edge) {
            Some(count) if *count > 0 => *count -= 1,
            _ => opened.push(edge),
        }
    }
    opened
}

/// Generates `topology` and checks that the opened walls form a spanning
/// tree and the route runs through them.
fn check_perfect_maze<T: Topology>(
    topology: &T,
    generator: Generator,
    seed: u64,
) -> Result<(), TestCaseError> {
    let fail = |err: MazeError| TestCaseError::fail(err.to_string());
    let full = topology.build_graph();
    let mut maze = Maze::from_topology(topology).map_err(fail)?;
    generate_maze(&mut maze, generator, Some(seed)).map_err(fail)?;

    let vertex_count = topology.vertex_count();
    let passages = opened_passages(&full, maze.graph());
    prop_assert_eq!(passages.len(), vertex_count - 1);
    prop_assert_eq!(
        maze.graph().internal_edge_count(),
        full.internal_edge_count() - (vertex_count - 1)
    );
    prop_assert_eq!(
        maze.graph().boundary_edge_count(),
        full.boundary_edge_count()
    );

    let mut uf = UnionFind::new(vertex_count);
    for &(u, v) in &passages {
        prop_assert!(uf.union(u, v), "passage {} - {} closes a cycle", u, v);
    }

    let route = maze.solution_route();
    let (start, end) = (topology.start_vertex(), topology.end_vertex());
    prop_assert_eq!(route.first(), Some(&start));
    prop_assert_eq!(route.last(), Some(&end));
    for pair in route.windows(2) {
        let (u, v) = (pair[0].min(pair[1]), pair[0].max(pair[1]));
        prop_assert!(
            passages.contains(&(u, v)),
            "route step {} - {} crosses a wall",
            u,
            v
        );
    }
    let mut seen = route.to_vec();
    seen.sort_unstable();
    seen.dedup();
    prop_assert_eq!(seen.len(), route.len());
    prop_assert_eq!(maze.solution_path().internal_edge_count(), route.len() - 1);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rectangular_mazes_are_perfect(
        width in 1usize..12,
        height in 1usize..12,
        generator in select(Generator::ALL.to_vec()),
        seed in any::<u64>(),
    ) {
        let topology = Rectangular::new(width, height).unwrap();
        check_perfect_maze(&topology, generator, seed)?;
    }

    #[test]
    fn seeded_generation_is_reproducible(
        width in 2usize..10,
        height in 2usize..10,
        generator in select(Generator::ALL.to_vec()),
        seed in any::<u64>(),
    ) {
        let topology = Rectangular::new(width, height).unwrap();
        let mut first = Maze::from_topology(&topology).unwrap();
        let mut second = Maze::from_topology(&topology).unwrap();
        generate_maze(&mut first, generator, Some(seed)).unwrap();
        generate_maze(&mut second, generator, Some(seed)).unwrap();
        prop_assert_eq!(first.graph().internal_edges(), second.graph().internal_edges());
        prop_assert_eq!(first.solution_route(), second.solution_route());
    }
}

#[rstest]
fn non_rectangular_mazes_are_perfect(
    #[values(
        Generator::Kruskal,
        Generator::Dfs,
        Generator::Bfs,
        Generator::LoopErased,
        Generator::Prim,
        Generator::StrideKruskal
    )]
    generator: Generator,
    #[values(1, 2, 5)] size: usize,
) {
    check_perfect_maze(&Circular::new(size).unwrap(), generator, 11).unwrap();
    check_perfect_maze(&Hexagonal::new(size).unwrap(), generator, 12).unwrap();
    check_perfect_maze(&Hexagonal::circular(size).unwrap(), generator, 13).unwrap();
    check_perfect_maze(&Honeycomb::new(size).unwrap(), generator, 14).unwrap();
    check_perfect_maze(&Triangular::new(size).unwrap(), generator, 15).unwrap();
}

#[test]
fn three_by_three_kruskal_leaves_four_walls() {
    let topology = Rectangular::new(3, 3).unwrap();
    let mut maze = Maze::from_topology(&topology).unwrap();
    generate_maze(&mut maze, Generator::Kruskal, None).unwrap();
    assert_eq!(maze.graph().internal_edge_count(), 4);
    assert_eq!(maze.graph().boundary_edge_count(), 10);
    assert_eq!(maze.solution_route().first(), Some(&0));
    assert_eq!(maze.solution_route().last(), Some(&8));
}
