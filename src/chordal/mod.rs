//! Chordal graph recognition and the quantities that are tractable on
//! chordal graphs.
//!
//! The pipeline is
//!
//! 1. [`compute_ordering`]: a lexicographic BFS ordering of the vertices,
//! 2. [`is_chordal`]: certification of that ordering as a reversed perfect
//!    elimination ordering,
//! 3. [`make_chordal`]: triangulation of a graph that fails certification,
//! 4. [`analyze`]: maximum clique, chromatic number and maximum independent
//!    set of a chordal graph.
//!
//! [`ChordalSolver`] runs all four steps with timing and verbose output.

mod certify;
mod cliques;
mod error_types;
mod info;
mod info_print;
mod ordering;
mod settings;
mod solver;
mod solvers;
mod triangulate;

#[cfg(feature = "serde")]
mod json;

pub use certify::{find_violation, is_perfect_elimination_ordering};
pub use cliques::find_cliques;
pub use error_types::*;
pub use info::*;
pub use ordering::Ordering;
pub use settings::*;
pub use solver::*;
pub use solvers::{
    greedy_coloring, maximal_cliques, maximum_clique, maximum_independent_set,
    reference_independent_set, Analysis, Coloring,
};

#[cfg(feature = "serde")]
pub use json::*;

use crate::graph::{DenseGraph, Graph};

/// Lexicographic BFS ordering of all vertices of `graph`.
///
/// Ties between equal labels go to the vertex whose label changed most
/// recently.  Every vertex appears exactly once, and an empty graph gives
/// an empty ordering.
pub fn compute_ordering(graph: &Graph) -> Ordering {
    let dense = DenseGraph::new(graph);
    Ordering::from_dense(&dense, &ordering::lex_bfs(&dense))
}

/// True if every cycle of length four or more in `graph` has a chord.
pub fn is_chordal(graph: &Graph) -> bool {
    let dense = DenseGraph::new(graph);
    let order = ordering::lex_bfs(&dense);
    certify::is_perfect_elimination_dense(&dense, &order)
}

/// Returns a chordal graph derived from `graph`.
///
/// A graph that is already chordal is returned unchanged.  Otherwise it
/// is triangulated with the method selected in `settings`.  When sampling
/// is enabled the result may be an induced subgraph of a random vertex
/// subset, so it can be smaller than the input.
pub fn make_chordal(graph: Graph, settings: &ChordalSettings) -> Result<Graph, ChordalError> {
    settings.validate()?;

    if is_chordal(&graph) {
        return Ok(graph);
    }

    let mut info = SolveInfo::new();
    triangulate::triangulate(graph, settings, &mut info)
}

/// Maximum clique, chromatic number and maximum independent set of a
/// chordal graph.  Fails with [`ChordalError::NotChordal`] otherwise.
pub fn analyze(graph: &Graph) -> Result<Analysis, ChordalError> {
    let dense = DenseGraph::new(graph);
    let order = ordering::lex_bfs(&dense);

    if !certify::is_perfect_elimination_dense(&dense, &order) {
        return Err(ChordalError::NotChordal);
    }
    Ok(solvers::analyze_dense(&dense, &order))
}

#[cfg(test)]
fn triangle_strip() -> Graph {
    Graph::from_edges([
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (3, 4),
        (3, 5),
        (4, 5),
    ])
}

#[test]
fn test_triangle_strip_pipeline() {
    let g = triangle_strip();

    let ordering = compute_ordering(&g);
    assert_eq!(ordering.as_slice(), &[5, 4, 3, 2, 1, 0]);
    assert!(is_perfect_elimination_ordering(&g, &ordering).unwrap());
    assert!(is_chordal(&g));

    let analysis = analyze(&g).unwrap();
    assert_eq!(analysis.chromatic_number, 3);
    assert_eq!(analysis.clique_number(), 3);
    assert!(g.is_clique(&analysis.max_clique));
    assert_eq!(analysis.independent_set_size(), 2);
    assert!(g.is_independent_set(&analysis.independent_set));
}

#[test]
fn test_five_cycle() {
    let g = Graph::from_edges([(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]);
    assert!(!is_chordal(&g));
    assert!(matches!(analyze(&g), Err(ChordalError::NotChordal)));

    let h = make_chordal(g.clone(), &ChordalSettings::default()).unwrap();
    assert!(is_chordal(&h));
    assert!(h.edge_count() >= g.edge_count() + 2);
    assert!(g.edges().all(|(u, v)| h.has_edge(u, v)));
}

#[test]
fn test_make_chordal_keeps_chordal_input() {
    let g = triangle_strip();
    let h = make_chordal(g.clone(), &ChordalSettings::default()).unwrap();
    assert_eq!(g, h);
}

#[test]
fn test_empty_graph() {
    let g = Graph::new();
    assert!(compute_ordering(&g).is_empty());
    assert!(is_chordal(&g));

    let analysis = analyze(&g).unwrap();
    assert_eq!(analysis, Analysis::default());
    assert_eq!(analysis.chromatic_number, 0);
}
