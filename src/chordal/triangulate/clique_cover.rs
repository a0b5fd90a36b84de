use super::TriangulationStrategy;
use crate::chordal::cliques::find_cliques_dense;
use crate::graph::{DenseGraph, Graph};
use itertools::Itertools;

/// Clique cover reduction.  Maximal cliques are taken greedily in
/// enumeration order, skipping any clique that touches a vertex already
/// covered.  Only the edges inside the kept cliques are retained, so the
/// result is a disjoint union of cliques and is chordal without any fill.
#[derive(Debug, Default)]
pub(crate) struct CliqueCoverStrategy;

impl CliqueCoverStrategy {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl TriangulationStrategy for CliqueCoverStrategy {
    fn initialise(&mut self, graph: Graph) -> Graph {
        clique_cover(&graph)
    }
}

pub(crate) fn clique_cover(graph: &Graph) -> Graph {
    let dense = DenseGraph::new(graph);
    let mut claimed = vec![false; dense.len()];
    let mut cover = Graph::new();

    for clique in find_cliques_dense(&dense) {
        if clique.iter().any(|&v| claimed[v]) {
            continue;
        }
        for &v in &clique {
            claimed[v] = true;
            cover.add_vertex(dense.vertex(v));
        }
        for (&a, &b) in clique.iter().tuple_combinations() {
            cover.add_edge(dense.vertex(a), dense.vertex(b));
        }
    }
    cover
}

#[test]
fn test_clique_cover_is_disjoint_cliques() {
    // two triangles sharing an edge, a pendant path and an isolated vertex
    let mut g = Graph::from_edges([(0, 1), (1, 2), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5)]);
    g.add_vertex(8);

    let cover = clique_cover(&g);

    assert!(cover.edges().all(|(u, v)| g.has_edge(u, v)));
    assert!(cover.contains_vertex(8));
    for component in cover.connected_components() {
        assert!(cover.is_clique(&component));
    }
    // exactly one of the two triangles can be kept
    let triangles = [[0, 1, 2], [1, 2, 3]]
        .iter()
        .filter(|t| t.iter().all(|&v| cover.contains_vertex(v)) && cover.has_edge(t[0], t[2]))
        .count();
    assert_eq!(triangles, 1);
}

#[test]
fn test_clique_cover_of_cycle() {
    // the maximal cliques of a 6-cycle are its edges: greedy keeps a
    // matching of them
    let g = Graph::from_edges((0..6).map(|i| (i, (i + 1) % 6)));
    let cover = clique_cover(&g);
    assert!(cover.edges().all(|(u, v)| g.has_edge(u, v)));
    assert!(cover.vertices().all(|v| cover.degree(v).unwrap() <= 1));
    assert!(cover.edge_count() >= 2);
}
