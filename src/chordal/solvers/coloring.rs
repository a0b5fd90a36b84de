use crate::chordal::{ChordalError, Ordering};
use crate::graph::{DenseGraph, Graph, Vertex};
use indexmap::IndexMap;

/// A proper vertex coloring with colors `0..count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coloring {
    pub colors: IndexMap<Vertex, usize>,
    pub count: usize,
}

// Greedy first-fit coloring in the given order.  `seen[c] == v` marks
// color c as taken by a neighbor of v, so the scratch array never needs
// clearing between vertices.
pub(crate) fn greedy_coloring_dense(g: &DenseGraph, order: &[usize]) -> (Vec<usize>, usize) {
    let n = g.len();
    let mut color = vec![usize::MAX; n];
    let mut seen = vec![usize::MAX; n + 1];
    let mut count = 0;

    for &v in order {
        for &w in g.neighbors(v) {
            if color[w] != usize::MAX {
                seen[color[w]] = v;
            }
        }
        let c = (0..).find(|&c| seen[c] != v).unwrap_or(n);
        color[v] = c;
        count = count.max(c + 1);
    }
    (color, count)
}

/// Greedy coloring along a lexicographic BFS ordering.  Each vertex
/// receives the smallest color not used by its already colored neighbors.
/// On a chordal graph those neighbors form a clique, so `count` is the
/// chromatic number.
pub fn greedy_coloring(graph: &Graph, ordering: &Ordering) -> Result<Coloring, ChordalError> {
    let order = ordering.to_dense(graph)?;
    let dense = DenseGraph::new(graph);
    let (color, count) = greedy_coloring_dense(&dense, &order);
    let colors = color
        .iter()
        .enumerate()
        .map(|(i, &c)| (dense.vertex(i), c))
        .collect();
    Ok(Coloring { colors, count })
}

#[cfg(test)]
use crate::chordal::compute_ordering;

#[test]
fn test_coloring_is_proper() {
    let g = Graph::from_edges([
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (3, 4),
        (3, 5),
        (4, 5),
    ]);
    let coloring = greedy_coloring(&g, &compute_ordering(&g)).unwrap();
    assert_eq!(coloring.count, 3);
    assert_eq!(coloring.colors.len(), 6);
    for (u, v) in g.edges() {
        assert_ne!(coloring.colors[&u], coloring.colors[&v]);
    }
}

#[test]
fn test_coloring_with_sparse_identifiers() {
    // identifiers far beyond the vertex count
    let g = Graph::from_edges([(1_000_000, 7), (7, 123_456), (123_456, 1_000_000), (5, 7)]);
    let coloring = greedy_coloring(&g, &compute_ordering(&g)).unwrap();
    assert_eq!(coloring.count, 3);
    assert!(coloring.colors.values().all(|&c| c < 3));
}

#[test]
fn test_coloring_trivial_graphs() {
    let g = Graph::new();
    let coloring = greedy_coloring(&g, &compute_ordering(&g)).unwrap();
    assert_eq!(coloring.count, 0);

    let mut g = Graph::new();
    g.add_vertex(3);
    g.add_vertex(8);
    assert_eq!(greedy_coloring(&g, &compute_ordering(&g)).unwrap().count, 1);
}
