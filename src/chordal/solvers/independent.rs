use crate::chordal::ordering::positions;
use crate::chordal::{ChordalError, Ordering};
use crate::graph::{DenseGraph, Graph, VertexSet};

pub(crate) fn greedy_independent_set_dense(g: &DenseGraph, order: &[usize]) -> Vec<usize> {
    let mut covered = vec![false; g.len()];
    let mut set = Vec::new();

    // reverse lexicographic BFS is an elimination order, so each pick is
    // simplicial in what remains
    for &v in order.iter().rev() {
        if covered[v] {
            continue;
        }
        set.push(v);
        covered[v] = true;
        for &w in g.neighbors(v) {
            covered[w] = true;
        }
    }
    set
}

// best[v] is the largest set found that contains v and otherwise only
// vertices placed after v.  It extends best[u] of a later, non-adjacent
// u whenever v is independent of all of best[u].
pub(crate) fn reference_independent_set_dense(g: &DenseGraph, order: &[usize]) -> Vec<usize> {
    let n = g.len();
    let position = positions(order, n);
    let mut best: Vec<Vec<usize>> = (0..n).map(|v| vec![v]).collect();

    for &v in order.iter().rev() {
        let mut anchored = vec![v];
        for u in 0..n {
            if position[u] <= position[v] || g.has_edge(u, v) {
                continue;
            }
            let candidate = &best[u];
            if candidate.len() + 1 > anchored.len()
                && candidate.iter().all(|&x| !g.has_edge(x, v))
            {
                anchored = Vec::with_capacity(candidate.len() + 1);
                anchored.push(v);
                anchored.extend_from_slice(candidate);
            }
        }
        best[v] = anchored;
    }

    best.into_iter()
        .fold(Vec::new(), |acc, s| if s.len() > acc.len() { s } else { acc })
}

/// Greedy maximal independent set along the reversed ordering.  Valid for
/// any graph and of maximum size when `ordering` certifies `graph` as
/// chordal.
pub fn maximum_independent_set(
    graph: &Graph,
    ordering: &Ordering,
) -> Result<VertexSet, ChordalError> {
    let order = ordering.to_dense(graph)?;
    let dense = DenseGraph::new(graph);
    Ok(dense.vertices_of(&greedy_independent_set_dense(&dense, &order)))
}

/// Independent set from a dynamic program over the ordering.
///
/// Each vertex scans every later vertex and checks its anchored set, so
/// the cost is `O(n² · s)` for sets of size `s`.  Only one anchored set is
/// kept per vertex, which means the result can be smaller than a maximum
/// independent set even on a chordal graph.  It is always independent.
/// Use [`maximum_independent_set`] for an exact answer.
pub fn reference_independent_set(
    graph: &Graph,
    ordering: &Ordering,
) -> Result<VertexSet, ChordalError> {
    let order = ordering.to_dense(graph)?;
    let dense = DenseGraph::new(graph);
    Ok(dense.vertices_of(&reference_independent_set_dense(&dense, &order)))
}

#[cfg(test)]
use crate::chordal::compute_ordering;

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
fn test_greedy_independent_set() {
    let g = triangle_strip();
    let set = maximum_independent_set(&g, &compute_ordering(&g)).unwrap();
    assert!(g.is_independent_set(&set));
    assert_eq!(set.len(), 2);

    // a path on five vertices: both ends and the middle
    let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]);
    let set = maximum_independent_set(&g, &compute_ordering(&g)).unwrap();
    assert!(g.is_independent_set(&set));
    assert_eq!(set.len(), 3);
}

#[test]
fn test_reference_independent_set() {
    for g in [
        triangle_strip(),
        Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]),
        Graph::from_edges([(0, 1), (0, 2), (0, 3), (0, 4)]),
    ] {
        let ordering = compute_ordering(&g);
        let reference = reference_independent_set(&g, &ordering).unwrap();
        let greedy = maximum_independent_set(&g, &ordering).unwrap();
        assert!(g.is_independent_set(&reference));
        assert!(!reference.is_empty());
        assert!(reference.len() <= greedy.len());
    }
}

#[test]
fn test_independent_set_of_isolated_vertices() {
    let mut g = Graph::new();
    for v in [2, 4, 6] {
        g.add_vertex(v);
    }
    let set = maximum_independent_set(&g, &compute_ordering(&g)).unwrap();
    assert_eq!(set.len(), 3);

    let g = Graph::new();
    assert!(maximum_independent_set(&g, &compute_ordering(&g))
        .unwrap()
        .is_empty());
    assert!(reference_independent_set(&g, &compute_ordering(&g))
        .unwrap()
        .is_empty());
}
