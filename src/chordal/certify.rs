use super::ordering::positions;
use super::{ChordalError, Ordering};
use crate::graph::{DenseGraph, Graph, Vertex};
use indexmap::IndexSet;
use std::ops::ControlFlow;

// Walks `order` keeping track of the vertices already visited.  For each
// vertex v, its earlier neighbors must all be adjacent to p, the earlier
// neighbor visited last (v's parent in the elimination forest).  Every
// pair (p, q) that breaks this is handed to `visit`, which decides
// whether the walk continues.  Returns the pair that stopped the walk.

pub(crate) fn scan_elimination<F>(
    g: &DenseGraph,
    order: &[usize],
    mut visit: F,
) -> Option<(usize, usize)>
where
    F: FnMut(usize, usize) -> ControlFlow<()>,
{
    let position = positions(order, g.len());
    let position = &position;

    for (k, &v) in order.iter().enumerate() {
        let earlier = move || g.neighbors(v).iter().copied().filter(move |&w| position[w] < k);

        let Some(p) = earlier().max_by_key(|&w| position[w]) else {
            continue; // nothing visited yet among v's neighbors
        };

        for q in earlier() {
            if q != p && !g.has_edge(p, q) && visit(p, q).is_break() {
                return Some((p, q));
            }
        }
    }
    None
}

pub(crate) fn is_perfect_elimination_dense(g: &DenseGraph, order: &[usize]) -> bool {
    scan_elimination(g, order, |_, _| ControlFlow::Break(())).is_none()
}

// every violating pair, once each, with endpoints as dense indices
pub(crate) fn fill_edges_dense(g: &DenseGraph, order: &[usize]) -> IndexSet<(usize, usize)> {
    let mut fill = IndexSet::new();
    scan_elimination(g, order, |p, q| {
        fill.insert((p.min(q), p.max(q)));
        ControlFlow::Continue(())
    });
    fill
}

/// Checks whether `ordering` certifies `graph` as chordal: visiting the
/// vertices in sequence, the neighbors of each vertex that were visited
/// earlier must form a clique.  Equivalently, the reversed sequence is a
/// perfect elimination ordering.
pub fn is_perfect_elimination_ordering(
    graph: &Graph,
    ordering: &Ordering,
) -> Result<bool, ChordalError> {
    Ok(find_violation(graph, ordering)?.is_none())
}

/// The first non-adjacent pair `(p, q)` found among the earlier neighbors
/// of some vertex, where `p` is the one visited last.  `None` if the
/// ordering certifies the graph as chordal.
pub fn find_violation(
    graph: &Graph,
    ordering: &Ordering,
) -> Result<Option<(Vertex, Vertex)>, ChordalError> {
    let order = ordering.to_dense(graph)?;
    let dense = DenseGraph::new(graph);
    let violation = scan_elimination(&dense, &order, |_, _| ControlFlow::Break(()));
    Ok(violation.map(|(p, q)| (dense.vertex(p), dense.vertex(q))))
}

#[cfg(test)]
use super::ordering::lex_bfs;

#[test]
fn test_square_has_violation() {
    let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
    let dense = DenseGraph::new(&g);
    let order = lex_bfs(&dense);
    assert!(!is_perfect_elimination_dense(&dense, &order));

    let fill = fill_edges_dense(&dense, &order);
    assert_eq!(fill.len(), 1);
    let &(a, b) = fill.first().unwrap();
    assert!(!dense.has_edge(a, b));
}

#[test]
fn test_triangle_strip_is_certified() {
    let g = Graph::from_edges([(0, 1), (1, 2), (0, 2), (2, 3), (1, 3), (3, 4)]);
    let dense = DenseGraph::new(&g);
    let order = lex_bfs(&dense);
    assert!(is_perfect_elimination_dense(&dense, &order));
    assert!(fill_edges_dense(&dense, &order).is_empty());
}

#[test]
fn test_bad_ordering_of_chordal_graph() {
    // a path is chordal, but visiting both ends before the middle is not
    // a valid certificate
    let g = Graph::from_edges([(0, 1), (1, 2)]);
    let ordering = Ordering::from_dense(&DenseGraph::new(&g), &[0, 2, 1]);
    assert!(!is_perfect_elimination_ordering(&g, &ordering).unwrap());
    let (p, q) = find_violation(&g, &ordering).unwrap().unwrap();
    assert_eq!((p, q), (2, 0));

    let ordering = Ordering::from_dense(&DenseGraph::new(&g), &[1, 0, 2]);
    assert!(is_perfect_elimination_ordering(&g, &ordering).unwrap());
}

#[test]
fn test_mismatched_ordering() {
    let g = Graph::from_edges([(0, 1), (1, 2)]);
    let other = Graph::from_edges([(0, 1)]);
    let ordering = Ordering::from_dense(&DenseGraph::new(&other), &[0, 1]);
    assert!(matches!(
        is_perfect_elimination_ordering(&g, &ordering),
        Err(ChordalError::OrderingMismatch)
    ));
}
