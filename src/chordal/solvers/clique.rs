use crate::chordal::ordering::positions;
use crate::chordal::{ChordalError, Ordering};
use crate::graph::{DenseGraph, Graph, VertexSet};

// For a lexicographic BFS ordering `order`, N⁺(v) are the neighbors of v
// placed before it.  Read backwards the ordering eliminates v before N⁺(v),
// and on a chordal graph every {v} ∪ N⁺(v) is a clique.  Such a candidate
// fails to be maximal exactly when some u has v as its parent (the member
// of N⁺(u) placed last) and |N⁺(u)| = |N⁺(v)| + 1, since then it sits
// inside u's candidate.

pub(crate) fn maximal_cliques_dense(g: &DenseGraph, order: &[usize]) -> Vec<Vec<usize>> {
    let n = g.len();
    let position = positions(order, n);

    let earlier: Vec<Vec<usize>> = (0..n)
        .map(|v| {
            g.neighbors(v)
                .iter()
                .copied()
                .filter(|&w| position[w] < position[v])
                .collect()
        })
        .collect();

    let mut claimed = vec![false; n];
    for u in 0..n {
        if let Some(&p) = earlier[u].iter().max_by_key(|&&w| position[w]) {
            if earlier[u].len() == earlier[p].len() + 1 {
                claimed[p] = true;
            }
        }
    }

    order
        .iter()
        .rev()
        .filter(|&&v| !claimed[v])
        .map(|&v| {
            let mut clique = Vec::with_capacity(earlier[v].len() + 1);
            clique.push(v);
            clique.extend_from_slice(&earlier[v]);
            clique
        })
        .collect()
}

pub(crate) fn maximum_clique_dense(g: &DenseGraph, order: &[usize]) -> Vec<usize> {
    // keep the first of several largest cliques
    maximal_cliques_dense(g, order)
        .into_iter()
        .fold(Vec::new(), |best, c| if c.len() > best.len() { c } else { best })
}

/// Every maximal clique of a chordal graph, read off a lexicographic BFS
/// ordering of it.  Each clique is read from the vertex placed last in it,
/// and cliques are reported in elimination order of that vertex.
///
/// The result is only meaningful when `ordering` certifies `graph` as
/// chordal; see
/// [`is_perfect_elimination_ordering`](crate::chordal::is_perfect_elimination_ordering).
pub fn maximal_cliques(graph: &Graph, ordering: &Ordering) -> Result<Vec<VertexSet>, ChordalError> {
    let order = ordering.to_dense(graph)?;
    let dense = DenseGraph::new(graph);
    Ok(maximal_cliques_dense(&dense, &order)
        .iter()
        .map(|c| dense.vertices_of(c))
        .collect())
}

/// A largest clique of a chordal graph.  Empty for an empty graph.
pub fn maximum_clique(graph: &Graph, ordering: &Ordering) -> Result<VertexSet, ChordalError> {
    let order = ordering.to_dense(graph)?;
    let dense = DenseGraph::new(graph);
    Ok(dense.vertices_of(&maximum_clique_dense(&dense, &order)))
}

#[cfg(test)]
use crate::chordal::compute_ordering;

#[test]
fn test_maximal_cliques_of_triangle_strip() {
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
    let ordering = compute_ordering(&g);

    let mut cliques: Vec<Vec<usize>> = maximal_cliques(&g, &ordering)
        .unwrap()
        .into_iter()
        .map(|c| {
            let mut c: Vec<usize> = c.into_iter().collect();
            c.sort();
            c
        })
        .collect();
    cliques.sort();
    assert_eq!(
        cliques,
        vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]
    );

    let max = maximum_clique(&g, &ordering).unwrap();
    assert_eq!(max.len(), 3);
    assert!(g.is_clique(&max));
}

#[test]
fn test_nested_candidate_is_not_reported() {
    // a path 0-1-2 leading into the triangle 2-3-4: the triangle is found
    // once even though several vertices produce a piece of it
    let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (2, 4)]);
    let ordering = compute_ordering(&g);
    let cliques = maximal_cliques(&g, &ordering).unwrap();

    assert_eq!(cliques.len(), 3);
    for c in &cliques {
        assert!(g.is_clique(c));
    }
    assert_eq!(maximum_clique(&g, &ordering).unwrap().len(), 3);
}

#[test]
fn test_maximum_clique_empty_and_isolated() {
    let g = Graph::new();
    assert!(maximum_clique(&g, &compute_ordering(&g)).unwrap().is_empty());

    let mut g = Graph::new();
    g.add_vertex(4);
    g.add_vertex(9);
    let ordering = compute_ordering(&g);
    assert_eq!(maximal_cliques(&g, &ordering).unwrap().len(), 2);
    assert_eq!(maximum_clique(&g, &ordering).unwrap().len(), 1);
}
