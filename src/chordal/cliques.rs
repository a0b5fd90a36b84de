use crate::graph::{DenseGraph, Graph, VertexSet};
use indexmap::IndexSet;

// Bron–Kerbosch with Tomita pivoting over dense indices.  Works on any
// graph; the cost is exponential in the worst case, so it is only used
// for the clique cover reduction and as a reference in tests.

pub(crate) fn find_cliques_dense(g: &DenseGraph) -> Vec<Vec<usize>> {
    let mut cliques = Vec::new();
    let mut r = Vec::new();
    let p: IndexSet<usize> = (0..g.len()).collect();
    expand(g, &mut r, p, IndexSet::new(), &mut cliques);
    cliques
}

fn expand(
    g: &DenseGraph,
    r: &mut Vec<usize>,
    mut p: IndexSet<usize>,
    mut x: IndexSet<usize>,
    cliques: &mut Vec<Vec<usize>>,
) {
    // the pivot covers as much of p as possible, so that only its
    // non-neighbors need to be branched on
    let Some(pivot) = p
        .iter()
        .chain(x.iter())
        .copied()
        .max_by_key(|&u| g.neighbors(u).iter().filter(|w| p.contains(*w)).count())
    else {
        cliques.push(r.clone()); // p and x both empty: r is maximal
        return;
    };

    let branches: Vec<usize> = p.iter().copied().filter(|&v| !g.has_edge(pivot, v)).collect();

    for v in branches {
        let nbrs = g.neighbors(v);
        let p_next = p.iter().copied().filter(|w| nbrs.contains(w)).collect();
        let x_next = x.iter().copied().filter(|w| nbrs.contains(w)).collect();

        r.push(v);
        expand(g, r, p_next, x_next, cliques);
        r.pop();

        p.swap_remove(&v);
        x.insert(v);
    }
}

/// All maximal cliques of an arbitrary graph.
///
/// An empty graph has no cliques.  Isolated vertices are reported as
/// cliques of size one.
pub fn find_cliques(graph: &Graph) -> Vec<VertexSet> {
    if graph.is_empty() {
        return Vec::new();
    }
    let dense = DenseGraph::new(graph);
    find_cliques_dense(&dense)
        .iter()
        .map(|c| dense.vertices_of(c))
        .collect()
}

#[test]
fn test_find_cliques_small() {
    // two triangles sharing an edge, plus a pendant vertex and an isolated one
    let mut g = Graph::from_edges([(0, 1), (1, 2), (0, 2), (1, 3), (2, 3), (3, 4)]);
    g.add_vertex(9);

    let mut cliques: Vec<Vec<usize>> = find_cliques(&g)
        .into_iter()
        .map(|c| {
            let mut c: Vec<usize> = c.into_iter().collect();
            c.sort();
            c
        })
        .collect();
    cliques.sort();

    assert_eq!(cliques, vec![vec![0, 1, 2], vec![1, 2, 3], vec![3, 4], vec![9]]);
}

#[test]
fn test_find_cliques_complete_and_empty() {
    let mut g = Graph::new();
    for u in 0..6 {
        for v in (u + 1)..6 {
            g.add_edge(u, v);
        }
    }
    let cliques = find_cliques(&g);
    assert_eq!(cliques.len(), 1);
    assert_eq!(cliques[0].len(), 6);

    assert!(find_cliques(&Graph::new()).is_empty());
}
