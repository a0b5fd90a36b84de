//! Random graph generators used for testing and benchmarking.
//!
//! All generators take the random number generator as an argument so that
//! callers can reproduce a graph from a seed, e.g. with
//! `rand_xoshiro::Xoshiro256PlusPlus::seed_from_u64`.

use super::{DisjointSetUnion, Graph, Vertex, VertexSet};
use indexmap::IndexMap;
use itertools::Itertools;
use rand::Rng;

/// Erdős–Rényi graph on vertices `0..n`, each edge present with probability `p`.
///
/// # Panics
/// Panics if `p` is not in `[0, 1]`.
pub fn gnp_random_graph<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Graph {
    let mut g = Graph::with_capacity(n);
    for v in 0..n {
        g.add_vertex(v);
    }
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(p) {
                g.add_edge(u, v);
            }
        }
    }
    g
}

/// Joins each connected component to the next one with a single edge
/// between randomly chosen members.
pub fn connect_components<R: Rng + ?Sized>(graph: &mut Graph, rng: &mut R) {
    let comps = graph.connected_components();
    for (a, b) in comps.iter().tuple_windows() {
        let u = a[rng.gen_range(0..a.len())];
        let v = b[rng.gen_range(0..b.len())];
        graph.add_edge(u, v);
    }
}

/// For every vertex `v`, partitions the neighbors of `v` by the connected
/// component of `G - v` they lie in, and completes each part into a clique.
///
/// Vertices are processed in insertion order and each step sees the edges
/// added by the previous ones.  Applied to a sparse random graph this
/// usually yields a chordal graph, but the result is not certified here.
pub fn cluster_neighborhoods(graph: &mut Graph) {
    let vertices: Vec<Vertex> = graph.vertices().collect();

    for &v in &vertices {
        let mut dsu = DisjointSetUnion::new(graph.vertex_count());
        for (a, b) in graph.edges() {
            if a == v || b == v {
                continue;
            }
            if let (Some(i), Some(j)) = (graph.index_of(a), graph.index_of(b)) {
                dsu.union(i, j);
            }
        }

        let mut classes: IndexMap<usize, Vec<Vertex>> = IndexMap::new();
        if let Ok(nbrs) = graph.neighbors(v) {
            for &w in nbrs {
                if let Some(i) = graph.index_of(w) {
                    classes.entry(dsu.root(i)).or_default().push(w);
                }
            }
        }

        for members in classes.values() {
            for (&a, &b) in members.iter().tuple_combinations() {
                graph.add_edge(a, b);
            }
        }
    }
}

/// Random connected chordal graph on vertices `0..n`.
///
/// Vertex `v` attaches to a uniformly chosen earlier vertex `u` and to each
/// member of the clique `u` itself attached to with probability
/// `keep_probability`.  Every new neighborhood is a clique, so the reverse
/// insertion order is a perfect elimination ordering.
///
/// # Panics
/// Panics if `keep_probability` is not in `[0, 1]`.
pub fn random_chordal_graph<R: Rng + ?Sized>(
    n: usize,
    keep_probability: f64,
    rng: &mut R,
) -> Graph {
    let mut g = Graph::with_capacity(n);
    let mut attached: Vec<VertexSet> = Vec::with_capacity(n);

    for v in 0..n {
        g.add_vertex(v);
        let mut nbrs = VertexSet::new();
        if v > 0 {
            let u = rng.gen_range(0..v);
            nbrs.insert(u);
            for &w in &attached[u] {
                if rng.gen_bool(keep_probability) {
                    nbrs.insert(w);
                }
            }
        }
        for &w in &nbrs {
            g.add_edge(v, w);
        }
        attached.push(nbrs);
    }
    g
}

#[cfg(test)]
use rand::SeedableRng;
#[cfg(test)]
use rand_xoshiro::Xoshiro256PlusPlus;

#[test]
fn test_gnp_extremes() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let empty = gnp_random_graph(10, 0.0, &mut rng);
    assert_eq!(empty.vertex_count(), 10);
    assert_eq!(empty.edge_count(), 0);

    let full = gnp_random_graph(10, 1.0, &mut rng);
    assert_eq!(full.edge_count(), 45);
}

#[test]
fn test_connect_components() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let mut g = gnp_random_graph(40, 0.02, &mut rng);
    connect_components(&mut g, &mut rng);
    assert_eq!(g.connected_components().len(), 1);
}

#[test]
fn test_cluster_neighborhoods_closes_square() {
    let mut g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
    cluster_neighborhoods(&mut g);
    // the 4-cycle ends up complete once both diagonals are added
    assert!(g.has_edge(1, 3));
    assert!(g.has_edge(0, 2));
    assert_eq!(g.edge_count(), 6);
}

#[test]
fn test_random_chordal_is_connected() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
    let g = random_chordal_graph(60, 0.5, &mut rng);
    assert_eq!(g.vertex_count(), 60);
    assert_eq!(g.connected_components().len(), 1);
    for v in g.vertices() {
        // each vertex's earlier neighbors form a clique
        let earlier: VertexSet = g
            .neighbors(v)
            .unwrap()
            .iter()
            .copied()
            .filter(|&w| w < v)
            .collect();
        assert!(g.is_clique(&earlier));
    }
}
