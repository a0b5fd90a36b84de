#![allow(dead_code)]

// Reference answers computed without any ordering machinery from the
// library, for cross-checking on small and medium graphs.

use chordal::chordal::find_cliques;
use chordal::graph::generate::{cluster_neighborhoods, gnp_random_graph, random_chordal_graph};
use chordal::{Graph, Vertex};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::{HashMap, HashSet};

pub fn rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

pub fn cycle(n: usize) -> Graph {
    Graph::from_edges((0..n).map(|i| (i, (i + 1) % n)))
}

pub fn triangle_strip() -> Graph {
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

/// Chordality by repeatedly deleting a simplicial vertex.  A graph is
/// chordal iff this empties it.
pub fn is_chordal_oracle(g: &Graph) -> bool {
    let mut adj: HashMap<Vertex, HashSet<Vertex>> = g
        .vertices()
        .map(|v| (v, g.neighbors(v).unwrap().iter().copied().collect()))
        .collect();

    while !adj.is_empty() {
        let simplicial = adj.iter().find_map(|(&v, nbrs)| {
            let nbrs: Vec<_> = nbrs.iter().collect();
            let ok = nbrs
                .iter()
                .enumerate()
                .all(|(i, a)| nbrs[i + 1..].iter().all(|b| adj[*a].contains(*b)));
            ok.then_some(v)
        });

        let Some(v) = simplicial else {
            return false;
        };
        let nbrs = adj.remove(&v).unwrap();
        for w in nbrs {
            adj.get_mut(&w).unwrap().remove(&v);
        }
    }
    true
}

// bitmask over the vertices of a graph with at most 20 vertices
fn masks(g: &Graph) -> (Vec<Vertex>, Vec<u32>) {
    let ids: Vec<Vertex> = g.vertices().collect();
    assert!(ids.len() <= 20, "brute force oracle is for small graphs");
    let nbr_mask = ids
        .iter()
        .map(|&v| {
            ids.iter()
                .enumerate()
                .filter(|&(_, &w)| g.has_edge(v, w))
                .fold(0u32, |m, (j, _)| m | (1 << j))
        })
        .collect();
    (ids, nbr_mask)
}

fn largest_subset(g: &Graph, want_edges: bool) -> usize {
    let (ids, nbr) = masks(g);
    let n = ids.len();
    let mut best = 0;
    for set in 0u32..(1u32 << n) {
        let size = set.count_ones() as usize;
        if size <= best {
            continue;
        }
        let ok = (0..n).filter(|&i| set & (1 << i) != 0).all(|i| {
            let others = set & !(1 << i);
            if want_edges {
                others & !nbr[i] == 0
            } else {
                others & nbr[i] == 0
            }
        });
        if ok {
            best = size;
        }
    }
    best
}

/// Clique number by enumerating all vertex subsets.
pub fn clique_number_brute(g: &Graph) -> usize {
    largest_subset(g, true)
}

/// Independence number by enumerating all vertex subsets.
pub fn independence_number_brute(g: &Graph) -> usize {
    largest_subset(g, false)
}

/// Independence number as the clique number of the complement, via
/// Bron–Kerbosch.
pub fn independence_number_bk(g: &Graph) -> usize {
    find_cliques(&g.complement())
        .iter()
        .map(|c| c.len())
        .max()
        .unwrap_or(0)
}

pub fn clique_number_bk(g: &Graph) -> usize {
    find_cliques(g).iter().map(|c| c.len()).max().unwrap_or(0)
}

/// Mixed collection of seeded test graphs, chordal and not.
pub fn graph_zoo(seed: u64) -> Vec<Graph> {
    let mut rng = rng(seed);
    let mut graphs = vec![Graph::new(), triangle_strip(), cycle(4), cycle(5), cycle(12)];

    for &(n, p) in &[(10, 0.3), (30, 0.1), (100, 0.02), (300, 0.005), (1000, 0.001)] {
        graphs.push(gnp_random_graph(n, p, &mut rng));

        let mut clustered = gnp_random_graph(n, p, &mut rng);
        cluster_neighborhoods(&mut clustered);
        graphs.push(clustered);
    }
    for &(n, keep) in &[(10, 0.5), (50, 0.5), (200, 0.3), (1000, 0.2)] {
        graphs.push(random_chordal_graph(n, keep, &mut rng));
    }
    graphs
}
