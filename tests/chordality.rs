mod common;

use chordal::chordal::{find_violation, is_perfect_elimination_ordering};
use chordal::graph::generate::random_chordal_graph;
use chordal::{compute_ordering, is_chordal, Graph};
use common::*;

#[test]
fn test_ordering_is_permutation() {
    for g in graph_zoo(1) {
        let ordering = compute_ordering(&g);
        assert_eq!(ordering.len(), g.vertex_count());

        let mut seen: Vec<_> = ordering.iter().copied().collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), g.vertex_count());
        assert!(seen.iter().all(|&v| g.contains_vertex(v)));

        let position = ordering.position_map();
        assert!(ordering
            .iter()
            .enumerate()
            .all(|(i, v)| position[v] == i));
    }
}

#[test]
fn test_is_chordal_matches_oracle() {
    let mut nchordal = 0;
    let mut nother = 0;
    for seed in 0..4 {
        for g in graph_zoo(seed) {
            let expected = is_chordal_oracle(&g);
            assert_eq!(is_chordal(&g), expected);

            let ordering = compute_ordering(&g);
            assert_eq!(is_perfect_elimination_ordering(&g, &ordering).unwrap(), expected);
            assert_eq!(find_violation(&g, &ordering).unwrap().is_none(), expected);

            if expected {
                nchordal += 1;
            } else {
                nother += 1;
            }
        }
    }
    // the zoo must exercise both answers
    assert!(nchordal > 0 && nother > 0);
}

#[test]
fn test_generated_chordal_graphs() {
    let mut rng = rng(99);
    for &n in &[1, 2, 5, 40, 400] {
        for &keep in &[0.0, 0.5, 1.0] {
            let g = random_chordal_graph(n, keep, &mut rng);
            assert_eq!(g.vertex_count(), n);
            assert!(is_chordal(&g));
            assert!(is_chordal_oracle(&g));
            assert_eq!(g.connected_components().len(), 1);
        }
    }
}

#[test]
fn test_cycles() {
    for n in 3..12 {
        let g = cycle(n);
        assert_eq!(is_chordal(&g), n == 3);

        if n > 3 {
            let (p, q) = find_violation(&g, &compute_ordering(&g)).unwrap().unwrap();
            assert!(!g.has_edge(p, q));
        }
    }
}

#[test]
fn test_known_ordering() {
    let g = triangle_strip();
    let ordering = compute_ordering(&g);
    assert_eq!(ordering.as_slice(), &[5, 4, 3, 2, 1, 0]);
    assert_eq!(ordering.elimination_order(), vec![0, 1, 2, 3, 4, 5]);
    assert!(is_chordal(&g));
}

#[test]
fn test_self_loops_and_duplicates_are_dropped() {
    let g = Graph::from_edges([(0, 0), (0, 1), (1, 0), (1, 2), (2, 2), (2, 0)]);
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert!(g.neighbors(0).unwrap().iter().all(|&w| w != 0));
    assert!(is_chordal(&g));
}

#[test]
fn test_sparse_identifiers() {
    // a square with a chord, on huge and scattered identifiers
    let g = Graph::from_edges([
        (1_000_000_007, 3),
        (3, 999_999),
        (999_999, 17),
        (17, 1_000_000_007),
        (3, 17),
    ]);
    assert!(is_chordal(&g));

    let mut square = g.clone();
    square.remove_edge(3, 17);
    assert!(!is_chordal(&square));
}
