mod common;

use chordal::chordal::{
    greedy_coloring, maximal_cliques, maximum_clique, maximum_independent_set,
    reference_independent_set,
};
use chordal::graph::generate::{gnp_random_graph, random_chordal_graph};
use chordal::{analyze, compute_ordering, make_chordal, ChordalError, ChordalSettingsBuilder, Graph};
use common::*;

#[test]
fn test_triangle_strip() {
    let g = triangle_strip();
    let analysis = analyze(&g).unwrap();

    assert_eq!(analysis.chromatic_number, 3);
    assert_eq!(analysis.max_clique.len(), 3);
    assert!(g.is_clique(&analysis.max_clique));
    assert_eq!(analysis.independent_set_size(), 2);
    assert!(g.is_independent_set(&analysis.independent_set));

    assert_eq!(clique_number_brute(&g), 3);
    assert_eq!(independence_number_brute(&g), 2);
}

#[test]
fn test_small_chordal_graphs_against_brute_force() {
    let mut rng = rng(5);
    for _ in 0..40 {
        for &keep in &[0.2, 0.6, 0.9] {
            let g = random_chordal_graph(14, keep, &mut rng);
            let analysis = analyze(&g).unwrap();

            let omega = clique_number_brute(&g);
            assert!(g.is_clique(&analysis.max_clique));
            assert_eq!(analysis.max_clique.len(), omega);
            assert_eq!(analysis.chromatic_number, omega);

            assert!(g.is_independent_set(&analysis.independent_set));
            assert_eq!(analysis.independent_set_size(), independence_number_brute(&g));
        }
    }
}

#[test]
fn test_triangulated_graphs_against_bron_kerbosch() {
    let mut rng = rng(17);
    let settings = ChordalSettingsBuilder::default()
        .sampling_enable(false)
        .build()
        .unwrap();

    for &(n, p) in &[(12, 0.3), (18, 0.25), (22, 0.15)] {
        let g = gnp_random_graph(n, p, &mut rng);
        let h = make_chordal(g, &settings).unwrap();
        let analysis = analyze(&h).unwrap();

        let omega = clique_number_bk(&h);
        assert_eq!(analysis.max_clique.len(), omega);
        assert_eq!(analysis.chromatic_number, omega);
        assert_eq!(analysis.independent_set_size(), independence_number_bk(&h));
    }
}

#[test]
fn test_larger_chordal_graphs() {
    let mut rng = rng(23);
    for &(n, keep) in &[(200, 0.5), (1000, 0.3)] {
        let g = random_chordal_graph(n, keep, &mut rng);
        let ordering = compute_ordering(&g);

        // the maximal cliques read off the ordering are exactly those
        // found by Bron–Kerbosch
        let mut ours: Vec<Vec<usize>> = maximal_cliques(&g, &ordering)
            .unwrap()
            .into_iter()
            .map(|c| c.into_iter().collect::<Vec<_>>())
            .collect();
        let mut reference: Vec<Vec<usize>> = chordal::chordal::find_cliques(&g)
            .into_iter()
            .map(|c| c.into_iter().collect::<Vec<_>>())
            .collect();
        for c in ours.iter_mut().chain(reference.iter_mut()) {
            c.sort();
        }
        ours.sort();
        reference.sort();
        assert_eq!(ours, reference);

        // a chordal graph has at most n maximal cliques
        assert!(ours.len() <= n);

        let coloring = greedy_coloring(&g, &ordering).unwrap();
        assert!(g.edges().all(|(u, v)| coloring.colors[&u] != coloring.colors[&v]));
        assert_eq!(coloring.count, maximum_clique(&g, &ordering).unwrap().len());
    }
}

#[test]
fn test_reference_independent_set() {
    let mut rng = rng(31);
    for _ in 0..20 {
        let g = random_chordal_graph(12, 0.5, &mut rng);
        let ordering = compute_ordering(&g);

        let reference = reference_independent_set(&g, &ordering).unwrap();
        let greedy = maximum_independent_set(&g, &ordering).unwrap();

        assert!(g.is_independent_set(&reference));
        assert!(!reference.is_empty());
        assert!(reference.len() <= independence_number_brute(&g));
        assert_eq!(greedy.len(), independence_number_brute(&g));
    }
}

#[test]
fn test_analysis_requires_chordal_graph() {
    assert!(matches!(analyze(&cycle(6)), Err(ChordalError::NotChordal)));

    // the solvers themselves only need a valid ordering
    let g = cycle(6);
    let ordering = compute_ordering(&g);
    assert!(g.is_independent_set(&maximum_independent_set(&g, &ordering).unwrap()));

    let other = Graph::from_edges([(0, 1)]);
    assert!(matches!(
        maximum_clique(&other, &ordering),
        Err(ChordalError::OrderingMismatch)
    ));
}

#[test]
fn test_sparse_identifier_coloring() {
    // triangles joined at a vertex, far apart in identifier space
    let g = Graph::from_edges([
        (10, 5_000_000),
        (5_000_000, 77),
        (77, 10),
        (77, 123_456_789),
        (123_456_789, 9),
        (9, 77),
    ]);
    let analysis = analyze(&g).unwrap();
    assert_eq!(analysis.chromatic_number, 3);
    assert_eq!(analysis.max_clique.len(), 3);
    assert_eq!(analysis.independent_set_size(), 2);
}
