mod common;

use chordal::graph::generate::{connect_components, gnp_random_graph};
use chordal::{
    analyze, is_chordal, make_chordal, ChordalError, ChordalSettings, ChordalSettingsBuilder,
    ChordalSolver, Graph, SolverStatus,
};
use common::*;

fn exact_settings() -> ChordalSettings {
    ChordalSettingsBuilder::default()
        .sampling_enable(false)
        .build()
        .unwrap()
}

#[test]
fn test_pentagon() {
    let g = Graph::from_edges([(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]);
    assert!(!is_chordal(&g));

    let h = make_chordal(g.clone(), &exact_settings()).unwrap();
    assert!(is_chordal(&h));
    assert!(is_chordal_oracle(&h));
    assert_eq!(h.vertex_count(), 5);

    // at least two diagonals, and the cycle itself is kept
    let diagonals = h.edges().filter(|&(u, v)| !g.has_edge(u, v)).count();
    assert!(diagonals >= 2);
    assert!(g.edges().all(|(u, v)| h.has_edge(u, v)));
}

#[test]
fn test_fill_in_on_random_graphs() {
    let mut rng = rng(2024);
    for &(n, p) in &[(20, 0.2), (60, 0.08), (150, 0.02)] {
        let mut g = gnp_random_graph(n, p, &mut rng);
        connect_components(&mut g, &mut rng);

        let h = make_chordal(g.clone(), &exact_settings()).unwrap();
        assert!(is_chordal(&h));
        assert!(is_chordal_oracle(&h));
        assert_eq!(h.vertex_count(), g.vertex_count());
        assert!(g.edges().all(|(u, v)| h.has_edge(u, v)));

        let analysis = analyze(&h).unwrap();
        assert_eq!(analysis.chromatic_number, analysis.max_clique.len());
    }
}

#[test]
fn test_clique_cover() {
    let settings = ChordalSettingsBuilder::default()
        .triangulation_method("clique_cover".to_string())
        .sampling_enable(false)
        .build()
        .unwrap();

    let mut rng = rng(11);
    for &(n, p) in &[(8, 0.5), (40, 0.1), (120, 0.03)] {
        let g = gnp_random_graph(n, p, &mut rng);
        let h = make_chordal(g.clone(), &settings).unwrap();

        assert!(is_chordal(&h));
        // only original edges survive, grouped into vertex-disjoint cliques
        assert!(h.edges().all(|(u, v)| g.has_edge(u, v)));
        for component in h.connected_components() {
            assert!(h.is_clique(&component));
        }
    }
}

#[test]
fn test_sampling_bounds_large_graphs() {
    let settings = ChordalSettingsBuilder::default()
        .max_vertices(150)
        .max_edges(600)
        .seed(Some(42))
        .build()
        .unwrap();

    let mut rng = rng(42);
    let g = gnp_random_graph(400, 0.03, &mut rng);
    assert!(g.edge_count() > 600);

    let h = make_chordal(g.clone(), &settings).unwrap();
    assert!(is_chordal(&h));
    assert!(h.vertex_count() <= 150);
    assert!(h.vertices().all(|v| g.contains_vertex(v)));

    // a fixed seed reproduces the same graph
    let h2 = make_chordal(g, &settings).unwrap();
    assert_eq!(h, h2);
}

#[test]
fn test_solver_reports_sampling() {
    let settings = ChordalSettingsBuilder::default()
        .max_vertices(100)
        .max_edges(10_000)
        .seed(Some(8))
        .build()
        .unwrap();

    let mut rng = rng(8);
    let g = gnp_random_graph(300, 0.01, &mut rng);
    let mut solver = ChordalSolver::new(g, settings).unwrap();
    solver.solve().unwrap();

    assert!(solver.info.status.is_solved());
    assert!(solver.info.samplings >= 1);
    assert_eq!(solver.info.seed, Some(8));
    assert_eq!(solver.info.initial_vertices, 300);
    assert!(solver.info.final_vertices <= 100);

    let chordal_graph = solver.chordal_graph.as_ref().unwrap();
    assert_eq!(chordal_graph.vertex_count(), solver.info.final_vertices);
    assert!(is_chordal(chordal_graph));
}

#[test]
fn test_sampling_after_fill_in_pass() {
    // the input is within both limits; only the fill edges push it over
    let mut rng = rng(3);
    let g = gnp_random_graph(80, 0.06, &mut rng);
    assert!(!is_chordal(&g));
    let max_edges = g.edge_count() + 5;

    let settings = ChordalSettingsBuilder::default()
        .max_vertices(1000)
        .max_edges(max_edges)
        .seed(Some(3))
        .build()
        .unwrap();

    let mut solver = ChordalSolver::new(g, settings).unwrap();
    solver.solve().unwrap();

    assert_eq!(solver.info.status, SolverStatus::Triangulated);
    assert!(solver.info.passes >= 1);
    assert!(solver.info.samplings > 0);
    assert_eq!(solver.info.seed, Some(3));

    let h = solver.chordal_graph.as_ref().unwrap();
    assert!(is_chordal(h));
    assert!(is_chordal_oracle(h));
    assert!(h.edge_count() <= max_edges);
    assert!(h.vertex_count() < 80);
}

#[test]
fn test_pass_limit() {
    let settings = ChordalSettings {
        max_passes: 2,
        ..exact_settings()
    };
    assert!(matches!(
        make_chordal(cycle(12), &settings),
        Err(ChordalError::NotConverged { passes: 2 })
    ));

    let mut solver = ChordalSolver::new(cycle(12), settings).unwrap();
    assert!(solver.solve().is_err());
    assert_eq!(solver.info.status, SolverStatus::NotConverged);
    assert!(solver.solution.is_none());
}

#[test]
fn test_invalid_settings() {
    let settings = ChordalSettings {
        triangulation_method: "magic".to_string(),
        ..ChordalSettings::default()
    };
    assert!(matches!(
        make_chordal(cycle(4), &settings),
        Err(ChordalError::Settings(_))
    ));
}
