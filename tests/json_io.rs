#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use chordal::chordal::SolverJSONReadWrite;
    use chordal::{ChordalSettingsBuilder, ChordalSolver, Graph, SolverStatus};
    use std::io::{Seek, SeekFrom};

    let g = Graph::from_edges([(3, 9), (9, 27), (27, 81), (81, 3), (3, 243)]);
    let settings = ChordalSettingsBuilder::default()
        .max_passes(50)
        .seed(Some(1234))
        .build()
        .unwrap();

    let mut solver = ChordalSolver::new(g, settings).unwrap();
    let analysis = solver.solve().unwrap().clone();
    assert_eq!(solver.info.status, SolverStatus::Triangulated);

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    solver.write_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut solver2 = ChordalSolver::read_from_file(&mut file).unwrap();
    assert_eq!(solver2.settings, solver.settings);
    assert_eq!(solver2.graph, solver.graph);

    solver2.solve().unwrap();
    assert_eq!(solver2.solution.as_ref(), Some(&analysis));
    assert_eq!(solver2.chordal_graph, solver.chordal_graph);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_rejects_bad_settings() {
    use chordal::chordal::SolverJSONReadWrite;
    use chordal::ChordalSolver;
    use std::io::{Seek, SeekFrom, Write};

    let json = r#"{"graph":{"vertices":[0,1],"edges":[[0,1]]},
                   "settings":{"triangulation_method":"bogus"}}"#;
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let err = ChordalSolver::read_from_file(&mut file).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[cfg(feature = "serde")]
#[test]
fn test_analysis_serializes() {
    let g = chordal::Graph::from_edges([(0, 1), (1, 2), (0, 2)]);
    let analysis = chordal::analyze(&g).unwrap();

    let text = serde_json::to_string(&analysis).unwrap();
    let back: chordal::Analysis = serde_json::from_str(&text).unwrap();
    assert_eq!(back, analysis);
}
