use chordal::{io::ConfigurablePrintTarget, ChordalSettingsBuilder, ChordalSolver, Graph};

fn test_print_solver() -> ChordalSolver {
    // a hexagon, so that the output includes triangulation passes
    let g = Graph::from_edges((0..6).map(|i| (i, (i + 1) % 6)));
    let settings = ChordalSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    ChordalSolver::new(g, settings).unwrap()
}

#[test]
fn test_print_to_stdout() {
    let mut solver = test_print_solver();
    solver.print_to_stdout();
    solver.solve().unwrap();
}

#[test]
fn test_print_to_buffer() {
    let mut solver = test_print_solver();
    solver.print_to_buffer();
    solver.solve().unwrap();
    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("chordal v"));
    assert!(result.contains("vertices      = 6"));
    assert!(result.contains("Terminated with status = Triangulated"));
    assert!(result.contains("triangulate"));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    solver.print_to_file(file.into_file());
    solver.solve().unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("chordal v"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    solver.print_to_stream(stream);
    solver.solve().unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("chordal v"));
}

#[test]
fn test_print_to_sink() {
    let mut solver = test_print_solver();
    solver.print_to_sink();
    solver.solve().unwrap();
    // no output
    assert!(solver.get_print_buffer().is_err());
}

#[test]
fn test_quiet_solver() {
    let g = Graph::from_edges([(0, 1), (1, 2)]);
    let mut solver = ChordalSolver::new(g, Default::default()).unwrap();
    solver.print_to_buffer();
    solver.solve().unwrap();
    assert!(solver.get_print_buffer().unwrap().is_empty());
}
