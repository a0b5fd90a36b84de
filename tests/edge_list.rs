use chordal::graph::GraphError;
use chordal::io::{load_edge_list, read_edge_list, EdgeListFormat};
use chordal::{analyze, is_chordal, make_chordal, ChordalSettings};
use std::io::Write;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_whitespace_edge_list() {
    let file = write_temp(
        ".txt",
        "# Directed graph (each unordered pair of nodes is saved once)\n\
         # FromNodeId\tToNodeId\n\
         1\t2\n2\t3\n3\t4\n4\t5\n5\t1\n",
    );

    let report = load_edge_list(file.path()).unwrap();
    assert!(report.skipped.is_empty());
    assert_eq!(report.graph.vertex_count(), 5);
    assert_eq!(report.graph.edge_count(), 5);

    assert!(!is_chordal(&report.graph));
    let h = make_chordal(report.graph, &ChordalSettings::default()).unwrap();
    assert!(is_chordal(&h));
}

#[test]
fn test_load_csv_edge_list() {
    let file = write_temp(".csv", "id_1,id_2\n0,1\n1,2\n0,2\n2,3\nnot,an,edge\n");

    let report = load_edge_list(file.path()).unwrap();
    assert_eq!(report.skipped.len(), 1);
    assert!(matches!(
        report.skipped[0],
        GraphError::MalformedEdge { line: 6, .. }
    ));

    let analysis = analyze(&report.graph).unwrap();
    assert_eq!(analysis.chromatic_number, 3);
}

#[test]
fn test_unsupported_and_missing_files() {
    let file = write_temp(".txt.gz", "0 1\n");
    assert!(matches!(
        load_edge_list(file.path()),
        Err(GraphError::UnsupportedFormat(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_edge_list(dir.path().join("missing.txt")),
        Err(GraphError::Io(_))
    ));
}

#[test]
fn test_read_from_memory() {
    let text = "10 20\n20 30\n30 10\n";
    let report = read_edge_list(text.as_bytes(), EdgeListFormat::Whitespace).unwrap();
    assert!(is_chordal(&report.graph));
    assert_eq!(analyze(&report.graph).unwrap().max_clique.len(), 3);
}
