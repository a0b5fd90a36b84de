use crate::graph::{Graph, GraphError, Vertex};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Layout of a plain-text edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeListFormat {
    /// whitespace separated columns, lines starting with `#` are comments
    Whitespace,
    /// comma separated columns after a single header line
    Csv,
}

impl EdgeListFormat {
    /// Picks the format from the file name.  Compressed archives are
    /// rejected and must be unpacked by the caller.
    pub fn from_path(path: &Path) -> Result<Self, GraphError> {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match path.extension().and_then(|e| e.to_str()) {
            Some("txt") | Some("edges") | Some("tsv") => Ok(EdgeListFormat::Whitespace),
            Some("csv") => Ok(EdgeListFormat::Csv),
            _ => Err(GraphError::UnsupportedFormat(name)),
        }
    }
}

/// Graph read from an edge list, together with the lines that were skipped.
#[derive(Debug, Default)]
pub struct EdgeListReport {
    pub graph: Graph,
    pub skipped: Vec<GraphError>,
}

/// Reads an undirected edge list.  The first two columns of each line are
/// taken as the endpoints; further columns are ignored.  Lines that do not
/// start with two integers are recorded in `skipped` and reading goes on.
pub fn read_edge_list<R: BufRead>(
    reader: R,
    format: EdgeListFormat,
) -> Result<EdgeListReport, GraphError> {
    let mut report = EdgeListReport::default();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;

        let fields: Vec<&str> = match format {
            EdgeListFormat::Whitespace => {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                trimmed.split_whitespace().take(2).collect()
            }
            EdgeListFormat::Csv => {
                if lineno == 0 || line.trim().is_empty() {
                    continue; // header
                }
                line.split(',').take(2).map(str::trim).collect()
            }
        };

        match parse_endpoints(&fields) {
            Some((u, v)) => {
                report.graph.add_edge(u, v);
            }
            None => report.skipped.push(GraphError::MalformedEdge {
                line: lineno + 1,
                content: line.clone(),
            }),
        }
    }
    Ok(report)
}

/// Opens `path` and reads it with the format implied by its extension.
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<EdgeListReport, GraphError> {
    let path = path.as_ref();
    let format = EdgeListFormat::from_path(path)?;
    let file = File::open(path)?;
    read_edge_list(BufReader::new(file), format)
}

fn parse_endpoints(fields: &[&str]) -> Option<(Vertex, Vertex)> {
    match fields {
        [u, v] => Some((u.parse().ok()?, v.parse().ok()?)),
        _ => None,
    }
}

#[test]
fn test_read_whitespace_edge_list() {
    let text = "# a comment\n0 1\n1\t2 17\n\nbogus line\n2 2\n";
    let report = read_edge_list(text.as_bytes(), EdgeListFormat::Whitespace).unwrap();

    assert_eq!(report.graph.vertex_count(), 3);
    assert_eq!(report.graph.edge_count(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert!(matches!(
        report.skipped[0],
        GraphError::MalformedEdge { line: 5, .. }
    ));
}

#[test]
fn test_read_csv_edge_list() {
    let text = "source,target,weight\n4, 5,1.0\n5,6\nx,7\n";
    let report = read_edge_list(text.as_bytes(), EdgeListFormat::Csv).unwrap();

    assert!(report.graph.has_edge(4, 5));
    assert!(report.graph.has_edge(6, 5));
    assert_eq!(report.graph.edge_count(), 2);
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn test_format_from_path() {
    assert_eq!(
        EdgeListFormat::from_path(Path::new("data/roads.txt")).unwrap(),
        EdgeListFormat::Whitespace
    );
    assert_eq!(
        EdgeListFormat::from_path(Path::new("musae.csv")).unwrap(),
        EdgeListFormat::Csv
    );
    assert!(matches!(
        EdgeListFormat::from_path(Path::new("facebook.txt.gz")),
        Err(GraphError::UnsupportedFormat(_))
    ));
}
