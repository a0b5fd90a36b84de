use super::Vertex;
use thiserror::Error;

/// Error type returned by graph construction and edge-list input.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The vertex is not present in the graph
    #[error("vertex {0} is not in the graph")]
    UnknownVertex(Vertex),
    /// A line of an edge list could not be parsed
    #[error("malformed edge on line {line}: {content:?}")]
    MalformedEdge { line: usize, content: String },
    /// The input file type is not supported
    #[error("unsupported edge list format: {0}")]
    UnsupportedFormat(String),
    /// Underlying read failure
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
