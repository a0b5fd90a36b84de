//! Undirected simple graphs and the helpers shared by the chordal engines.
//!
//! A [`Graph`] is keyed by arbitrary non-negative vertex identifiers.  The
//! engines never index arrays by those identifiers directly.  They take a
//! [`DenseGraph`] snapshot instead, which renumbers the vertices `0..n` and
//! keeps the inverse map for translating results back.

/// Vertex identifier as supplied by the caller.
pub type Vertex = usize;

/// Insertion ordered set of vertices.
pub type VertexSet = indexmap::IndexSet<Vertex>;

mod adjacency;
mod dense;
mod disjoint_set_union;
mod error_types;
pub mod generate;

pub use adjacency::*;
pub use dense::*;
pub(crate) use disjoint_set_union::*;
pub use error_types::*;
