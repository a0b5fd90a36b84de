//! __chordal__ recognizes and constructs chordal graphs, i.e. graphs in
//! which every cycle of length four or more has a chord, and computes the
//! quantities that are hard in general but tractable on chordal graphs.
//!
//! Given an undirected graph over arbitrary non-negative vertex
//! identifiers, the crate provides
//!
//! * a lexicographic breadth-first ordering of the vertices,
//! * a certificate of chordality based on that ordering,
//! * triangulation of non-chordal graphs by iterated fill-in, with a
//!   seedable random sampling fallback that bounds the size of very large
//!   inputs, or alternatively by a greedy clique cover,
//! * maximum clique, chromatic number and maximum independent set of a
//!   chordal graph.
//!
//! ```
//! use chordal::{analyze, is_chordal, make_chordal, ChordalSettings, Graph};
//!
//! let pentagon = Graph::from_edges([(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]);
//! assert!(!is_chordal(&pentagon));
//!
//! let triangulated = make_chordal(pentagon, &ChordalSettings::default()).unwrap();
//! assert!(is_chordal(&triangulated));
//!
//! let analysis = analyze(&triangulated).unwrap();
//! assert_eq!(analysis.chromatic_number, analysis.max_clique.len());
//! ```
//!
//! The [`ChordalSolver`] object runs the same steps as one pipeline,
//! recording timings and progress in a [`SolveInfo`], with optional
//! verbose output to a configurable print target.
//!
//! # Features
//!
//! * `serde` (default): serialization of graphs, settings and results,
//!   and JSON reading and writing of solver problems.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod chordal;
pub mod graph;
pub mod io;
pub mod timers;

pub use chordal::{
    analyze, compute_ordering, is_chordal, make_chordal, Analysis, ChordalError, ChordalSettings,
    ChordalSettingsBuilder, ChordalSolver, Ordering, SolveInfo, SolverStatus,
};
pub use graph::{Graph, Vertex, VertexSet};
