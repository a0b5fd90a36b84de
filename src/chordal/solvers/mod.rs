//! Quantities that are exact on chordal graphs, computed from a
//! lexicographic BFS ordering in time linear in the size of the graph
//! (the reference independent set excepted).

mod clique;
mod coloring;
mod independent;
pub use clique::*;
pub use coloring::*;
pub use independent::*;

use crate::graph::{DenseGraph, VertexSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Results of [`analyze`](crate::chordal::analyze) and
/// [`ChordalSolver::solve`](crate::chordal::ChordalSolver::solve).

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Analysis {
    /// a largest clique
    pub max_clique: VertexSet,
    /// number of colors of an optimal coloring
    pub chromatic_number: usize,
    /// a largest independent set
    pub independent_set: VertexSet,
}

impl Analysis {
    pub fn clique_number(&self) -> usize {
        self.max_clique.len()
    }

    pub fn independent_set_size(&self) -> usize {
        self.independent_set.len()
    }
}

pub(crate) fn analyze_dense(g: &DenseGraph, order: &[usize]) -> Analysis {
    let (_, chromatic_number) = greedy_coloring_dense(g, order);
    Analysis {
        max_clique: g.vertices_of(&maximum_clique_dense(g, order)),
        chromatic_number,
        independent_set: g.vertices_of(&greedy_independent_set_dense(g, order)),
    }
}
