use super::TriangulationStrategy;
use crate::graph::Graph;

/// Plain fill-in: the input goes into the fill-in loop unchanged, so every
/// original edge survives and only fill edges are added.
#[derive(Debug, Default)]
pub(crate) struct FillInStrategy;

impl FillInStrategy {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl TriangulationStrategy for FillInStrategy {
    fn initialise(&mut self, graph: Graph) -> Graph {
        graph
    }
}
