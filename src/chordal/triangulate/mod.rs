//! Triangulation of non-chordal graphs.
//!
//! Every strategy shares the same fill-in fixed point: compute a
//! lexicographic BFS ordering, collect all certifier violations as fill
//! edges, add them and start over until the graph is certified.  The
//! strategies differ in how the input is reduced before that loop starts.

mod clique_cover;
mod fill_in;
mod sampling;
pub(crate) use clique_cover::*;
pub(crate) use fill_in::*;
pub(crate) use sampling::*;

use super::certify::fill_edges_dense;
use super::ordering::lex_bfs;
use super::{ChordalError, ChordalSettings, SettingsError, SolveInfo};
use crate::graph::{DenseGraph, Graph};
use enum_dispatch::*;

// All triangulation strategies must implement the following trait.

#[enum_dispatch]
pub(crate) trait TriangulationStrategy {
    // default implementation for all strategies
    fn triangulate(
        &mut self,
        graph: Graph,
        sampler: &mut VertexSampler,
        settings: &ChordalSettings,
        info: &mut SolveInfo,
    ) -> Result<Graph, ChordalError> {
        let graph = sampler.bound(graph, settings, info)?;
        let mut graph = self.initialise(graph);

        info.print_status_header(settings)?;

        loop {
            let dense = DenseGraph::new(&graph);
            let order = lex_bfs(&dense);
            let fill = fill_edges_dense(&dense, &order);

            if fill.is_empty() {
                break;
            }
            if info.passes >= settings.max_passes {
                return Err(ChordalError::NotConverged {
                    passes: info.passes,
                });
            }

            let mut nfill = 0;
            for &(p, q) in &fill {
                if graph.add_edge(dense.vertex(p), dense.vertex(q)) {
                    nfill += 1;
                }
            }
            info.passes += 1;
            info.fill_edges_added += nfill;
            info.print_pass(settings, &graph, nfill)?;

            // fill-in can blow up, so bound the graph again mid-flight
            if sampler.exceeds(&graph) {
                graph = sampler.bound(graph, settings, info)?;
            }
        }
        Ok(graph)
    }

    // reduce the size-bounded input before the fill-in loop
    fn initialise(&mut self, graph: Graph) -> Graph;
}

#[enum_dispatch(TriangulationStrategy)]
#[derive(Debug)]
pub(crate) enum TriangulationMethod {
    FillIn(FillInStrategy),
    CliqueCover(CliqueCoverStrategy),
}

impl TriangulationMethod {
    pub(crate) fn from_setting(method: &str) -> Result<Self, SettingsError> {
        match method {
            "fill_in" => Ok(FillInStrategy::new().into()),
            "clique_cover" => Ok(CliqueCoverStrategy::new().into()),
            _ => Err(SettingsError::UnknownOption {
                field: "triangulation_method",
                value: method.to_string(),
            }),
        }
    }
}

/// Triangulate `graph` with the method and size limits in `settings`.
/// Progress is recorded in `info`.
pub(crate) fn triangulate(
    graph: Graph,
    settings: &ChordalSettings,
    info: &mut SolveInfo,
) -> Result<Graph, ChordalError> {
    let mut method = TriangulationMethod::from_setting(&settings.triangulation_method)?;
    let mut sampler = VertexSampler::new(settings);
    method.triangulate(graph, &mut sampler, settings, info)
}

#[cfg(test)]
use super::certify::is_perfect_elimination_dense;

#[cfg(test)]
fn cycle(n: usize) -> Graph {
    Graph::from_edges((0..n).map(|i| (i, (i + 1) % n)))
}

#[cfg(test)]
fn certified(g: &Graph) -> bool {
    let dense = DenseGraph::new(g);
    is_perfect_elimination_dense(&dense, &lex_bfs(&dense))
}

#[test]
fn test_fill_in_square() {
    let mut info = SolveInfo::new();
    let settings = ChordalSettings::default();
    let g = triangulate(cycle(4), &settings, &mut info).unwrap();

    assert!(certified(&g));
    assert_eq!(g.edge_count(), 5);
    assert_eq!(info.passes, 1);
    assert_eq!(info.fill_edges_added, 1);
    assert_eq!(info.samplings, 0);
}

#[test]
fn test_fill_in_keeps_original_edges() {
    let mut info = SolveInfo::new();
    let settings = ChordalSettings::default();
    let input = cycle(9);
    let g = triangulate(input.clone(), &settings, &mut info).unwrap();

    assert!(certified(&g));
    assert_eq!(g.vertex_count(), 9);
    assert!(input.edges().all(|(u, v)| g.has_edge(u, v)));
    assert_eq!(g.edge_count(), input.edge_count() + info.fill_edges_added);
    assert!(info.fill_edges_added >= 6);
}

#[test]
fn test_pass_limit() {
    // one pass over a long cycle adds a single chord, which is not enough
    let mut info = SolveInfo::new();
    let settings = ChordalSettings {
        max_passes: 1,
        ..ChordalSettings::default()
    };
    let result = triangulate(cycle(10), &settings, &mut info);
    assert!(matches!(result, Err(ChordalError::NotConverged { passes: 1 })));
}

#[test]
fn test_unknown_method() {
    let mut info = SolveInfo::new();
    let settings = ChordalSettings {
        triangulation_method: "minimum_degree".to_string(),
        ..ChordalSettings::default()
    };
    assert!(matches!(
        triangulate(cycle(5), &settings, &mut info),
        Err(ChordalError::Settings(SettingsError::UnknownOption { .. }))
    ));
}
