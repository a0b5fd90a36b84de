use crate::chordal::{ChordalError, ChordalSettings, SolveInfo};
use crate::graph::Graph;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Random vertex sampling used to keep a graph below the configured size
/// limits.  Each reduction keeps a uniformly chosen subset of the vertices
/// and the edges between them.

#[derive(Debug, Clone)]
pub(crate) struct VertexSampler {
    rng: Xoshiro256PlusPlus,
    seed: u64,
    enable: bool,
    max_vertices: usize,
    max_edges: usize,
    fraction_min: f64,
    fraction_max: f64,
}

impl VertexSampler {
    pub(crate) fn new(settings: &ChordalSettings) -> Self {
        let seed = settings.seed.unwrap_or_else(random_seed);
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            seed,
            enable: settings.sampling_enable,
            max_vertices: settings.max_vertices,
            max_edges: settings.max_edges,
            fraction_min: settings.sample_fraction_min,
            fraction_max: settings.sample_fraction_max,
        }
    }

    /// True if sampling is on and `graph` is over either limit.
    pub(crate) fn exceeds(&self, graph: &Graph) -> bool {
        self.enable
            && (graph.vertex_count() > self.max_vertices || graph.edge_count() > self.max_edges)
    }

    /// One reduction step.  Keeps `floor(n * f)` vertices for `f` drawn
    /// uniformly from the configured range, but always drops at least one
    /// vertex.  Returns the induced subgraph and the fraction drawn.
    pub(crate) fn sample(&mut self, graph: &Graph) -> (Graph, f64) {
        let n = graph.vertex_count();
        let fraction = self.rng.gen_range(self.fraction_min..=self.fraction_max);
        let keep = ((n as f64 * fraction).floor() as usize).min(n.saturating_sub(1));

        let picked = rand::seq::index::sample(&mut self.rng, n, keep);
        let subgraph =
            graph.induced_subgraph(picked.into_iter().filter_map(|i| graph.vertex_at(i)));
        (subgraph, fraction)
    }

    /// Reduce `graph` until it is within the limits, recording every step
    /// in `info`.
    pub(crate) fn bound(
        &mut self,
        mut graph: Graph,
        settings: &ChordalSettings,
        info: &mut SolveInfo,
    ) -> Result<Graph, ChordalError> {
        while self.exceeds(&graph) {
            let before = graph.vertex_count();
            let (sampled, fraction) = self.sample(&graph);
            graph = sampled;

            info.samplings += 1;
            info.seed = Some(self.seed);
            info.print_sampling(settings, before, graph.vertex_count(), fraction)?;
        }
        Ok(graph)
    }
}

fn random_seed() -> u64 {
    rand::random()
}

#[cfg(test)]
use crate::chordal::ChordalSettingsBuilder;
#[cfg(test)]
use crate::graph::generate::gnp_random_graph;

#[test]
fn test_sampling_respects_limits() {
    let settings = ChordalSettingsBuilder::default()
        .max_vertices(50)
        .max_edges(200)
        .seed(Some(3))
        .build()
        .unwrap();

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
    let g = gnp_random_graph(200, 0.05, &mut rng);

    let mut sampler = VertexSampler::new(&settings);
    assert!(sampler.exceeds(&g));

    let mut info = SolveInfo::new();
    let bounded = sampler.bound(g.clone(), &settings, &mut info).unwrap();
    assert!(bounded.vertex_count() <= 50);
    assert!(bounded.edge_count() <= 200);
    assert!(info.samplings > 0);
    assert_eq!(info.seed, Some(3));

    // every surviving edge comes from the input
    assert!(bounded.edges().all(|(u, v)| g.has_edge(u, v)));
}

#[test]
fn test_sampling_is_reproducible() {
    let settings = ChordalSettingsBuilder::default()
        .seed(Some(17))
        .build()
        .unwrap();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
    let g = gnp_random_graph(100, 0.1, &mut rng);

    let (a, fa) = VertexSampler::new(&settings).sample(&g);
    let (b, fb) = VertexSampler::new(&settings).sample(&g);
    assert_eq!(fa, fb);
    assert_eq!(a.vertices().collect::<Vec<_>>(), b.vertices().collect::<Vec<_>>());
    assert!((70..=90).contains(&a.vertex_count()));
}

#[test]
fn test_sampling_disabled() {
    let settings = ChordalSettingsBuilder::default()
        .sampling_enable(false)
        .max_vertices(1)
        .build()
        .unwrap();
    let g = Graph::from_edges([(0, 1), (1, 2)]);
    assert!(!VertexSampler::new(&settings).exceeds(&g));
}
