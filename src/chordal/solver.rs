use super::certify::is_perfect_elimination_dense;
use super::ordering::lex_bfs;
use super::solvers::{analyze_dense, Analysis};
use super::triangulate::triangulate;
use super::*;
use crate::graph::{DenseGraph, Graph};
use crate::io::ConfigurablePrintTarget;
use crate::timers::*;
use std::io::Write;

/// Pipeline object running ordering, certification, triangulation and
/// analysis on one graph.
///
/// The input graph is kept unchanged in `graph`.  After a successful
/// [`solve`](ChordalSolver::solve), `chordal_graph` holds the graph that
/// was analysed (the input itself, or its triangulation) and `ordering`
/// is a lexicographic BFS ordering of that graph.
///
/// ```
/// use chordal::{ChordalSettings, ChordalSolver, Graph, SolverStatus};
///
/// let square = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let mut solver = ChordalSolver::new(square, ChordalSettings::default()).unwrap();
///
/// let analysis = solver.solve().unwrap();
/// assert_eq!(analysis.chromatic_number, 3);
/// assert_eq!(solver.info.status, SolverStatus::Triangulated);
/// ```

#[derive(Debug)]
pub struct ChordalSolver {
    pub graph: Graph,
    pub settings: ChordalSettings,
    pub info: SolveInfo,
    pub chordal_graph: Option<Graph>,
    pub ordering: Option<Ordering>,
    pub solution: Option<Analysis>,
    pub(crate) timers: Option<Timers>,
}

impl ChordalSolver {
    pub fn new(graph: Graph, settings: ChordalSettings) -> Result<Self, ChordalError> {
        settings.validate()?;

        Ok(Self {
            graph,
            settings,
            info: SolveInfo::new(),
            chordal_graph: None,
            ordering: None,
            solution: None,
            timers: Some(Timers::default()),
        })
    }

    /// Run the pipeline.  Fails with [`ChordalError::NotChordal`] when the
    /// graph is not chordal and `force_chordal` is off, and with
    /// [`ChordalError::NotConverged`] when triangulation hits the pass
    /// limit.  `info.status` records the outcome either way.
    ///
    /// `settings` is public and may have changed since [`new`](ChordalSolver::new),
    /// so it is validated again before anything runs.
    pub fn solve(&mut self) -> Result<&Analysis, ChordalError> {
        self.settings.validate()?;

        //timers is stored as an option so that
        //we can swap it out here and avoid
        //borrow conflicts with other fields.
        let mut timers = self.timers.take().unwrap_or_default();

        let printed;
        notimeit! {timers; {
            printed = self.print_preamble();
        }}

        self.info.reset(&mut timers);
        self.chordal_graph = None;
        self.ordering = None;
        self.solution = None;
        self.info.initial_vertices = self.graph.vertex_count();
        self.info.initial_edges = self.graph.edge_count();

        let outcome;
        timeit! {timers => "solve"; {
            outcome = self.run(&mut timers);
        }}

        self.info.finalize(&timers);
        let footer = self.info.print_footer(&self.settings, &timers);
        self.timers.replace(timers);

        let analysis = outcome?;
        printed?;
        footer?;
        Ok(self.solution.insert(analysis))
    }

    /// Timings of the most recent [`solve`](ChordalSolver::solve).
    pub fn timers(&self) -> Option<&Timers> {
        self.timers.as_ref()
    }

    fn print_preamble(&mut self) -> std::io::Result<()> {
        self.info.print_banner(&self.settings)?;
        self.info.print_configuration(&self.settings, &self.graph)
    }

    fn run(&mut self, timers: &mut Timers) -> Result<Analysis, ChordalError> {
        let mut dense;
        let mut order;
        timeit! {timers => "ordering"; {
            dense = DenseGraph::new(&self.graph);
            order = lex_bfs(&dense);
        }}

        let certified;
        timeit! {timers => "certify"; {
            certified = is_perfect_elimination_dense(&dense, &order);
        }}

        let graph = if certified {
            self.info.status = SolverStatus::Chordal;
            self.graph.clone()
        } else if !self.settings.force_chordal {
            self.info.status = SolverStatus::NotChordal;
            self.info.final_vertices = self.info.initial_vertices;
            self.info.final_edges = self.info.initial_edges;
            return Err(ChordalError::NotChordal);
        } else {
            let triangulated;
            timeit! {timers => "triangulate"; {
                triangulated = triangulate(self.graph.clone(), &self.settings, &mut self.info);
            }}

            let graph = triangulated.map_err(|e| {
                if matches!(e, ChordalError::NotConverged { .. }) {
                    self.info.status = SolverStatus::NotConverged;
                }
                e
            })?;

            timeit! {timers => "ordering"; {
                dense = DenseGraph::new(&graph);
                order = lex_bfs(&dense);
            }}
            self.info.status = SolverStatus::Triangulated;
            graph
        };

        self.info.final_vertices = graph.vertex_count();
        self.info.final_edges = graph.edge_count();
        self.ordering = Some(Ordering::from_dense(&dense, &order));
        self.chordal_graph = Some(graph);

        let analysis;
        timeit! {timers => "analyze"; {
            analysis = analyze_dense(&dense, &order);
        }}
        Ok(analysis)
    }
}

impl ConfigurablePrintTarget for ChordalSolver {
    fn print_to_stdout(&mut self) {
        self.info.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.info.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.info.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.info.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.info.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.info.get_print_buffer()
    }
}

#[test]
fn test_solver_on_chordal_graph() {
    let g = Graph::from_edges([(0, 1), (1, 2), (0, 2), (2, 3)]);
    let mut solver = ChordalSolver::new(g, ChordalSettings::default()).unwrap();

    let analysis = solver.solve().unwrap().clone();
    assert_eq!(analysis.chromatic_number, 3);
    assert_eq!(analysis.clique_number(), 3);
    assert_eq!(analysis.independent_set_size(), 2);

    assert_eq!(solver.info.status, SolverStatus::Chordal);
    assert_eq!(solver.info.passes, 0);
    assert_eq!(solver.chordal_graph.as_ref(), Some(&solver.graph));
    assert_eq!(solver.ordering.as_ref().map(|o| o.len()), Some(4));

    let timers = solver.timers().unwrap();
    assert!(timers.elapsed(&["solve", "analyze"]).is_some());
    assert!(timers.elapsed(&["solve", "triangulate"]).is_none());
}

#[test]
fn test_solver_without_forcing() {
    let g = Graph::from_edges([(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]);
    let settings = ChordalSettings {
        force_chordal: false,
        ..ChordalSettings::default()
    };
    let mut solver = ChordalSolver::new(g, settings).unwrap();

    assert!(matches!(solver.solve(), Err(ChordalError::NotChordal)));
    assert_eq!(solver.info.status, SolverStatus::NotChordal);
    assert!(solver.solution.is_none());
    assert!(solver.chordal_graph.is_none());
}

#[test]
fn test_solver_rejects_bad_settings() {
    let settings = ChordalSettings {
        sample_fraction_min: 2.0,
        ..ChordalSettings::default()
    };
    assert!(matches!(
        ChordalSolver::new(Graph::new(), settings),
        Err(ChordalError::Settings(_))
    ));
}

#[test]
fn test_solve_revalidates_settings() {
    // large enough to need sampling under the edited limits
    let g = Graph::from_edges((0..30).map(|i| (i, (i + 1) % 30)));
    let mut solver = ChordalSolver::new(g, ChordalSettings::default()).unwrap();

    solver.settings.sample_fraction_min = 0.9;
    solver.settings.sample_fraction_max = 0.5;
    solver.settings.max_vertices = 10;

    assert!(matches!(
        solver.solve(),
        Err(ChordalError::Settings(SettingsError::BadFieldValue(
            "sample_fraction_min"
        )))
    ));
    assert_eq!(solver.info.status, SolverStatus::Unsolved);
    assert!(solver.solution.is_none());

    solver.settings.sample_fraction_min = 0.5;
    solver.settings.sample_fraction_max = 0.9;
    solver.solve().unwrap();
    assert!(solver.info.samplings >= 1);
    assert!(solver.info.final_vertices <= 10);
}
