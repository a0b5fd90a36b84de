use crate::io::PrintTarget;
use crate::timers::*;

// ---------------------------------
// Solver status type
// ---------------------------------

/// Status of the pipeline at termination

#[derive(PartialEq, Eq, Clone, Debug, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverStatus {
    /// Pipeline has not run.
    Unsolved,
    /// The input graph was certified chordal and analysed as given.
    Chordal,
    /// The input graph was triangulated and the result analysed.
    Triangulated,
    /// The input graph is not chordal and triangulation was disabled.
    NotChordal,
    /// Triangulation hit the pass limit.
    NotConverged,
}

impl SolverStatus {
    /// True when an analysis was produced.
    pub fn is_solved(&self) -> bool {
        matches!(*self, SolverStatus::Chordal | SolverStatus::Triangulated)
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Default for SolverStatus {
    fn default() -> Self {
        SolverStatus::Unsolved
    }
}

/// Progress and size counters recorded by one run of the pipeline.

#[derive(Default, Debug)]
pub struct SolveInfo {
    pub status: SolverStatus,
    /// seed used by the vertex sampler, if it was needed
    pub seed: Option<u64>,
    /// number of fill-in passes performed
    pub passes: u32,
    pub fill_edges_added: usize,
    /// number of random size reductions applied
    pub samplings: u32,
    pub initial_vertices: usize,
    pub initial_edges: usize,
    pub final_vertices: usize,
    pub final_edges: usize,
    pub solve_time: f64,

    pub(crate) stream: PrintTarget,
}

impl SolveInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self, timers: &mut Timers) {
        self.status = SolverStatus::Unsolved;
        self.seed = None;
        self.passes = 0;
        self.fill_edges_added = 0;
        self.samplings = 0;
        self.initial_vertices = 0;
        self.initial_edges = 0;
        self.final_vertices = 0;
        self.final_edges = 0;
        self.solve_time = 0f64;

        timers.reset_timer("solve");
    }

    pub(crate) fn finalize(&mut self, timers: &Timers) {
        self.solve_time = timers.total_time().as_secs_f64();
    }
}

#[test]
fn test_status_display() {
    assert_eq!(SolverStatus::default(), SolverStatus::Unsolved);
    assert_eq!(SolverStatus::NotConverged.to_string(), "NotConverged");
    assert!(SolverStatus::Triangulated.is_solved());
    assert!(!SolverStatus::NotChordal.is_solved());
}
