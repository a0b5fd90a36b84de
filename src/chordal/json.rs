use super::{ChordalSettings, ChordalSolver};
use crate::graph::Graph;

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// Reading and writing of a solver's problem (graph and settings) as JSON.
pub trait SolverJSONReadWrite: Sized {
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    fn read_from_file(file: &mut File) -> Result<Self, io::Error>;
}

// Only the data provided by the user.  Results and progress counters are
// recomputed by solving again.

#[derive(Serialize, Deserialize)]
struct JsonProblemData {
    pub graph: Graph,
    pub settings: ChordalSettings,
}

impl SolverJSONReadWrite for ChordalSolver {
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json_data = JsonProblemData {
            graph: self.graph.clone(),
            settings: self.settings.clone(),
        };

        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let json_data: JsonProblemData = serde_json::from_str(&buffer)?;

        Self::new(json_data.graph, json_data.settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    let mut graph = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (3, 40)]);
    graph.add_vertex(77);

    let settings = super::ChordalSettingsBuilder::default()
        .triangulation_method("clique_cover".to_string())
        .seed(Some(5))
        .build()
        .unwrap();

    let mut solver = ChordalSolver::new(graph, settings).unwrap();
    let analysis = solver.solve().unwrap().clone();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    solver.write_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut solver2 = ChordalSolver::read_from_file(&mut file).unwrap();
    assert_eq!(solver2.graph, solver.graph);
    assert_eq!(
        solver2.graph.vertices().collect::<Vec<_>>(),
        solver.graph.vertices().collect::<Vec<_>>()
    );
    assert_eq!(solver2.settings, solver.settings);

    assert_eq!(solver2.solve().unwrap(), &analysis);
}
