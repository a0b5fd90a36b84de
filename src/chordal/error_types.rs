use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// A field holds a value outside its allowed range
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
    /// A string option is not one of the recognized choices
    #[error("Unrecognized option \"{value}\" for field \"{field}\"")]
    UnknownOption { field: &'static str, value: String },
}

/// Error type returned by the chordal engines.
#[derive(Error, Debug)]
pub enum ChordalError {
    /// The operation requires a chordal graph
    #[error("graph is not chordal")]
    NotChordal,
    /// Triangulation did not reach a chordal graph within the pass limit
    #[error("triangulation did not converge after {passes} passes")]
    NotConverged { passes: u32 },
    /// The ordering is not a permutation of the graph's vertices
    #[error("ordering is not a permutation of the graph's vertices")]
    OrderingMismatch,
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Failure writing verbose output
    #[error("failed to write solver output")]
    Io(#[from] std::io::Error),
}
