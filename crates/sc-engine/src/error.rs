//! Error types for the sc-engine service layer.

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors from the external solver gateway.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The solver executable could not be started at all.
    #[error(
        "Cannot start solver engine '{command}': {reason}. Run the entry script natively in the solver's own environment, then fetch the dataset from the workdir."
    )]
    Unavailable { command: String, reason: String },

    /// The solver ran and exited with a failure status.
    #[error("Solver engine exited with status {status}")]
    Failed { status: i32 },

    #[error("I/O error talking to solver engine: {0}")]
    Io(#[from] std::io::Error),
}

/// Pipeline error type that wraps errors from the backend crates and
/// provides a unified interface for the CLI.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Material error: {0}")]
    Material(String),

    #[error("Cell assembly error: {0}")]
    Cell(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

// Conversions from backend error types
impl From<sc_project::ProjectError> for PipelineError {
    fn from(err: sc_project::ProjectError) -> Self {
        PipelineError::Project(err.to_string())
    }
}

impl From<sc_project::ValidationError> for PipelineError {
    fn from(err: sc_project::ValidationError) -> Self {
        PipelineError::Project(err.to_string())
    }
}

impl From<sc_materials::MaterialError> for PipelineError {
    fn from(err: sc_materials::MaterialError) -> Self {
        PipelineError::Material(err.to_string())
    }
}

impl From<sc_cell::CellError> for PipelineError {
    fn from(err: sc_cell::CellError) -> Self {
        PipelineError::Cell(err.to_string())
    }
}

impl From<sc_results::ResultsError> for PipelineError {
    fn from(err: sc_results::ResultsError) -> Self {
        PipelineError::Results(err.to_string())
    }
}
