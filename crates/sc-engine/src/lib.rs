//! sc-engine: orchestration of the external k-space solver.
//!
//! The pipeline stages a study's inputs into a workdir, drives the solver in
//! batch mode through `KWaveEngine`, then loads the resulting dataset and
//! records a run manifest. `SolverEngine` is the seam tests use to stand in
//! for the real solver.

pub mod compile;
pub mod config;
pub mod error;
pub mod gateway;
pub mod pipeline;

pub use compile::{CompiledStudy, compile_study};
pub use config::{DEFAULT_ENTRY_POINT, DEFAULT_EXECUTABLE, EngineConfig};
pub use error::{EngineError, EngineResult, PipelineError, PipelineResult};
pub use gateway::{KWaveEngine, SolverEngine};
pub use pipeline::{RunOutcome, RunTimingSummary, execute, prepare, staged_run_id};
