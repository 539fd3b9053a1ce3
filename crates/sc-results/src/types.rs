//! Result data types.

use serde::{Deserialize, Serialize};

pub type RunId = String;

/// Provenance record written next to each completed solver run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub study_id: String,
    pub study_name: String,
    /// RFC 3339 wall-clock time the run finished.
    pub timestamp: String,
    /// Human-readable description of the engine that produced the dataset.
    pub engine: String,
    pub layer_count: usize,
    pub no_stacks: usize,
    /// Dataset file name within the workdir.
    pub dataset: String,
}
