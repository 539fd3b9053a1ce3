//! External solver configuration.

use std::path::PathBuf;

pub const DEFAULT_EXECUTABLE: &str = "matlab";
pub const DEFAULT_ENTRY_POINT: &str = "simulate";

/// Where the solver lives and what to run.
///
/// `search_roots` are directories added recursively to the solver's script
/// path before the entry point runs; the solver library itself and the
/// folder holding the entry script both belong here.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Executable launched in batch mode.
    pub executable: String,
    /// Script roots put on the solver path, in order.
    pub search_roots: Vec<PathBuf>,
    /// Function the batch invocation calls.
    pub entry_point: String,
    /// Directory the solver runs in; staged inputs live here.
    pub workdir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            search_roots: vec![PathBuf::from("k-Wave"), PathBuf::from("scripts")],
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            workdir: PathBuf::from("."),
        }
    }
}

impl EngineConfig {
    /// Same configuration rooted at a different workdir.
    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = workdir.into();
        self
    }
}
