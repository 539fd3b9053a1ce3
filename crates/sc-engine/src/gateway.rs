//! Gateway to the external k-space solver.

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use std::process::{Command, Stdio};
use tracing::info;

/// Anything that can produce a dataset in the workdir.
///
/// The pipeline only needs this seam; tests substitute an engine that writes
/// a synthetic dataset instead of calling out to a solver install.
pub trait SolverEngine {
    /// Human-readable description recorded in run manifests.
    fn describe(&self) -> String;

    /// Run the solver to completion over the staged inputs.
    fn run(&self) -> EngineResult<()>;
}

/// Batch-mode MATLAB/k-Wave invocation.
#[derive(Debug)]
pub struct KWaveEngine {
    config: EngineConfig,
}

impl KWaveEngine {
    /// Probe the executable before accepting the configuration.
    ///
    /// A missing solver install must surface here, not after the cell has
    /// already been staged.
    pub fn start(config: EngineConfig) -> EngineResult<Self> {
        let probe = Command::new(&config.executable)
            .arg("-h")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match probe {
            Ok(status) if status.success() => {
                info!(executable = %config.executable, "solver engine available");
                Ok(Self { config })
            }
            Ok(status) => Err(EngineError::Unavailable {
                command: config.executable.clone(),
                reason: format!("probe exited with status {}", status.code().unwrap_or(-1)),
            }),
            Err(e) => Err(EngineError::Unavailable {
                command: config.executable.clone(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// One-line batch script: put every search root on the path, then call
    /// the entry point.
    fn batch_script(&self) -> String {
        let mut script = String::new();
        for root in &self.config.search_roots {
            script.push_str(&format!("addpath(genpath('{}')); ", root.display()));
        }
        script.push_str(&format!("{};", self.config.entry_point));
        script
    }
}

impl SolverEngine for KWaveEngine {
    fn describe(&self) -> String {
        format!("{} ({})", self.config.executable, self.config.entry_point)
    }

    fn run(&self) -> EngineResult<()> {
        let script = self.batch_script();
        info!(
            workdir = %self.config.workdir.display(),
            script = %script,
            "launching solver engine"
        );

        let status = Command::new(&self.config.executable)
            .current_dir(&self.config.workdir)
            .arg("-batch")
            .arg(&script)
            .status()?;

        if !status.success() {
            return Err(EngineError::Failed {
                status: status.code().unwrap_or(-1),
            });
        }

        info!("solver engine finished");
        Ok(())
    }
}
