//! Staged-run storage API.

use crate::dataset;
use crate::field::PressureField;
use crate::table_csv::{cell_from_csv, cell_to_csv};
use crate::types::RunManifest;
use crate::{ResultsError, ResultsResult};
use sc_cell::CellTable;
use sc_project::SimulationProperties;
use std::fs;
use std::path::{Path, PathBuf};

pub const PROPERTIES_FILE: &str = "simulation_props.json";
pub const CELL_FILE: &str = "cell.csv";
pub const DATASET_FILE: &str = "simulation.h5";
pub const MANIFEST_FILE: &str = "manifest.json";

/// One working directory shared with the external solver.
///
/// The store stages `simulation_props.json` and `cell.csv` for the solver to
/// pick up, and reads back the `simulation.h5` dataset and run manifest the
/// run leaves behind. File names are fixed; the solver knows them too.
#[derive(Debug, Clone)]
pub struct SimStore {
    workdir: PathBuf,
}

impl SimStore {
    pub fn new(workdir: PathBuf) -> ResultsResult<Self> {
        if !workdir.exists() {
            fs::create_dir_all(&workdir)?;
        }
        Ok(Self { workdir })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn properties_path(&self) -> PathBuf {
        self.workdir.join(PROPERTIES_FILE)
    }

    pub fn cell_path(&self) -> PathBuf {
        self.workdir.join(CELL_FILE)
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.workdir.join(DATASET_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.workdir.join(MANIFEST_FILE)
    }

    pub fn save_properties(&self, properties: &SimulationProperties) -> ResultsResult<()> {
        let json = serde_json::to_string_pretty(properties)?;
        fs::write(self.properties_path(), json)?;
        Ok(())
    }

    pub fn load_properties(&self) -> ResultsResult<SimulationProperties> {
        let path = self.properties_path();
        if !path.exists() {
            return Err(ResultsError::MissingFile { path });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_cell(&self, cell: &CellTable) -> ResultsResult<()> {
        fs::write(self.cell_path(), cell_to_csv(cell))?;
        Ok(())
    }

    pub fn load_cell(&self) -> ResultsResult<CellTable> {
        let path = self.cell_path();
        if !path.exists() {
            return Err(ResultsError::MissingFile { path });
        }
        let content = fs::read_to_string(path)?;
        cell_from_csv(&content)
    }

    pub fn save_manifest(&self, manifest: &RunManifest) -> ResultsResult<()> {
        let json = serde_json::to_string_pretty(manifest)?;
        fs::write(self.manifest_path(), json)?;
        Ok(())
    }

    pub fn load_manifest(&self) -> ResultsResult<RunManifest> {
        let path = self.manifest_path();
        if !path.exists() {
            return Err(ResultsError::MissingFile { path });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// True once the solver has left a dataset in the workdir.
    pub fn has_result(&self) -> bool {
        self.dataset_path().exists()
    }

    /// Load the solver's pressure history from the default dataset.
    pub fn load_simulation(&self) -> ResultsResult<PressureField> {
        dataset::load_pressure_field(&self.dataset_path(), dataset::DATASET_NAME)
    }
}
