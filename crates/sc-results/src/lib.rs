//! sc-results: staged solver inputs, result datasets and run manifests.

pub mod dataset;
pub mod field;
pub mod hash;
pub mod store;
pub mod table_csv;
pub mod types;

pub use dataset::{DATASET_NAME, load_pressure_field, write_pressure_field};
pub use field::PressureField;
pub use hash::compute_run_id;
pub use store::{CELL_FILE, DATASET_FILE, MANIFEST_FILE, PROPERTIES_FILE, SimStore};
pub use table_csv::{cell_from_csv, cell_to_csv};
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing file: {}", .path.display())]
    MissingFile { path: std::path::PathBuf },

    #[error("Dataset '{name}' not found in {}", .path.display())]
    MissingDataset {
        name: String,
        path: std::path::PathBuf,
    },

    #[error(transparent)]
    H5(#[from] hdf5::Error),

    #[error("Malformed cell table (line {line}): {what}")]
    Csv { line: usize, what: String },

    #[error("Cell table error: {0}")]
    Cell(String),
}

impl From<sc_cell::CellError> for ResultsError {
    fn from(e: sc_cell::CellError) -> Self {
        ResultsError::Cell(e.to_string())
    }
}
