//! HDF5 datasets exchanged with the k-space solver.

use crate::field::PressureField;
use crate::{ResultsError, ResultsResult};
use std::path::Path;

/// Dataset name the solver writes its pressure history under.
pub const DATASET_NAME: &str = "simulation";

/// Read a dataset stored in the solver's `(grid_points, timesteps)` layout
/// and transpose it into time-major order.
pub fn load_pressure_field(path: &Path, dataset: &str) -> ResultsResult<PressureField> {
    if !path.exists() {
        return Err(ResultsError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let file = hdf5::File::open(path)?;
    let ds = file
        .dataset(dataset)
        .map_err(|_| ResultsError::MissingDataset {
            name: dataset.to_string(),
            path: path.to_path_buf(),
        })?;
    let data = ds.read_2d::<f32>()?;
    Ok(PressureField::from_disk_layout(data))
}

/// Write a field back out in the solver's on-disk layout.
pub fn write_pressure_field(
    path: &Path,
    dataset: &str,
    field: &PressureField,
) -> ResultsResult<()> {
    let file = hdf5::File::create(path)?;
    // contiguous copy; the builder does not take strided views
    let disk = field.data().t().as_standard_layout().into_owned();
    file.new_dataset_builder().with_data(&disk).create(dataset)?;
    Ok(())
}
