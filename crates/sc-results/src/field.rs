//! In-memory pressure history.

use ndarray::{Array2, ArrayView1};
use sc_core::numeric::{Real, linspace};

/// Pressure over the 1-D grid, one row per time step.
///
/// The solver stores its dataset grid-major; `from_disk_layout` flips that
/// into this time-major shape exactly once, at load.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureField {
    data: Array2<f32>,
}

impl PressureField {
    /// Wrap data already in `(timesteps, grid_points)` layout.
    pub fn from_timesteps_by_grid(data: Array2<f32>) -> Self {
        Self { data }
    }

    /// Adopt data in the solver's on-disk `(grid_points, timesteps)` layout.
    pub fn from_disk_layout(data: Array2<f32>) -> Self {
        Self {
            data: data.reversed_axes(),
        }
    }

    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    pub fn timesteps(&self) -> usize {
        self.data.nrows()
    }

    pub fn grid_points(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Spatial pressure profile at one time step.
    pub fn frame(&self, step: usize) -> Option<ArrayView1<'_, f32>> {
        (step < self.timesteps()).then(|| self.data.row(step))
    }

    /// Pressure history at one grid point. Negative indices count from the
    /// far end of the grid, so `-1` is the last point.
    pub fn sensor_trace(&self, grid_index: isize) -> Option<Vec<f32>> {
        let n = self.grid_points() as isize;
        let resolved = if grid_index < 0 {
            grid_index + n
        } else {
            grid_index
        };
        if resolved < 0 || resolved >= n {
            return None;
        }
        Some(self.data.column(resolved as usize).to_vec())
    }

    /// Largest pressure magnitude anywhere in the field.
    pub fn peak_pressure(&self) -> f32 {
        self.data.iter().fold(0.0_f32, |peak, v| peak.max(v.abs()))
    }

    /// Sample times for the stored steps, assuming they span `duration`.
    pub fn time_axis(&self, duration: Real) -> Vec<Real> {
        linspace(0.0, duration, self.timesteps())
    }
}
