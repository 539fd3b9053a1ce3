//! End-to-end run orchestration.

use crate::compile::compile_study;
use crate::error::PipelineResult;
use crate::gateway::SolverEngine;
use sc_cell::{CellTable, assemble_cell_with_index, stack_layers};
use sc_project::schema::Study;
use sc_results::{PressureField, RunId, RunManifest, SimStore, compute_run_id};
use std::fs;
use std::time::Instant;
use tracing::info;

/// Concise timing summary for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunTimingSummary {
    pub prepare_time_s: f64,
    pub solve_time_s: f64,
    pub load_time_s: f64,
    pub total_time_s: f64,
}

/// Everything a completed run hands back to the caller.
#[derive(Debug)]
pub struct RunOutcome {
    pub run_id: RunId,
    pub manifest: RunManifest,
    pub field: PressureField,
    pub timing: RunTimingSummary,
}

/// Compile the study and stage its inputs into the store's workdir.
///
/// After this the workdir holds `simulation_props.json` and `cell.csv`, which
/// is everything the external solver reads.
pub fn prepare(study: &Study, store: &SimStore) -> PipelineResult<CellTable> {
    let compiled = compile_study(study)?;
    let stack = stack_layers(&compiled.schema, &compiled.layer_set, compiled.no_stacks)?;
    let cell = assemble_cell_with_index(stack, &compiled.index_name);

    store.save_properties(&compiled.properties)?;
    store.save_cell(&cell)?;

    info!(
        layers = cell.len(),
        workdir = %store.workdir().display(),
        "staged solver inputs"
    );

    Ok(cell)
}

/// Run id of whatever is currently staged in the workdir.
pub fn staged_run_id(store: &SimStore, engine: &str) -> PipelineResult<RunId> {
    let properties = fs::read(store.properties_path())?;
    let cell = fs::read(store.cell_path())?;
    Ok(compute_run_id(&properties, &cell, engine))
}

/// Prepare, solve and load in one pass.
pub fn execute(
    study: &Study,
    store: &SimStore,
    engine: &dyn SolverEngine,
) -> PipelineResult<RunOutcome> {
    let started = Instant::now();
    let mut timing = RunTimingSummary::default();

    let prepare_started = Instant::now();
    let cell = prepare(study, store)?;
    timing.prepare_time_s = prepare_started.elapsed().as_secs_f64();

    let solve_started = Instant::now();
    engine.run()?;
    timing.solve_time_s = solve_started.elapsed().as_secs_f64();

    let load_started = Instant::now();
    let field = store.load_simulation()?;
    let engine_name = engine.describe();
    let run_id = staged_run_id(store, &engine_name)?;

    let manifest = RunManifest {
        run_id: run_id.clone(),
        study_id: study.id.clone(),
        study_name: study.name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        engine: engine_name,
        layer_count: cell.len(),
        no_stacks: study.stacking.no_stacks,
        dataset: sc_results::DATASET_FILE.to_string(),
    };
    store.save_manifest(&manifest)?;
    timing.load_time_s = load_started.elapsed().as_secs_f64();

    timing.total_time_s = started.elapsed().as_secs_f64();

    info!(
        run_id = %run_id,
        timesteps = field.timesteps(),
        grid_points = field.grid_points(),
        "run complete"
    );

    Ok(RunOutcome {
        run_id,
        manifest,
        field,
        timing,
    })
}
