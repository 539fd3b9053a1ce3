use clap::{Parser, Subcommand};
use sc_engine::{
    EngineConfig, KWaveEngine, PipelineError, PipelineResult, RunTimingSummary, execute, prepare,
};
use sc_materials::filter_reference_catalog;
use sc_project::Study;
use sc_results::{PressureField, SimStore};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sc-cli")]
#[command(about = "Sonocell CLI - Layered-cell acoustic simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a study file preloaded with the reference cell
    Init {
        /// Path of the study file to create (.yaml or .json)
        study_path: PathBuf,
        /// Study name
        #[arg(long, default_value = "reference cell")]
        name: String,
        /// Repeating units folded between the case layers
        #[arg(long, default_value_t = 1)]
        stacks: usize,
    },
    /// Validate a study file
    Validate {
        /// Path to the study file
        study_path: PathBuf,
    },
    /// List catalog materials
    Materials {
        /// Case-insensitive filter over ids, names and aliases
        query: Option<String>,
    },
    /// Stage solver inputs without running the solver
    Prepare {
        /// Path to the study file
        study_path: PathBuf,
        /// Directory shared with the solver
        #[arg(short, long, default_value = ".")]
        workdir: PathBuf,
    },
    /// Stage inputs, run the solver and record the result
    Run {
        /// Path to the study file
        study_path: PathBuf,
        /// Directory shared with the solver
        #[arg(short, long, default_value = ".")]
        workdir: PathBuf,
        /// Solver executable launched in batch mode
        #[arg(long, default_value = "matlab")]
        engine: String,
        /// k-Wave library root added to the solver path
        #[arg(long, default_value = "k-Wave")]
        kwave_root: PathBuf,
        /// Entry-script root added to the solver path
        #[arg(long, default_value = "scripts")]
        scripts_root: PathBuf,
        /// Entry routine the batch invocation calls
        #[arg(long, default_value = "simulate")]
        entry_point: String,
    },
    /// Summarize the dataset and manifest left in a workdir
    Fetch {
        /// Directory shared with the solver
        #[arg(short, long, default_value = ".")]
        workdir: PathBuf,
    },
    /// Export the pressure history at one grid point as CSV
    ExportTrace {
        /// Directory shared with the solver
        #[arg(short, long, default_value = ".")]
        workdir: PathBuf,
        /// Grid index; negative counts back from the far end
        #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
        grid_index: isize,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> PipelineResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            study_path,
            name,
            stacks,
        } => cmd_init(&study_path, &name, stacks),
        Commands::Validate { study_path } => cmd_validate(&study_path),
        Commands::Materials { query } => cmd_materials(query.as_deref().unwrap_or("")),
        Commands::Prepare {
            study_path,
            workdir,
        } => cmd_prepare(&study_path, &workdir),
        Commands::Run {
            study_path,
            workdir,
            engine,
            kwave_root,
            scripts_root,
            entry_point,
        } => cmd_run(
            &study_path,
            &workdir,
            engine,
            kwave_root,
            scripts_root,
            entry_point,
        ),
        Commands::Fetch { workdir } => cmd_fetch(&workdir),
        Commands::ExportTrace {
            workdir,
            grid_index,
            output,
        } => cmd_export_trace(&workdir, grid_index, output.as_deref()),
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn load_study(path: &Path) -> PipelineResult<Study> {
    let study = if is_json(path) {
        sc_project::load_json(path)?
    } else {
        sc_project::load_yaml(path)?
    };
    Ok(study)
}

fn cmd_init(study_path: &Path, name: &str, stacks: usize) -> PipelineResult<()> {
    let mut study = Study::reference(name);
    study.stacking.no_stacks = stacks;

    if is_json(study_path) {
        sc_project::save_json(study_path, &study)?;
    } else {
        sc_project::save_yaml(study_path, &study)?;
    }

    println!("✓ Wrote study '{}' to {}", study.name, study_path.display());
    println!("  Materials: {}", study.materials.len());
    println!("  Stacks: {}", study.stacking.no_stacks);
    Ok(())
}

fn cmd_validate(study_path: &Path) -> PipelineResult<()> {
    println!("Validating study: {}", study_path.display());
    let study = load_study(study_path)?;
    println!("✓ Study is valid");
    println!("  Name: {}", study.name);
    println!("  Materials: {}", study.materials.len());
    println!("  Stacks: {}", study.stacking.no_stacks);
    if let Some(lithiation) = &study.lithiation {
        println!("  Lithiation voltage: {} V", lithiation.voltage_v);
    }
    Ok(())
}

fn cmd_materials(query: &str) -> PipelineResult<()> {
    let entries = filter_reference_catalog(query);

    if entries.is_empty() {
        println!("No materials match '{}'", query);
    } else {
        println!("Catalog materials:");
        for entry in entries {
            let props = entry.props();
            println!(
                "  {} - {} (E = {} GPa, rho = {} kg/m3, x = {:.0} um)",
                entry.canonical_id,
                entry.display_name,
                props.youngs_modulus_gpa(),
                props.density.value,
                props.thickness_microns(),
            );
        }
    }
    Ok(())
}

fn cmd_prepare(study_path: &Path, workdir: &Path) -> PipelineResult<()> {
    let study = load_study(study_path)?;
    let store = SimStore::new(workdir.to_path_buf())?;

    let cell = prepare(&study, &store)?;

    println!("✓ Staged solver inputs in {}", store.workdir().display());
    println!("  Layers: {}", cell.len());
    println!("  Cell thickness: {:.1} um", cell.total_thickness()? * 1e6);
    Ok(())
}

fn cmd_run(
    study_path: &Path,
    workdir: &Path,
    executable: String,
    kwave_root: PathBuf,
    scripts_root: PathBuf,
    entry_point: String,
) -> PipelineResult<()> {
    println!("Running acoustic simulation: {}", study_path.display());

    let study = load_study(study_path)?;
    let store = SimStore::new(workdir.to_path_buf())?;

    let config = EngineConfig {
        executable,
        search_roots: vec![kwave_root, scripts_root],
        entry_point,
        workdir: workdir.to_path_buf(),
    };
    let engine = KWaveEngine::start(config)?;

    let outcome = execute(&study, &store, &engine)?;

    println!("✓ Simulation completed: {}", outcome.run_id);
    print_timing_summary(&outcome.timing);
    print_field_summary(&outcome.field);

    Ok(())
}

fn cmd_fetch(workdir: &Path) -> PipelineResult<()> {
    let store = SimStore::new(workdir.to_path_buf())?;
    let field = store.load_simulation()?;

    if store.manifest_path().exists() {
        let manifest = store.load_manifest()?;
        println!("Run {} ({})", manifest.run_id, manifest.timestamp);
        println!("  Study: {} ({})", manifest.study_name, manifest.study_id);
        println!("  Engine: {}", manifest.engine);
        println!(
            "  Layers: {} ({} stacks)",
            manifest.layer_count, manifest.no_stacks
        );
    } else {
        // Native solver runs leave a dataset but no manifest
        println!("No manifest in {}", store.workdir().display());
    }

    print_field_summary(&field);
    Ok(())
}

fn cmd_export_trace(
    workdir: &Path,
    grid_index: isize,
    output: Option<&Path>,
) -> PipelineResult<()> {
    let store = SimStore::new(workdir.to_path_buf())?;
    let field = store.load_simulation()?;
    let properties = store.load_properties()?;

    let trace = field.sensor_trace(grid_index).ok_or_else(|| {
        PipelineError::Results(format!(
            "grid index {} out of range for {} grid points",
            grid_index,
            field.grid_points()
        ))
    })?;
    let time = field.time_axis(properties.simulation_duration);

    // Build CSV
    let mut csv = String::from("time_s,pressure_pa\n");
    for (t, p) in time.iter().zip(&trace) {
        csv.push_str(&format!("{},{}\n", t, p));
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} samples to {}", trace.len(), path.display());
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn print_timing_summary(timing: &RunTimingSummary) {
    let total = timing.total_time_s.max(1.0e-12);
    let prepare_pct = 100.0 * timing.prepare_time_s / total;
    let solve_pct = 100.0 * timing.solve_time_s / total;
    let load_pct = 100.0 * timing.load_time_s / total;

    println!("\nTiming summary:");
    println!(
        "  Prepare: {:.3}s ({:.1}%)",
        timing.prepare_time_s, prepare_pct
    );
    println!("  Solve:   {:.3}s ({:.1}%)", timing.solve_time_s, solve_pct);
    println!("  Load:    {:.3}s ({:.1}%)", timing.load_time_s, load_pct);
    println!("  Total:   {:.3}s", timing.total_time_s);
}

fn print_field_summary(field: &PressureField) {
    println!("\nDataset summary:");
    println!("  Time steps: {}", field.timesteps());
    println!("  Grid points: {}", field.grid_points());
    println!("  Peak pressure: {:.3} Pa", field.peak_pressure());
}
