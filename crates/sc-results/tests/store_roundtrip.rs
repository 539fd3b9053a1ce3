use ndarray::Array2;
use sc_cell::{LayerSet, PropertySchema, assemble_cell, stack_layers};
use sc_project::SimulationProperties;
use sc_results::*;

fn reference_cell() -> sc_cell::CellTable {
    let schema = PropertySchema::mechanical();
    let raw = LayerSet::from_pairs(vec![
        ("case".to_string(), vec![70e9, 2700.0, 100e-6, 0.7]),
        ("cathode".to_string(), vec![200e9, 3300.0, 50e-6, 0.5]),
        ("anode".to_string(), vec![10e9, 2260.0, 60e-6, 0.6]),
    ])
    .unwrap();
    assemble_cell(stack_layers(&schema, &raw, 2).unwrap())
}

#[test]
fn stage_and_reload_solver_inputs() {
    let temp_dir = std::env::temp_dir().join("sc_results_test_stage");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = SimStore::new(temp_dir.clone()).unwrap();

    let properties = SimulationProperties::default();
    store.save_properties(&properties).unwrap();
    let cell = reference_cell();
    store.save_cell(&cell).unwrap();

    assert!(temp_dir.join(PROPERTIES_FILE).exists());
    assert!(temp_dir.join(CELL_FILE).exists());

    let loaded_props = store.load_properties().unwrap();
    assert_eq!(loaded_props, properties);

    let loaded_cell = store.load_cell().unwrap();
    assert_eq!(loaded_cell, cell);

    // staged JSON keeps the solver's capitalized grid key
    let raw = std::fs::read_to_string(store.properties_path()).unwrap();
    assert!(raw.contains("\"Nx\""));
}

#[test]
fn missing_staged_files_are_reported() {
    let temp_dir = std::env::temp_dir().join("sc_results_test_missing");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = SimStore::new(temp_dir).unwrap();
    assert!(!store.has_result());

    assert!(matches!(
        store.load_properties().unwrap_err(),
        ResultsError::MissingFile { .. }
    ));
    assert!(matches!(
        store.load_cell().unwrap_err(),
        ResultsError::MissingFile { .. }
    ));
    assert!(matches!(
        store.load_simulation().unwrap_err(),
        ResultsError::MissingFile { .. }
    ));
}

#[test]
fn dataset_round_trips_through_disk_layout() {
    let temp_dir = std::env::temp_dir().join("sc_results_test_dataset");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = SimStore::new(temp_dir).unwrap();

    // 4 time steps over 3 grid points
    let data = Array2::from_shape_fn((4, 3), |(t, g)| (t * 10 + g) as f32);
    let field = PressureField::from_timesteps_by_grid(data);

    write_pressure_field(&store.dataset_path(), DATASET_NAME, &field).unwrap();
    assert!(store.has_result());

    let loaded = store.load_simulation().unwrap();
    assert_eq!(loaded.timesteps(), 4);
    assert_eq!(loaded.grid_points(), 3);
    assert_eq!(loaded, field);

    // the trace at the last grid point follows time, not space
    assert_eq!(
        loaded.sensor_trace(-1).unwrap(),
        vec![2.0, 12.0, 22.0, 32.0]
    );
}

#[test]
fn unknown_dataset_name_is_reported() {
    let temp_dir = std::env::temp_dir().join("sc_results_test_badname");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = SimStore::new(temp_dir).unwrap();
    let field = PressureField::from_timesteps_by_grid(Array2::zeros((2, 2)));
    write_pressure_field(&store.dataset_path(), DATASET_NAME, &field).unwrap();

    let err = load_pressure_field(&store.dataset_path(), "wrong_name").unwrap_err();
    assert!(matches!(err, ResultsError::MissingDataset { .. }));
    assert!(err.to_string().contains("wrong_name"));
}

#[test]
fn manifest_round_trips() {
    let temp_dir = std::env::temp_dir().join("sc_results_test_manifest");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = SimStore::new(temp_dir).unwrap();

    let manifest = RunManifest {
        run_id: "abc123".to_string(),
        study_id: "study-1".to_string(),
        study_name: "reference cell".to_string(),
        timestamp: "2026-02-25T12:00:00Z".to_string(),
        engine: "matlab (simulate)".to_string(),
        layer_count: 8,
        no_stacks: 2,
        dataset: DATASET_FILE.to_string(),
    };

    store.save_manifest(&manifest).unwrap();
    let loaded = store.load_manifest().unwrap();
    assert_eq!(loaded, manifest);
}
