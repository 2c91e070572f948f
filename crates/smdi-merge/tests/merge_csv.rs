use std::fs;
use std::path::PathBuf;

use smdi_generate::{GenerateOptions, GenerationEngine};
use smdi_merge::{MergeEngine, MergeError, MergeOptions};

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("smdi_merge_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn generate_into(dir: &PathBuf, rows: usize) {
    let options = GenerateOptions {
        rows,
        seed: 42,
        out_dir: dir.clone(),
    };
    GenerationEngine::new(options).run().expect("run generation");
}

fn merge(dir: &PathBuf) -> Result<smdi_merge::MergeResult, MergeError> {
    MergeEngine::new(MergeOptions {
        data_dir: dir.clone(),
        output: dir.join("smdi_combined.csv"),
    })
    .run()
}

#[test]
fn merges_generated_tables_one_row_per_material() {
    let dir = temp_dir("generated");
    generate_into(&dir, 30);

    let result = merge(&dir).expect("merge");
    assert_eq!(result.rows, 30);
    // 8 material columns + 6 + 6 + 6 non-key columns.
    assert_eq!(result.columns.len(), 26);
    assert_eq!(
        result.columns.iter().filter(|c| c.as_str() == "material_id").count(),
        1
    );

    let combined = fs::read_to_string(dir.join("smdi_combined.csv")).expect("read combined");
    let mut lines = combined.lines();
    let header = lines.next().expect("header");
    assert!(header.starts_with("material_id,material_name,category"));
    assert!(header.ends_with("audit_frequency_per_year,certification_available"));
    let carbon = header.find("carbon_kgco2e_per_kg").expect("impact column");
    let supplier = header.find("supplier_concentration_index").expect("supply column");
    let pfas = header.find("pfas_regulatory_risk").expect("regulatory column");
    assert!(carbon < supplier && supplier < pfas);
    assert_eq!(lines.count(), 30);
}

#[test]
fn keys_missing_from_any_input_are_dropped() {
    let dir = temp_dir("mismatch");
    generate_into(&dir, 5);

    // Remove M003 from the supply-chain table only.
    let path = dir.join("supply_chain_risk.csv");
    let kept: Vec<String> = fs::read_to_string(&path)
        .expect("read supply")
        .lines()
        .filter(|line| !line.starts_with("M003,"))
        .map(str::to_string)
        .collect();
    fs::write(&path, kept.join("\n") + "\n").expect("rewrite supply");

    let combined = MergeEngine::new(MergeOptions {
        data_dir: dir.clone(),
        output: dir.join("smdi_combined.csv"),
    })
    .combine()
    .expect("combine");

    assert_eq!(
        combined.column("material_id"),
        Some(vec!["M001", "M002", "M004", "M005"])
    );
}

#[test]
fn missing_input_file_names_the_table() {
    let dir = temp_dir("missing");
    generate_into(&dir, 3);
    fs::remove_file(dir.join("regulatory_confidence.csv")).expect("remove table");

    let err = merge(&dir).unwrap_err();
    match err {
        MergeError::MissingTable { table, .. } => assert_eq!(table, "regulatory_confidence"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.join("smdi_combined.csv").exists());
}

#[test]
fn missing_materials_table_fails_before_any_join() {
    let dir = temp_dir("no_materials");
    generate_into(&dir, 3);
    fs::remove_file(dir.join("materials_master.csv")).expect("remove table");

    let err = MergeEngine::new(MergeOptions {
        data_dir: dir.clone(),
        output: dir.join("smdi_combined.csv"),
    })
    .combine()
    .unwrap_err();
    assert!(matches!(err, MergeError::MissingTable { ref table, .. } if table == "materials_master"));
}

#[test]
fn merging_twice_is_idempotent() {
    let dir = temp_dir("twice");
    generate_into(&dir, 10);

    merge(&dir).expect("first merge");
    let first = fs::read(dir.join("smdi_combined.csv")).expect("read first");
    merge(&dir).expect("second merge");
    let second = fs::read(dir.join("smdi_combined.csv")).expect("read second");
    assert_eq!(first, second);
}
