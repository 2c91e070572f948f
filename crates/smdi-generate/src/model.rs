use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use smdi_core::{EnvironmentalImpact, Material, RegulatoryConfidence, Scenario, SupplyChainRisk};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Rows per per-material table.
    pub rows: usize,
    /// Seed for the run's random generator.
    pub seed: u64,
    /// Directory where the tables are written.
    pub out_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            rows: 90,
            seed: 42,
            out_dir: PathBuf::from("data"),
        }
    }
}

/// The five generated tables, row-aligned on `material_id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub materials: Vec<Material>,
    pub environmental_impact: Vec<EnvironmentalImpact>,
    pub supply_chain_risk: Vec<SupplyChainRisk>,
    pub regulatory_confidence: Vec<RegulatoryConfidence>,
    pub scenarios: Vec<Scenario>,
}

impl Dataset {
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            materials: Vec::with_capacity(rows),
            environmental_impact: Vec::with_capacity(rows),
            supply_chain_risk: Vec::with_capacity(rows),
            regulatory_confidence: Vec::with_capacity(rows),
            scenarios: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Count of materials per category label.
    pub fn category_counts(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for material in &self.materials {
            *counts.entry(material.category.to_string()).or_insert(0) += 1;
        }
        counts
    }
}

/// Summary of a written table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub path: PathBuf,
    pub rows: u64,
    pub bytes: u64,
}

/// Report for a generation run, written next to the tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: String,
    pub seed: u64,
    pub rows_requested: u64,
    pub tables: Vec<TableReport>,
    pub category_counts: BTreeMap<String, u64>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, started_at: String, options: &GenerateOptions) -> Self {
        Self {
            run_id,
            started_at,
            seed: options.seed,
            rows_requested: options.rows as u64,
            tables: Vec::new(),
            category_counts: BTreeMap::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, report: TableReport) {
        self.bytes_written = self.bytes_written.saturating_add(report.bytes);
        self.tables.push(report);
    }
}
