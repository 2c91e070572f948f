use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use smdi_core::{
    CsvRecord, EnvironmentalImpact, Level, Material, RegulatoryConfidence, Region, SupplyChainRisk,
    TableName, UseCase, scenarios,
};

use crate::errors::GenerationError;
use crate::model::{Dataset, GenerateOptions, GenerationReport, TableReport};
use crate::output::csv::write_table_csv;
use crate::profile::{self, MicroplasticRisk};
use crate::sampler::{chance, choose_uniform, choose_weighted, log_normal, normal, round_dp, truncate_int};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// One material across the four per-material tables.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRow {
    pub material: Material,
    pub impact: EnvironmentalImpact,
    pub supply: SupplyChainRisk,
    pub regulatory: RegulatoryConfidence,
}

/// Entry point for generating the SMDI tables.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Sample every table in memory. Performs no I/O.
    ///
    /// A row count of zero yields empty per-material tables; the scenario
    /// table is always present.
    pub fn generate(&self) -> Result<Dataset, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.options.seed);
        let mut dataset = Dataset::with_capacity(self.options.rows);

        for index in 1..=self.options.rows {
            let row = sample_row(index, &mut rng)?;
            debug!(
                material_id = %row.material.material_id,
                category = %row.material.category,
                "row sampled"
            );
            dataset.materials.push(row.material);
            dataset.environmental_impact.push(row.impact);
            dataset.supply_chain_risk.push(row.supply);
            dataset.regulatory_confidence.push(row.regulatory);
        }
        dataset.scenarios = scenarios();

        Ok(dataset)
    }

    /// Generate and write all five tables plus `generation_report.json`.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        if self.options.out_dir.as_os_str().is_empty() {
            return Err(GenerationError::InvalidOptions(
                "output directory must not be empty".to_string(),
            ));
        }

        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().to_rfc3339();
        let out_dir = self.options.out_dir.clone();
        std::fs::create_dir_all(&out_dir)?;

        info!(
            run_id = %run_id,
            rows = self.options.rows,
            seed = self.options.seed,
            out_dir = %out_dir.display(),
            "generation started"
        );

        let dataset = self.generate()?;
        let mut report = GenerationReport::new(run_id.clone(), started_at, &self.options);
        report.category_counts = dataset.category_counts();

        for table in TableName::ALL {
            let table_report = match table {
                TableName::Materials => write_table(&out_dir, table, &dataset.materials)?,
                TableName::EnvironmentalImpact => {
                    write_table(&out_dir, table, &dataset.environmental_impact)?
                }
                TableName::SupplyChainRisk => {
                    write_table(&out_dir, table, &dataset.supply_chain_risk)?
                }
                TableName::RegulatoryConfidence => {
                    write_table(&out_dir, table, &dataset.regulatory_confidence)?
                }
                TableName::Scenarios => write_table(&out_dir, table, &dataset.scenarios)?,
            };
            report.record_table(table_report);
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        let report_path = out_dir.join("generation_report.json");
        std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;

        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { out_dir, report })
    }
}

fn write_table<T: CsvRecord>(
    out_dir: &Path,
    table: TableName,
    rows: &[T],
) -> Result<TableReport, GenerationError> {
    let path = out_dir.join(table.file_name());
    let bytes = write_table_csv(&path, rows)?;
    info!(table = %table, rows = rows.len(), bytes, path = %path.display(), "table written");
    Ok(TableReport {
        table: table.to_string(),
        path,
        rows: rows.len() as u64,
        bytes,
    })
}

/// Sample the `index`-th material (1-based) and its three dependent records.
///
/// Draws happen in a fixed order so the same generator state always yields
/// the same row.
pub fn sample_row<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Result<MaterialRow, GenerationError> {
    let material_id = Material::id_for(index);

    let category = choose_weighted(profile::CATEGORY_WEIGHTS, rng)?;
    let use_case = choose_uniform(UseCase::ALL, rng)?;
    let primary_region = choose_uniform(Region::ALL, rng)?;
    let tier_level = choose_weighted(profile::TIER_WEIGHTS, rng)?;
    let params = profile::profile(category);

    let recycled_content_pct = clamp_int(
        normal(params.recycled_content.mean, params.recycled_content.sd, rng)?,
        params.recycled_content_bounds,
    );
    let recycled_share = recycled_content_pct as f64;

    let base_name = choose_uniform(params.names, rng)?;
    let qualifier = choose_uniform(profile::QUALIFIERS, rng)?;
    let material_name = format!("{base_name}{qualifier}");

    let carbon = normal(params.carbon.mean, params.carbon.sd, rng)?;
    let water = log_normal(params.water_log.mean, params.water_log.sd, rng)?;
    let energy = normal(params.energy.mean, params.energy.sd, rng)?;
    let land = normal(params.land.mean, params.land.sd, rng)?;
    let microplastic_risk = match params.microplastic {
        MicroplasticRisk::Fixed(level) => level,
        MicroplasticRisk::Weighted(weights) => choose_weighted(weights, rng)?,
    };
    let recyclability = normal(params.recyclability.mean, params.recyclability.sd, rng)?;

    let carbon = carbon * (1.0 - recycled_share / profile::CARBON_RECYCLED_DIVISOR);
    let water = water * (1.0 - recycled_share / profile::WATER_RECYCLED_DIVISOR);

    let impact = EnvironmentalImpact {
        material_id: material_id.clone(),
        carbon_kgco2e_per_kg: round_dp(profile::CARBON_BOUNDS.clamp(carbon), 3),
        water_l_per_kg: round_dp(profile::WATER_BOUNDS.clamp(water), 1),
        energy_mj_per_kg: round_dp(profile::ENERGY_BOUNDS.clamp(energy), 1),
        land_use_m2_per_kg: round_dp(profile::LAND_BOUNDS.clamp(land), 2),
        recyclability_score: round_dp(profile::SCORE_BOUNDS.clamp(recyclability), 1),
        microplastic_risk,
    };

    let concentration = profile::CONCENTRATION_BOUNDS.clamp(normal(
        params.supplier_concentration_base,
        profile::SUPPLIER_CONCENTRATION_SD,
        rng,
    )?);
    let country_risk = profile::SCORE_BOUNDS.clamp(normal(
        profile::region_base_risk(primary_region),
        profile::COUNTRY_RISK_SD,
        rng,
    )?);
    let climate_exposure = profile::SCORE_BOUNDS.clamp(normal(
        params.climate_exposure_mean,
        profile::CLIMATE_EXPOSURE_SD,
        rng,
    )?);
    let price_volatility = profile::SCORE_BOUNDS.clamp(normal(
        params.price_volatility_mean,
        profile::PRICE_VOLATILITY_SD,
        rng,
    )?);
    let lead_time_days = clamp_int(
        normal(profile::lead_time_mean(tier_level), profile::LEAD_TIME_SD, rng)?,
        profile::LEAD_TIME_BOUNDS,
    );

    let [w_concentration, w_country, w_lead] = profile::DISRUPTION_WEIGHTS;
    let disruption = w_concentration * concentration
        + w_country * (country_risk / 100.0)
        + w_lead * (lead_time_days as f64 / 120.0);
    let disruption = profile::DISRUPTION_BOUNDS
        .clamp(disruption + normal(0.0, profile::DISRUPTION_NOISE_SD, rng)?);

    let supply = SupplyChainRisk {
        material_id: material_id.clone(),
        supplier_concentration_index: round_dp(concentration, 3),
        country_risk_score: round_dp(country_risk, 1),
        climate_exposure_score: round_dp(climate_exposure, 1),
        price_volatility_index: round_dp(price_volatility, 1),
        lead_time_days,
        disruption_probability: round_dp(disruption, 3),
    };

    let pfas_regulatory_risk = choose_weighted(params.pfas, rng)?;
    let mut forced_labor_risk = choose_weighted(profile::FORCED_LABOR, rng)?;
    if country_risk > profile::FORCED_LABOR_COUNTRY_THRESHOLD {
        forced_labor_risk = choose_weighted(profile::FORCED_LABOR_ELEVATED, rng)?;
    }
    let disclosure_requirement_level = clamp_int(
        normal(profile::DISCLOSURE.mean, profile::DISCLOSURE.sd, rng)?,
        profile::DISCLOSURE_BOUNDS,
    );
    let data_confidence: Level = choose_weighted(params.data_confidence, rng)?;
    let audit_frequency_per_year = clamp_int(
        normal(profile::audit_mean(data_confidence), profile::AUDIT_SD, rng)?,
        profile::AUDIT_BOUNDS,
    );
    let certification_available =
        params.certification_eligible && chance(profile::CERTIFICATION_PROBABILITY, rng)?;

    let regulatory = RegulatoryConfidence {
        material_id: material_id.clone(),
        pfas_regulatory_risk,
        forced_labor_risk,
        disclosure_requirement_level,
        data_confidence,
        audit_frequency_per_year,
        certification_available,
    };

    let material = Material {
        material_id,
        material_name,
        category,
        use_case,
        primary_region,
        tier_level,
        recycled_content_pct,
        notes: String::new(),
    };

    Ok(MaterialRow {
        material,
        impact,
        supply,
        regulatory,
    })
}

fn clamp_int(value: f64, bounds: profile::Bounds) -> i64 {
    truncate_int(value).clamp(bounds.min as i64, bounds.max as i64)
}
