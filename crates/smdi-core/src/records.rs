use serde::{Deserialize, Serialize};

use crate::types::{Category, Level, Region, Tier, UseCase};

/// A row that can be written as one CSV record under a fixed header.
pub trait CsvRecord {
    /// Header names in output order.
    const COLUMNS: &'static [&'static str];

    /// Field values formatted for output, aligned with [`CsvRecord::COLUMNS`].
    fn to_record(&self) -> Vec<String>;
}

/// Format a float at a fixed number of decimal places.
pub fn fixed(value: f64, scale: usize) -> String {
    format!("{value:.scale$}")
}

/// Master record for one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub material_id: String,
    pub material_name: String,
    pub category: Category,
    pub use_case: UseCase,
    pub primary_region: Region,
    pub tier_level: Tier,
    pub recycled_content_pct: i64,
    pub notes: String,
}

impl Material {
    /// Identifier for the `index`-th material (1-based), e.g. `M007`.
    pub fn id_for(index: usize) -> String {
        format!("M{index:03}")
    }
}

impl CsvRecord for Material {
    const COLUMNS: &'static [&'static str] = &[
        "material_id",
        "material_name",
        "category",
        "use_case",
        "primary_region",
        "tier_level",
        "recycled_content_pct",
        "notes",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.material_id.clone(),
            self.material_name.clone(),
            self.category.to_string(),
            self.use_case.to_string(),
            self.primary_region.to_string(),
            self.tier_level.to_string(),
            self.recycled_content_pct.to_string(),
            self.notes.clone(),
        ]
    }
}

/// Environmental footprint per kilogram of material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    pub material_id: String,
    pub carbon_kgco2e_per_kg: f64,
    pub water_l_per_kg: f64,
    pub energy_mj_per_kg: f64,
    pub land_use_m2_per_kg: f64,
    pub recyclability_score: f64,
    pub microplastic_risk: Level,
}

impl CsvRecord for EnvironmentalImpact {
    const COLUMNS: &'static [&'static str] = &[
        "material_id",
        "carbon_kgco2e_per_kg",
        "water_l_per_kg",
        "energy_mj_per_kg",
        "land_use_m2_per_kg",
        "recyclability_score",
        "microplastic_risk",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.material_id.clone(),
            fixed(self.carbon_kgco2e_per_kg, 3),
            fixed(self.water_l_per_kg, 1),
            fixed(self.energy_mj_per_kg, 1),
            fixed(self.land_use_m2_per_kg, 2),
            fixed(self.recyclability_score, 1),
            self.microplastic_risk.to_string(),
        ]
    }
}

/// Sourcing risk indicators for one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChainRisk {
    pub material_id: String,
    pub supplier_concentration_index: f64,
    pub country_risk_score: f64,
    pub climate_exposure_score: f64,
    pub price_volatility_index: f64,
    pub lead_time_days: i64,
    pub disruption_probability: f64,
}

impl CsvRecord for SupplyChainRisk {
    const COLUMNS: &'static [&'static str] = &[
        "material_id",
        "supplier_concentration_index",
        "country_risk_score",
        "climate_exposure_score",
        "price_volatility_index",
        "lead_time_days",
        "disruption_probability",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.material_id.clone(),
            fixed(self.supplier_concentration_index, 3),
            fixed(self.country_risk_score, 1),
            fixed(self.climate_exposure_score, 1),
            fixed(self.price_volatility_index, 1),
            self.lead_time_days.to_string(),
            fixed(self.disruption_probability, 3),
        ]
    }
}

/// Regulatory exposure and data-quality metadata for one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryConfidence {
    pub material_id: String,
    pub pfas_regulatory_risk: Level,
    pub forced_labor_risk: Level,
    pub disclosure_requirement_level: i64,
    pub data_confidence: Level,
    pub audit_frequency_per_year: i64,
    pub certification_available: bool,
}

impl CsvRecord for RegulatoryConfidence {
    const COLUMNS: &'static [&'static str] = &[
        "material_id",
        "pfas_regulatory_risk",
        "forced_labor_risk",
        "disclosure_requirement_level",
        "data_confidence",
        "audit_frequency_per_year",
        "certification_available",
    ];

    fn to_record(&self) -> Vec<String> {
        let certification = if self.certification_available { "Y" } else { "N" };
        vec![
            self.material_id.clone(),
            self.pfas_regulatory_risk.to_string(),
            self.forced_labor_risk.to_string(),
            self.disclosure_requirement_level.to_string(),
            self.data_confidence.to_string(),
            self.audit_frequency_per_year.to_string(),
            certification.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_ids_are_zero_padded() {
        assert_eq!(Material::id_for(1), "M001");
        assert_eq!(Material::id_for(42), "M042");
        assert_eq!(Material::id_for(1234), "M1234");
    }

    #[test]
    fn impact_record_uses_documented_precision() {
        let impact = EnvironmentalImpact {
            material_id: "M001".to_string(),
            carbon_kgco2e_per_kg: 4.5,
            water_l_per_kg: 8103.08,
            energy_mj_per_kg: 60.0,
            land_use_m2_per_kg: 7.9,
            recyclability_score: 45.26,
            microplastic_risk: Level::Low,
        };
        assert_eq!(
            impact.to_record(),
            ["M001", "4.500", "8103.1", "60.0", "7.90", "45.3", "Low"]
        );
        assert_eq!(impact.to_record().len(), EnvironmentalImpact::COLUMNS.len());
    }

    #[test]
    fn certification_flag_is_written_as_y_or_n() {
        let mut reg = RegulatoryConfidence {
            material_id: "M002".to_string(),
            pfas_regulatory_risk: Level::Medium,
            forced_labor_risk: Level::Low,
            disclosure_requirement_level: 3,
            data_confidence: Level::High,
            audit_frequency_per_year: 2,
            certification_available: true,
        };
        assert_eq!(reg.to_record()[6], "Y");
        reg.certification_available = false;
        assert_eq!(reg.to_record()[6], "N");
    }
}
