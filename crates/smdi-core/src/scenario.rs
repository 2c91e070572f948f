use serde::Serialize;

use crate::records::{CsvRecord, fixed};

/// Named multiplier profile applied by downstream risk scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub scenario: &'static str,
    pub microplastics_penalty_factor: f64,
    pub pfas_penalty_factor: f64,
    pub country_risk_multiplier: f64,
}

const SCENARIOS: [Scenario; 3] = [
    Scenario {
        scenario: "Baseline",
        microplastics_penalty_factor: 1.00,
        pfas_penalty_factor: 1.00,
        country_risk_multiplier: 1.00,
    },
    Scenario {
        scenario: "Microplastics_Ban_On",
        microplastics_penalty_factor: 1.25,
        pfas_penalty_factor: 1.00,
        country_risk_multiplier: 1.00,
    },
    Scenario {
        scenario: "Geo_Tension_Spike",
        microplastics_penalty_factor: 1.00,
        pfas_penalty_factor: 1.00,
        country_risk_multiplier: 1.15,
    },
];

/// The fixed scenario lookup table. Never sampled.
pub fn scenarios() -> Vec<Scenario> {
    SCENARIOS.to_vec()
}

impl CsvRecord for Scenario {
    const COLUMNS: &'static [&'static str] = &[
        "scenario",
        "microplastics_penalty_factor",
        "pfas_penalty_factor",
        "country_risk_multiplier",
    ];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.scenario.to_string(),
            fixed(self.microplastics_penalty_factor, 2),
            fixed(self.pfas_penalty_factor, 2),
            fixed(self.country_risk_multiplier, 2),
        ]
    }
}
