//! Static distribution parameters, keyed by category, region and tier.

use smdi_core::{Category, Level, Region, Tier};

/// Mean and standard deviation of a normal draw.
///
/// For log-normal fields these are the parameters of the underlying normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalParams {
    pub mean: f64,
    pub sd: f64,
}

/// Inclusive clamp bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MicroplasticRisk {
    Fixed(Level),
    Weighted(&'static [(Level, f64)]),
}

/// Everything the generator conditions on a material's category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProfile {
    pub category: Category,
    pub names: &'static [&'static str],
    pub recycled_content: NormalParams,
    pub recycled_content_bounds: Bounds,
    pub carbon: NormalParams,
    pub water_log: NormalParams,
    pub energy: NormalParams,
    pub land: NormalParams,
    pub recyclability: NormalParams,
    pub microplastic: MicroplasticRisk,
    pub supplier_concentration_base: f64,
    pub climate_exposure_mean: f64,
    pub price_volatility_mean: f64,
    pub pfas: &'static [(Level, f64)],
    pub data_confidence: &'static [(Level, f64)],
    pub certification_eligible: bool,
}

pub const CATEGORY_WEIGHTS: &[(Category, f64)] = &[
    (Category::Natural, 0.30),
    (Category::Synthetic, 0.30),
    (Category::Recycled, 0.25),
    (Category::BioBased, 0.15),
];

pub const TIER_WEIGHTS: &[(Tier, f64)] = &[
    (Tier::Tier1, 0.55),
    (Tier::Tier2, 0.30),
    (Tier::Tier3, 0.15),
];

/// Name suffixes, drawn uniformly; the repeated empty entry gives it majority weight.
pub const QUALIFIERS: &[&str] = &[
    "",
    "",
    "",
    " - Lightweight",
    " - Premium",
    " - High Tenacity",
    " - Low Dye",
];

pub const CARBON_BOUNDS: Bounds = Bounds::new(0.8, 12.0);
pub const WATER_BOUNDS: Bounds = Bounds::new(10.0, 30_000.0);
pub const ENERGY_BOUNDS: Bounds = Bounds::new(20.0, 140.0);
pub const LAND_BOUNDS: Bounds = Bounds::new(0.2, 15.0);
pub const SCORE_BOUNDS: Bounds = Bounds::new(0.0, 100.0);
pub const CONCENTRATION_BOUNDS: Bounds = Bounds::new(0.05, 0.95);
pub const LEAD_TIME_BOUNDS: Bounds = Bounds::new(7.0, 120.0);
pub const DISRUPTION_BOUNDS: Bounds = Bounds::new(0.01, 0.95);
pub const DISCLOSURE_BOUNDS: Bounds = Bounds::new(1.0, 5.0);
pub const AUDIT_BOUNDS: Bounds = Bounds::new(0.0, 12.0);

/// Divisors for the recycled-content discount on carbon and water.
pub const CARBON_RECYCLED_DIVISOR: f64 = 400.0;
pub const WATER_RECYCLED_DIVISOR: f64 = 800.0;

pub const SUPPLIER_CONCENTRATION_SD: f64 = 0.12;
pub const COUNTRY_RISK_SD: f64 = 10.0;
pub const CLIMATE_EXPOSURE_SD: f64 = 15.0;
pub const PRICE_VOLATILITY_SD: f64 = 15.0;
pub const LEAD_TIME_SD: f64 = 10.0;

/// Disruption weights for concentration, country risk and lead time.
pub const DISRUPTION_WEIGHTS: [f64; 3] = [0.45, 0.35, 0.20];
pub const DISRUPTION_NOISE_SD: f64 = 0.05;

pub const FORCED_LABOR: &[(Level, f64)] = &[
    (Level::Low, 0.55),
    (Level::Medium, 0.30),
    (Level::High, 0.15),
];
pub const FORCED_LABOR_ELEVATED: &[(Level, f64)] = &[
    (Level::Low, 0.35),
    (Level::Medium, 0.40),
    (Level::High, 0.25),
];
/// Country risk above which forced-labor risk is re-drawn from the elevated table.
pub const FORCED_LABOR_COUNTRY_THRESHOLD: f64 = 60.0;

pub const DISCLOSURE: NormalParams = NormalParams { mean: 3.0, sd: 1.0 };
pub const AUDIT_SD: f64 = 1.5;
pub const CERTIFICATION_PROBABILITY: f64 = 0.55;

const PFAS_HIGH: &[(Level, f64)] = &[
    (Level::Low, 0.25),
    (Level::Medium, 0.55),
    (Level::High, 0.20),
];
const PFAS_LOW: &[(Level, f64)] = &[
    (Level::Low, 0.65),
    (Level::Medium, 0.30),
    (Level::High, 0.05),
];
const CONFIDENCE_MIXED: &[(Level, f64)] = &[
    (Level::Low, 0.25),
    (Level::Medium, 0.50),
    (Level::High, 0.25),
];

static NATURAL: CategoryProfile = CategoryProfile {
    category: Category::Natural,
    names: &["Cotton", "Wool", "Leather", "Linen", "Hemp"],
    recycled_content: NormalParams { mean: 2.0, sd: 4.0 },
    recycled_content_bounds: Bounds::new(0.0, 15.0),
    carbon: NormalParams { mean: 5.0, sd: 1.2 },
    water_log: NormalParams { mean: 9.0, sd: 0.35 },
    energy: NormalParams { mean: 60.0, sd: 15.0 },
    land: NormalParams { mean: 8.0, sd: 2.0 },
    recyclability: NormalParams { mean: 45.0, sd: 15.0 },
    microplastic: MicroplasticRisk::Fixed(Level::Low),
    supplier_concentration_base: 0.45,
    climate_exposure_mean: 50.0,
    price_volatility_mean: 65.0,
    pfas: PFAS_LOW,
    data_confidence: &[(Level::Low, 0.10), (Level::Medium, 0.35), (Level::High, 0.55)],
    certification_eligible: true,
};

static SYNTHETIC: CategoryProfile = CategoryProfile {
    category: Category::Synthetic,
    names: &["Polyester", "Nylon", "Elastane", "EVA", "TPU"],
    recycled_content: NormalParams { mean: 2.0, sd: 4.0 },
    recycled_content_bounds: Bounds::new(0.0, 15.0),
    carbon: NormalParams { mean: 6.0, sd: 1.5 },
    water_log: NormalParams { mean: 4.0, sd: 0.35 },
    energy: NormalParams { mean: 85.0, sd: 18.0 },
    land: NormalParams { mean: 2.5, sd: 1.0 },
    recyclability: NormalParams { mean: 55.0, sd: 15.0 },
    microplastic: MicroplasticRisk::Weighted(&[
        (Level::Low, 0.15),
        (Level::Medium, 0.55),
        (Level::High, 0.30),
    ]),
    supplier_concentration_base: 0.55,
    climate_exposure_mean: 40.0,
    price_volatility_mean: 55.0,
    pfas: PFAS_HIGH,
    data_confidence: CONFIDENCE_MIXED,
    certification_eligible: false,
};

static RECYCLED: CategoryProfile = CategoryProfile {
    category: Category::Recycled,
    names: &["Recycled Polyester", "Recycled Nylon", "Recycled TPU", "rPET"],
    recycled_content: NormalParams { mean: 70.0, sd: 20.0 },
    recycled_content_bounds: Bounds::new(20.0, 100.0),
    carbon: NormalParams { mean: 3.0, sd: 0.9 },
    water_log: NormalParams { mean: 3.5, sd: 0.30 },
    energy: NormalParams { mean: 70.0, sd: 15.0 },
    land: NormalParams { mean: 1.8, sd: 0.8 },
    recyclability: NormalParams { mean: 70.0, sd: 12.0 },
    microplastic: MicroplasticRisk::Weighted(&[
        (Level::Low, 0.10),
        (Level::Medium, 0.55),
        (Level::High, 0.35),
    ]),
    supplier_concentration_base: 0.60,
    climate_exposure_mean: 40.0,
    price_volatility_mean: 55.0,
    pfas: PFAS_HIGH,
    data_confidence: &[(Level::Low, 0.45), (Level::Medium, 0.40), (Level::High, 0.15)],
    certification_eligible: false,
};

static BIO_BASED: CategoryProfile = CategoryProfile {
    category: Category::BioBased,
    names: &["Bio-EVA", "PLA", "Bio-TPU", "Castor-based Nylon"],
    recycled_content: NormalParams { mean: 10.0, sd: 10.0 },
    recycled_content_bounds: Bounds::new(0.0, 40.0),
    carbon: NormalParams { mean: 3.8, sd: 1.0 },
    water_log: NormalParams { mean: 4.7, sd: 0.35 },
    energy: NormalParams { mean: 75.0, sd: 15.0 },
    land: NormalParams { mean: 4.5, sd: 1.5 },
    recyclability: NormalParams { mean: 60.0, sd: 15.0 },
    microplastic: MicroplasticRisk::Weighted(&[
        (Level::Low, 0.25),
        (Level::Medium, 0.55),
        (Level::High, 0.20),
    ]),
    supplier_concentration_base: 0.70,
    climate_exposure_mean: 40.0,
    price_volatility_mean: 65.0,
    pfas: PFAS_LOW,
    data_confidence: CONFIDENCE_MIXED,
    certification_eligible: true,
};

pub fn profile(category: Category) -> &'static CategoryProfile {
    match category {
        Category::Natural => &NATURAL,
        Category::Synthetic => &SYNTHETIC,
        Category::Recycled => &RECYCLED,
        Category::BioBased => &BIO_BASED,
    }
}

/// Mean country risk score for a sourcing region.
pub fn region_base_risk(region: Region) -> f64 {
    match region {
        Region::Usa => 20.0,
        Region::Italy => 25.0,
        Region::Mexico => 35.0,
        Region::Turkey => 45.0,
        Region::Brazil => 40.0,
        Region::Vietnam => 50.0,
        Region::Thailand => 45.0,
        Region::China => 55.0,
        Region::India => 55.0,
        Region::Indonesia => 60.0,
    }
}

/// Mean lead time in days; Tier 3 sources sit further upstream.
pub fn lead_time_mean(tier: Tier) -> f64 {
    match tier {
        Tier::Tier3 => 45.0,
        Tier::Tier1 | Tier::Tier2 => 30.0,
    }
}

/// Mean audits per year, raised when data confidence is low.
pub fn audit_mean(confidence: Level) -> f64 {
    match confidence {
        Level::Low => 3.0,
        Level::Medium | Level::High => 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_matching_profile() {
        for category in Category::ALL {
            let profile = profile(*category);
            assert_eq!(profile.category, *category);
            assert!(!profile.names.is_empty());
            assert!(profile.recycled_content_bounds.min <= profile.recycled_content_bounds.max);
        }
    }

    #[test]
    fn natural_microplastic_risk_is_fixed_low() {
        assert_eq!(
            profile(Category::Natural).microplastic,
            MicroplasticRisk::Fixed(Level::Low)
        );
    }

    #[test]
    fn weight_tables_are_normalized() {
        let tables: [&[(Level, f64)]; 4] = [PFAS_HIGH, PFAS_LOW, FORCED_LABOR, FORCED_LABOR_ELEVATED];
        for table in tables {
            let total: f64 = table.iter().map(|(_, w)| w).sum();
            assert!((total - 1.0).abs() < 1e-9);
        }
        let total: f64 = CATEGORY_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn region_table_covers_every_region() {
        let riskiest = Region::ALL
            .iter()
            .copied()
            .max_by(|a, b| region_base_risk(*a).total_cmp(&region_base_risk(*b)));
        assert_eq!(riskiest, Some(Region::Indonesia));
        assert_eq!(region_base_risk(Region::Usa), 20.0);
    }
}
