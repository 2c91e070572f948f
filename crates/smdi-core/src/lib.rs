//! Core contracts for the SMDI synthetic materials dataset.
//!
//! This crate defines the fixed enumerations, the per-material record types,
//! the static scenario lookup, and the CSV row contract shared by the
//! generator and the merger.

pub mod error;
pub mod records;
pub mod scenario;
pub mod table;
pub mod types;

pub use error::{Error, Result};
pub use records::{CsvRecord, EnvironmentalImpact, Material, RegulatoryConfidence, SupplyChainRisk};
pub use scenario::{Scenario, scenarios};
pub use table::{KEY_COLUMN, TableName};
pub use types::{Category, Level, Region, Tier, UseCase};
