//! Seeded synthetic data generation for the SMDI materials dataset.
//!
//! A single explicit `ChaCha8Rng` drives every draw, so a given row count and
//! seed always produce the same five tables.

pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod profile;
pub mod sampler;

pub use engine::{GenerationEngine, GenerationResult, MaterialRow, sample_row};
pub use errors::GenerationError;
pub use model::{Dataset, GenerateOptions, GenerationReport, TableReport};
