//! Joins the generated per-material tables into one combined table.

pub mod engine;
pub mod errors;
pub mod model;
pub mod output;

pub use engine::{JoinOutcome, MergeEngine, inner_join, load_table};
pub use errors::MergeError;
pub use model::{MergeOptions, MergeResult, Table};
