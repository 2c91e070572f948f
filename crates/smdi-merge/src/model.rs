use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use smdi_core::KEY_COLUMN;

use crate::errors::MergeError;

/// Options for the merge engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Directory holding the generated tables.
    pub data_dir: PathBuf,
    /// Destination of the combined CSV.
    pub output: PathBuf,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output: PathBuf::from("data/smdi_combined.csv"),
        }
    }
}

/// Summary of a merge run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeResult {
    pub output: PathBuf,
    pub rows: u64,
    pub columns: Vec<String>,
}

/// A CSV table held in memory as strings, header order preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows: Vec::new(),
        }
    }

    /// Position of the `material_id` column.
    pub fn key_index(&self) -> Result<usize, MergeError> {
        self.headers
            .iter()
            .position(|header| header == KEY_COLUMN)
            .ok_or_else(|| MergeError::MissingKey {
                table: self.name.clone(),
                column: KEY_COLUMN.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column by name, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|header| header == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).map(String::as_str).unwrap_or_default())
                .collect(),
        )
    }
}
