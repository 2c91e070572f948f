use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by the merge engine.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("input table '{table}' not found: {}", path.display())]
    MissingTable { table: String, path: PathBuf },
    #[error("table '{table}' has no '{column}' column")]
    MissingKey { table: String, column: String },
    #[error("column '{column}' appears in both '{left}' and '{right}'")]
    DuplicateColumn {
        column: String,
        left: String,
        right: String,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
