use std::path::Path;

use crate::errors::MergeError;
use crate::model::Table;

/// Write a table as CSV with a header row and no index column.
pub fn write_combined(path: &Path, table: &Table) -> Result<(), MergeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
