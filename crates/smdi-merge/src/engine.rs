use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use smdi_core::TableName;

use crate::errors::MergeError;
use crate::model::{MergeOptions, MergeResult, Table};
use crate::output::write_combined;

/// Outcome of a single inner join.
#[derive(Debug, Clone)]
pub struct JoinOutcome {
    pub table: Table,
    /// Left rows whose key had no match on the right.
    pub dropped_left: u64,
    /// Right rows whose key had no match on the left.
    pub dropped_right: u64,
}

/// Combines the four per-material tables on `material_id`.
#[derive(Debug, Clone)]
pub struct MergeEngine {
    options: MergeOptions,
}

impl MergeEngine {
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    /// Load, join and write the combined table.
    ///
    /// Keys missing from any input are dropped by the inner join and only
    /// reported in the logs; no referential-integrity check is made.
    pub fn run(&self) -> Result<MergeResult, MergeError> {
        let start = Instant::now();
        info!(data_dir = %self.options.data_dir.display(), "merge started");

        let combined = self.combine()?;
        write_combined(&self.options.output, &combined)?;

        info!(
            output = %self.options.output.display(),
            rows = combined.len(),
            columns = combined.headers.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "merge completed"
        );

        Ok(MergeResult {
            output: self.options.output.clone(),
            rows: combined.len() as u64,
            columns: combined.headers,
        })
    }

    /// Load and join the inputs without writing anything.
    pub fn combine(&self) -> Result<Table, MergeError> {
        let data_dir = &self.options.data_dir;
        let mut combined = load_table(data_dir, TableName::Materials)?;
        let mut tables = Vec::with_capacity(TableName::JOINED.len() - 1);
        for table in &TableName::JOINED[1..] {
            tables.push(load_table(data_dir, *table)?);
        }

        for right in tables {
            let outcome = inner_join(&combined, &right)?;
            info!(
                right = %right.name,
                rows = outcome.table.len(),
                "merge step"
            );
            if outcome.dropped_left > 0 || outcome.dropped_right > 0 {
                warn!(
                    right = %right.name,
                    dropped_left = outcome.dropped_left,
                    dropped_right = outcome.dropped_right,
                    "unmatched material_id rows dropped by inner join"
                );
            }
            combined = outcome.table;
        }

        combined.name = "smdi_combined".to_string();
        Ok(combined)
    }
}

/// Read `<dir>/<table>.csv` into memory.
pub fn load_table(dir: &Path, table: TableName) -> Result<Table, MergeError> {
    let path = dir.join(table.file_name());
    if !path.exists() {
        return Err(MergeError::MissingTable {
            table: table.to_string(),
            path,
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)?;
    let headers = reader
        .headers()?
        .iter()
        .map(|header| header.to_string())
        .collect::<Vec<_>>();

    let mut loaded = Table::new(table.as_str(), headers);
    for record in reader.records() {
        let record = record?;
        loaded
            .rows
            .push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(loaded)
}

/// Relational inner join on `material_id`.
///
/// Output rows follow the left table's order. A key matching several right
/// rows produces one output row per match. The right key column is dropped,
/// leaving a single `material_id` column.
pub fn inner_join(left: &Table, right: &Table) -> Result<JoinOutcome, MergeError> {
    let left_key = left.key_index()?;
    let right_key = right.key_index()?;

    let left_columns: HashSet<&str> = left.headers.iter().map(String::as_str).collect();
    let mut headers = left.headers.clone();
    for (index, header) in right.headers.iter().enumerate() {
        if index == right_key {
            continue;
        }
        if left_columns.contains(header.as_str()) {
            return Err(MergeError::DuplicateColumn {
                column: header.clone(),
                left: left.name.clone(),
                right: right.name.clone(),
            });
        }
        headers.push(header.clone());
    }

    let mut right_by_key: HashMap<&str, Vec<&Vec<String>>> = HashMap::new();
    for row in &right.rows {
        let key = row.get(right_key).map(String::as_str).unwrap_or_default();
        right_by_key.entry(key).or_default().push(row);
    }

    let mut joined = Table::new(format!("{}+{}", left.name, right.name), headers);
    let mut matched_keys = HashSet::new();
    let mut dropped_left = 0_u64;

    for row in &left.rows {
        let key = row.get(left_key).map(String::as_str).unwrap_or_default();
        let Some(matches) = right_by_key.get(key) else {
            dropped_left += 1;
            continue;
        };
        matched_keys.insert(key);
        for right_row in matches {
            let mut combined = row.clone();
            combined.extend(
                right_row
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| *index != right_key)
                    .map(|(_, value)| value.clone()),
            );
            joined.rows.push(combined);
        }
    }

    let dropped_right = right
        .rows
        .iter()
        .filter(|row| {
            let key = row.get(right_key).map(String::as_str).unwrap_or_default();
            !matched_keys.contains(key)
        })
        .count() as u64;

    Ok(JoinOutcome {
        table: joined,
        dropped_left,
        dropped_right,
    })
}
