use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use smdi_core::CsvRecord;

/// Write a table as CSV: header row first, no index column.
///
/// Returns the number of bytes written.
pub fn write_table_csv<T: CsvRecord>(path: &Path, rows: &[T]) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(T::COLUMNS)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

/// Passes writes through while tallying bytes for the run report.
struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smdi_core::scenarios;

    #[test]
    fn writes_header_then_rows() {
        let path = std::env::temp_dir().join(format!("smdi_scenarios_{}.csv", uuid::Uuid::new_v4()));
        let bytes = write_table_csv(&path, &scenarios()).expect("write scenarios");
        let contents = std::fs::read_to_string(&path).expect("read scenarios");
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(
            lines[0],
            "scenario,microplastics_penalty_factor,pfas_penalty_factor,country_risk_multiplier"
        );
        assert_eq!(lines[3], "Geo_Tension_Spike,1.00,1.00,1.15");
        assert_eq!(lines.len(), 4);
        assert_eq!(bytes, contents.len() as u64);
        let _ = std::fs::remove_file(&path);
    }
}
