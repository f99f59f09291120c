//! CSV reading and writing for plate tables.
//!
//! Records are read without header interpretation and with flexible lengths;
//! empty fields come through as empty strings so the fixed block layout stays
//! addressable by index.

use std::path::Path;

use anyhow::{Context, Result};

use crate::table::RawAssayTable;

pub fn read_table(path: &Path) -> Result<RawAssayTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("failed to parse CSV record in {}", path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(RawAssayTable::from_rows(rows))
}

pub fn write_table(path: &Path, table: &RawAssayTable) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
