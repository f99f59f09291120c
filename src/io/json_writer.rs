use std::path::Path;

use anyhow::{Context, Result};

use crate::schema::v1::ThermoQcV1;

pub fn write_json(path: &Path, report: &ThermoQcV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
