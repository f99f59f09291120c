use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{csv, json_writer};
use crate::pipeline::Stage;

pub struct Stage3Output;

impl Stage3Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Output {
    fn name(&self) -> &'static str {
        "stage3_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let result = ctx.result.as_ref().context("sanitization result missing")?;

        csv::write_table(&ctx.output.csv_path, &result.table)?;
        info!(csv = %ctx.output.csv_path.display(), "sanitized_csv_written");

        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, &ctx.report)?;
            info!(json = %ctx.output.json_path.display(), "report_written");
        }
        Ok(())
    }
}
