use anyhow::{bail, Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::csv;
use crate::pipeline::Stage;
use crate::table::MIN_ROWS;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = csv::read_table(&ctx.input)
            .with_context(|| format!("failed to read {}", ctx.input.display()))?;
        if table.n_rows() < MIN_ROWS {
            bail!(
                "{}: table has {} rows; at least {} are required",
                ctx.input.display(),
                table.n_rows(),
                MIN_ROWS
            );
        }

        info!(input = %ctx.input.display(), rows = table.n_rows(), "input_loaded");
        ctx.report.input_meta.rows = Some(table.n_rows() as u64);
        ctx.table = Some(table);
        Ok(())
    }
}
