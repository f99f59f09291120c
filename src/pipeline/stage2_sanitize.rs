use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::sanitize;

pub struct Stage2Sanitize;

impl Stage2Sanitize {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Sanitize {
    fn name(&self) -> &'static str {
        "stage2_sanitize"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = ctx.table.as_ref().context("input table missing")?;
        let result = sanitize::sanitize(table)?;
        let rewrites = sanitize::block_rewrites(table, &result.table);

        info!(
            messages = result.messages.len(),
            zeroed = rewrites.zeroed,
            rejected = rewrites.rejected,
            "sanitization_done"
        );

        ctx.cells_zeroed = rewrites.zeroed;
        ctx.cells_rejected = rewrites.rejected;
        ctx.report.cells_zeroed = rewrites.zeroed as u64;
        ctx.report.cells_rejected = rewrites.rejected as u64;
        ctx.report.messages = result.messages.clone();
        ctx.result = Some(result);
        Ok(())
    }
}
