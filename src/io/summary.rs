use anyhow::Result;

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let rows = ctx.report.input_meta.rows.unwrap_or(0);
    let result = ctx
        .result
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("sanitization result missing"))?;

    let mut out = String::new();
    out.push_str(&format!("thermoqc v{}\n", version));
    out.push_str(&format!(
        "Input: {} rows, {} block rows x {} replicates\n",
        rows,
        crate::table::BLOCK_ROWS,
        crate::table::MEAS_COLS
    ));
    out.push_str(&format!(
        "Rewrites: {} zeroed, {} rejected\n",
        ctx.cells_zeroed, ctx.cells_rejected
    ));
    if result.messages.is_empty() {
        out.push_str("Messages: none\n");
    } else {
        out.push_str(&format!("Messages: {}\n", result.messages.len()));
    }
    Ok(out)
}
