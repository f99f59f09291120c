//! Assay-table sanitization.
//!
//! `sanitize` runs four screening stages over the fixed 8x3 measurement block
//! of a plate-reading table and returns a cleaned copy together with every
//! diagnostic raised, in stage order: empty-row check, negative-value check,
//! MAD outlier check, then per-row precision/monotonicity checks A through H.
//! Cells outside the block are never touched, and unparseable cells inside the
//! block pass through unchanged.

use crate::math::stats;
use crate::table::{
    plate_letter, Cell, RawAssayTable, BLOCK_ROWS, BLOCK_START, MEAS_COLS, MEAS_START, MIN_ROWS,
};

/// Relative-SD percentage above which a replicate row counts as noisy.
pub const RELATIVE_SD_THRESHOLD: f64 = 20.0;
/// Outlier bounds are `median +/- MAD_FACTOR * MAD`.
pub const MAD_FACTOR: f64 = 3.0;

pub const MSG_EMPTY_ROW: &str =
    "Warning: Data is missing at least one entire row. Please ensure all required data is included.";
pub const MSG_NEGATIVE: &str = "Negative values were detected and converted to zero";
pub const MSG_OUTLIER: &str = "Outliers were detected and removed using the MAD method";

/// Input table too short to contain the fixed measurement block.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("table has {rows} rows; at least {MIN_ROWS} are required to locate the measurement block")]
pub struct InvalidTableShape {
    pub rows: usize,
}

/// Cleaned table plus every diagnostic raised, in detection order.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizationResult {
    pub table: RawAssayTable,
    pub messages: Vec<String>,
}

/// Sanitize a plate-reading table.
///
/// Pure: the input is not modified, and repeated calls on the same input
/// produce identical results.
pub fn sanitize(input: &RawAssayTable) -> Result<SanitizationResult, InvalidTableShape> {
    if input.n_rows() < MIN_ROWS {
        return Err(InvalidTableShape {
            rows: input.n_rows(),
        });
    }

    let mut rows = input.rows().to_vec();
    let mut messages = Vec::new();

    if has_empty_block_row(&rows) {
        messages.push(MSG_EMPTY_ROW.to_string());
    }
    if neutralize_negatives(&mut rows) {
        messages.push(MSG_NEGATIVE.to_string());
    }
    if reject_outliers(&mut rows) {
        messages.push(MSG_OUTLIER.to_string());
    }
    row_diagnostics(&rows, &mut messages);

    Ok(SanitizationResult {
        table: RawAssayTable::from_rows(rows),
        messages,
    })
}

fn block_cell<'a>(rows: &'a [Vec<String>], block_row: usize, replicate: usize) -> Cell<'a> {
    Cell::new(
        rows.get(BLOCK_START + block_row)
            .and_then(|r| r.get(MEAS_START + replicate))
            .map(String::as_str),
    )
}

/// Valid replicate values of one block row, with their replicate indices.
fn row_values(rows: &[Vec<String>], block_row: usize) -> Vec<(usize, f64)> {
    (0..MEAS_COLS)
        .filter_map(|rep| block_cell(rows, block_row, rep).numeric().map(|v| (rep, v)))
        .collect()
}

/// Stage 1: true when some block row has all replicate cells missing or empty.
fn has_empty_block_row(rows: &[Vec<String>]) -> bool {
    (0..BLOCK_ROWS)
        .any(|row| (0..MEAS_COLS).all(|rep| block_cell(rows, row, rep).is_empty()))
}

/// Stage 2: clamp negative readings to zero, keeping exponent formatting.
/// Returns true when at least one cell was rewritten.
fn neutralize_negatives(rows: &mut [Vec<String>]) -> bool {
    let mut changed = false;
    for row in 0..BLOCK_ROWS {
        for rep in 0..MEAS_COLS {
            let cell = block_cell(rows, row, rep);
            let (Some(raw), Some(v)) = (cell.raw(), cell.numeric()) else {
                continue;
            };
            if v < 0.0 {
                let replacement = if raw.contains('E') || raw.contains('e') {
                    "0.00E+00"
                } else {
                    "0"
                };
                rows[BLOCK_START + row][MEAS_START + rep] = replacement.to_string();
                changed = true;
            }
        }
    }
    changed
}

/// Stage 3: per-row MAD screening. A row is only screened when it has at
/// least two valid values and a finite relative SD above the threshold;
/// values outside `median +/- 3*MAD` are blanked. Returns true when any cell
/// was rejected.
fn reject_outliers(rows: &mut [Vec<String>]) -> bool {
    let mut rejected = false;
    for row in 0..BLOCK_ROWS {
        let values = row_values(rows, row);
        if values.len() < 2 {
            continue;
        }
        let nums: Vec<f64> = values.iter().map(|&(_, v)| v).collect();
        let rel = stats::relative_sd_pct(&nums);
        if !rel.is_finite() || rel <= RELATIVE_SD_THRESHOLD {
            continue;
        }

        let mut scratch = nums.clone();
        let median = stats::lower_median(&mut scratch);
        let mut scratch = nums.clone();
        let mad = stats::mad_lower(&mut scratch, median);
        let lo = median - MAD_FACTOR * mad;
        let hi = median + MAD_FACTOR * mad;

        for &(rep, v) in &values {
            if v < lo || v > hi {
                rows[BLOCK_START + row][MEAS_START + rep] = String::new();
                rejected = true;
            }
        }
    }
    rejected
}

/// Stage 4: per-row precision and monotonicity diagnostics, A through H, on
/// the post-screening values.
///
/// The monotonicity comparison direction (`cur_mean + cur_sd <
/// prev_mean - prev_sd`) is inherited from the upstream tool verbatim, even
/// though it reads opposite to the message wording. Callers downstream key on
/// the exact message text, so neither may be corrected here.
fn row_diagnostics(rows: &[Vec<String>], messages: &mut Vec<String>) {
    // No previous row before A, so the first valid row never triggers the
    // monotonicity check.
    let mut prev: Option<(f64, f64)> = None;

    for row in 0..BLOCK_ROWS {
        let values = row_values(rows, row);
        if values.is_empty() {
            continue;
        }
        let letter = plate_letter(row);
        let nums: Vec<f64> = values.iter().map(|&(_, v)| v).collect();
        let m = stats::mean(&nums);
        let sd = stats::sample_sd(&nums);
        let rel = stats::relative_sd_pct(&nums);

        if rel.is_finite() && rel > RELATIVE_SD_THRESHOLD {
            messages.push(format!(
                "Warning: Row {} has poor precision (relative SD: {:.1}%)",
                letter, rel
            ));
        }

        if let Some((prev_mean, prev_sd)) = prev {
            if m + sd < prev_mean - prev_sd {
                messages.push(format!(
                    "Error: Row {} shows unexpected increase in activity at higher temperature. \
                     This may be due to noise in the measurements.",
                    letter
                ));
            }
        }
        prev = Some((m, sd));
    }
}

/// Block cells rewritten by sanitization, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockRewrites {
    pub zeroed: usize,
    pub rejected: usize,
}

/// Count rewrites by diffing the measurement blocks of input and output.
pub fn block_rewrites(input: &RawAssayTable, output: &RawAssayTable) -> BlockRewrites {
    let mut counts = BlockRewrites::default();
    for row in 0..BLOCK_ROWS {
        for rep in 0..MEAS_COLS {
            let before = input.measurement(row, rep);
            let after = output.measurement(row, rep);
            if before.raw() == after.raw() {
                continue;
            }
            match after.raw() {
                Some("0") | Some("0.00E+00") => counts.zeroed += 1,
                Some("") => counts.rejected += 1,
                _ => {}
            }
        }
    }
    counts
}
