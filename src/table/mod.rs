//! Plate-reading table model.
//!
//! A parsed thermostability CSV follows a fixed layout: the eight rows at
//! indices 4..=11 hold plate rows A-H, column 0 of each holds the temperature
//! in degrees C, and columns 2..=4 hold the triplicate measurements. Rows and
//! columns outside that block are opaque and carried through untouched.

/// First table row of the measurement block (plate row A).
pub const BLOCK_START: usize = 4;
/// Number of plate rows in the block (A-H).
pub const BLOCK_ROWS: usize = 8;
/// First table column holding a replicate measurement.
pub const MEAS_START: usize = 2;
/// Replicate measurements per plate row.
pub const MEAS_COLS: usize = 3;
/// Table column holding the independent variable (temperature, degrees C).
pub const TEMP_COL: usize = 0;

/// Minimum row count for the fixed block to exist.
pub const MIN_ROWS: usize = BLOCK_START + BLOCK_ROWS;

/// A parsed CSV table. Cells are kept as the exact strings the parser
/// produced; empty cells are empty strings, not omissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAssayTable {
    rows: Vec<Vec<String>>,
}

impl RawAssayTable {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (row, col), or `None` when the row is too short.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }

    /// Replicate cell for a block row (0-based A-H) and replicate index 0..3.
    pub fn measurement(&self, block_row: usize, replicate: usize) -> Cell<'_> {
        Cell::new(self.cell(BLOCK_START + block_row, MEAS_START + replicate))
    }
}

/// Plate letter for a 0-based block row (0 => 'A', 7 => 'H').
pub fn plate_letter(block_row: usize) -> char {
    (b'A' + block_row as u8) as char
}

/// A measurement cell: the raw string plus an on-demand numeric view.
///
/// The raw text is authoritative. Parsing happens only when statistics need a
/// number, so pass-through cells keep their exact original formatting.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    raw: Option<&'a str>,
}

impl<'a> Cell<'a> {
    /// Wrap a cell that may be missing entirely (row shorter than the layout).
    pub fn new(raw: Option<&'a str>) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> Option<&'a str> {
        self.raw
    }

    /// True when the cell is missing or the empty string.
    pub fn is_empty(&self) -> bool {
        self.raw.map_or(true, str::is_empty)
    }

    /// Finite numeric value, or `None` for missing/unparseable cells.
    pub fn numeric(&self) -> Option<f64> {
        let raw = self.raw?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }
}
