use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub rows: Option<u64>,
    pub block_rows: u64,
    pub replicates: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThermoQcV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub messages: Vec<String>,
    pub cells_zeroed: u64,
    pub cells_rejected: u64,
}

impl ThermoQcV1 {
    pub fn empty(tool_version: &str) -> Self {
        Self {
            tool: "thermoqc".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                rows: None,
                block_rows: crate::table::BLOCK_ROWS as u64,
                replicates: crate::table::MEAS_COLS as u64,
            },
            messages: Vec::new(),
            cells_zeroed: 0,
            cells_rejected: 0,
        }
    }
}
