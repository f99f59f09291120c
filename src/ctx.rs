use std::path::PathBuf;

use crate::sanitize::SanitizationResult;
use crate::schema::v1::ThermoQcV1;
use crate::table::RawAssayTable;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub write_json: bool,
    pub table: Option<RawAssayTable>,
    pub result: Option<SanitizationResult>,
    pub cells_zeroed: usize,
    pub cells_rejected: usize,
    pub output: OutputPaths,
    pub report: ThermoQcV1,
}

impl Ctx {
    pub fn new(input: PathBuf, out_dir: PathBuf, write_json: bool, tool_version: &str) -> Self {
        let csv_path = out_dir.join("sanitized.csv");
        let json_path = out_dir.join("thermoqc.json");
        let report = ThermoQcV1::empty(tool_version);
        Self {
            input,
            write_json,
            table: None,
            result: None,
            cells_zeroed: 0,
            cells_rejected: 0,
            output: OutputPaths {
                out_dir,
                csv_path,
                json_path,
            },
            report,
        }
    }
}
