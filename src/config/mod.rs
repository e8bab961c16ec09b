//! JSON runtime configuration for the `boxcar-converter` binary.
//!
//! ```json
//! {
//!   "input_path": "drawing.png",
//!   "output": { "json_out": "out/report.json", "obj_out": "out/car.obj" },
//!   "params": { "canvas": "mobile" }
//! }
//! ```

use crate::converter::ConverterParams;
use crate::error::{ConvertError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Conversion report as pretty JSON.
    pub json_out: Option<PathBuf>,
    /// Generated mesh as Wavefront OBJ.
    pub obj_out: Option<PathBuf>,
    /// Ink mask as grayscale PNG.
    pub mask_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: ConverterParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    parse_config(&contents).map_err(|reason| ConvertError::Config {
        path: path.to_path_buf(),
        reason,
    })
}

fn parse_config(contents: &str) -> std::result::Result<RuntimeConfig, String> {
    serde_json::from_str(contents).map_err(|e| e.to_string())
}
