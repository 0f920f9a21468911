pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::errors::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse a JSON payload from disk.
pub fn read_payload(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read input", path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Parse a JSON payload from any reader (e.g. stdin).
pub fn parse_payload<R: std::io::Read>(reader: R) -> Result<Value> {
    Ok(serde_json::from_reader(reader)?)
}
