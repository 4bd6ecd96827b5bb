use crate::utils::MrzError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub capture: CaptureConfig,
    pub parser: ParserConfig,
    pub fill: FillConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Buffered characters required before a scan is parsed.
    pub min_scan_length: usize,
    /// A longer pause between keys means a person typing, not a scanner.
    pub gap_threshold_ms: u64,
    /// Idle time after the last key before the buffer is finalized.
    pub finalize_delay_ms: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        CaptureConfig {
            min_scan_length: 30,
            gap_threshold_ms: 120,
            finalize_delay_ms: 60,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Year used for century resolution instead of the local clock.
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    pub title_male: String,
    pub title_female: String,
    pub birth_date_delay_ms: u64,
    /// Birth-date delay for positional (Kendo) cells.
    pub indexed_cell_delay_ms: u64,
}

impl Default for FillConfig {
    fn default() -> Self {
        FillConfig {
            title_male: "Bay".to_string(),
            title_female: "Bayan".to_string(),
            birth_date_delay_ms: 300,
            indexed_cell_delay_ms: 280,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, MrzError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            MrzError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, MrzError> {
        serde_json::from_str(contents)
            .map_err(|e| MrzError::Config(format!("Malformed configuration: {}", e)))
    }
}
