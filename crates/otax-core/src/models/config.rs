//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{OtaxError, Result};

/// Main configuration for the otax pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OtaxConfig {
    /// Output configuration.
    pub output: OutputConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

impl Default for OtaxConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            pdf: PdfConfig::default(),
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write the `<base>_extracted.txt` report.
    pub write_text: bool,

    /// Write the `<base>_report.html` report.
    pub write_html: bool,

    /// Directory for generated reports. Defaults to the input's directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            write_text: true,
            write_html: true,
            output_dir: None,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum extracted text length to treat a PDF as text-based.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 50 }
    }
}

impl OtaxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| OtaxError::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OtaxConfig::default();
        assert!(config.output.write_text);
        assert!(config.output.write_html);
        assert!(config.output.output_dir.is_none());
        assert_eq!(config.pdf.min_text_length, 50);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: OtaxConfig =
            serde_json::from_str(r#"{"output": {"write_html": false}}"#).unwrap();
        assert!(config.output.write_text);
        assert!(!config.output.write_html);
        assert_eq!(config.pdf.min_text_length, 50);
    }
}
