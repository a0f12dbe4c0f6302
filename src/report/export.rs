//! JSON export of conversion results

use anyhow::{Context, Result};
use serde::Serialize;

use crate::converter::{Conversion, Scale};

/// A single conversion as written by `--json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionExport {
    /// Parsed input value
    pub input: f64,
    /// Source scale
    pub from: Scale,
    /// Converted value, unrounded
    pub value: f64,
    /// Target scale
    pub to: Scale,
    /// Formatted result, e.g. "32.00° Fahrenheit"
    pub display: String,
    /// Thermo-phi version
    pub version: String,
}

impl From<&Conversion> for ConversionExport {
    fn from(c: &Conversion) -> Self {
        Self {
            input: c.input,
            from: c.from,
            value: c.value,
            to: c.to,
            display: c.display(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Serialize a conversion to pretty-printed JSON
pub fn conversion_to_json(conversion: &Conversion) -> Result<String> {
    serde_json::to_string_pretty(&ConversionExport::from(conversion))
        .context("Failed to serialize conversion result")
}
