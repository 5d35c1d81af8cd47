use serde::{Deserialize, Serialize};

use crate::{CoreError, ResultSet};

/// Top-level output document: `{"data": {"<TICKER>": {"price", "change"}}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteEnvelope {
    pub data: ResultSet,
}

impl QuoteEnvelope {
    pub fn new(data: ResultSet) -> Self {
        Self { data }
    }

    /// Compact single-line JSON, without a trailing newline.
    pub fn to_json_line(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Serializes `results` as one compact JSON line (no trailing newline).
pub fn emit(results: &ResultSet) -> Result<String, CoreError> {
    QuoteEnvelope::new(results.clone()).to_json_line()
}
