use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifiers for the upstream quote sources, in fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    Nyse,
    Schwab,
}

impl SourceId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nyse => "nyse",
            Self::Schwab => "schwab",
        }
    }
}

impl Display for SourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
