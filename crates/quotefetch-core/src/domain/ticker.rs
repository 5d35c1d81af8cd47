use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Ticker symbol exactly as the caller supplied it.
///
/// Tickers are opaque: no trimming, case folding or character checks are
/// applied, since an unknown symbol simply resolves to no quote.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Ticker {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<Ticker> for String {
    fn from(value: Ticker) -> Self {
        value.0
    }
}
