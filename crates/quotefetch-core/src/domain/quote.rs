use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Ticker;
use crate::ValidationError;

/// Price and change-in-price for one ticker at fetch time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    price: f64,
    change: f64,
}

impl Quote {
    pub fn new(price: f64, change: f64) -> Result<Self, ValidationError> {
        validate_non_negative("price", price)?;
        validate_finite("change", change)?;
        Ok(Self { price, change })
    }

    pub const fn price(&self) -> f64 {
        self.price
    }

    pub const fn change(&self) -> f64 {
        self.change
    }
}

/// Resolved quotes keyed by ticker. Unresolved tickers are never present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(BTreeMap<Ticker, Quote>);

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a quote, returning the one previously stored for the ticker.
    pub fn insert(&mut self, ticker: Ticker, quote: Quote) -> Option<Quote> {
        self.0.insert(ticker, quote)
    }

    pub fn get(&self, ticker: &Ticker) -> Option<&Quote> {
        self.0.get(ticker)
    }

    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.0.contains_key(ticker)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ticker, &Quote)> {
        self.0.iter()
    }
}

impl FromIterator<(Ticker, Quote)> for ResultSet {
    fn from_iter<I: IntoIterator<Item = (Ticker, Quote)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
