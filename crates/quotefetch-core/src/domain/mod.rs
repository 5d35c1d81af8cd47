//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Ticker`] | Opaque ticker symbol, case as supplied |
//! | [`Quote`] | Validated price and change-in-price |
//! | [`ResultSet`] | Resolved quotes keyed by ticker |
//!
//! [`parse_price`] and [`parse_change`] hold the numeric text rules every
//! source applies before a [`Quote`] is built.

mod numeric;
mod quote;
mod ticker;

pub use numeric::{parse_change, parse_price};
pub use quote::{Quote, ResultSet};
pub use ticker::Ticker;
