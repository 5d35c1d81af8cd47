//! Textual number checks shared by the quote sources.
//!
//! Upstream values arrive as text (JSON strings, HTML cell contents) and are
//! only accepted when they look like plain decimal numbers. Exponents, signs
//! on prices, whitespace and thousands separators are all rejected.

use std::sync::LazyLock;

use regex::Regex;

static PRICE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+$").expect("price pattern is valid"));

static CHANGE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9.]+$").expect("change pattern is valid"));

/// Parses an unsigned decimal price such as `172.50`.
///
/// Text made only of digits and dots that still is not a number (`1.2.3`,
/// `.`) yields `None`, same as any other rejected input.
pub fn parse_price(text: &str) -> Option<f64> {
    if !PRICE_TEXT.is_match(text) {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Parses an optionally signed decimal change such as `+3.10` or `-0.4`.
pub fn parse_change(text: &str) -> Option<f64> {
    if !CHANGE_TEXT.is_match(text) {
        return None;
    }
    text.parse::<f64>().ok()
}
