//! CLI argument definitions.
//!
//! The interface is a flat list of ticker symbols:
//!
//! ```bash
//! quotefetch AAPL MSFT VFIAX
//! ```
//!
//! Endpoints, timeout, user agent and worker bound come from the
//! `QUOTEFETCH_*` environment variables rather than flags; `RUST_LOG`
//! controls diagnostics on standard error.

use clap::Parser;

/// Fetch price and change for stock tickers as one JSON line.
#[derive(Debug, Parser)]
#[command(
    name = "quotefetch",
    version,
    about = "Fetch price and change for stock tickers as one JSON line",
    override_usage = "quotefetch TICKER1 TICKER2 ..."
)]
pub struct Cli {
    /// Ticker symbols, passed through as typed.
    #[arg(value_name = "TICKER")]
    pub tickers: Vec<String>,
}
