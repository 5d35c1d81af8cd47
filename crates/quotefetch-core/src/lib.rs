//! # quotefetch core
//!
//! Resolves current price and change-in-price for a list of tickers.
//!
//! Each ticker goes through a two-source chain: the NYSE quotes API first,
//! then a scrape of the Schwab fund research page when the API has nothing
//! usable. Lookups for different tickers run concurrently under a fixed
//! worker bound, and a ticker that neither source resolves is left out of
//! the result instead of failing the run.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | NYSE (JSON) and Schwab (HTML) quote sources |
//! | [`config`] | Endpoints, user agent, timeout and worker bound |
//! | [`coordinator`] | Bounded concurrent fan-out over tickers |
//! | [`data_source`] | Quote source trait and source errors |
//! | [`domain`] | Ticker, Quote, ResultSet and numeric text rules |
//! | [`envelope`] | JSON output document |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`routing`] | Per-ticker source fallback chain |
//! | [`source`] | Source identifiers |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use quotefetch_core::{emit, fetch_all, FetchConfig, SourceRouter, Ticker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FetchConfig::from_env()?;
//!     let router = Arc::new(SourceRouter::from_config(&config));
//!     let tickers = vec![Ticker::from("AAPL"), Ticker::from("VFIAX")];
//!
//!     let results = fetch_all(router, &tickers, config.max_workers).await;
//!     println!("{}", emit(&results)?);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod coordinator;
pub mod data_source;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod routing;
pub mod source;

pub use adapters::{NyseAdapter, SchwabAdapter};
pub use config::FetchConfig;
pub use coordinator::fetch_all;
pub use data_source::{QuoteFuture, QuoteSource, SourceError, SourceErrorKind};
pub use domain::{parse_change, parse_price, Quote, ResultSet, Ticker};
pub use envelope::{emit, QuoteEnvelope};
pub use error::{ConfigError, CoreError, ValidationError};
pub use http_client::{
    HttpClient, HttpError, HttpFuture, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use routing::SourceRouter;
pub use source::SourceId;
