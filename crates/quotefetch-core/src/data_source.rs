//! Quote source contract and the source-level error type.
//!
//! A [`QuoteSource`] answers "what is the quote for this ticker?" with either
//! a [`Quote`] or nothing. Everything that can go wrong inside a source is a
//! [`SourceError`], and that error stops at the source boundary: callers of
//! [`QuoteSource::quote`] only ever see `Option<Quote>`.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::http_client::HttpError;
use crate::{Quote, SourceId, Ticker};

/// Classification of source failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Connection, DNS or timeout failure.
    Transport,
    /// Upstream answered with a non-2xx status.
    Status,
    /// Body could not be decoded into the expected document shape.
    Decode,
    /// Document decoded but the quote fields are not there.
    MissingField,
    /// Field present but fails the numeric format rules.
    InvalidValue,
}

/// Structured error produced while a source resolves a ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Transport, message)
    }

    /// Wraps a transport failure, keeping timeouts distinguishable in logs.
    pub fn from_http(source: SourceId, error: &HttpError) -> Self {
        if error.is_timeout() {
            Self::transport(format!("{source} request timed out: {}", error.message()))
        } else {
            Self::transport(format!("{source} transport error: {}", error.message()))
        }
    }

    pub fn status(status: u16) -> Self {
        Self::new(
            SourceErrorKind::Status,
            format!("upstream returned status {status}"),
        )
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Decode, message)
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(
            SourceErrorKind::MissingField,
            format!("field '{field}' is missing"),
        )
    }

    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::InvalidValue, message)
    }

    fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Transport => "source.transport",
            SourceErrorKind::Status => "source.status",
            SourceErrorKind::Decode => "source.decode",
            SourceErrorKind::MissingField => "source.missing_field",
            SourceErrorKind::InvalidValue => "source.invalid_value",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

pub type QuoteFuture<'a> = Pin<Box<dyn Future<Output = Option<Quote>> + Send + 'a>>;

/// Source adapter contract.
///
/// Implementations must be `Send + Sync`; one instance is shared by every
/// worker of a run.
pub trait QuoteSource: Send + Sync {
    /// Returns the source identifier used in logs.
    fn id(&self) -> SourceId;

    /// Resolves a quote for `ticker`, or `None` when this source has no
    /// usable data for it. Never fails.
    fn quote<'a>(&'a self, ticker: &'a Ticker) -> QuoteFuture<'a>;
}

/// Collapses a source result into the `Option` contract, logging the reason
/// a ticker went unresolved.
pub(crate) fn discard_error(
    source: SourceId,
    ticker: &Ticker,
    result: Result<Quote, SourceError>,
) -> Option<Quote> {
    match result {
        Ok(quote) => Some(quote),
        Err(error) => {
            log::debug!("{source} has no quote for {ticker}: {error}");
            None
        }
    }
}
