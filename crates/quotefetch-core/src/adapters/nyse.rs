use std::sync::Arc;

use serde_json::Value;

use crate::data_source::{discard_error, QuoteFuture, QuoteSource, SourceError};
use crate::http_client::{HttpClient, HttpRequest};
use crate::{parse_change, parse_price, FetchConfig, Quote, SourceId, Ticker};

/// Primary source: the NYSE structured quotes API.
///
/// Expects a JSON document carrying `quote.last` (price) and optionally
/// `quote.change`.
#[derive(Clone)]
pub struct NyseAdapter {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    user_agent: String,
    timeout_ms: u64,
}

impl NyseAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: &FetchConfig) -> Self {
        Self {
            http_client,
            base_url: config.primary_url.clone(),
            user_agent: config.user_agent.clone(),
            timeout_ms: config.timeout_ms,
        }
    }

    /// Fetches and validates a quote, reporting why none was produced.
    pub async fn fetch(&self, ticker: &Ticker) -> Result<Quote, SourceError> {
        let endpoint = format!("{}{}", self.base_url, urlencoding::encode(ticker.as_str()));
        let request = HttpRequest::get(endpoint)
            .with_header("accept", "application/json")
            .with_header("user-agent", self.user_agent.as_str())
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| SourceError::from_http(self.id(), &e))?;

        if !response.is_success() {
            return Err(SourceError::status(response.status));
        }

        parse_quote_response(&response.body)
    }
}

impl QuoteSource for NyseAdapter {
    fn id(&self) -> SourceId {
        SourceId::Nyse
    }

    fn quote<'a>(&'a self, ticker: &'a Ticker) -> QuoteFuture<'a> {
        Box::pin(async move { discard_error(self.id(), ticker, self.fetch(ticker).await) })
    }
}

fn parse_quote_response(body: &[u8]) -> Result<Quote, SourceError> {
    let document: Value = serde_json::from_slice(body)
        .map_err(|e| SourceError::decode(format!("failed to parse nyse response: {e}")))?;

    let quote = document
        .get("quote")
        .ok_or_else(|| SourceError::missing_field("quote"))?;

    let price = match quote.get("last") {
        None | Some(Value::Null) => return Err(SourceError::missing_field("quote.last")),
        Some(value) => price_from_value(value)?,
    };
    let change = change_from_value(quote.get("change"))?;

    Quote::new(price, change).map_err(|e| SourceError::invalid_value(e.to_string()))
}

/// `last` may arrive as a JSON string or number. Numbers go through the same
/// text check as strings, so negatives and exponent forms are refused.
fn price_from_value(value: &Value) -> Result<f64, SourceError> {
    let text = match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        other => {
            return Err(SourceError::invalid_value(format!(
                "quote.last has unsupported type: {other}"
            )))
        }
    };

    parse_price(&text).ok_or_else(|| {
        SourceError::invalid_value(format!("quote.last '{text}' is not a plain decimal"))
    })
}

/// Absent or empty-ish `change` values (`null`, `""`, `false`, `[]`, `{}`)
/// count as no movement.
fn change_from_value(value: Option<&Value>) -> Result<f64, SourceError> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(0.0),
        Some(Value::String(text)) if text.is_empty() => Ok(0.0),
        Some(Value::Array(items)) if items.is_empty() => Ok(0.0),
        Some(Value::Object(fields)) if fields.is_empty() => Ok(0.0),
        Some(Value::String(text)) => parse_change(text).ok_or_else(|| {
            SourceError::invalid_value(format!("quote.change '{text}' is not numeric"))
        }),
        Some(Value::Number(number)) => number.as_f64().ok_or_else(|| {
            SourceError::invalid_value(format!("quote.change '{number}' is not representable"))
        }),
        Some(other) => Err(SourceError::invalid_value(format!(
            "quote.change has unsupported type: {other}"
        ))),
    }
}
