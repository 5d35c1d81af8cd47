use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::data_source::{discard_error, QuoteFuture, QuoteSource, SourceError};
use crate::http_client::{HttpClient, HttpRequest};
use crate::{parse_change, parse_price, FetchConfig, Quote, SourceId, Ticker};

const TABLE_OPEN: &str = r#"<table id="firstGlanceQuoteTable""#;
const TABLE_CLOSE: &str = "</table>";

static PRICE_CELL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<tbody><tr><td>\$([0-9.]+)</td>").expect("price cell pattern is valid")
});

static CHANGE_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<tbody><tr><td>\$[0-9.]+</td><td><span.*?>([+-]?[0-9.]+)</span>")
        .expect("change span pattern is valid")
});

/// Secondary source: scrapes the Schwab fund research page.
///
/// The page carries a "first glance" table whose first body row holds the
/// price cell (`<td>$412.30</td>`) followed by a styled change span.
#[derive(Clone)]
pub struct SchwabAdapter {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    user_agent: String,
    timeout_ms: u64,
}

impl SchwabAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: &FetchConfig) -> Self {
        Self {
            http_client,
            base_url: config.secondary_url.clone(),
            user_agent: config.user_agent.clone(),
            timeout_ms: config.timeout_ms,
        }
    }

    /// Fetches the research page and scrapes a quote out of it.
    pub async fn fetch(&self, ticker: &Ticker) -> Result<Quote, SourceError> {
        let endpoint = format!("{}{}", self.base_url, urlencoding::encode(ticker.as_str()));
        let request = HttpRequest::get(endpoint)
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

        scrape_quote(&response.text())
    }
}

impl QuoteSource for SchwabAdapter {
    fn id(&self) -> SourceId {
        SourceId::Schwab
    }

    fn quote<'a>(&'a self, ticker: &'a Ticker) -> QuoteFuture<'a> {
        Box::pin(async move { discard_error(self.id(), ticker, self.fetch(ticker).await) })
    }
}

fn scrape_quote(html: &str) -> Result<Quote, SourceError> {
    let table = extract_quote_table(html)
        .ok_or_else(|| SourceError::missing_field("firstGlanceQuoteTable"))?;

    let price_text = PRICE_CELL
        .captures(&table)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| SourceError::missing_field("price cell"))?;
    let price = parse_price(price_text).ok_or_else(|| {
        SourceError::invalid_value(format!("price cell '{price_text}' is not a plain decimal"))
    })?;

    // A missing or unreadable change span leaves the price usable.
    let change = CHANGE_SPAN
        .captures(&table)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_change(m.as_str()))
        .unwrap_or(0.0);

    Quote::new(price, change).map_err(|e| SourceError::invalid_value(e.to_string()))
}

/// Cuts the quote table out of the page as a single line.
///
/// The fragment runs from the FIRST `firstGlanceQuoteTable` opening tag to
/// the LAST `</table>` anywhere in the document, so a page with several
/// tables after the quote table yields all of them. The price and change
/// patterns take the first body row, which is still the quote table's.
fn extract_quote_table(html: &str) -> Option<String> {
    let start = html.find(TABLE_OPEN)?;
    let close = html.rfind(TABLE_CLOSE)?;
    let end = close + TABLE_CLOSE.len();
    if end < start + TABLE_OPEN.len() {
        return None;
    }

    Some(
        html[start..end]
            .chars()
            .filter(|ch| *ch != '\r' && *ch != '\n')
            .collect(),
    )
}
