//! Test doubles shared by the behaviour suites.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use quotefetch_core::{
    FetchConfig, HttpClient, HttpError, HttpFuture, HttpRequest, HttpResponse, Quote, QuoteFuture,
    QuoteSource, SourceId, Ticker,
};

pub const PRIMARY_URL: &str = "http://nyse.test/quotes?symbol=";
pub const SECONDARY_URL: &str = "http://schwab.test/fees.asp?symbol=";

pub fn test_config() -> FetchConfig {
    FetchConfig {
        primary_url: String::from(PRIMARY_URL),
        secondary_url: String::from(SECONDARY_URL),
        ..FetchConfig::default()
    }
}

/// Quote source answering from a fixed table and counting every call.
pub struct ScriptedSource {
    id: SourceId,
    quotes: HashMap<String, Quote>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new(id: SourceId, quotes: &[(&str, f64, f64)]) -> Arc<Self> {
        let quotes = quotes
            .iter()
            .map(|(ticker, price, change)| {
                let quote = Quote::new(*price, *change).expect("scripted quotes are valid");
                (ticker.to_string(), quote)
            })
            .collect();
        Arc::new(Self {
            id,
            quotes,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn empty(id: SourceId) -> Arc<Self> {
        Self::new(id, &[])
    }

    pub fn calls_for(&self, ticker: &str) -> usize {
        self.calls
            .lock()
            .expect("call log should not be poisoned")
            .iter()
            .filter(|called| called.as_str() == ticker)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().expect("call log should not be poisoned").len()
    }
}

impl QuoteSource for ScriptedSource {
    fn id(&self) -> SourceId {
        self.id
    }

    fn quote<'a>(&'a self, ticker: &'a Ticker) -> QuoteFuture<'a> {
        self.calls
            .lock()
            .expect("call log should not be poisoned")
            .push(ticker.as_str().to_owned());
        let quote = self.quotes.get(ticker.as_str()).copied();
        Box::pin(async move { quote })
    }
}

/// HTTP transport serving canned bodies by exact URL. Any other URL fails
/// like an unreachable host.
#[derive(Default)]
pub struct StaticHttpClient {
    routes: HashMap<String, HttpResponse>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StaticHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(mut self, ticker: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            format!("{PRIMARY_URL}{ticker}"),
            HttpResponse::new(status, body),
        );
        self
    }

    pub fn secondary(mut self, ticker: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            format!("{SECONDARY_URL}{ticker}"),
            HttpResponse::new(status, body),
        );
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .clone()
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests().into_iter().map(|request| request.url).collect()
    }
}

impl HttpClient for StaticHttpClient {
    fn execute<'a>(&'a self, request: HttpRequest) -> HttpFuture<'a> {
        let response = self
            .routes
            .get(&request.url)
            .cloned()
            .ok_or_else(|| HttpError::new(format!("connection refused: {}", request.url)));
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .push(request);
        Box::pin(async move { response })
    }
}

/// Schwab-style page whose quote table holds `price_cell` and `change_text`.
pub fn schwab_page(price_cell: &str, change_text: &str) -> String {
    format!(
        "<html>\r\n<body>\n<div class=\"header\">Fund Research</div>\n\
<table id=\"firstGlanceQuoteTable\" class=\"quoteTable\">\r\n\
<thead><tr><th>Price</th><th>Change</th></tr></thead>\r\n\
<tbody><tr><td>{price_cell}</td>\
<td><span class=\"quoteChange up\">{change_text}</span></td></tr></tbody>\n\
</table>\n</body>\n</html>"
    )
}
