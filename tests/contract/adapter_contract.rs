//! Contract checks every quote source must satisfy: never fail, never
//! produce a partial quote, honour the configured request shape.

#[path = "../support/mod.rs"]
mod support;

use std::sync::Arc;

use quotefetch_core::{
    FetchConfig, HttpClient, NyseAdapter, QuoteSource, SchwabAdapter, SourceId, Ticker,
};

use support::{schwab_page, test_config, StaticHttpClient};

struct SourceCase {
    id: SourceId,
    source: Arc<dyn QuoteSource>,
}

fn source_cases(client: Arc<dyn HttpClient>, config: &FetchConfig) -> Vec<SourceCase> {
    vec![
        SourceCase {
            id: SourceId::Nyse,
            source: Arc::new(NyseAdapter::with_http_client(Arc::clone(&client), config)),
        },
        SourceCase {
            id: SourceId::Schwab,
            source: Arc::new(SchwabAdapter::with_http_client(client, config)),
        },
    ]
}

#[tokio::test]
async fn sources_report_their_identifiers() {
    let client: Arc<dyn HttpClient> = Arc::new(StaticHttpClient::new());
    for case in source_cases(client, &test_config()) {
        assert_eq!(case.source.id(), case.id);
    }
}

#[tokio::test]
async fn unreachable_hosts_yield_none_for_every_source() {
    let client: Arc<dyn HttpClient> = Arc::new(StaticHttpClient::new());
    for case in source_cases(client, &test_config()) {
        let quote = case.source.quote(&Ticker::from("AAPL")).await;
        assert_eq!(quote, None, "source '{}'", case.id);
    }
}

#[tokio::test]
async fn garbage_bodies_yield_none_for_every_source() {
    let client: Arc<dyn HttpClient> = Arc::new(
        StaticHttpClient::new()
            .primary("X", 200, "\u{0}\u{1}not json")
            .secondary("X", 200, "<html><table id=\"firstGlanceQuoteTable\">"),
    );
    for case in source_cases(client, &test_config()) {
        let quote = case.source.quote(&Ticker::from("X")).await;
        assert_eq!(quote, None, "source '{}'", case.id);
    }
}

#[tokio::test]
async fn resolved_quotes_always_carry_a_non_negative_price() {
    let page = schwab_page("$0.00", "-0.01");
    let client: Arc<dyn HttpClient> = Arc::new(
        StaticHttpClient::new()
            .primary("P", 200, r#"{"quote":{"last":"0","change":-0.01}}"#)
            .secondary("P", 200, &page),
    );
    for case in source_cases(client, &test_config()) {
        let quote = case
            .source
            .quote(&Ticker::from("P"))
            .await
            .unwrap_or_else(|| panic!("source '{}' should resolve", case.id));
        assert!(quote.price() >= 0.0);
        assert_eq!(quote.change(), -0.01);
    }
}

#[tokio::test]
async fn requests_carry_configured_user_agent() {
    let config = FetchConfig {
        user_agent: String::from("quotefetch-test/1.0"),
        ..test_config()
    };
    let client = Arc::new(StaticHttpClient::new());
    for case in source_cases(client.clone(), &config) {
        let _ = case.source.quote(&Ticker::from("UA")).await;
    }

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, "http://nyse.test/quotes?symbol=UA");
    assert_eq!(requests[1].url, "http://schwab.test/fees.asp?symbol=UA");
    for request in &requests {
        assert_eq!(request.header("user-agent"), Some("quotefetch-test/1.0"));
        assert_eq!(request.timeout_ms, 10_000);
    }
}
