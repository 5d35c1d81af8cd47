use std::sync::Arc;

use crate::adapters::{NyseAdapter, SchwabAdapter};
use crate::data_source::QuoteSource;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::{FetchConfig, Quote, SourceId, Ticker};

/// Ordered source chain for a single ticker.
///
/// Sources are tried in registration order and the first quote wins; later
/// sources are not consulted once one succeeds. Each source is asked exactly
/// once per call.
pub struct SourceRouter {
    sources: Vec<Arc<dyn QuoteSource>>,
}

impl SourceRouter {
    pub fn new(sources: Vec<Arc<dyn QuoteSource>>) -> Self {
        Self { sources }
    }

    /// Production chain: NYSE first, Schwab as fallback, sharing one client.
    pub fn from_config(config: &FetchConfig) -> Self {
        let http_client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
        Self::with_http_client(http_client, config)
    }

    /// Production chain over a caller-supplied transport.
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: &FetchConfig) -> Self {
        Self::new(vec![
            Arc::new(NyseAdapter::with_http_client(Arc::clone(&http_client), config)),
            Arc::new(SchwabAdapter::with_http_client(http_client, config)),
        ])
    }

    /// Source identifiers in the order they are tried.
    pub fn source_ids(&self) -> impl Iterator<Item = SourceId> + '_ {
        self.sources.iter().map(|source| source.id())
    }

    /// Resolves `ticker` through the chain. `None` means every source came
    /// back empty.
    pub async fn fetch_ticker(&self, ticker: &Ticker) -> Option<Quote> {
        for (attempt, source) in self.sources.iter().enumerate() {
            if let Some(quote) = source.quote(ticker).await {
                if attempt > 0 {
                    log::debug!(
                        "{ticker} resolved by fallback source '{}' after {attempt} empty source(s)",
                        source.id()
                    );
                } else {
                    log::debug!("{ticker} resolved by '{}'", source.id());
                }
                return Some(quote);
            }
        }

        log::info!("no source produced a quote for {ticker}");
        None
    }
}
