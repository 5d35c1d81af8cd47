//! Bounded fan-out of ticker lookups.
//!
//! Every distinct ticker gets its own task on a [`JoinSet`]; a [`Semaphore`]
//! caps how many source chains are in flight at once. Tasks beyond the cap
//! wait for a permit, so all tickers are eventually fetched. The result set
//! is only built after every task has been joined.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::{ResultSet, SourceRouter, Ticker};

/// Fetches every ticker through `router` with at most `max_workers` chains
/// running concurrently. A bound of zero is treated as one; bounds above
/// [`Semaphore::MAX_PERMITS`] are clamped to it.
///
/// Tickers nobody could resolve are absent from the result. Repeated
/// tickers are fetched once.
pub async fn fetch_all(
    router: Arc<SourceRouter>,
    tickers: &[Ticker],
    max_workers: usize,
) -> ResultSet {
    let permits = Arc::new(Semaphore::new(max_workers.clamp(1, Semaphore::MAX_PERMITS)));
    let mut seen = HashSet::with_capacity(tickers.len());
    let mut tasks = JoinSet::new();

    for ticker in tickers {
        if !seen.insert(ticker) {
            continue;
        }

        let router = Arc::clone(&router);
        let permits = Arc::clone(&permits);
        let ticker = ticker.clone();
        tasks.spawn(async move {
            // Only fails on a closed semaphore; this one is never closed.
            let _permit = permits.acquire_owned().await.ok()?;
            let quote = router.fetch_ticker(&ticker).await?;
            Some((ticker, quote))
        });
    }

    let mut results = ResultSet::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Some((ticker, quote))) => {
                results.insert(ticker, quote);
            }
            Ok(None) => {}
            Err(error) => log::warn!("ticker fetch task aborted: {error}"),
        }
    }

    results
}
