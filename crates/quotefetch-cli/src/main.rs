mod cli;
mod error;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use quotefetch_core::{fetch_all, FetchConfig, SourceRouter, Ticker};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error.report());
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    if cli.tickers.is_empty() {
        return Err(CliError::Usage);
    }

    let config = FetchConfig::from_env()?;
    let tickers: Vec<Ticker> = cli.tickers.into_iter().map(Ticker::from).collect();
    log::debug!(
        "fetching {} ticker(s) with {} worker(s)",
        tickers.len(),
        config.max_workers
    );

    let router = Arc::new(SourceRouter::from_config(&config));
    let results = fetch_all(router, &tickers, config.max_workers).await;
    log::info!("resolved {} of {} ticker(s)", results.len(), tickers.len());

    output::render(&results)
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}
