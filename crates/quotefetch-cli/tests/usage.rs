use std::process::{Command, Output};

fn quotefetch(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_quotefetch"));
    command.args(args).env_remove("RUST_LOG");
    for (name, value) in env {
        command.env(name, value);
    }
    command.output().expect("quotefetch binary should launch")
}

#[test]
fn running_without_tickers_prints_usage_and_no_json() {
    // Given: No ticker arguments
    // When: The binary runs
    let output = quotefetch(&[], &[]);

    // Then: It exits 1 with the usage line on stderr and nothing on stdout
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr).trim_end(),
        "Usage: quotefetch TICKER1 TICKER2 ..."
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn oversized_worker_count_exits_with_config_error() {
    // Given: A worker count no semaphore can hold
    let too_many = usize::MAX.to_string();

    // When: The binary runs with a ticker
    let output = quotefetch(&["AAPL"], &[("QUOTEFETCH_MAX_WORKERS", too_many.as_str())]);

    // Then: Configuration is rejected before any fetch, without a panic
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: QUOTEFETCH_MAX_WORKERS"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}
