use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage: quotefetch TICKER1 TICKER2 ...")]
    Usage,

    #[error(transparent)]
    Config(#[from] quotefetch_core::ConfigError),

    #[error(transparent)]
    Core(#[from] quotefetch_core::CoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage => 1,
            Self::Config(_) => 2,
            Self::Core(_) | Self::Io(_) => 10,
        }
    }

    /// Line written to standard error for this failure.
    pub fn report(&self) -> String {
        match self {
            Self::Usage => self.to_string(),
            other => format!("error: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_exits_with_one_and_prints_bare_usage() {
        let error = CliError::Usage;
        assert_eq!(error.exit_code(), 1);
        assert_eq!(error.report(), "Usage: quotefetch TICKER1 TICKER2 ...");
    }

    #[test]
    fn config_errors_are_prefixed_and_exit_with_two() {
        let error = CliError::from(quotefetch_core::ConfigError::EmptyValue {
            var: "QUOTEFETCH_USER_AGENT",
        });
        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.report(),
            "error: QUOTEFETCH_USER_AGENT must not be empty"
        );
    }
}
