//! Error types for token pricing.

use std::path::PathBuf;

/// All errors that can occur while pricing a token.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Must enter at least five arguments: bull/bear, start underlying price, \
         peak price (bear) or trough price (bull), end of day underlying price, \
         and token start price (got {given})"
    )]
    InsufficientArguments { given: usize },

    #[error("Must specify bull or bear token (got `{0}`)")]
    InvalidTokenKind(String),

    #[error("invalid {field}: `{value}` is not a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be a positive price, got {value}")]
    NonPositivePrice { field: &'static str, value: f64 },

    #[error("no rebalance count solves adverse move {adverse} below x = {bracket}")]
    NoRoot { adverse: f64, bracket: f64 },

    #[error("solver did not converge after {iterations} iterations")]
    NoConvergence { iterations: u32 },

    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors caused by the command-line input rather than the model.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::InsufficientArguments { .. }
                | Error::InvalidTokenKind(_)
                | Error::InvalidNumber { .. }
                | Error::NonPositivePrice { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidTokenKind("foo".into()).to_string(),
            "Must specify bull or bear token (got `foo`)"
        );
        let msg = Error::InsufficientArguments { given: 3 }.to_string();
        assert!(msg.starts_with("Must enter at least five arguments"));
        assert!(msg.ends_with("(got 3)"));
    }

    #[test]
    fn usage_classification() {
        assert!(Error::InsufficientArguments { given: 0 }.is_usage());
        assert!(
            Error::InvalidNumber {
                field: "start price",
                value: "abc".into()
            }
            .is_usage()
        );
        assert!(!Error::NoConvergence { iterations: 5 }.is_usage());
        assert!(!Error::Config("bad".into()).is_usage());
    }
}
