//! Error kinds raised while fetching, comparing and persisting a rate.
//!
//! Every variant is fatal for a run: callers print it and exit non-zero.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RateError {
    /// Config directory could not be resolved, created or written
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// State file exists but cannot be understood
    #[error("corrupt state: {0}")]
    CorruptState(String),

    /// Transport error or non-200 response
    #[error("failed to fetch the page: {0}")]
    FetchFailed(String),

    /// Response body is not a usable document
    #[error("failed to parse HTML: {0}")]
    ParseFailed(String),

    #[error("exchange rate not found in HTML")]
    ValueNotFound,

    #[error("error parsing rate '{text}': {reason}")]
    InvalidRate { text: String, reason: String },

    #[error("no exchange rate received within {0:?}")]
    Timeout(Duration),
}

impl RateError {
    pub fn unexpected_status(status: u16) -> Self {
        RateError::FetchFailed(format!("unexpected status code: {status}"))
    }
}

impl From<reqwest::Error> for RateError {
    fn from(err: reqwest::Error) -> Self {
        RateError::FetchFailed(err.to_string())
    }
}
