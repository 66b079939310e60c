//! Rate abstractions and core types

use super::error::RateError;
use async_trait::async_trait;
use std::fmt::Display;

/// A rate as scraped from a page, kept as text until it is compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rate(String);

impl Rate {
    pub fn new(text: impl Into<String>) -> Self {
        Rate(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the rate. Rejects anything that is not a finite decimal.
    pub fn value(&self) -> Result<f64, RateError> {
        let value = self
            .0
            .parse::<f64>()
            .map_err(|e| RateError::InvalidRate {
                text: self.0.clone(),
                reason: e.to_string(),
            })?;
        if !value.is_finite() {
            return Err(RateError::InvalidRate {
                text: self.0.clone(),
                reason: "not a finite number".to_string(),
            });
        }
        Ok(value)
    }
}

impl Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rate(&self) -> Result<Rate, RateError>;
}

/// Sink for the transient "loading" state shown while a request is in flight.
pub trait LoadingIndicator: Send + Sync {
    fn start(&self);
    fn stop(&self);
}

/// Starts an indicator and stops it when dropped.
pub struct LoadingGuard<'a> {
    indicator: &'a dyn LoadingIndicator,
}

impl<'a> LoadingGuard<'a> {
    pub fn start(indicator: &'a dyn LoadingIndicator) -> Self {
        indicator.start();
        Self { indicator }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.indicator.stop();
    }
}
