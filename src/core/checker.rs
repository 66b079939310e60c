//! One rate check: fetch, compare against the stored rate, store the new one.

use super::compare::{ComparisonResult, compare};
use super::error::RateError;
use super::rate::RateSource;
use super::state::{PersistedState, StateStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub struct RateChecker {
    source: Arc<dyn RateSource>,
    store: Arc<dyn StateStore>,
    deadline: Duration,
}

impl RateChecker {
    pub fn new(source: Arc<dyn RateSource>, store: Arc<dyn StateStore>, deadline: Duration) -> Self {
        Self {
            source,
            store,
            deadline,
        }
    }

    /// Runs a single check.
    ///
    /// The fetch runs on its own task while the stored state is loaded. The
    /// store is only written once a rate has been fetched and compared, so any
    /// failure leaves the previous state untouched.
    pub async fn run(&self) -> Result<ComparisonResult, RateError> {
        let source = Arc::clone(&self.source);
        let mut fetch = tokio::spawn(async move { source.fetch_rate().await });

        let state = match self.store.load() {
            Ok(state) => state,
            Err(e) => {
                fetch.abort();
                // Wait for the task to unwind so its loading indicator is cleared
                let _ = fetch.await;
                return Err(e);
            }
        };
        debug!(previous = state.value, "Loaded previous rate");

        let rate = match tokio::time::timeout(self.deadline, &mut fetch).await {
            Ok(Ok(result)) => result?,
            Ok(Err(e)) => return Err(RateError::FetchFailed(format!("fetch task failed: {e}"))),
            Err(_) => {
                fetch.abort();
                let _ = fetch.await;
                return Err(RateError::Timeout(self.deadline));
            }
        };

        let result = compare(&rate, state.value)?;
        let new_state = PersistedState {
            value: rate.value()?,
        };
        self.store.save(&new_state)?;

        info!(
            previous = state.value,
            current = new_state.value,
            direction = ?result.direction,
            "Rate check complete"
        );
        Ok(result)
    }
}
