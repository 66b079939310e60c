//! Persisted state abstractions

use super::error::RateError;

/// The last observed exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PersistedState {
    pub value: f64,
}

pub trait StateStore: Send + Sync {
    /// Returns the stored state, or `value: 0.0` if nothing was stored yet.
    fn load(&self) -> Result<PersistedState, RateError>;

    /// Overwrites the stored value, keeping any unrelated stored content.
    fn save(&self, state: &PersistedState) -> Result<(), RateError>;
}
