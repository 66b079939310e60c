use crate::core::error::RateError;
use crate::core::state::{PersistedState, StateStore};
use std::sync::Mutex;
use tracing::debug;

/// In-memory state store, used for dry runs and tests
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Option<PersistedState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: f64) -> Self {
        Self {
            inner: Mutex::new(Some(PersistedState { value })),
        }
    }

    /// The last saved state, if anything was ever stored.
    pub fn stored(&self) -> Option<PersistedState> {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<PersistedState, RateError> {
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, state: &PersistedState) -> Result<(), RateError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        debug!("Memory state PUT");
        *inner = Some(*state);
        Ok(())
    }
}
