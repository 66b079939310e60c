//! Core business logic abstractions

pub mod checker;
pub mod compare;
pub mod config;
pub mod error;
pub mod log;
pub mod rate;
pub mod state;

// Re-export main types for cleaner imports
pub use checker::RateChecker;
pub use compare::{ComparisonResult, Direction, compare};
pub use error::RateError;
pub use rate::{LoadingIndicator, Rate, RateSource};
pub use state::{PersistedState, StateStore};
