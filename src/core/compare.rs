//! Direction of a freshly fetched rate relative to the last observed one.

use super::error::RateError;
use super::rate::Rate;
use std::cmp::Ordering;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Unchanged,
}

impl Direction {
    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Unchanged => "▶",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub direction: Direction,
    /// Rate text exactly as fetched
    pub display_rate: String,
}

impl Display for ComparisonResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.direction.glyph(), self.display_rate)
    }
}

/// Compares `new_rate` against `old_value`.
///
/// A first run has `old_value == 0.0`, so any positive rate reports `Up`.
pub fn compare(new_rate: &Rate, old_value: f64) -> Result<ComparisonResult, RateError> {
    let new_value = new_rate.value()?;
    let direction = match new_value.partial_cmp(&old_value) {
        Some(Ordering::Less) => Direction::Down,
        Some(Ordering::Greater) => Direction::Up,
        _ => Direction::Unchanged,
    };

    Ok(ComparisonResult {
        direction,
        display_rate: new_rate.as_str().to_string(),
    })
}
