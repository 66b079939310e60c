//! Property tests for the direction policy.

use gousdbrl::core::{Direction, Rate, compare};
use proptest::prelude::*;

proptest! {
    /// Direction follows the numeric ordering of the fetched and stored values.
    #[test]
    fn direction_matches_ordering(
        new in 0.0f64..100.0,
        old in 0.0f64..100.0,
    ) {
        let text = new.to_string();
        let result = compare(&Rate::new(text.clone()), old).unwrap();
        let parsed: f64 = text.parse().unwrap();

        let expected = if parsed < old {
            Direction::Down
        } else if parsed > old {
            Direction::Up
        } else {
            Direction::Unchanged
        };
        prop_assert_eq!(result.direction, expected);
        prop_assert_eq!(result.display_rate, text);
    }

    /// A rate compared with itself is always unchanged.
    #[test]
    fn same_value_is_unchanged(cents in 1u32..100_000) {
        let text = format!("{}.{:02}", cents / 100, cents % 100);
        let old: f64 = text.parse().unwrap();
        let result = compare(&Rate::new(text), old).unwrap();
        prop_assert_eq!(result.direction, Direction::Unchanged);
    }

    /// Anything with letters in it is rejected, never guessed.
    #[test]
    fn non_numeric_text_is_rejected(text in "[a-zA-Z$ ]{1,12}") {
        prop_assert!(compare(&Rate::new(text), 1.0).is_err());
    }
}
