//! Validated booking date range.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a booking in days
pub const MAX_BOOKING_DAYS: i64 = 30;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// A half-open `[start, end)` booking interval.
///
/// Ranges are only constructed by the date validator, so `start < end`
/// holds for every instance that reaches the rest of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive start of the interval
    pub start: DateTime<Utc>,

    /// Exclusive end of the interval
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a new date range. Callers are expected to have checked
    /// ordering; use the date validator for untrusted input.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Number of billable days: `ceil((end - start) / 1 day)`, minimum 1.
    pub fn days(&self) -> i64 {
        let seconds = (self.end - self.start).num_seconds();
        ((seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY).max(1)
    }

    /// Half-open interval overlap test against an existing `[start, end)`
    /// window. Touching endpoints do not overlap, so back-to-back
    /// bookings are allowed.
    pub fn overlaps(&self, other_start: DateTime<Utc>, other_end: DateTime<Utc>) -> bool {
        self.start < other_end && other_start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_day_count_rounds_up() {
        let range = DateRange::new(date(2024, 6, 1), date(2024, 6, 7));
        assert_eq!(range.days(), 6);

        // Partial day counts as a full day
        let range = DateRange::new(
            date(2024, 6, 1),
            Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap(),
        );
        assert_eq!(range.days(), 2);
    }

    #[test]
    fn test_day_count_minimum_is_one() {
        let range = DateRange::new(
            date(2024, 6, 1),
            Utc.with_ymd_and_hms(2024, 6, 1, 6, 0, 0).unwrap(),
        );
        assert_eq!(range.days(), 1);
    }

    #[test]
    fn test_overlap_detection() {
        let range = DateRange::new(date(2024, 6, 5), date(2024, 6, 10));

        // Overlapping window
        assert!(range.overlaps(date(2024, 6, 1), date(2024, 6, 7)));
        // Fully nested window
        assert!(range.overlaps(date(2024, 6, 6), date(2024, 6, 8)));
        // Disjoint window
        assert!(!range.overlaps(date(2024, 5, 1), date(2024, 5, 5)));
    }

    #[test]
    fn test_back_to_back_is_not_overlap() {
        let range = DateRange::new(date(2024, 6, 7), date(2024, 6, 10));
        // Existing booking ends exactly where the new one starts
        assert!(!range.overlaps(date(2024, 6, 1), date(2024, 6, 7)));
        // And the symmetric case
        assert!(!range.overlaps(date(2024, 6, 10), date(2024, 6, 12)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = DateRange::new(date(2024, 6, 1), date(2024, 6, 7));
        let b = DateRange::new(date(2024, 6, 5), date(2024, 6, 10));
        assert_eq!(a.overlaps(b.start, b.end), b.overlaps(a.start, a.end));
    }
}
