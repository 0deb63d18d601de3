//! Date range validation for booking requests.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{DateRange, MAX_BOOKING_DAYS};
use crate::errors::DateError;

/// Validates a requested booking interval.
///
/// Pure function of its inputs; the caller supplies `now` so the check is
/// deterministic under test. Rules are applied in order and the first
/// violation wins:
///
/// 1. both dates parse as RFC 3339 instants
/// 2. the start is strictly in the future (equality with `now` is rejected)
/// 3. the end is strictly after the start
/// 4. the span does not exceed [`MAX_BOOKING_DAYS`]
pub fn validate_dates(
    start: &str,
    end: &str,
    now: DateTime<Utc>,
) -> Result<DateRange, DateError> {
    let start = parse_instant(start)?;
    let end = parse_instant(end)?;

    if start <= now {
        return Err(DateError::StartNotInFuture);
    }

    if end <= start {
        return Err(DateError::EndBeforeStart);
    }

    let range = DateRange::new(start, end);
    if range.days() > MAX_BOOKING_DAYS {
        return Err(DateError::SpanTooLong);
    }

    Ok(range)
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, DateError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DateError::InvalidFormat)
}
