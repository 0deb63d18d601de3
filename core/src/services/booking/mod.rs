//! Booking validation and availability engine
//!
//! This module composes the whole decision path for a booking request:
//! - date range validation with an injected clock
//! - service selection (exactly one resource kind per booking)
//! - availability conflict detection against existing bookings
//! - price derivation when the caller supplies none
//!
//! The engine is read-only: persistence happens in the surrounding use
//! cases after `validate_and_price` succeeds.

mod availability;
mod dates;
mod pricing;
mod selector;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use availability::AvailabilityChecker;
pub use dates::validate_dates;
pub use pricing::PriceCalculator;
pub use selector::select_service;
pub use service::BookingService;
pub use types::BookingQuote;
