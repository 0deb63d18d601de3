//! Business services containing domain logic and use cases.

pub mod booking;

// Re-export commonly used types
pub use booking::{
    select_service, validate_dates, AvailabilityChecker, BookingQuote, BookingService,
    PriceCalculator,
};
