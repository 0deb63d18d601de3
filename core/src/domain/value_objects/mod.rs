//! Value objects used by the booking engine.

pub mod booking_request;
pub mod date_range;
pub mod service_kind;

// Re-export commonly used types
pub use booking_request::BookingRequest;
pub use date_range::{DateRange, MAX_BOOKING_DAYS};
pub use service_kind::ServiceKind;
