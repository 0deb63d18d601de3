//! Domain entities representing core business objects.

pub mod booking;
pub mod offer;
pub mod residence;
pub mod vehicle;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use offer::Offer;
pub use residence::Residence;
pub use vehicle::Vehicle;
