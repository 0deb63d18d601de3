//! Repository interfaces for the persistence boundary.
//!
//! Each bookable aggregate gets a narrow trait; concrete implementations
//! live in the infrastructure layer, and in-memory mocks are provided for
//! engine tests.

pub mod booking;
pub mod offer;
pub mod residence;
pub mod vehicle;

pub use booking::{BookingRepository, MockBookingRepository};
pub use offer::{MockOfferRepository, OfferRepository};
pub use residence::{MockResidenceRepository, ResidenceRepository};
pub use vehicle::{MockVehicleRepository, VehicleRepository};
