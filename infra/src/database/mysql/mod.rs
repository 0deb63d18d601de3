//! MySQL repository implementations

mod booking_repository_impl;
mod offer_repository_impl;
mod residence_repository_impl;
mod vehicle_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use offer_repository_impl::MySqlOfferRepository;
pub use residence_repository_impl::MySqlResidenceRepository;
pub use vehicle_repository_impl::MySqlVehicleRepository;

use rf_core::errors::BookingError;

/// Wrap a low-level database failure into the domain storage error.
pub(crate) fn store_error(context: &str, err: impl std::fmt::Display) -> BookingError {
    BookingError::Store {
        message: format!("{}: {}", context, err),
    }
}
