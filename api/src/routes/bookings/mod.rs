//! Booking route handlers
//!
//! Endpoints under `/api/v1`:
//! - `POST /bookings`: validate, price and create a booking
//! - `GET /bookings`, `GET /bookings/{id}`, `GET /users/{user_id}/bookings`
//! - `POST /bookings/{id}/confirm` / `cancel` / `complete`
//! - `DELETE /bookings/{id}`

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod status;

use std::sync::Arc;

use rf_core::repositories::{
    BookingRepository, OfferRepository, ResidenceRepository, VehicleRepository,
};
use rf_core::services::BookingService;

/// Application state shared across booking handlers.
pub struct AppState<R, V, O, B>
where
    R: ResidenceRepository,
    V: VehicleRepository,
    O: OfferRepository,
    B: BookingRepository,
{
    pub booking_service: Arc<BookingService<R, V, O, B>>,
}

impl<R, V, O, B> AppState<R, V, O, B>
where
    R: ResidenceRepository,
    V: VehicleRepository,
    O: OfferRepository,
    B: BookingRepository,
{
    pub fn new(booking_service: Arc<BookingService<R, V, O, B>>) -> Self {
        Self { booking_service }
    }
}
