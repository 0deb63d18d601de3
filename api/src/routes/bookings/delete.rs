//! Handler for DELETE /api/v1/bookings/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::handlers::error::error_response;

use rf_core::repositories::{
    BookingRepository, OfferRepository, ResidenceRepository, VehicleRepository,
};

use super::AppState;

/// Delete a booking.
pub async fn delete_booking<R, V, O, B>(
    state: web::Data<AppState<R, V, O, B>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    R: ResidenceRepository + 'static,
    V: VehicleRepository + 'static,
    O: OfferRepository + 'static,
    B: BookingRepository + 'static,
{
    let id = path.into_inner();

    match state.booking_service.delete_booking(id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}
