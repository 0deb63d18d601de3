//! Handler for POST /api/v1/bookings

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::booking::{BookingResponse, CreateBookingRequest};
use crate::handlers::error::{error_response, validation_error_response};

use rf_core::repositories::{
    BookingRepository, OfferRepository, ResidenceRepository, VehicleRepository,
};
use rf_shared::types::response::ApiResponse;

use super::AppState;

/// Create a booking.
///
/// Runs the full engine sequence (date validation, service selection,
/// availability, pricing) and persists a PENDING booking on success.
pub async fn create_booking<R, V, O, B>(
    state: web::Data<AppState<R, V, O, B>>,
    request: web::Json<CreateBookingRequest>,
) -> HttpResponse
where
    R: ResidenceRepository + 'static,
    V: VehicleRepository + 'static,
    O: OfferRepository + 'static,
    B: BookingRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let user_id = request.user_id;
    let booking_request = request.into_booking_request();

    log::info!("Processing create_booking request for user {}", user_id);

    match state
        .booking_service
        .create_booking(&booking_request, user_id)
        .await
    {
        Ok(booking) => {
            HttpResponse::Created().json(ApiResponse::success(BookingResponse::from(booking)))
        }
        Err(err) => error_response(&err),
    }
}
