//! Handlers for booking status transitions
//!
//! POST /api/v1/bookings/{id}/confirm, /cancel and /complete.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::booking::BookingResponse;
use crate::handlers::error::error_response;

use rf_core::domain::entities::booking::Booking;
use rf_core::errors::BookingResult;
use rf_core::repositories::{
    BookingRepository, OfferRepository, ResidenceRepository, VehicleRepository,
};
use rf_shared::types::response::ApiResponse;

use super::AppState;

/// Confirm a pending booking.
pub async fn confirm_booking<R, V, O, B>(
    state: web::Data<AppState<R, V, O, B>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    R: ResidenceRepository + 'static,
    V: VehicleRepository + 'static,
    O: OfferRepository + 'static,
    B: BookingRepository + 'static,
{
    respond(state.booking_service.confirm_booking(path.into_inner()).await)
}

/// Cancel a pending or confirmed booking.
pub async fn cancel_booking<R, V, O, B>(
    state: web::Data<AppState<R, V, O, B>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    R: ResidenceRepository + 'static,
    V: VehicleRepository + 'static,
    O: OfferRepository + 'static,
    B: BookingRepository + 'static,
{
    respond(state.booking_service.cancel_booking(path.into_inner()).await)
}

/// Complete a confirmed booking.
pub async fn complete_booking<R, V, O, B>(
    state: web::Data<AppState<R, V, O, B>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    R: ResidenceRepository + 'static,
    V: VehicleRepository + 'static,
    O: OfferRepository + 'static,
    B: BookingRepository + 'static,
{
    respond(state.booking_service.complete_booking(path.into_inner()).await)
}

fn respond(result: BookingResult<Booking>) -> HttpResponse {
    match result {
        Ok(booking) => HttpResponse::Ok().json(ApiResponse::success(BookingResponse::from(booking))),
        Err(err) => error_response(&err),
    }
}
