//! Handler for GET /api/v1/bookings/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::booking::BookingResponse;
use crate::handlers::error::error_response;

use rf_core::repositories::{
    BookingRepository, OfferRepository, ResidenceRepository, VehicleRepository,
};
use rf_shared::types::response::ApiResponse;

use super::AppState;

/// Fetch a single booking by ID.
pub async fn get_booking<R, V, O, B>(
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

    match state.booking_service.get_booking(id).await {
        Ok(booking) => HttpResponse::Ok().json(ApiResponse::success(BookingResponse::from(booking))),
        Err(err) => error_response(&err),
    }
}
