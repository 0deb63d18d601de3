//! Handlers for GET /api/v1/bookings and GET /api/v1/users/{user_id}/bookings

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::booking::BookingResponse;
use crate::handlers::error::error_response;

use rf_core::repositories::{
    BookingRepository, OfferRepository, ResidenceRepository, VehicleRepository,
};
use rf_shared::types::response::ApiResponse;

use super::AppState;

/// List all bookings, newest first.
pub async fn list_bookings<R, V, O, B>(state: web::Data<AppState<R, V, O, B>>) -> HttpResponse
where
    R: ResidenceRepository + 'static,
    V: VehicleRepository + 'static,
    O: OfferRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.booking_service.list_bookings().await {
        Ok(bookings) => {
            let payload: Vec<BookingResponse> =
                bookings.into_iter().map(BookingResponse::from).collect();
            HttpResponse::Ok().json(ApiResponse::success(payload))
        }
        Err(err) => error_response(&err),
    }
}

/// List a user's bookings, newest first.
pub async fn list_user_bookings<R, V, O, B>(
    state: web::Data<AppState<R, V, O, B>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    R: ResidenceRepository + 'static,
    V: VehicleRepository + 'static,
    O: OfferRepository + 'static,
    B: BookingRepository + 'static,
{
    let user_id = path.into_inner();

    match state.booking_service.list_bookings_for_user(user_id).await {
        Ok(bookings) => {
            let payload: Vec<BookingResponse> =
                bookings.into_iter().map(BookingResponse::from).collect();
            HttpResponse::Ok().json(ApiResponse::success(payload))
        }
        Err(err) => error_response(&err),
    }
}
