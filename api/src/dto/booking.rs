//! Booking DTOs for the HTTP surface.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use rf_core::domain::entities::booking::Booking;
use rf_core::domain::value_objects::BookingRequest;

/// Request body for `POST /api/v1/bookings`.
///
/// Dates are passed through as strings; the engine owns RFC 3339 parsing
/// so that a malformed date surfaces as the documented `INVALID_FORMAT`
/// error rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// User placing the booking
    pub user_id: Uuid,

    /// Requested start instant, RFC 3339
    #[validate(length(min = 1, max = 64))]
    pub start_date: String,

    /// Requested end instant, RFC 3339 (exclusive)
    #[validate(length(min = 1, max = 64))]
    pub end_date: String,

    /// Residence to book, if any
    pub residence_id: Option<Uuid>,

    /// Vehicle to book, if any
    pub vehicle_id: Option<Uuid>,

    /// Combined offer to book, if any
    pub offer_id: Option<Uuid>,

    /// Explicit total price; overrides derived pricing when present
    pub total_price: Option<Decimal>,

    /// Free-form notes
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl CreateBookingRequest {
    /// Convert into the engine-level booking request.
    pub fn into_booking_request(self) -> BookingRequest {
        BookingRequest {
            start_date: self.start_date,
            end_date: self.end_date,
            residence_id: self.residence_id,
            vehicle_id: self.vehicle_id,
            offer_id: self.offer_id,
            total_price: self.total_price,
            notes: self.notes,
        }
    }
}

/// Booking as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: Decimal,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residence_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            user_id: booking.user_id,
            start_date: booking.start_date,
            end_date: booking.end_date,
            total_price: booking.total_price,
            status: booking.status.to_string(),
            residence_id: booking.residence_id,
            vehicle_id: booking.vehicle_id,
            offer_id: booking.offer_id,
            notes: booking.notes,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}
