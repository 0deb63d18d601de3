//! Transient booking request consumed by the booking engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A booking request as submitted by a caller.
///
/// The request is transient: it is constructed per call, validated and
/// priced by the engine, then converted into a persisted [`Booking`]
/// record. It is never mutated in place.
///
/// Dates are carried as raw RFC 3339 strings so that the date validator
/// owns format checking; exactly one of the three resource references
/// must be set, which the service selector enforces.
///
/// [`Booking`]: crate::domain::entities::booking::Booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Requested start instant, RFC 3339
    pub start_date: String,

    /// Requested end instant, RFC 3339 (exclusive)
    pub end_date: String,

    /// Residence to book, if any
    pub residence_id: Option<Uuid>,

    /// Vehicle to book, if any
    pub vehicle_id: Option<Uuid>,

    /// Combined offer to book, if any
    pub offer_id: Option<Uuid>,

    /// Caller-supplied total price; when present it is trusted as-is and
    /// no derived price is computed
    pub total_price: Option<Decimal>,

    /// Free-form notes attached to the booking
    pub notes: Option<String>,
}

impl BookingRequest {
    /// Convenience constructor for a residence booking request.
    pub fn for_residence(start_date: impl Into<String>, end_date: impl Into<String>, residence_id: Uuid) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            residence_id: Some(residence_id),
            vehicle_id: None,
            offer_id: None,
            total_price: None,
            notes: None,
        }
    }

    /// Convenience constructor for a vehicle booking request.
    pub fn for_vehicle(start_date: impl Into<String>, end_date: impl Into<String>, vehicle_id: Uuid) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            residence_id: None,
            vehicle_id: Some(vehicle_id),
            offer_id: None,
            total_price: None,
            notes: None,
        }
    }

    /// Convenience constructor for a combined-offer booking request.
    pub fn for_offer(start_date: impl Into<String>, end_date: impl Into<String>, offer_id: Uuid) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            residence_id: None,
            vehicle_id: None,
            offer_id: Some(offer_id),
            total_price: None,
            notes: None,
        }
    }

    /// Set an explicit total price that overrides derived pricing.
    pub fn with_total_price(mut self, total_price: Decimal) -> Self {
        self.total_price = Some(total_price);
        self
    }

    /// Attach notes to the request.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
