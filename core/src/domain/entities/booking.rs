//! Booking entity representing a persisted reservation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::value_objects::ServiceKind;
use crate::errors::BookingError;

/// Lifecycle status of a booking.
///
/// Allowed transitions: `Pending -> Confirmed -> Completed`, and
/// `Pending | Confirmed -> Cancelled`. Only `Pending` and `Confirmed`
/// bookings occupy capacity for availability checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Created, awaiting confirmation
    Pending,
    /// Confirmed by the marketplace
    Confirmed,
    /// Cancelled before completion
    Cancelled,
    /// Stay/rental finished
    Completed,
}

impl BookingStatus {
    /// Whether a booking in this status counts toward availability conflicts.
    pub fn occupies_capacity(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// String form used for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(BookingStatus::Pending),
            "CONFIRMED" => Ok(BookingStatus::Confirmed),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            "COMPLETED" => Ok(BookingStatus::Completed),
            other => Err(format!("Unknown booking status: {}", other)),
        }
    }
}

/// A persisted booking for a residence, vehicle, or combined offer.
///
/// The interval is half-open `[start_date, end_date)`; exactly one of the
/// resource references is set, fixed at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: Uuid,

    /// User who placed the booking
    pub user_id: Uuid,

    /// Inclusive start of the booked interval
    pub start_date: DateTime<Utc>,

    /// Exclusive end of the booked interval
    pub end_date: DateTime<Utc>,

    /// Total price for the whole interval
    pub total_price: Decimal,

    /// Current lifecycle status
    pub status: BookingStatus,

    /// Booked residence, if any
    pub residence_id: Option<Uuid>,

    /// Booked vehicle, if any
    pub vehicle_id: Option<Uuid>,

    /// Booked combined offer, if any
    pub offer_id: Option<Uuid>,

    /// Free-form notes
    pub notes: Option<String>,

    /// Timestamp when the booking was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the booking was last updated
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new pending booking for a single resource.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: Uuid,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        total_price: Decimal,
        kind: ServiceKind,
        resource_id: Uuid,
        notes: Option<String>,
    ) -> Self {
        let now = Utc::now();
        let (residence_id, vehicle_id, offer_id) = match kind {
            ServiceKind::Residence => (Some(resource_id), None, None),
            ServiceKind::Vehicle => (None, Some(resource_id), None),
            ServiceKind::Offer => (None, None, Some(resource_id)),
        };
        Self {
            id: Uuid::new_v4(),
            user_id,
            start_date,
            end_date,
            total_price,
            status: BookingStatus::Pending,
            residence_id,
            vehicle_id,
            offer_id,
            notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// The resource this booking holds, as a `(kind, id)` pair.
    pub fn resource(&self) -> Option<(ServiceKind, Uuid)> {
        if let Some(id) = self.residence_id {
            Some((ServiceKind::Residence, id))
        } else if let Some(id) = self.vehicle_id {
            Some((ServiceKind::Vehicle, id))
        } else {
            self.offer_id.map(|id| (ServiceKind::Offer, id))
        }
    }

    /// Whether this booking currently occupies capacity.
    pub fn is_active(&self) -> bool {
        self.status.occupies_capacity()
    }

    /// Confirms a pending booking.
    pub fn confirm(&mut self) -> Result<(), BookingError> {
        self.transition(BookingStatus::Confirmed)
    }

    /// Cancels a pending or confirmed booking.
    pub fn cancel(&mut self) -> Result<(), BookingError> {
        self.transition(BookingStatus::Cancelled)
    }

    /// Completes a confirmed booking.
    pub fn complete(&mut self) -> Result<(), BookingError> {
        self.transition(BookingStatus::Completed)
    }

    fn transition(&mut self, to: BookingStatus) -> Result<(), BookingError> {
        let allowed = matches!(
            (self.status, to),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
        );
        if !allowed {
            return Err(BookingError::InvalidStatusTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        self.updated_at = Utc::now();
        Ok(())
    }
}
