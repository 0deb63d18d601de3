//! Combined offer entity bundling a residence and a vehicle.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A combined residence + vehicle package offer.
///
/// The offer price is a package total for the whole stay; it is never
/// multiplied by the day count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Unique identifier for the offer
    pub id: Uuid,

    /// Offer title
    pub title: String,

    /// Residence included in the package
    pub residence_id: Uuid,

    /// Vehicle included in the package
    pub vehicle_id: Uuid,

    /// Fixed package price
    pub price: Decimal,

    /// Start of the offer validity window (inclusive)
    pub valid_from: DateTime<Utc>,

    /// End of the offer validity window (inclusive)
    pub valid_to: DateTime<Utc>,

    /// Whether the offer is active and bookable
    pub is_active: bool,

    /// Timestamp when the offer was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the offer was last updated
    pub updated_at: DateTime<Utc>,
}

impl Offer {
    /// Creates a new active offer valid over the given window.
    pub fn new(
        title: impl Into<String>,
        residence_id: Uuid,
        vehicle_id: Uuid,
        price: Decimal,
        valid_from: DateTime<Utc>,
        valid_to: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            residence_id,
            vehicle_id,
            price,
            valid_from,
            valid_to,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the offer validity window covers the given instant.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.valid_from <= now && now <= self.valid_to
    }

    /// Takes the offer off the marketplace.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}
