//! Residence entity representing a rentable property.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rentable residence listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Residence {
    /// Unique identifier for the residence
    pub id: Uuid,

    /// Listing title
    pub title: String,

    /// City where the residence is located
    pub city: String,

    /// Country where the residence is located
    pub country: String,

    /// Rental rate per day
    pub price_per_day: Decimal,

    /// Maximum number of guests
    pub capacity: i32,

    /// Whether the listing is active and bookable
    pub is_active: bool,

    /// Timestamp when the residence was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the residence was last updated
    pub updated_at: DateTime<Utc>,
}

impl Residence {
    /// Creates a new active residence listing.
    pub fn new(
        title: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        price_per_day: Decimal,
        capacity: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            city: city.into(),
            country: country.into(),
            price_per_day,
            capacity,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Takes the listing off the marketplace.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}
