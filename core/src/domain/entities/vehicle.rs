//! Vehicle entity representing a rentable vehicle.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rentable vehicle listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier for the vehicle
    pub id: Uuid,

    /// Manufacturer brand
    pub brand: String,

    /// Vehicle model
    pub model: String,

    /// Model year
    pub year: i32,

    /// Rental rate per day
    pub price_per_day: Decimal,

    /// Number of seats
    pub capacity: i32,

    /// Whether the listing is active and bookable
    pub is_active: bool,

    /// Timestamp when the vehicle was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the vehicle was last updated
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Creates a new active vehicle listing.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        price_per_day: Decimal,
        capacity: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            brand: brand.into(),
            model: model.into(),
            year,
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
