//! MySQL implementation of the OfferRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rf_core::domain::entities::offer::Offer;
use rf_core::errors::BookingError;
use rf_core::repositories::OfferRepository;

use super::store_error;

/// MySQL implementation of OfferRepository
pub struct MySqlOfferRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlOfferRepository {
    /// Create a new MySQL offer repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Offer entity
    fn row_to_offer(row: &sqlx::mysql::MySqlRow) -> Result<Offer, BookingError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| store_error("Failed to get id", e))?;
        let residence_id: String = row
            .try_get("residence_id")
            .map_err(|e| store_error("Failed to get residence_id", e))?;
        let vehicle_id: String = row
            .try_get("vehicle_id")
            .map_err(|e| store_error("Failed to get vehicle_id", e))?;

        Ok(Offer {
            id: Uuid::parse_str(&id).map_err(|e| store_error("Invalid offer UUID", e))?,
            title: row
                .try_get("title")
                .map_err(|e| store_error("Failed to get title", e))?,
            residence_id: Uuid::parse_str(&residence_id)
                .map_err(|e| store_error("Invalid residence UUID", e))?,
            vehicle_id: Uuid::parse_str(&vehicle_id)
                .map_err(|e| store_error("Invalid vehicle UUID", e))?,
            price: row
                .try_get::<Decimal, _>("price")
                .map_err(|e| store_error("Failed to get price", e))?,
            valid_from: row
                .try_get::<DateTime<Utc>, _>("valid_from")
                .map_err(|e| store_error("Failed to get valid_from", e))?,
            valid_to: row
                .try_get::<DateTime<Utc>, _>("valid_to")
                .map_err(|e| store_error("Failed to get valid_to", e))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| store_error("Failed to get is_active", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| store_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| store_error("Failed to get updated_at", e))?,
        })
    }
}

#[async_trait]
impl OfferRepository for MySqlOfferRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Offer>, BookingError> {
        let query = r#"
            SELECT id, title, residence_id, vehicle_id, price,
                   valid_from, valid_to, is_active, created_at, updated_at
            FROM offers
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to find offer", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_offer(&row)?)),
            None => Ok(None),
        }
    }
}
