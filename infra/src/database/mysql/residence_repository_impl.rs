//! MySQL implementation of the ResidenceRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rf_core::domain::entities::residence::Residence;
use rf_core::errors::BookingError;
use rf_core::repositories::ResidenceRepository;

use super::store_error;

/// MySQL implementation of ResidenceRepository
pub struct MySqlResidenceRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlResidenceRepository {
    /// Create a new MySQL residence repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Residence entity
    fn row_to_residence(row: &sqlx::mysql::MySqlRow) -> Result<Residence, BookingError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| store_error("Failed to get id", e))?;

        Ok(Residence {
            id: Uuid::parse_str(&id).map_err(|e| store_error("Invalid residence UUID", e))?,
            title: row
                .try_get("title")
                .map_err(|e| store_error("Failed to get title", e))?,
            city: row
                .try_get("city")
                .map_err(|e| store_error("Failed to get city", e))?,
            country: row
                .try_get("country")
                .map_err(|e| store_error("Failed to get country", e))?,
            price_per_day: row
                .try_get::<Decimal, _>("price_per_day")
                .map_err(|e| store_error("Failed to get price_per_day", e))?,
            capacity: row
                .try_get("capacity")
                .map_err(|e| store_error("Failed to get capacity", e))?,
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
impl ResidenceRepository for MySqlResidenceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Residence>, BookingError> {
        let query = r#"
            SELECT id, title, city, country, price_per_day, capacity,
                   is_active, created_at, updated_at
            FROM residences
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to find residence", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_residence(&row)?)),
            None => Ok(None),
        }
    }
}
