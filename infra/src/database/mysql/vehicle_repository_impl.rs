//! MySQL implementation of the VehicleRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rf_core::domain::entities::vehicle::Vehicle;
use rf_core::errors::BookingError;
use rf_core::repositories::VehicleRepository;

use super::store_error;

/// MySQL implementation of VehicleRepository
pub struct MySqlVehicleRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVehicleRepository {
    /// Create a new MySQL vehicle repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Vehicle entity
    fn row_to_vehicle(row: &sqlx::mysql::MySqlRow) -> Result<Vehicle, BookingError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| store_error("Failed to get id", e))?;

        Ok(Vehicle {
            id: Uuid::parse_str(&id).map_err(|e| store_error("Invalid vehicle UUID", e))?,
            brand: row
                .try_get("brand")
                .map_err(|e| store_error("Failed to get brand", e))?,
            model: row
                .try_get("model")
                .map_err(|e| store_error("Failed to get model", e))?,
            year: row
                .try_get("year")
                .map_err(|e| store_error("Failed to get year", e))?,
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
impl VehicleRepository for MySqlVehicleRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, BookingError> {
        let query = r#"
            SELECT id, brand, model, year, price_per_day, capacity,
                   is_active, created_at, updated_at
            FROM vehicles
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to find vehicle", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_vehicle(&row)?)),
            None => Ok(None),
        }
    }
}
