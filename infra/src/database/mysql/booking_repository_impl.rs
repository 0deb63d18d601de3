//! MySQL implementation of the BookingRepository trait.
//!
//! `create` re-checks the overlap condition inside a transaction with a
//! locking read, so two concurrent requests for the same resource and
//! window cannot both commit.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use rf_core::domain::entities::booking::{Booking, BookingStatus};
use rf_core::domain::value_objects::ServiceKind;
use rf_core::errors::{AvailabilityError, BookingError};
use rf_core::repositories::BookingRepository;

use super::store_error;

const BOOKING_COLUMNS: &str = "id, user_id, start_date, end_date, total_price, status, \
     residence_id, vehicle_id, offer_id, notes, created_at, updated_at";

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    /// Create a new MySQL booking repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Booking entity
    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<Booking, BookingError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| store_error("Failed to get id", e))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| store_error("Failed to get user_id", e))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| store_error("Failed to get status", e))?;
        let residence_id: Option<String> = row
            .try_get("residence_id")
            .map_err(|e| store_error("Failed to get residence_id", e))?;
        let vehicle_id: Option<String> = row
            .try_get("vehicle_id")
            .map_err(|e| store_error("Failed to get vehicle_id", e))?;
        let offer_id: Option<String> = row
            .try_get("offer_id")
            .map_err(|e| store_error("Failed to get offer_id", e))?;

        Ok(Booking {
            id: Uuid::parse_str(&id).map_err(|e| store_error("Invalid booking UUID", e))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| store_error("Invalid user UUID", e))?,
            start_date: row
                .try_get::<DateTime<Utc>, _>("start_date")
                .map_err(|e| store_error("Failed to get start_date", e))?,
            end_date: row
                .try_get::<DateTime<Utc>, _>("end_date")
                .map_err(|e| store_error("Failed to get end_date", e))?,
            total_price: row
                .try_get::<Decimal, _>("total_price")
                .map_err(|e| store_error("Failed to get total_price", e))?,
            status: BookingStatus::from_str(&status)
                .map_err(|e| store_error("Invalid booking status", e))?,
            residence_id: parse_optional_uuid(residence_id, "residence")?,
            vehicle_id: parse_optional_uuid(vehicle_id, "vehicle")?,
            offer_id: parse_optional_uuid(offer_id, "offer")?,
            notes: row
                .try_get("notes")
                .map_err(|e| store_error("Failed to get notes", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| store_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| store_error("Failed to get updated_at", e))?,
        })
    }
}

fn parse_optional_uuid(value: Option<String>, what: &str) -> Result<Option<Uuid>, BookingError> {
    value
        .map(|v| {
            Uuid::parse_str(&v).map_err(|e| store_error(&format!("Invalid {} UUID", what), e))
        })
        .transpose()
}

/// Column holding the resource reference for the given kind.
fn resource_column(kind: ServiceKind) -> &'static str {
    match kind {
        ServiceKind::Residence => "residence_id",
        ServiceKind::Vehicle => "vehicle_id",
        ServiceKind::Offer => "offer_id",
    }
}

/// Resources a new booking will occupy, used to scope the locking
/// conflict re-check in `create`.
///
/// A direct booking occupies one resource; an offer booking occupies the
/// offer plus its underlying residence and vehicle. Existing offer
/// bookings carry only `offer_id`, so every predicate also matches them
/// through the `offers` join (`o.*` columns).
struct ConflictScope {
    residence_id: Option<String>,
    vehicle_id: Option<String>,
    offer_id: Option<String>,
}

impl ConflictScope {
    /// SQL predicates (joined with OR) plus their bind values, in order.
    fn predicates(&self) -> (String, Vec<String>) {
        let mut clauses = Vec::new();
        let mut binds = Vec::new();

        if let Some(id) = &self.residence_id {
            clauses.push("(b.residence_id = ? OR o.residence_id = ?)");
            binds.push(id.clone());
            binds.push(id.clone());
        }
        if let Some(id) = &self.vehicle_id {
            clauses.push("(b.vehicle_id = ? OR o.vehicle_id = ?)");
            binds.push(id.clone());
            binds.push(id.clone());
        }
        if let Some(id) = &self.offer_id {
            clauses.push("b.offer_id = ?");
            binds.push(id.clone());
        }

        (clauses.join(" OR "), binds)
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, BookingError> {
        let (kind, resource_id) = booking
            .resource()
            .ok_or_else(|| store_error("Booking has no resource reference", "missing column"))?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| store_error("Failed to begin transaction", e))?;

        // Resolve everything this booking will occupy. An offer booking
        // holds its underlying residence and vehicle for the interval, so
        // the re-check must cover those columns too; otherwise a
        // concurrent direct booking of the underlying resource could
        // commit alongside the offer booking.
        let scope = match kind {
            ServiceKind::Offer => {
                let row = sqlx::query("SELECT residence_id, vehicle_id FROM offers WHERE id = ?")
                    .bind(resource_id.to_string())
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(|e| store_error("Failed to load offer for conflict check", e))?
                    .ok_or(BookingError::Availability(
                        AvailabilityError::ResourceNotFound { kind },
                    ))?;
                let underlying_residence: String = row
                    .try_get("residence_id")
                    .map_err(|e| store_error("Failed to get residence_id", e))?;
                let underlying_vehicle: String = row
                    .try_get("vehicle_id")
                    .map_err(|e| store_error("Failed to get vehicle_id", e))?;
                ConflictScope {
                    residence_id: Some(underlying_residence),
                    vehicle_id: Some(underlying_vehicle),
                    offer_id: Some(resource_id.to_string()),
                }
            }
            ServiceKind::Residence => ConflictScope {
                residence_id: Some(resource_id.to_string()),
                vehicle_id: None,
                offer_id: None,
            },
            ServiceKind::Vehicle => ConflictScope {
                residence_id: None,
                vehicle_id: Some(resource_id.to_string()),
                offer_id: None,
            },
        };

        // Locking re-check of the overlap condition. The service already
        // validated availability, but a concurrent create could have
        // committed since that read.
        let (predicates, binds) = scope.predicates();
        let check_query = format!(
            r#"
            SELECT COUNT(*) as conflicts
            FROM bookings b
            LEFT JOIN offers o ON b.offer_id = o.id
            WHERE b.status IN ('PENDING', 'CONFIRMED')
              AND b.start_date < ?
              AND ? < b.end_date
              AND ({})
            FOR UPDATE
            "#,
            predicates
        );

        let mut query = sqlx::query(&check_query)
            .bind(booking.end_date)
            .bind(booking.start_date);
        for bind in &binds {
            query = query.bind(bind);
        }
        let row = query
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| store_error("Failed to check booking conflicts", e))?;

        let conflicts: i64 = row
            .try_get("conflicts")
            .map_err(|e| store_error("Failed to get conflict count", e))?;

        if conflicts > 0 {
            tracing::warn!(
                kind = %kind,
                resource_id = %resource_id,
                "Concurrent booking conflict detected on insert"
            );
            return Err(AvailabilityError::ResourceNotAvailable { kind }.into());
        }

        let insert_query = format!(
            r#"
            INSERT INTO bookings ({})
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            BOOKING_COLUMNS
        );

        sqlx::query(&insert_query)
            .bind(booking.id.to_string())
            .bind(booking.user_id.to_string())
            .bind(booking.start_date)
            .bind(booking.end_date)
            .bind(booking.total_price)
            .bind(booking.status.as_str())
            .bind(booking.residence_id.map(|id| id.to_string()))
            .bind(booking.vehicle_id.map(|id| id.to_string()))
            .bind(booking.offer_id.map(|id| id.to_string()))
            .bind(&booking.notes)
            .bind(booking.created_at)
            .bind(booking.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| store_error("Failed to insert booking", e))?;

        tx.commit()
            .await
            .map_err(|e| store_error("Failed to commit booking", e))?;

        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, BookingError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE id = ? LIMIT 1",
            BOOKING_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to find booking", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_booking(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Booking>, BookingError> {
        let query = format!(
            "SELECT {} FROM bookings ORDER BY created_at DESC",
            BOOKING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list bookings", e))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, BookingError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE user_id = ? ORDER BY created_at DESC",
            BOOKING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list user bookings", e))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn update(&self, booking: Booking) -> Result<Booking, BookingError> {
        let query = r#"
            UPDATE bookings
            SET status = ?, notes = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(booking.status.as_str())
            .bind(&booking.notes)
            .bind(booking.updated_at)
            .bind(booking.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to update booking", e))?;

        if result.rows_affected() == 0 {
            return Err(BookingError::BookingNotFound);
        }

        Ok(booking)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BookingError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to delete booking", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_active_for_resource(
        &self,
        kind: ServiceKind,
        resource_id: Uuid,
    ) -> Result<Vec<Booking>, BookingError> {
        let query = format!(
            r#"
            SELECT {}
            FROM bookings
            WHERE {} = ?
              AND status IN ('PENDING', 'CONFIRMED')
            "#,
            BOOKING_COLUMNS,
            resource_column(kind)
        );

        let rows = sqlx::query(&query)
            .bind(resource_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list active bookings", e))?;

        rows.iter().map(Self::row_to_booking).collect()
    }
}
